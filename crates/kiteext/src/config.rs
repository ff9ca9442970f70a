// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Configuration structures for the Kite client.

use crate::common::consts::{
    KITE_DEFAULT_TIMEOUT_SECS, KITE_HTTP_URL, KITE_OMS_URL, KITE_WEB_CLIENT_ID, KITE_WS_URL,
};

/// Configuration for the Kite HTTP client and ticker construction.
#[derive(Clone, Debug)]
pub struct KiteClientConfig {
    /// Client identifier presented as the API key (default: the web client id).
    pub api_key: String,
    /// Optional broker-assigned user identifier, if known up front.
    pub user_id: Option<String>,
    /// Optional override for the default REST origin (instrument dumps).
    pub base_url: Option<String>,
    /// Optional override for the order-management origin.
    pub oms_url: Option<String>,
    /// Optional override for the market data WebSocket origin.
    pub ws_url: Option<String>,
    /// Optional HTTP proxy URL.
    pub proxy_url: Option<String>,
    /// Optional request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Disable TLS certificate verification (default: false).
    pub disable_ssl: bool,
    /// Log outgoing requests and incoming responses at debug level (default: false).
    pub debug: bool,
}

impl Default for KiteClientConfig {
    fn default() -> Self {
        Self {
            api_key: KITE_WEB_CLIENT_ID.to_string(),
            user_id: None,
            base_url: None,
            oms_url: None,
            ws_url: None,
            proxy_url: None,
            timeout_secs: Some(KITE_DEFAULT_TIMEOUT_SECS),
            disable_ssl: false,
            debug: false,
        }
    }
}

impl KiteClientConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the default REST origin, considering overrides.
    #[must_use]
    pub fn http_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| KITE_HTTP_URL.to_string())
    }

    /// Returns the order-management origin, considering overrides.
    #[must_use]
    pub fn oms_base_url(&self) -> String {
        self.oms_url
            .clone()
            .unwrap_or_else(|| KITE_OMS_URL.to_string())
    }

    /// Returns the WebSocket origin, considering overrides.
    #[must_use]
    pub fn ws_base_url(&self) -> String {
        self.ws_url
            .clone()
            .unwrap_or_else(|| KITE_WS_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_default_config_urls() {
        let config = KiteClientConfig::default();

        assert_eq!(config.http_base_url(), KITE_HTTP_URL);
        assert_eq!(config.oms_base_url(), KITE_OMS_URL);
        assert_eq!(config.ws_base_url(), KITE_WS_URL);
        assert_eq!(config.api_key, KITE_WEB_CLIENT_ID);
        assert!(!config.debug);
        assert!(!config.disable_ssl);
    }

    #[rstest]
    fn test_config_overrides() {
        let config = KiteClientConfig {
            oms_url: Some("http://127.0.0.1:8080".to_string()),
            ..Default::default()
        };

        assert_eq!(config.oms_base_url(), "http://127.0.0.1:8080");
        assert_eq!(config.http_base_url(), KITE_HTTP_URL);
    }
}
