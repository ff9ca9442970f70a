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

//! Ticker client construction for the Kite market-data WebSocket.

use std::fmt::Debug;

use serde_json::Value;
use tokio_tungstenite::tungstenite::Message;

use super::{
    handler::KiteTickerDispatcher,
    messages::FrameOutcome,
};
use crate::common::{
    consts::{KITE_WS_USER_AGENT, KITE_WS_VERSION},
    credential::mask_token,
};

/// Ticker client for the Kite market-data WebSocket.
///
/// Owns the session-keyed connect URL and the text-frame dispatcher. The transport
/// itself (connection, framing, reconnection, subscription management) is the
/// caller's; feed received messages into [`Self::handle_message`].
#[derive(Clone)]
pub struct KiteTickerClient {
    url: String,
    enctoken: String,
    dispatcher: KiteTickerDispatcher,
}

impl Debug for KiteTickerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(KiteTickerClient))
            .field("url", &self.url.replace(
                &urlencoding::encode(&self.enctoken).into_owned(),
                &mask_token(&self.enctoken),
            ))
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

impl KiteTickerClient {
    /// Creates a new [`KiteTickerClient`] for the given session values.
    ///
    /// The connect URL embeds the user id, the URL-escaped session token, the fixed
    /// web client identifier, and the fixed protocol version string, in the query
    /// string layout the web platform uses (including its empty `access_token`
    /// parameter).
    #[must_use]
    pub fn new(ws_base_url: &str, api_key: &str, user_id: &str, enctoken: &str) -> Self {
        let url = format!(
            "{ws_base_url}?api_key={api_key}&access_token=&user_id={user_id}&enctoken={}&user-agent={KITE_WS_USER_AGENT}&version={KITE_WS_VERSION}",
            urlencoding::encode(enctoken),
        );

        Self {
            url,
            enctoken: enctoken.to_string(),
            dispatcher: KiteTickerDispatcher::new(),
        }
    }

    /// Returns the WebSocket connect URL for this session.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Registers the order-update callback.
    pub fn on_order_update<F>(&mut self, callback: F)
    where
        F: Fn(Value) + Send + Sync + 'static,
    {
        self.dispatcher.on_order_update(callback);
    }

    /// Registers the error callback.
    pub fn on_error<F>(&mut self, callback: F)
    where
        F: Fn(u16, Value) + Send + Sync + 'static,
    {
        self.dispatcher.on_error(callback);
    }

    /// Returns the text-frame dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &KiteTickerDispatcher {
        &self.dispatcher
    }

    /// Dispatches one received WebSocket message.
    pub fn handle_message(&self, message: &Message) -> FrameOutcome {
        self.dispatcher.handle_message(message)
    }
}
