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

//! Core constants shared across the Kite client components.

/// Default REST origin of the published Kite Connect API (instrument dumps, historical data).
pub const KITE_HTTP_URL: &str = "https://api.kite.trade";

/// Order-management origin used by the web platform.
///
/// All route-table requests go through this origin rather than [`KITE_HTTP_URL`]; the
/// web-session `enctoken` is only honored here.
pub const KITE_OMS_URL: &str = "https://kite.zerodha.com/oms";

/// Market data WebSocket origin.
pub const KITE_WS_URL: &str = "wss://ws.zerodha.com";

/// API version marker sent with every request as the `X-Kite-Version` header.
pub const KITE_API_VERSION: &str = "3";

/// Client identifier the web platform presents as its API key.
pub const KITE_WEB_CLIENT_ID: &str = "kitefront";

/// User agent reported on the WebSocket query string.
pub const KITE_WS_USER_AGENT: &str = "kite3-web";

/// Protocol version reported on the WebSocket query string.
pub const KITE_WS_VERSION: &str = "3.0.7";

/// Browser user agent presented to the web login endpoints.
///
/// The login flow is served by the same frontend that backs the browser client and
/// rejects non-browser agents.
pub const KITE_BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/89.0.4389.128 Safari/537.36";

/// Default request timeout in seconds.
pub const KITE_DEFAULT_TIMEOUT_SECS: u64 = 7;
