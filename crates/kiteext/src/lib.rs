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

//! Client extension for the [Zerodha Kite](https://kite.zerodha.com) trading and market-data
//! platform, covering the non-public web-session authentication flows that the official
//! Kite Connect API does not expose.
//!
//! The crate provides:
//!
//! - **Credential login**: the two-step user-id/password plus 2FA exchange against the web
//!   login endpoints, with the session token pair (`enctoken`, `public_token`) recovered
//!   from the response cookies.
//! - **Token injection**: populating a session directly from an `enctoken` obtained
//!   out-of-band, with no network round trip.
//! - **Request pipeline**: a route-table driven HTTP request layer against the Kite OMS
//!   origin with structured error classification and a session-expiry hook.
//! - **Ticker dispatch**: demultiplexing of the JSON text frames (`order` updates and
//!   custom `error` messages) carried on the market-data WebSocket.
//!
//! The WebSocket transport itself (framing, reconnection, instrument subscriptions) and
//! the instrument CSV parsing are deliberately not reimplemented here; callers plug the
//! dispatcher and the raw instrument bytes into their own transport and parser.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod common;
pub mod config;
pub mod http;
pub mod websocket;
