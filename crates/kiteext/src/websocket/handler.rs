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

//! Text-frame dispatcher for the Kite ticker.

use std::{fmt::Debug, sync::Arc};

use serde_json::Value;
use tokio_tungstenite::tungstenite::Message;

use super::messages::{FrameOutcome, TickerFrame, WS_CUSTOM_ERROR_CODE, parse_text_frame};

/// Callback invoked with the full decoded payload of an order-update frame.
pub type OrderUpdateCallback = Arc<dyn Fn(Value) + Send + Sync>;

/// Callback invoked with an error code and the decoded payload of an error frame.
pub type ErrorCallback = Arc<dyn Fn(u16, Value) + Send + Sync>;

/// Demultiplexes raw ticker text frames to the registered callbacks.
///
/// Runs inside whatever single-threaded event loop drives the socket transport;
/// dispatch is non-blocking and performs no network calls, so frame delivery is never
/// stalled. Undecodable frames and unrecognized message kinds are discarded silently.
#[derive(Clone, Default)]
pub struct KiteTickerDispatcher {
    on_order_update: Option<OrderUpdateCallback>,
    on_error: Option<ErrorCallback>,
}

impl Debug for KiteTickerDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(KiteTickerDispatcher))
            .field("has_order_update_callback", &self.on_order_update.is_some())
            .field("has_error_callback", &self.on_error.is_some())
            .finish()
    }
}

impl KiteTickerDispatcher {
    /// Creates a new [`KiteTickerDispatcher`] with no callbacks registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the order-update callback.
    pub fn on_order_update<F>(&mut self, callback: F)
    where
        F: Fn(Value) + Send + Sync + 'static,
    {
        self.on_order_update = Some(Arc::new(callback));
    }

    /// Registers the error callback.
    pub fn on_error<F>(&mut self, callback: F)
    where
        F: Fn(u16, Value) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(callback));
    }

    /// Dispatches one raw text frame.
    ///
    /// At most one branch executes per frame: `type == "order"` invokes the
    /// order-update callback (when registered), `type == "error"` invokes the error
    /// callback with [`WS_CUSTOM_ERROR_CODE`], anything else is ignored.
    pub fn dispatch_text(&self, payload: &[u8]) -> FrameOutcome {
        let Some(frame) = parse_text_frame(payload) else {
            return FrameOutcome::Ignored;
        };

        match frame {
            TickerFrame::OrderUpdate(data) => {
                if let Some(callback) = &self.on_order_update {
                    callback(data);
                }
                FrameOutcome::OrderUpdate
            }
            TickerFrame::Error(data) => {
                if let Some(callback) = &self.on_error {
                    callback(WS_CUSTOM_ERROR_CODE, data);
                }
                FrameOutcome::Error
            }
            TickerFrame::Unknown(_) => FrameOutcome::Ignored,
        }
    }

    /// Dispatches one WebSocket message.
    ///
    /// Text and binary payloads are decoded as UTF-8 text frames; control frames and
    /// the binary quote packets that fail UTF-8/JSON decoding are ignored here.
    pub fn handle_message(&self, message: &Message) -> FrameOutcome {
        match message {
            Message::Text(text) => self.dispatch_text(text.as_bytes()),
            Message::Binary(payload) => self.dispatch_text(payload),
            _ => FrameOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn test_order_frame_invokes_callback_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(std::sync::Mutex::new(None));

        let mut dispatcher = KiteTickerDispatcher::new();
        {
            let count = count.clone();
            let seen = seen.clone();
            dispatcher.on_order_update(move |data| {
                count.fetch_add(1, Ordering::SeqCst);
                *seen.lock().unwrap() = Some(data);
            });
        }

        let outcome = dispatcher.dispatch_text(br#"{"type":"order","price":1}"#);

        assert_eq!(outcome, FrameOutcome::OrderUpdate);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(
            seen.lock().unwrap().take(),
            Some(json!({"type": "order", "price": 1})),
        );
    }

    #[rstest]
    fn test_order_frame_without_callback_is_non_fatal() {
        let dispatcher = KiteTickerDispatcher::new();
        let outcome = dispatcher.dispatch_text(br#"{"type":"order","price":1}"#);

        assert_eq!(outcome, FrameOutcome::OrderUpdate);
    }

    #[rstest]
    fn test_error_frame_uses_sentinel_code() {
        let seen_code = Arc::new(AtomicUsize::new(usize::MAX));

        let mut dispatcher = KiteTickerDispatcher::new();
        {
            let seen_code = seen_code.clone();
            dispatcher.on_error(move |code, _| {
                seen_code.store(code as usize, Ordering::SeqCst);
            });
        }

        let outcome = dispatcher.dispatch_text(br#"{"type":"error","data":"boom"}"#);

        assert_eq!(outcome, FrameOutcome::Error);
        assert_eq!(seen_code.load(Ordering::SeqCst), WS_CUSTOM_ERROR_CODE as usize);
    }

    #[rstest]
    fn test_malformed_frame_is_discarded_silently() {
        let count = Arc::new(AtomicUsize::new(0));

        let mut dispatcher = KiteTickerDispatcher::new();
        {
            let count = count.clone();
            dispatcher.on_order_update(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }
        {
            let count = count.clone();
            dispatcher.on_error(move |_, _| {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        assert_eq!(dispatcher.dispatch_text(b"not json"), FrameOutcome::Ignored);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn test_unrecognized_type_is_ignored() {
        let dispatcher = KiteTickerDispatcher::new();

        assert_eq!(
            dispatcher.dispatch_text(br#"{"type":"instruments_meta"}"#),
            FrameOutcome::Ignored,
        );
        assert_eq!(
            dispatcher.dispatch_text(br#"{"price":1}"#),
            FrameOutcome::Ignored,
        );
    }

    #[rstest]
    fn test_handle_message_text_and_control_frames() {
        let dispatcher = KiteTickerDispatcher::new();

        let text = Message::text(r#"{"type":"order","price":1}"#);
        assert_eq!(dispatcher.handle_message(&text), FrameOutcome::OrderUpdate);

        let ping = Message::Ping(vec![].into());
        assert_eq!(dispatcher.handle_message(&ping), FrameOutcome::Ignored);
    }
}
