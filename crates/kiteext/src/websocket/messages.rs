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

//! Message structures for the Kite ticker text-frame side channel.

use serde_json::Value;

/// Sentinel error code passed to the error callback for `type == "error"` frames.
///
/// Distinct from real WebSocket close codes, which start at 1000.
pub const WS_CUSTOM_ERROR_CODE: u16 = 0;

/// A decoded ticker text frame, keyed on its `type` discriminant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickerFrame {
    /// `type == "order"`: an order update carrying the full decoded payload.
    OrderUpdate(Value),
    /// `type == "error"`: a custom error message from the feed.
    Error(Value),
    /// Any other or missing `type`; ignored by design, forward-compatible with
    /// unknown message kinds.
    Unknown(Value),
}

/// Outcome of dispatching one raw frame; surfaced for observability and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The order-update path was taken.
    OrderUpdate,
    /// The error path was taken.
    Error,
    /// The frame was undecodable or of unrecognized shape; no callback fired.
    Ignored,
}

/// Parses one raw text frame, returning `None` when the payload is not UTF-8 JSON.
///
/// Undecodable frames are discarded silently by the dispatcher; this is an explicit
/// no-op, not an error.
#[must_use]
pub fn parse_text_frame(payload: &[u8]) -> Option<TickerFrame> {
    let text = std::str::from_utf8(payload).ok()?;
    let data: Value = serde_json::from_str(text).ok()?;

    let frame = match data.get("type").and_then(Value::as_str) {
        Some("order") => TickerFrame::OrderUpdate(data),
        Some("error") => TickerFrame::Error(data),
        _ => TickerFrame::Unknown(data),
    };

    Some(frame)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn test_parse_order_frame() {
        let frame = parse_text_frame(br#"{"type":"order","price":1}"#).unwrap();

        assert_eq!(
            frame,
            TickerFrame::OrderUpdate(json!({"type": "order", "price": 1})),
        );
    }

    #[rstest]
    fn test_parse_error_frame() {
        let frame = parse_text_frame(br#"{"type":"error","data":"boom"}"#).unwrap();

        assert_eq!(frame, TickerFrame::Error(json!({"type": "error", "data": "boom"})));
    }

    #[rstest]
    #[case(br#"{"type":"instruments_meta"}"# as &[u8])]
    #[case(br#"{"price":1}"#)]
    fn test_parse_unrecognized_type(#[case] payload: &[u8]) {
        let frame = parse_text_frame(payload).unwrap();
        assert!(matches!(frame, TickerFrame::Unknown(_)));
    }

    #[rstest]
    #[case(b"not json" as &[u8])]
    #[case(&[0xff, 0xfe, 0x01])]
    #[case(b"")]
    fn test_parse_undecodable_frame(#[case] payload: &[u8]) {
        assert!(parse_text_frame(payload).is_none());
    }
}
