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

//! Data transfer objects for Kite HTTP API payloads.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decoded body of a JSON API response.
///
/// Every JSON response is either a success payload under `data` or an error payload
/// carrying `error_type` and `message`; no other shapes are valid.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct KiteEnvelope {
    /// Response status marker ("success" / "error").
    #[serde(default)]
    pub status: Option<String>,
    /// Success payload.
    #[serde(default)]
    pub data: Option<Value>,
    /// Error discriminant; non-empty on error responses.
    #[serde(default)]
    pub error_type: Option<String>,
    /// Human-readable error message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Content returned by the request pipeline, keyed on the response content type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseContent {
    /// Decoded value under the envelope's `data` key.
    Json(Value),
    /// Raw bytes of a CSV response, passed through unmodified.
    Csv(Bytes),
}

impl ResponseContent {
    /// Consumes the content, returning the JSON value.
    ///
    /// # Panics
    ///
    /// Panics if the content is CSV; use only on JSON-typed routes.
    #[must_use]
    pub fn into_json(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Csv(_) => panic!("expected JSON response content, was CSV"),
        }
    }

    /// Consumes the content, returning the raw CSV bytes.
    ///
    /// # Panics
    ///
    /// Panics if the content is JSON; use only on CSV-typed routes.
    #[must_use]
    pub fn into_csv(self) -> Bytes {
        match self {
            Self::Csv(bytes) => bytes,
            Self::Json(_) => panic!("expected CSV response content, was JSON"),
        }
    }
}

/// Success payload returned by `POST /api/login`.
///
/// Carries the request identifier consumed by the two-factor step together with the
/// (possibly corrected) user id.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoginResponse {
    /// Identifier correlating the login attempt with the two-factor submission.
    pub request_id: String,
    /// Broker-assigned user identifier, as canonicalized by the server.
    pub user_id: String,
    /// Two-factor delivery type (e.g. "app_code"), when reported.
    #[serde(default)]
    pub twofa_type: Option<String>,
}
