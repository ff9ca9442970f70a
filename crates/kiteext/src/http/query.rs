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

//! Request parameter structures for the Kite web-session endpoints.
//!
//! Each struct is annotated with `serde` so that it serializes directly into the
//! form-encoded body expected by the endpoint.

use serde::{Deserialize, Serialize};

/// Parameters for the `POST /api/login` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoginParams {
    /// Broker-assigned user identifier.
    pub user_id: String,
    /// Account password.
    pub password: String,
}

impl LoginParams {
    /// Creates a new [`LoginParams`].
    #[must_use]
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }
}

/// Parameters for the `POST /api/twofa` endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TwoFaParams {
    /// Request identifier returned by the login step.
    pub request_id: String,
    /// Second-factor value (TOTP/PIN).
    pub twofa_value: String,
    /// User id, as canonicalized by the login step.
    pub user_id: String,
}

impl TwoFaParams {
    /// Creates a new [`TwoFaParams`].
    #[must_use]
    pub fn new(
        request_id: impl Into<String>,
        twofa_value: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            twofa_value: twofa_value.into(),
            user_id: user_id.into(),
        }
    }
}
