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

//! Error structures and enumerations for the Kite HTTP integration.

use thiserror::Error;

/// Classified API error kinds reported in the response envelope's `error_type` field.
///
/// Closed taxonomy replacing the upstream library's by-name exception lookup; values
/// outside the fixed set map to [`KiteApiErrorKind::General`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KiteApiErrorKind {
    /// Unclassified API error (fallback).
    General,
    /// Session token missing, invalid, or expired.
    Token,
    /// Insufficient permission for the requested operation.
    Permission,
    /// Order placement, modification, or cancellation failure.
    Order,
    /// Missing or invalid request parameters.
    Input,
    /// Internal system error while fetching data.
    Data,
    /// Connectivity issue between the OMS and the exchange.
    Network,
}

impl KiteApiErrorKind {
    /// Maps an `error_type` value to its kind, defaulting to [`Self::General`] for
    /// unrecognized values.
    #[must_use]
    pub fn from_error_type(error_type: &str) -> Self {
        match error_type {
            "TokenException" => Self::Token,
            "PermissionException" => Self::Permission,
            "OrderException" => Self::Order,
            "InputException" => Self::Input,
            "DataException" => Self::Data,
            "NetworkException" => Self::Network,
            "GeneralException" => Self::General,
            _ => Self::General,
        }
    }
}

/// A typed error enumeration for the Kite HTTP client.
#[derive(Debug, Clone, Error)]
pub enum KiteHttpError {
    /// Transport-level failure (connection, timeout); propagated unchanged, never retried.
    #[error("Network error: {0}")]
    Network(String),
    /// Response body could not be decoded as the declared content type, or the content
    /// type is neither JSON nor CSV; carries the raw body for diagnostics.
    #[error("Decode error ({content_type}): {body}")]
    Decode {
        /// The content type declared by the response.
        content_type: String,
        /// The raw response body.
        body: String,
    },
    /// Error reported by the Kite API in the response envelope.
    #[error("Kite API error [{kind:?}] (HTTP {status}): {message}")]
    Api {
        /// Classified error kind from the fixed taxonomy.
        kind: KiteApiErrorKind,
        /// Human-readable message from the envelope.
        message: String,
        /// HTTP status code of the response.
        status: u16,
    },
    /// Logical route name is not in the route table or has unresolved placeholders.
    #[error("Route error: {0}")]
    UnknownRoute(String),
    /// No user id known from any prior step; local configuration error, never a
    /// network failure.
    #[error("User id not set: login with credentials first or provide a user id")]
    MissingUserId,
    /// No session token available; local configuration error, never a network failure.
    #[error("Session token not set: login first or provide an enctoken")]
    MissingToken,
    /// Failure serializing request parameters or deserializing a typed payload.
    #[error("JSON error: {0}")]
    Json(String),
}

impl KiteHttpError {
    /// Returns `true` when this is the token error kind that invalidates the session.
    #[must_use]
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            Self::Api {
                kind: KiteApiErrorKind::Token,
                ..
            }
        )
    }
}

impl From<reqwest::Error> for KiteHttpError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

impl From<serde_json::Error> for KiteHttpError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

/// Result type alias for Kite HTTP operations.
pub type KiteHttpResult<T> = Result<T, KiteHttpError>;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("TokenException", KiteApiErrorKind::Token)]
    #[case("PermissionException", KiteApiErrorKind::Permission)]
    #[case("OrderException", KiteApiErrorKind::Order)]
    #[case("InputException", KiteApiErrorKind::Input)]
    #[case("DataException", KiteApiErrorKind::Data)]
    #[case("NetworkException", KiteApiErrorKind::Network)]
    #[case("GeneralException", KiteApiErrorKind::General)]
    #[case("UnknownKind", KiteApiErrorKind::General)]
    #[case("", KiteApiErrorKind::General)]
    fn test_error_kind_lookup(#[case] error_type: &str, #[case] expected: KiteApiErrorKind) {
        assert_eq!(KiteApiErrorKind::from_error_type(error_type), expected);
    }

    #[rstest]
    fn test_api_error_display() {
        let error = KiteHttpError::Api {
            kind: KiteApiErrorKind::Token,
            message: "Token is invalid".to_string(),
            status: 403,
        };

        assert_eq!(
            error.to_string(),
            "Kite API error [Token] (HTTP 403): Token is invalid"
        );
        assert!(error.is_token_error());
    }

    #[rstest]
    fn test_json_error_conversion() {
        let json_err =
            serde_json::from_str::<serde_json::Value>("not json").expect_err("should fail");
        let error = KiteHttpError::from(json_err);

        assert!(matches!(error, KiteHttpError::Json(_)));
    }
}
