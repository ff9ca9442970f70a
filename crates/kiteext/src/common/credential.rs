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

//! Kite web-session state: the user identifier and token pair issued after login.

use std::{collections::HashMap, fmt::Debug};

use zeroize::ZeroizeOnDrop;

use crate::common::consts::KITE_API_VERSION;

/// Mutable session context for one client instance.
///
/// Populated by exactly one of the bootstrap procedures (credential login, direct token
/// injection, or an explicit header refresh) and consulted by the request pipeline on
/// every call. The `public_token` is exposed for completeness but is not used for
/// authorization; only `enctoken` feeds the `Authorization` header.
#[derive(Clone, Default, ZeroizeOnDrop)]
pub struct KiteSession {
    user_id: Option<String>,
    enctoken: Option<String>,
    public_token: Option<String>,
}

impl Debug for KiteSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(KiteSession))
            .field("user_id", &self.user_id)
            .field("enctoken", &self.enctoken.as_deref().map(mask_token))
            .field("public_token", &self.public_token.as_deref().map(mask_token))
            .finish()
    }
}

impl KiteSession {
    /// Creates a new empty [`KiteSession`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the broker-assigned user identifier, if known.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Returns the session token issued after login, if set.
    #[must_use]
    pub fn enctoken(&self) -> Option<&str> {
        self.enctoken.as_deref()
    }

    /// Returns the secondary public token, if set.
    #[must_use]
    pub fn public_token(&self) -> Option<&str> {
        self.public_token.as_deref()
    }

    /// Sets the user identifier.
    pub fn set_user_id(&mut self, user_id: impl Into<String>) {
        self.user_id = Some(user_id.into());
    }

    /// Stores the token pair issued by the two-factor exchange.
    pub fn set_tokens(
        &mut self,
        enctoken: impl Into<String>,
        public_token: Option<impl Into<String>>,
    ) {
        self.enctoken = Some(enctoken.into());
        self.public_token = public_token.map(Into::into);
    }

    /// Returns `true` once a session token has been stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.enctoken.is_some()
    }

    /// Returns the `Authorization` header value, present iff the session token is set.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.enctoken.as_deref().map(|t| format!("enctoken {t}"))
    }

    /// Derives the header map attached verbatim to every pipeline request.
    ///
    /// Always carries the `X-Kite-Version` marker; carries `Authorization` iff the
    /// session token is set.
    #[must_use]
    pub fn headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::from([(
            "X-Kite-Version".to_string(),
            KITE_API_VERSION.to_string(),
        )]);

        if let Some(authorization) = self.authorization() {
            headers.insert("Authorization".to_string(), authorization);
        }

        headers
    }
}

/// Returns a masked version of a token for logging purposes.
///
/// Shows first 4 and last 4 characters with ellipsis in between; tokens of 8
/// characters or fewer are fully masked. Counts characters rather than bytes so
/// non-ASCII tokens never split a character.
#[must_use]
pub fn mask_token(token: &str) -> String {
    let len = token.chars().count();

    if len <= 8 {
        "*".repeat(len)
    } else {
        let head: String = token.chars().take(4).collect();
        let tail: String = token.chars().skip(len - 4).collect();
        format!("{head}...{tail}")
    }
}
