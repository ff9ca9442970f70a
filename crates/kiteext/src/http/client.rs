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

//! Provides the HTTP client integration for the Kite web-session API.

use std::{
    collections::HashMap,
    fmt::Debug,
    sync::{Arc, RwLock},
    time::Duration,
};

use bytes::Bytes;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::{
    error::{KiteApiErrorKind, KiteHttpError, KiteHttpResult},
    models::{KiteEnvelope, LoginResponse, ResponseContent},
    query::{LoginParams, TwoFaParams},
    routes::resolve_route,
};
use crate::{
    common::{consts::KITE_BROWSER_USER_AGENT, credential::KiteSession},
    config::KiteClientConfig,
    websocket::client::KiteTickerClient,
};

/// Zero-argument callback invoked when a 403 `TokenException` is classified.
pub type SessionExpiryHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client for the Kite web-session API.
///
/// Builds requests from logical route names against the order-management origin,
/// classifies responses into typed errors, and owns the mutable [`KiteSession`]
/// populated by the authentication bootstraps. One persistent underlying connection
/// pool (with cookie store) is reused across calls; no retries are performed at this
/// layer, callers own retry policy.
pub struct KiteHttpClient {
    api_key: String,
    base_url: String,
    oms_base_url: String,
    ws_base_url: String,
    client: reqwest::Client,
    session: RwLock<KiteSession>,
    session_expiry_hook: RwLock<Option<SessionExpiryHook>>,
    debug: bool,
}

impl Default for KiteHttpClient {
    fn default() -> Self {
        Self::new(KiteClientConfig::default()).expect("Failed to create default KiteHttpClient")
    }
}

impl Debug for KiteHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // SAFETY: Lock poisoning indicates a panic in another thread, which is fatal
        let session = self.session.read().expect("Lock poisoned");
        f.debug_struct(stringify!(KiteHttpClient))
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .field("oms_base_url", &self.oms_base_url)
            .field("session", &*session)
            .finish()
    }
}

impl KiteHttpClient {
    /// Creates a new [`KiteHttpClient`] from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed (invalid
    /// proxy URL or TLS backend failure).
    pub fn new(config: KiteClientConfig) -> KiteHttpResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(KITE_BROWSER_USER_AGENT)
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(10));

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| KiteHttpError::Network(format!("Invalid proxy URL: {e}")))?;
            builder = builder.proxy(proxy);
        }

        if config.disable_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| KiteHttpError::Network(format!("Failed to create HTTP client: {e}")))?;

        let mut session = KiteSession::new();
        if let Some(user_id) = &config.user_id {
            session.set_user_id(user_id);
        }

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.http_base_url(),
            oms_base_url: config.oms_base_url(),
            ws_base_url: config.ws_base_url(),
            client,
            session: RwLock::new(session),
            session_expiry_hook: RwLock::new(None),
            debug: config.debug,
        })
    }

    /// Returns the default REST origin for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the order-management origin used by the request pipeline.
    #[must_use]
    pub fn oms_base_url(&self) -> &str {
        &self.oms_base_url
    }

    /// Returns a snapshot of the current session context.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread).
    #[must_use]
    pub fn session(&self) -> KiteSession {
        self.session.read().expect("Lock poisoned").clone()
    }

    /// Registers the session-expiry hook invoked on 403 `TokenException` classification.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread).
    pub fn set_session_expiry_hook<F>(&self, hook: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *self.session_expiry_hook.write().expect("Lock poisoned") = Some(Arc::new(hook));
    }

    // ---------------------------------------------------------------------------------------------
    // Session bootstrap
    // ---------------------------------------------------------------------------------------------

    /// Performs the two-step credential login (user id + password, then 2FA).
    ///
    /// The first step posts the credentials to `/api/login` on the default origin and
    /// extracts the request identifier and canonical user id from the success payload;
    /// the second posts the 2FA value to `/api/twofa`. On success the token pair is
    /// read from the two-factor response's session cookies and stored in the session
    /// context. No retry or backoff is performed at either step.
    ///
    /// # Errors
    ///
    /// Returns the transport or classification error of whichever step failed, or a
    /// decode error when the `enctoken` cookie is absent from the two-factor response.
    pub async fn login_with_credentials(
        &self,
        user_id: &str,
        password: &str,
        twofa: &str,
    ) -> KiteHttpResult<()> {
        let login_url = format!("{}{}", self.base_url, resolve_route("api.login", None)?);
        let params = LoginParams::new(user_id, password);
        let response = self.client.post(&login_url).form(&params).send().await?;
        let login: LoginResponse = match self.classify_response(response).await? {
            ResponseContent::Json(value) => serde_json::from_value(value)?,
            ResponseContent::Csv(_) => {
                return Err(KiteHttpError::Decode {
                    content_type: "csv".to_string(),
                    body: "expected JSON login payload".to_string(),
                });
            }
        };

        let twofa_url = format!("{}{}", self.base_url, resolve_route("api.twofa", None)?);
        let params = TwoFaParams::new(login.request_id, twofa, login.user_id.clone());
        let response = self.client.post(&twofa_url).form(&params).send().await?;

        // Tokens arrive as session cookies on this response, not in the JSON body
        let cookies: HashMap<String, String> = response
            .cookies()
            .map(|c| (c.name().to_string(), c.value().to_string()))
            .collect();
        let content_type = Self::content_type(&response);

        self.classify_response(response).await?;

        let enctoken = cookies
            .get("enctoken")
            .cloned()
            .ok_or_else(|| KiteHttpError::Decode {
                content_type,
                body: "enctoken cookie not present in two-factor response".to_string(),
            })?;
        let public_token = cookies.get("public_token").cloned();
        let cookie_user_id = cookies
            .get("user_id")
            .cloned()
            .unwrap_or(login.user_id);

        // SAFETY: Lock poisoning indicates a panic in another thread, which is fatal
        let mut session = self.session.write().expect("Lock poisoned");
        session.set_user_id(cookie_user_id);
        session.set_tokens(enctoken, public_token);

        Ok(())
    }

    /// Populates the session directly from a token pair obtained out-of-band.
    ///
    /// Performs no network call.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in another thread).
    pub fn login_with_token(&self, user_id: &str, enctoken: &str, public_token: Option<&str>) {
        let mut session = self.session.write().expect("Lock poisoned");
        session.set_user_id(user_id);
        session.set_tokens(enctoken, public_token);
    }

    /// Rebuilds the Authorization header from the given token.
    ///
    /// Quirk preserved from the upstream extension: the public token is set to the
    /// same value as the session token here.
    ///
    /// # Errors
    ///
    /// Returns [`KiteHttpError::MissingUserId`] when no user id is known from any
    /// prior step and none is provided; this is a local configuration error, not a
    /// network failure.
    pub fn set_headers(&self, enctoken: &str, user_id: Option<&str>) -> KiteHttpResult<()> {
        // SAFETY: Lock poisoning indicates a panic in another thread, which is fatal
        let mut session = self.session.write().expect("Lock poisoned");

        if let Some(user_id) = user_id {
            session.set_user_id(user_id);
        }
        if session.user_id().is_none() {
            return Err(KiteHttpError::MissingUserId);
        }

        session.set_tokens(enctoken, Some(enctoken));

        Ok(())
    }

    // ---------------------------------------------------------------------------------------------
    // Request pipeline
    // ---------------------------------------------------------------------------------------------

    /// Executes a request for the given logical route against the order-management
    /// origin and classifies the response.
    ///
    /// For GET/DELETE all `params` become query parameters and no body is sent; for
    /// POST/PUT `params` become a JSON body when `is_json` is set and a form-encoded
    /// body otherwise. The current session headers are attached verbatim, captured at
    /// call time.
    ///
    /// # Errors
    ///
    /// Returns the typed error produced by response classification; see
    /// [`KiteHttpError`] for the taxonomy.
    pub async fn request<P>(
        &self,
        route: &str,
        method: Method,
        url_args: Option<&HashMap<String, String>>,
        params: Option<&P>,
        is_json: bool,
    ) -> KiteHttpResult<ResponseContent>
    where
        P: Serialize + ?Sized,
    {
        let path = resolve_route(route, url_args)?;
        let url = format!("{}{path}", self.oms_base_url);

        // SAFETY: Lock poisoning indicates a panic in another thread, which is fatal
        let headers = self.session.read().expect("Lock poisoned").headers();

        if self.debug {
            let params_repr = params.and_then(|p| serde_json::to_value(p).ok());
            tracing::debug!(method = %method, url = %url, params = ?params_repr, headers = ?headers, "Request");
        }

        let mut builder = self.client.request(method.clone(), &url);
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }

        if let Some(params) = params {
            if method == Method::GET || method == Method::DELETE {
                builder = builder.query(params);
            } else if is_json {
                builder = builder.json(params);
            } else {
                builder = builder.form(params);
            }
        }

        let response = builder.send().await?;
        self.classify_response(response).await
    }

    /// Executes a GET request for the given route.
    ///
    /// # Errors
    ///
    /// Returns the typed error produced by response classification.
    pub async fn get(
        &self,
        route: &str,
        url_args: Option<&HashMap<String, String>>,
        params: Option<&HashMap<String, String>>,
    ) -> KiteHttpResult<ResponseContent> {
        self.request(route, Method::GET, url_args, params, false)
            .await
    }

    /// Executes a POST request for the given route.
    ///
    /// # Errors
    ///
    /// Returns the typed error produced by response classification.
    pub async fn post(
        &self,
        route: &str,
        params: Option<&HashMap<String, String>>,
        is_json: bool,
    ) -> KiteHttpResult<ResponseContent> {
        self.request(route, Method::POST, None, params, is_json)
            .await
    }

    /// Executes a PUT request for the given route.
    ///
    /// # Errors
    ///
    /// Returns the typed error produced by response classification.
    pub async fn put(
        &self,
        route: &str,
        url_args: Option<&HashMap<String, String>>,
        params: Option<&HashMap<String, String>>,
        is_json: bool,
    ) -> KiteHttpResult<ResponseContent> {
        self.request(route, Method::PUT, url_args, params, is_json)
            .await
    }

    /// Executes a DELETE request for the given route.
    ///
    /// # Errors
    ///
    /// Returns the typed error produced by response classification.
    pub async fn delete(
        &self,
        route: &str,
        url_args: Option<&HashMap<String, String>>,
        params: Option<&HashMap<String, String>>,
    ) -> KiteHttpResult<ResponseContent> {
        self.request(route, Method::DELETE, url_args, params, false)
            .await
    }

    async fn request_json<T, P>(
        &self,
        route: &str,
        method: Method,
        url_args: Option<&HashMap<String, String>>,
        params: Option<&P>,
        is_json: bool,
    ) -> KiteHttpResult<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        match self
            .request(route, method, url_args, params, is_json)
            .await?
        {
            ResponseContent::Json(value) => Ok(serde_json::from_value(value)?),
            ResponseContent::Csv(_) => Err(KiteHttpError::Decode {
                content_type: "csv".to_string(),
                body: "expected JSON response".to_string(),
            }),
        }
    }

    // ---------------------------------------------------------------------------------------------
    // Convenience accessors
    // ---------------------------------------------------------------------------------------------

    /// Fetches the equity margin data.
    ///
    /// # Endpoint
    /// `GET /margins/equity`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn margin_data(&self) -> KiteHttpResult<Value> {
        self.request_json::<Value, ()>("api.misdata", Method::GET, None, None, false)
            .await
    }

    /// Fetches margins for the given segment (e.g. "equity", "commodity").
    ///
    /// # Endpoint
    /// `GET /user/margins/{segment}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn margins(&self, segment: &str) -> KiteHttpResult<Value> {
        let url_args = HashMap::from([("segment".to_string(), segment.to_string())]);
        self.request_json::<Value, ()>(
            "user.margins.segment",
            Method::GET,
            Some(&url_args),
            None,
            false,
        )
        .await
    }

    /// Fetches the user profile.
    ///
    /// # Endpoint
    /// `GET /user/profile`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn profile(&self) -> KiteHttpResult<Value> {
        self.request_json::<Value, ()>("user.profile", Method::GET, None, None, false)
            .await
    }

    /// Downloads the instrument dump as raw CSV bytes.
    ///
    /// Goes directly against the default origin, unauthenticated; the result can be
    /// several hundred KBs and is handed to an external CSV parser unmodified.
    ///
    /// # Endpoint
    /// `GET {default_origin}/instruments` or `GET {default_origin}/instruments/{exchange}`
    ///
    /// # Errors
    ///
    /// Returns a network error if the transport fails.
    pub async fn instruments(&self, exchange: Option<&str>) -> KiteHttpResult<Bytes> {
        let url = match exchange {
            Some(exchange) => format!("{}/instruments/{exchange}", self.base_url),
            None => format!("{}/instruments", self.base_url),
        };

        let response = self.client.get(&url).send().await?;
        Ok(response.bytes().await?)
    }

    /// Creates a ticker client from the current session, optionally overriding the
    /// token or user id first.
    ///
    /// # Errors
    ///
    /// Returns [`KiteHttpError::MissingUserId`] or [`KiteHttpError::MissingToken`]
    /// when the session lacks the respective value after the overrides are applied;
    /// both are local configuration errors, no network call is performed.
    pub fn ticker(
        &self,
        enctoken: Option<&str>,
        user_id: Option<&str>,
    ) -> KiteHttpResult<KiteTickerClient> {
        {
            // SAFETY: Lock poisoning indicates a panic in another thread, which is fatal
            let mut session = self.session.write().expect("Lock poisoned");
            if let Some(enctoken) = enctoken {
                let public_token = session.public_token().map(str::to_string);
                session.set_tokens(enctoken, public_token);
            }
            if let Some(user_id) = user_id {
                session.set_user_id(user_id);
            }
        }

        // SAFETY: Lock poisoning indicates a panic in another thread, which is fatal
        let session = self.session.read().expect("Lock poisoned");
        let user_id = session.user_id().ok_or(KiteHttpError::MissingUserId)?;
        let enctoken = session.enctoken().ok_or(KiteHttpError::MissingToken)?;

        Ok(KiteTickerClient::new(
            &self.ws_base_url,
            &self.api_key,
            user_id,
            enctoken,
        ))
    }

    // ---------------------------------------------------------------------------------------------
    // Response classification
    // ---------------------------------------------------------------------------------------------

    fn content_type(response: &reqwest::Response) -> String {
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    /// Classifies a response in the fixed order: transport failures have already been
    /// propagated by the caller; JSON bodies are parsed and checked for an error
    /// envelope; CSV bodies pass through as raw bytes; anything else is a decode error.
    async fn classify_response(
        &self,
        response: reqwest::Response,
    ) -> KiteHttpResult<ResponseContent> {
        let status = response.status().as_u16();
        let content_type = Self::content_type(&response);
        let body = response.bytes().await?;

        if self.debug {
            tracing::debug!(status, body = %String::from_utf8_lossy(&body), "Response");
        }

        if content_type.contains("json") {
            let envelope: KiteEnvelope =
                serde_json::from_slice(&body).map_err(|_| KiteHttpError::Decode {
                    content_type: content_type.clone(),
                    body: String::from_utf8_lossy(&body).into_owned(),
                })?;

            if let Some(error_type) = envelope.error_type.filter(|e| !e.is_empty()) {
                if status == 403 && error_type == "TokenException" {
                    // SAFETY: Lock poisoning indicates a panic in another thread, which is fatal
                    let hook = self.session_expiry_hook.read().expect("Lock poisoned").clone();
                    if let Some(hook) = hook {
                        hook();
                    }
                }

                return Err(KiteHttpError::Api {
                    kind: KiteApiErrorKind::from_error_type(&error_type),
                    message: envelope.message.unwrap_or_default(),
                    status,
                });
            }

            let data = envelope.data.ok_or_else(|| KiteHttpError::Decode {
                content_type,
                body: String::from_utf8_lossy(&body).into_owned(),
            })?;

            return Ok(ResponseContent::Json(data));
        }

        if content_type.contains("csv") {
            return Ok(ResponseContent::Csv(body));
        }

        Err(KiteHttpError::Decode {
            content_type,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}
