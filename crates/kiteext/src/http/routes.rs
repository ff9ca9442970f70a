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

//! Static route table mapping logical route names to URL path templates.

use std::{collections::HashMap, sync::LazyLock};

use super::error::KiteHttpError;

/// Route table shared by all client instances.
///
/// Holds the standard Kite Connect route set plus the web-session extension routes
/// (`api.login`, `api.twofa`, `api.misdata`). Path templates may contain named
/// `{placeholder}` segments filled from per-call URL arguments. Immutable after
/// construction.
pub static ROUTES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Web-session extension routes
        ("api.login", "/api/login"),
        ("api.twofa", "/api/twofa"),
        ("api.misdata", "/margins/equity"),
        // Session
        ("api.token", "/session/token"),
        ("api.token.invalidate", "/session/token"),
        ("api.token.renew", "/session/refresh_token"),
        // User
        ("user.profile", "/user/profile"),
        ("user.margins", "/user/margins"),
        ("user.margins.segment", "/user/margins/{segment}"),
        // Orders
        ("orders", "/orders"),
        ("trades", "/trades"),
        ("order.info", "/orders/{order_id}"),
        ("order.place", "/orders/{variety}"),
        ("order.modify", "/orders/{variety}/{order_id}"),
        ("order.cancel", "/orders/{variety}/{order_id}"),
        ("order.trades", "/orders/{order_id}/trades"),
        // Portfolio
        ("portfolio.positions", "/portfolio/positions"),
        ("portfolio.holdings", "/portfolio/holdings"),
        ("portfolio.positions.convert", "/portfolio/positions"),
        // Market data
        ("market.instruments.all", "/instruments"),
        ("market.instruments", "/instruments/{exchange}"),
        ("market.margins", "/margins/{segment}"),
        (
            "market.historical",
            "/instruments/historical/{instrument_token}/{interval}",
        ),
        (
            "market.trigger_range",
            "/instruments/trigger_range/{transaction_type}",
        ),
        ("market.quote", "/quote"),
        ("market.quote.ohlc", "/quote/ohlc"),
        ("market.quote.ltp", "/quote/ltp"),
    ])
});

/// Resolves a logical route name to its path, substituting `{placeholder}` segments
/// from `url_args`.
///
/// # Errors
///
/// Returns [`KiteHttpError::UnknownRoute`] when the route name is not in the table or
/// a placeholder remains unresolved after substitution.
pub fn resolve_route(
    route: &str,
    url_args: Option<&HashMap<String, String>>,
) -> Result<String, KiteHttpError> {
    let template = ROUTES
        .get(route)
        .ok_or_else(|| KiteHttpError::UnknownRoute(format!("No such route: '{route}'")))?;

    let mut path = (*template).to_string();

    if let Some(args) = url_args {
        for (key, value) in args {
            path = path.replace(&format!("{{{key}}}"), value);
        }
    }

    if path.contains('{') {
        return Err(KiteHttpError::UnknownRoute(format!(
            "Unresolved placeholder in route '{route}': {path}"
        )));
    }

    if !path.starts_with('/') {
        path.insert(0, '/');
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_extension_routes_registered() {
        assert_eq!(ROUTES.get("api.login"), Some(&"/api/login"));
        assert_eq!(ROUTES.get("api.twofa"), Some(&"/api/twofa"));
        assert_eq!(ROUTES.get("api.misdata"), Some(&"/margins/equity"));
    }

    #[rstest]
    fn test_resolve_route_without_args() {
        let path = resolve_route("user.profile", None).unwrap();
        assert_eq!(path, "/user/profile");
    }

    #[rstest]
    fn test_resolve_route_with_args() {
        let args = HashMap::from([
            ("variety".to_string(), "regular".to_string()),
            ("order_id".to_string(), "151220000000000".to_string()),
        ]);
        let path = resolve_route("order.modify", Some(&args)).unwrap();
        assert_eq!(path, "/orders/regular/151220000000000");
    }

    #[rstest]
    fn test_resolve_unknown_route() {
        let result = resolve_route("api.bogus", None);
        assert!(matches!(result, Err(KiteHttpError::UnknownRoute(_))));
    }

    #[rstest]
    fn test_resolve_route_with_missing_placeholder() {
        let result = resolve_route("order.info", None);
        assert!(matches!(result, Err(KiteHttpError::UnknownRoute(_))));
    }
}
