use axum::{
    body::Body,
    extract::{Query, State},
    http::{HeaderValue, Response, StatusCode, header::LOCATION},
};
use snafu::ResultExt;
use tower_cookies::Cookies;
use tracing::debug;

use crate::{
    Result,
    config::LoginConfig,
    error::{InvalidRedirectSnafu, ResponseBuilderSnafu},
    run::AppState,
    services::{CONTINUE_PARAM, CookieStore, build_login_redirect_url},
};

pub async fn login_handler(
    cookies: Cookies,
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Response<Body>> {
    // First occurrence wins when the parameter is repeated
    let continue_url = query
        .iter()
        .find(|(key, _)| key == CONTINUE_PARAM)
        .map(|(_, value)| value.as_str());
    login_redirect(&cookies, &state.config.login, continue_url)
}

/// Accepted so the login form can post here, but does nothing
pub async fn post_login_handler() -> StatusCode {
    StatusCode::OK
}

/// Clears the login cookie then redirects to the login dashboard
pub fn login_redirect<C: CookieStore>(
    cookies: &C,
    config: &LoginConfig,
    continue_url: Option<&str>,
) -> Result<Response<Body>> {
    cookies.remove_cookie();

    let redirect_url = build_login_redirect_url(
        &config.server,
        continue_url.unwrap_or_default(),
        config.escape_mode,
    );
    debug!("Redirecting to login: {}", redirect_url);

    let location = HeaderValue::from_str(&redirect_url).context(InvalidRedirectSnafu)?;

    Response::builder()
        .status(StatusCode::FOUND)
        .header(LOCATION, location)
        .body(Body::empty())
        .context(ResponseBuilderSnafu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::services::EscapeMode;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingStore {
        removed: Cell<usize>,
    }

    impl CookieStore for CountingStore {
        fn remove_cookie(&self) {
            self.removed.set(self.removed.get() + 1);
        }
    }

    fn login_config(escape_mode: EscapeMode) -> LoginConfig {
        LoginConfig {
            server: "auth.example.com".to_string(),
            escape_mode,
        }
    }

    fn location(res: &Response<Body>) -> &str {
        res.headers()
            .get(LOCATION)
            .expect("Location header is required")
            .to_str()
            .expect("Location must be ascii")
    }

    #[test]
    fn test_redirect_with_continue() {
        let store = CountingStore::default();
        let config = login_config(EscapeMode::Verbatim);
        let res = login_redirect(&store, &config, Some("http://app.example.com/home"))
            .expect("Redirect should be built");

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(
            location(&res),
            "https://auth.example.com:1443/login?continue=http://app.example.com/home"
        );
        assert_eq!(store.removed.get(), 1);
    }

    #[test]
    fn test_redirect_escaped() {
        let store = CountingStore::default();
        let config = login_config(EscapeMode::Escaped);
        let res = login_redirect(&store, &config, Some("http://app.example.com/home"))
            .expect("Redirect should be built");

        assert_eq!(
            location(&res),
            "https://auth.example.com:1443/login?continue=http%3A//app.example.com/home"
        );
        assert_eq!(store.removed.get(), 1);
    }

    #[test]
    fn test_redirect_without_continue() {
        let store = CountingStore::default();
        let config = login_config(EscapeMode::Verbatim);
        let res = login_redirect(&store, &config, None).expect("Redirect should be built");

        assert!(location(&res).ends_with("?continue="));
        assert!(!location(&res).contains("null"));
        assert_eq!(store.removed.get(), 1);
    }

    #[test]
    fn test_invalid_header_still_clears_cookie() {
        let store = CountingStore::default();
        let config = login_config(EscapeMode::Verbatim);
        let result = login_redirect(&store, &config, Some("/home\r\nSet-Cookie: a=b"));

        assert!(matches!(result, Err(Error::InvalidRedirect { .. })));
        assert_eq!(store.removed.get(), 1);
    }

    #[tokio::test]
    async fn test_post_does_nothing() {
        assert_eq!(post_login_handler().await, StatusCode::OK);
    }
}
