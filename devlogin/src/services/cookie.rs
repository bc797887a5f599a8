use tower_cookies::{Cookie, Cookies};

/// Development server login marker
pub const LOGIN_COOKIE: &str = "dev_appserver_login";

/// Clears the local authentication cookie for the current request.
///
/// Must be safe to call when the client sent no cookie at all.
pub trait CookieStore {
    fn remove_cookie(&self);
}

impl CookieStore for Cookies {
    fn remove_cookie(&self) {
        // The jar only emits a removal when the request carried the cookie
        self.remove(Cookie::build((LOGIN_COOKIE, "")).path("/").build());
    }
}
