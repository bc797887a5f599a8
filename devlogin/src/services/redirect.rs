use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Fixed HTTPS port of the login dashboard
pub const DASHBOARD_HTTPS_PORT: &str = "1443";

pub const CONTINUE_PARAM: &str = "continue";

/// Characters escaped in the continue value when escaping is enabled.
/// Control characters are included, and non-ASCII bytes are always encoded.
const CONTINUE_ESCAPE: &AsciiSet = &CONTROLS.add(b':').add(b'?').add(b'=');

/// How the continue value is placed into the redirect url.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Substitute the continue value as-is.
    /// This is what deployed dashboards have always received.
    #[default]
    Verbatim,

    /// Percent-encode `:`, `?` and `=` in the continue value only.
    /// Control characters and non-ASCII bytes are encoded as well, so CR/LF
    /// ends up as `%0D%0A` instead of being rejected.
    /// Scheme, host and port are never touched.
    ///
    /// `&` and `#` are left alone: a continue url with several query
    /// parameters of its own loses everything after the first `&` once the
    /// dashboard parses it.
    Escaped,
}

/// Builds `https://{server}:1443/login?continue={continue_url}`
pub fn build_login_redirect_url(server: &str, continue_url: &str, mode: EscapeMode) -> String {
    let endpoint = format!("https://{}:{}/login", server, DASHBOARD_HTTPS_PORT);

    match mode {
        EscapeMode::Verbatim => format!("{}?{}={}", endpoint, CONTINUE_PARAM, continue_url),
        EscapeMode::Escaped => format!(
            "{}?{}={}",
            endpoint,
            CONTINUE_PARAM,
            utf8_percent_encode(continue_url, CONTINUE_ESCAPE)
        ),
    }
}
