use axum::http::header::InvalidHeaderValue;
use axum::http::{self, StatusCode};
use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use snafu::{Backtrace, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Config error: {}", msg))]
    Config { msg: String },

    #[snafu(display("Unable to bind to {}: {}", addr, source))]
    Bind {
        addr: String,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Server error: {}", source))]
    Serve {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Invalid redirect url: {}", source))]
    InvalidRedirect { source: InvalidHeaderValue },

    #[snafu(display("Response builder error: {}", source))]
    ResponseBuilder { source: http::Error },

    #[snafu(display("{}", msg))]
    NotFound { msg: String },
}

/// Allow Error to be converted to StatusCode
impl From<&Error> for StatusCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidRedirect { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Errors are rendered by the response mapper from the attached ErrorInfo
impl IntoResponse for Error {
    fn into_response(self) -> Response<Body> {
        let info = ErrorInfo::from(&self);

        let mut res = Response::builder()
            .status(info.status_code)
            .body(Body::empty())
            .expect("Response builder must succeed");

        res.extensions_mut().insert(info);
        res
    }
}

#[derive(Clone, Debug)]
pub struct ErrorInfo {
    pub status_code: StatusCode,
    pub message: String,
}

impl From<&Error> for ErrorInfo {
    fn from(e: &Error) -> Self {
        Self {
            status_code: e.into(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = Error::NotFound {
            msg: "Not Found".to_string(),
        };
        assert_eq!(StatusCode::from(&err), StatusCode::NOT_FOUND);

        let err = Error::Config {
            msg: "LOGIN_SERVER is required".to_string(),
        };
        assert_eq!(StatusCode::from(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_attaches_error_info() {
        let res = Error::NotFound {
            msg: "Nothing here".to_string(),
        }
        .into_response();

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let info = res
            .extensions()
            .get::<ErrorInfo>()
            .expect("ErrorInfo should be attached");
        assert_eq!(info.status_code, StatusCode::NOT_FOUND);
        assert_eq!(info.message, "Nothing here");
    }
}
