use axum::{
    body::Body,
    http::{HeaderValue, header::CONTENT_TYPE},
    response::Response,
};
use tracing::error;

use crate::error::ErrorInfo;

/// Renders errors attached by `Error::into_response` as plain text
pub async fn response_mapper(res: Response) -> Response {
    let Some(e) = res.extensions().get::<ErrorInfo>() else {
        return res;
    };

    if e.status_code.is_server_error() {
        error!("{}", e.message);
    }

    let mut mapped = Response::new(Body::from(e.message.clone()));
    *mapped.status_mut() = e.status_code;
    mapped.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    mapped
}
