use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use snafu::Snafu;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display(
        "GitHub API error: {} - {message}",
        status_code.map_or("unknown".to_string(), |s| s.to_string())
    ))]
    Upstream {
        status_code: Option<u16>,
        message: String,
    },
    #[snafu(display("Cannot look back {days_back} days"))]
    InvalidDaysBack { days_back: i64 },
    #[snafu(display("{message}"))]
    Internal { message: String },
}

impl Error {
    fn status(&self) -> (StatusCode, &'static str) {
        match self {
            Error::Upstream { .. } => (StatusCode::BAD_GATEWAY, "GitHub API Error"),
            Error::InvalidDaysBack { .. } => (StatusCode::BAD_REQUEST, "Bad Request"),
            Error::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, title) = self.status();
        let message = self.to_string();

        let body = json!({
            "error": title,
            "message": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
