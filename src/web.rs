use crate::app::App;
use crate::error::Error;
use crate::report::aggregate::CiHealthReportEntry;
use crate::report::service::DEFAULT_DAYS_BACK;
use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, info};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReportParams {
    #[serde(default = "default_days_back")]
    pub days_back: i64,
}

fn default_days_back() -> i64 {
    DEFAULT_DAYS_BACK
}

pub fn router(app: App) -> Router {
    Router::new()
        .route("/report", get(get_report))
        .route("/health", get(health))
        .with_state(app)
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn health() -> &'static str {
    "ok"
}

pub async fn get_report(
    State(app): State<App>,
    Query(params): Query<ReportParams>,
) -> Result<Json<Vec<CiHealthReportEntry>>, Error> {
    info!("Generating CI health report for the last {} days", params.days_back);

    app.reports
        .generate_report_for_days_back(params.days_back)
        .await
        .map(Json)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Request handler panicked: {detail}");

    Error::Internal {
        message: format!("Report generation failed: {detail}"),
    }
    .into_response()
}
