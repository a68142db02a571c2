// src/server.rs
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, routing::{get, post}, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::evaluation::evaluate_claim;
use crate::report::render_plain_text;
use crate::resolve::{resolve_form_data, HYDRAFULL_DEMO_DATA};
use crate::types::{ClaimRecord, EvaluationResult};

#[derive(Debug, Clone)]
pub struct Engine {
    /// Evaluate the demo record when a request names no product.
    pub fallback_to_demo: bool,
}

impl Engine {
    fn prepare(&self, rec: ClaimRecord) -> ClaimRecord {
        if self.fallback_to_demo {
            resolve_form_data(Some(rec))
        } else {
            rec
        }
    }
}

#[derive(Deserialize)]
struct BatchReq {
    records: Vec<ClaimRecord>,
}

#[derive(Serialize)]
struct BatchResp {
    results: Vec<EvaluationResult>,
}

#[derive(Serialize)]
struct HealthResp {
    status: &'static str,
    version: &'static str,
}

async fn evaluate(
    State(engine): State<Arc<Engine>>,
    payload: Result<Json<ClaimRecord>, JsonRejection>,
) -> Result<Json<EvaluationResult>, ApiError> {
    let Json(rec) = payload?;
    Ok(Json(evaluate_claim(&engine.prepare(rec))))
}

async fn evaluate_batch(
    State(engine): State<Arc<Engine>>,
    payload: Result<Json<BatchReq>, JsonRejection>,
) -> Result<Json<BatchResp>, ApiError> {
    let Json(req) = payload?;
    let results = req
        .records
        .into_iter()
        .map(|rec| evaluate_claim(&engine.prepare(rec)))
        .collect::<Vec<_>>();
    tracing::debug!(count = results.len(), "Evaluated batch");
    Ok(Json(BatchResp { results }))
}

async fn resolve(payload: Result<Json<ClaimRecord>, JsonRejection>) -> Result<Json<ClaimRecord>, ApiError> {
    let Json(rec) = payload?;
    Ok(Json(resolve_form_data(Some(rec))))
}

async fn report(payload: Result<Json<ClaimRecord>, JsonRejection>) -> Result<String, ApiError> {
    let Json(rec) = payload?;
    let rec = resolve_form_data(Some(rec));
    let result = evaluate_claim(&rec);
    Ok(render_plain_text(&rec, &result, chrono::Local::now().date_naive()))
}

async fn demo() -> Json<ClaimRecord> {
    Json(HYDRAFULL_DEMO_DATA.clone())
}

async fn health() -> Json<HealthResp> {
    Json(HealthResp { status: "ok", version: env!("CARGO_PKG_VERSION") })
}

pub fn router(engine: Engine) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate))
        .route("/evaluate_batch", post(evaluate_batch))
        .route("/resolve", post(resolve))
        .route("/report", post(report))
        .route("/demo", get(demo))
        .route("/health", get(health))
        .with_state(Arc::new(engine))
}

pub async fn run_server(engine: Engine, addr: &str) -> anyhow::Result<()> {
    let app = router(engine);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "Claim evaluation server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
