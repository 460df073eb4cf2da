use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::motorcycles::adapters::inbound::http::MotorcycleView;
use crate::modules::motorcycles::use_cases::lookup_motorcycle::query::LookupMotorcycle;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LookupMotorcycleParams {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<LookupMotorcycleParams>,
) -> impl IntoResponse {
    let lookup = match LookupMotorcycle::from_params(params.make, params.model, params.year) {
        Ok(lookup) => lookup,
        Err(error) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": error.to_string() })),
            )
                .into_response();
        }
    };

    match state.queries.find_first(&lookup).await {
        Ok(found) => Json(found.map(MotorcycleView::from)).into_response(),
        Err(error) => {
            tracing::error!(%error, "motorcycle lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
