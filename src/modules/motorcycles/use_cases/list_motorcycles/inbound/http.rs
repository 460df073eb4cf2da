use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::motorcycles::adapters::inbound::http::MotorcycleView;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_all().await {
        Ok(list) => Json(
            list.into_iter()
                .map(MotorcycleView::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(error) => {
            tracing::error!(%error, "motorcycle listing failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
