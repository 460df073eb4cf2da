use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQLRequest;
use axum::{
    Extension, Router,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::modules::motorcycles::use_cases::list_motorcycles::inbound::http as list_http;
use crate::modules::motorcycles::use_cases::lookup_motorcycle::inbound::http as lookup_http;
use crate::shell::graphql::AppSchema;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/graphql";

pub fn router(state: AppState, schema: AppSchema, graphiql: bool) -> Router {
    let mut router = Router::new()
        .route(GRAPHQL_PATH, get(graphql).post(graphql))
        .route("/motorcycle", get(lookup_http::handle))
        .route("/motorcycles", get(list_http::handle));
    if graphiql {
        router = router.route("/graphiql", get(graphiql_page));
    }
    router
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Responses are pretty-printed; errors stay inside the body with a 200.
async fn graphql(Extension(schema): Extension<AppSchema>, request: GraphQLRequest) -> Response {
    let response = schema.execute(request.into_inner()).await;
    match serde_json::to_string_pretty(&response) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to serialize graphql response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn graphiql_page() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
