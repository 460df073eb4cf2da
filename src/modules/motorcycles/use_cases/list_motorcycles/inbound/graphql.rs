use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::motorcycles::adapters::inbound::graphql::GqlMotorcycle;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListMotorcyclesQuery;

#[Object]
impl ListMotorcyclesQuery {
    /// List of motorcycles
    async fn motorcycle_list(&self, context: &Context<'_>) -> GqlResult<Vec<GqlMotorcycle>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.queries.list_all().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
