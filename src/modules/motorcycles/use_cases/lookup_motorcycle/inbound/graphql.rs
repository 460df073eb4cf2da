use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::motorcycles::adapters::inbound::graphql::{GqlDateTime, GqlMotorcycle};
use crate::modules::motorcycles::use_cases::lookup_motorcycle::query::LookupMotorcycle;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct LookupMotorcycleQuery;

#[Object]
impl LookupMotorcycleQuery {
    /// Get single motorcycle
    async fn motorcycle(
        &self,
        context: &Context<'_>,
        make: String,
        model: String,
        year: GqlDateTime,
    ) -> GqlResult<Option<GqlMotorcycle>> {
        let state = context.data_unchecked::<AppState>();
        let lookup = LookupMotorcycle {
            make,
            model,
            year: year.0,
        };
        let found = state.queries.find_first(&lookup).await?;
        Ok(found.map(Into::into))
    }
}
