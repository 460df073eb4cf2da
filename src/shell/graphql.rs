use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

use crate::modules::motorcycles::use_cases::list_motorcycles::inbound::graphql::ListMotorcyclesQuery;
use crate::modules::motorcycles::use_cases::lookup_motorcycle::inbound::graphql::LookupMotorcycleQuery;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
#[graphql(name = "RootQuery")]
pub struct QueryRoot(LookupMotorcycleQuery, ListMotorcyclesQuery);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(state)
        .finish()
}
