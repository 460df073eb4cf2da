// Composition root for the motorcycles service.
//
// Responsibilities
// - Read config from environment.
// - Load the record set once and fail when it cannot be loaded.
// - Wire the snapshot into the GraphQL schema and HTTP router.

pub mod config;
pub mod graphql;
pub mod http;
pub mod startup;
pub mod state;
