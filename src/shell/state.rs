use crate::modules::motorcycles::adapters::outbound::queries::MotorcycleQueries;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn MotorcycleQueries + Send + Sync>,
}
