use std::sync::Arc;

use crate::mealplan::generator::PlanGenerator;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both external dependencies are trait objects built once in `main` and
/// substituted with doubles in tests.
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<dyn PlanGenerator>,
    pub store: Arc<dyn Store>,
}
