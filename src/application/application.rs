use super::ApplicationState;
use crate::routing::routing;
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn create_application(application_state: ApplicationState) -> Router {
    routing()
        .with_state(application_state)
        .layer(TraceLayer::new_for_http())
}
