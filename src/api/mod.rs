mod handlers;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::assets::AssetLoader;
use crate::nav::Navigator;

/// Shared server state: the one navigation selection and the asset loader.
#[derive(Clone)]
pub struct AppState {
    navigator: Arc<Mutex<Navigator>>,
    assets: AssetLoader,
}

impl AppState {
    pub fn new(assets: AssetLoader) -> Self {
        Self {
            navigator: Arc::new(Mutex::new(Navigator::new())),
            assets,
        }
    }

    pub fn assets(&self) -> &AssetLoader {
        &self.assets
    }

    /// Lock the navigator for one request. The selection is a plain value,
    /// so a poisoned lock still holds a valid phase.
    pub(crate) fn navigator(&self) -> MutexGuard<'_, Navigator> {
        self.navigator.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Phases
        .route("/phases", get(handlers::list_phases))
        .route("/phases/{slug}", get(handlers::get_phase))
        // Selection
        .route(
            "/selection",
            get(handlers::get_selection).put(handlers::update_selection),
        )
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/phases/{slug}", get(handlers::phase_page))
        // Downloads
        .route("/assets/{file_name}", get(handlers::download_asset))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
