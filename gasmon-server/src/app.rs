use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::configs::{Auth, SchemaManager, Settings, Storage};
use crate::docs::ApiDoc;
use crate::handles::*;
use crate::middlewares::TokenState;
use crate::repositories::UserRepository;
use crate::services::{AuthService, DeviceService, TokenService};

pub async fn create_app(settings: &Arc<Settings>) -> Result<Router, sqlx::Error> {
    let storage = Arc::new(Storage::new(settings.database.clone(), SchemaManager::default()).await?);

    Ok(create_router(storage, settings.auth.clone()))
}

pub fn create_router(storage: Arc<Storage>, auth: Auth) -> Router {
    let auth_service = Arc::new(AuthService::new());
    let token_service = Arc::new(TokenService::new(auth));
    let user_repository = Arc::new(UserRepository::new(storage.clone()));
    let device_service = Arc::new(DeviceService::new(storage.clone()));

    let token_state = TokenState {
        token_service: token_service.clone(),
    };

    let auth_state = AuthState {
        auth_service,
        token_service,
        user_repository,
    };

    let device_state = DeviceState { device_service };

    Router::new()
        .merge(auth_router(auth_state, token_state.clone()))
        .merge(device_router(device_state, token_state))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
