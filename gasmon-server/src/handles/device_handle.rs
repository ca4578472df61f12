use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use gasmon_api::models::*;

use crate::errors::ApiError;
use crate::middlewares::{session, Session, TokenState};
use crate::services::DeviceService;

#[derive(Clone)]
pub struct DeviceState {
    pub device_service: Arc<DeviceService>,
}

pub fn device_router(device_state: DeviceState, token_state: TokenState) -> Router {
    Router::new()
        .route("/api/devices/low-gas", get(get_low_gas_devices))
        .route("/api/devices/combined", get(get_combined_devices))
        .route_layer(middleware::from_fn_with_state(token_state, session))
        .with_state(device_state)
}

#[utoipa::path(
    get,
    path = "/api/devices/low-gas",
    tag = "device",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Devices below their gas threshold, empty without a session", body = Vec<LowGasDevice>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_low_gas_devices(
    Extension(session): Extension<Session>,
    State(state): State<DeviceState>,
) -> Result<Json<Vec<LowGasDevice>>, ApiError> {
    let Some(user_name) = session.user_name() else {
        return Ok(Json(vec![]));
    };

    let devices = state.device_service.low_gas_devices(user_name).await?;

    Ok(Json(devices))
}

#[utoipa::path(
    get,
    path = "/api/devices/combined",
    tag = "device",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All assigned devices split into low and normal gas, empty without a session", body = CombinedDeviceInfo),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_combined_devices(
    Extension(session): Extension<Session>,
    State(state): State<DeviceState>,
) -> Result<Json<CombinedDeviceInfo>, ApiError> {
    let Some(user_name) = session.user_name() else {
        return Ok(Json(CombinedDeviceInfo::default()));
    };

    let devices = state.device_service.combined_devices(user_name).await?;

    Ok(Json(devices))
}
