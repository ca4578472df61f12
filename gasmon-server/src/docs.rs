use gasmon_api::models::*;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handles;

#[derive(OpenApi)]
#[openapi(
    paths(
        handles::login,
        handles::logout,
        handles::get_current_user,
        handles::get_low_gas_devices,
        handles::get_combined_devices,
    ),
    components(schemas(LoginRequest, UserResponse, LowGasDevice, DeviceInfo, CombinedDeviceInfo)),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Session management"),
        (name = "device", description = "Gas levels of assigned devices")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
