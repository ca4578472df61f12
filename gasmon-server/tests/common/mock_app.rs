#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use gasmon_server::app::create_router;
use gasmon_server::configs::{Auth, Database, SchemaManager, Storage};
use gasmon_server::models::{Analog, DeviceList, DeviceLogCurrent, User, UserDevice};
use gasmon_server::services::{AuthService, TokenService};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "password123";

pub struct MockApp {
    pub storage: Arc<Storage>,
    pub auth_service: Arc<AuthService>,
    pub token_service: Arc<TokenService>,
    pub router: Router,
}

impl MockApp {
    pub async fn new() -> Self {
        let storage = Arc::new(
            Storage::new(
                Database {
                    migration_path: None,
                    clean_start: true,
                    url: String::from("sqlite::memory:"),
                    max_connections: 1,
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        );

        let auth = Auth {
            secret: String::from("test"),
            expiration: 1000,
        };

        let auth_service = Arc::new(AuthService::new());
        let token_service = Arc::new(TokenService::new(auth.clone()));
        let router = create_router(storage.clone(), auth);

        Self {
            storage,
            auth_service,
            token_service,
            router,
        }
    }

    pub async fn create_test_user(&self, user_name: &str) -> User {
        let password = self.auth_service.hash(TEST_PASSWORD).unwrap();

        sqlx::query_as::<_, User>(
            "INSERT INTO user_details (user_name, password) VALUES ($1, $2) RETURNING *;",
        )
        .bind(user_name)
        .bind(password)
        .fetch_one(self.storage.get_pool())
        .await
        .unwrap()
    }

    pub fn token_for(&self, user: &User) -> String {
        self.token_service.generate_token(user).unwrap().token
    }

    pub async fn assign_device(&self, user: &User, device_id: &str) -> UserDevice {
        sqlx::query_as::<_, UserDevice>(
            "INSERT INTO user_device_list (user_id, device_id) VALUES ($1, $2) RETURNING *;",
        )
        .bind(user.user_id)
        .bind(device_id)
        .fetch_one(self.storage.get_pool())
        .await
        .unwrap()
    }

    pub async fn register_device(
        &self,
        device_id: &str,
        customer_name: &str,
        address: &str,
        coordinates: Option<&str>,
    ) -> DeviceList {
        sqlx::query_as::<_, DeviceList>(
            r#"
            INSERT INTO devicelist (device_id, customer_name, address, coordinates)
                VALUES ($1, $2, $3, $4)
                RETURNING *;
            "#,
        )
        .bind(device_id)
        .bind(customer_name)
        .bind(address)
        .bind(coordinates)
        .fetch_one(self.storage.get_pool())
        .await
        .unwrap()
    }

    pub async fn log_reading(
        &self,
        device_id: &str,
        gas_level: Option<&str>,
        coordinates: Option<&str>,
        log_time: &str,
    ) -> DeviceLogCurrent {
        sqlx::query_as::<_, DeviceLogCurrent>(
            r#"
            INSERT INTO device_log_current (device_id, gas_level, coordinates, device_location, log_time)
                VALUES ($1, $2, $3, NULL, $4)
                RETURNING *;
            "#,
        )
        .bind(device_id)
        .bind(gas_level)
        .bind(coordinates)
        .bind(log_time)
        .fetch_one(self.storage.get_pool())
        .await
        .unwrap()
    }

    pub async fn set_lower_limit(&self, device_id: &str, lower_limit: &str) -> Analog {
        sqlx::query_as::<_, Analog>(
            "INSERT INTO analog (device_id, ang3_lower_limit) VALUES ($1, $2) RETURNING *;",
        )
        .bind(device_id)
        .bind(lower_limit)
        .fetch_one(self.storage.get_pool())
        .await
        .unwrap()
    }

    pub async fn get_json(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().uri(uri);
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = self
            .router
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }
}
