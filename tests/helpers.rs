//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use dochub_core::config::AppConfig;
use dochub_core::config::auth::AuthConfig;
use dochub_entity::user::{User, UserRole};

/// Test application backed by in-memory repositories.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// User repository handle for seeding accounts
    pub user_repo: Arc<dochub_database::memory::MemoryUserRepository>,
    /// Edit repository handle for inspecting save records
    pub edit_repo: Arc<dochub_database::memory::MemoryEditRepository>,
    /// Notification repository handle for inspecting notifications
    pub notification_repo: Arc<dochub_database::memory::MemoryNotificationRepository>,
    /// Token encoder signed with the test secret
    encoder: dochub_auth::jwt::encoder::JwtEncoder,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let auth = AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            token_expiry_seconds: 3600,
        };
        let config = test_config(auth);

        let user_repo = Arc::new(dochub_database::memory::MemoryUserRepository::new());
        let file_repo = Arc::new(dochub_database::memory::MemoryFileRepository::new());
        let edit_repo = Arc::new(dochub_database::memory::MemoryEditRepository::new());
        let notification_repo =
            Arc::new(dochub_database::memory::MemoryNotificationRepository::new());

        let jwt_decoder = Arc::new(dochub_auth::jwt::decoder::JwtDecoder::new(&config.auth));
        let encoder = dochub_auth::jwt::encoder::JwtEncoder::new(&config.auth);
        let enforcer = Arc::new(dochub_auth::rbac::enforcer::PolicyEnforcer::new());

        let file_service = Arc::new(dochub_service::file::FileService::new(
            Arc::clone(&file_repo) as Arc<dyn dochub_database::repositories::FileRepository>,
            Arc::clone(&user_repo) as Arc<dyn dochub_database::repositories::UserRepository>,
            Arc::clone(&edit_repo) as Arc<dyn dochub_database::repositories::EditRepository>,
            Arc::clone(&notification_repo)
                as Arc<dyn dochub_database::repositories::NotificationRepository>,
            enforcer,
        ));

        let app_state = dochub_api::state::AppState {
            config: Arc::new(config),
            jwt_decoder,
            file_service,
        };

        let router = dochub_api::router::build_router(app_state);

        Self {
            router,
            user_repo,
            edit_repo,
            notification_repo,
            encoder,
        }
    }

    /// Create a test user and return their ID
    pub async fn create_test_user(&self, username: &str, role: UserRole) -> Uuid {
        use dochub_database::repositories::UserRepository;

        let user = User::new(username, role);
        let user = self
            .user_repo
            .create(&user)
            .await
            .expect("Failed to create test user");
        user.id
    }

    /// Mint a signed access token for a seeded user
    pub fn token_for(&self, user_id: Uuid, role: UserRole, username: &str) -> String {
        self.encoder
            .issue_access_token(user_id, &role, username)
            .expect("Failed to issue test token")
    }

    /// Create a user and return both their ID and a valid token
    pub async fn user_with_token(&self, username: &str, role: UserRole) -> (Uuid, String) {
        let id = self.create_test_user(username, role).await;
        let token = self.token_for(id, role, username);
        (id, token)
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

fn test_config(auth: AuthConfig) -> AppConfig {
    AppConfig {
        server: Default::default(),
        database: Default::default(),
        auth,
        logging: Default::default(),
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Extracts the `data` payload of a success envelope.
    pub fn data(&self) -> &Value {
        self.body.get("data").expect("Response has no data field")
    }
}
