use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    routing::post,
};
use registration_form::{
    Config, HistoryNavigator, HttpAccountClient, RegistrationController, http_controller,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// A request received by the fake account endpoint.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Debug)]
struct FakeEndpoint {
    status: StatusCode,
    requests: Mutex<Vec<RecordedRequest>>,
}

async fn create_client(
    State(endpoint): State<Arc<FakeEndpoint>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    endpoint
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest { content_type, body });

    endpoint.status
}

/// Fake account service running on a random port.
///
/// Each test gets its own server so tests can run in parallel. The server answers
/// every `POST /api/client` with the status it was created with.
pub struct TestApp {
    pub config: Config,
    endpoint: Arc<FakeEndpoint>,
}

impl TestApp {
    pub async fn new(status: StatusCode) -> Self {
        let endpoint = Arc::new(FakeEndpoint {
            status,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/client", post(create_client))
            .with_state(endpoint.clone());

        // Bind to random port (port 0 tells OS to assign available port)
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let mut config = Config::default();
        config.api.base_url = format!("http://127.0.0.1:{port}");

        Self { config, endpoint }
    }

    /// A controller pointed at this server.
    pub fn controller(&self) -> RegistrationController<HttpAccountClient, HistoryNavigator> {
        http_controller(&self.config).expect("Failed to build controller")
    }

    /// Every request the server has received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.endpoint.requests.lock().unwrap().clone()
    }
}

/// Config pointing at a port nothing listens on.
pub async fn unreachable_config() -> Config {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mut config = Config::default();
    config.api.base_url = format!("http://127.0.0.1:{port}");
    config
}
