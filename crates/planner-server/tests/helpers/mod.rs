use chrono::NaiveDate;
use planner_core::db::establish_connection;
use planner_core::lifecycle::TaskService;
use planner_core::repository::SqliteRepository;
use planner_server::api;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// "Today" as seen by every test server.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

/// A running API server backed by a temporary database
pub struct ApiTestHarness {
    _temp_dir: TempDir,
    addr: SocketAddr,
    client: reqwest::Client,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl ApiTestHarness {
    /// Start a server on an ephemeral port with a fresh database
    pub async fn start() -> Self {
        Self::start_with_limit(planner_core::lifecycle::DEFAULT_LIST_LIMIT).await
    }

    pub async fn start_with_limit(list_limit: u32) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = establish_connection(&db_path.to_string_lossy())
            .await
            .expect("Failed to establish test database connection");

        let service = TaskService::new(SqliteRepository::new(pool)).with_list_limit(list_limit);
        let app = api::router_with_clock(Arc::new(service), fixed_today);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        tokio::spawn(api::serve(listener, app, async move {
            let _ = stop_rx.await;
        }));

        Self {
            _temp_dir: temp_dir,
            addr,
            client: reqwest::Client::new(),
            stop_tx: Some(stop_tx),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// POST a task and return the id the server assigned
    pub async fn create(&self, body: Value) -> String {
        let response = self
            .client
            .post(self.url("/api/task"))
            .json(&body)
            .send()
            .await
            .expect("Request failed");
        assert_eq!(response.status(), 200, "create failed for {}", body);

        let json: Value = response.json().await.expect("Response is not JSON");
        json["id"].as_str().expect("id is not a string").to_string()
    }

    pub async fn get_task(&self, id: &str) -> reqwest::Response {
        self.client
            .get(self.url(&format!("/api/task?id={}", id)))
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn done(&self, id: &str) -> reqwest::Response {
        self.client
            .post(self.url(&format!("/api/task/done?id={}", id)))
            .send()
            .await
            .expect("Request failed")
    }
}

impl Drop for ApiTestHarness {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}
