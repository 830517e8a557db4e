#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use oros_site::config::{Config, MailConfig};
use oros_site::email::{MailError, Mailer, OutboundEmail};

pub const RECIPIENT: &str = "scouting@oros.test";
pub const SENDER: &str = "noreply@oros.test";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailerMode {
    Deliver,
    Fail,
    Hang,
}

/// Records every message handed to it instead of talking SMTP.
pub struct RecordingMailer {
    mode: MailerMode,
    sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingMailer {
    pub fn new(mode: MailerMode) -> Self {
        Self {
            mode,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        match self.mode {
            MailerMode::Deliver => {
                self.sent.lock().unwrap().push(email);
                Ok(())
            }
            MailerMode::Fail => Err(MailError::from("535 authentication rejected")),
            MailerMode::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(())
            }
        }
    }
}

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub mailer: Arc<RecordingMailer>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// GET a page, return (html, status).
    pub async fn get_page(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    /// POST JSON to the submission endpoint, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/get-scouted"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST the server-rendered application form, return (html, status).
    pub async fn submit_page_form(&self, data: &[(&str, &str)]) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/get-scouted"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }
}

pub fn jane_doe() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "country": "USA",
        "discipline": "Models",
        "links": "",
        "statement": "",
    })
}

pub fn test_config(send_timeout: Duration) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 65_536,
        log_level: "warn".to_string(),
        static_dir: "static".to_string(),
        mail: MailConfig {
            host: "localhost".to_string(),
            port: 2525,
            user: SENDER.to_string(),
            pass: "secret".to_string(),
            from_name: "House of OROS".to_string(),
            recipient: RECIPIENT.to_string(),
            subject: "New Get Scouted Application".to_string(),
            send_timeout,
        },
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(MailerMode::Deliver, Duration::from_secs(5)).await
}

pub async fn spawn_app_with(mode: MailerMode, send_timeout: Duration) -> TestApp {
    let mailer = Arc::new(RecordingMailer::new(mode));
    let app = oros_site::build_app(&test_config(send_timeout), mailer.clone());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        mailer,
    }
}
