use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

/// Integration tests need a running Postgres with sql/schema.sql applied and
/// DATABASE_URL set. They are gated on PRODUCT_API_IT so a plain `cargo test`
/// stays green without infrastructure.
pub fn enabled() -> bool {
    std::env::var("PRODUCT_API_IT").is_ok()
}

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/product-api-rust");
        cmd.env("PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server sees DATABASE_URL and JWT_SECRET
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            match client.get(&url).send().await {
                Ok(resp) => {
                    if resp.status() == StatusCode::OK {
                        return Ok(());
                    }
                }
                Err(_) => {}
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Unique per call so tests never collide on the users table
pub fn unique_username(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{}_{}_{}", prefix, std::process::id(), nanos)
}

/// Register a fresh account and return (username, bearer token)
pub async fn register_and_login(
    client: &reqwest::Client,
    base_url: &str,
    prefix: &str,
) -> Result<(String, String)> {
    let username = unique_username(prefix);
    let password = "rahasia";

    let res = client
        .post(format!("{}/auth/register", base_url))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "register failed: {}", res.status());

    let res = client
        .post(format!("{}/auth/login", base_url))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());

    let body = res.json::<serde_json::Value>().await?;
    let token = body["data"]["token"]
        .as_str()
        .context("login response missing token")?
        .to_string();

    Ok((username, token))
}
