#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

/// Variables the provisioner normally injects; cleared so each test controls them
pub const CONTRACT_VARS: [&str; 5] = ["DB_HOST", "REDIS_HOST", "APP_ENV", "CONTRACT_FILE", "CONTRACT_REJECT_EMPTY"];

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    /// Spawn the server binary with exactly the given contract variables
    pub async fn start(vars: &[(&str, &str)]) -> Result<Self> {
        Self::start_on("DOCKAUTO_PORT", vars).await
    }

    /// Same as `start`, passing the port through `port_var` (DOCKAUTO_PORT or PORT)
    pub async fn start_on(port_var: &str, vars: &[(&str, &str)]) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_dockauto-demo"));
        for name in CONTRACT_VARS.iter().chain(["DOCKAUTO_PORT", "PORT"].iter()) {
            cmd.env_remove(name);
        }
        cmd.envs(vars.iter().copied())
            .env(port_var, port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;
        let server = Self { port, base_url, child };
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        let url = format!("{}/health", self.base_url);
        while Instant::now() < deadline {
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Run the `dockauto` CLI with exactly the given contract variables
pub fn run_cli(args: &[&str], vars: &[(&str, &str)]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dockauto"));
    for name in CONTRACT_VARS {
        cmd.env_remove(name);
    }
    cmd.args(args)
        .envs(vars.iter().copied())
        .stdin(Stdio::null())
        .output()
        .expect("failed to run dockauto binary")
}
