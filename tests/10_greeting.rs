mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn hello_returns_greeting_literal() -> Result<()> {
    let server = common::TestServer::start(&[]).await?;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/hello")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await?, "Hello from dockauto demo");

    Ok(())
}

#[tokio::test]
async fn hello_is_stable_across_requests() -> Result<()> {
    let server = common::TestServer::start(&[]).await?;
    let client = reqwest::Client::new();

    for _ in 0..50 {
        let body = client.get(server.url("/hello")).send().await?.text().await?;
        assert_eq!(body, "Hello from dockauto demo");
    }

    Ok(())
}

#[test]
fn greet_command_prints_greeting() {
    let output = common::run_cli(&["greet"], &[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), "Hello from dockauto demo");
}

#[tokio::test]
async fn server_falls_back_to_port_variable() -> Result<()> {
    let server = common::TestServer::start_on("PORT", &[]).await?;

    let res = reqwest::get(server.url("/hello")).await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await?, "Hello from dockauto demo");

    Ok(())
}
