mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn public_pages_render() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = common::browser()?;

    for path in ["/", "/home/", "/about/", "/accounts/signup/", "/accounts/login/"] {
        let res = client.get(server.url(path)).send().await?;
        assert_eq!(res.status(), StatusCode::OK, "GET {}", path);
        let content_type = res.headers()[reqwest::header::CONTENT_TYPE].to_str()?.to_string();
        assert!(content_type.starts_with("text/html"), "GET {} served {}", path, content_type);
    }
    Ok(())
}
