mod common;

use anyhow::{Context, Result};
use reqwest::StatusCode;

#[tokio::test]
async fn whiskers_belongs_to_her_owner() -> Result<()> {
    let server = common::ensure_server().await?;

    let owner = common::browser()?;
    common::signup(server, &owner, &common::unique_username("owner")).await?;
    let other = common::browser()?;
    common::signup(server, &other, &common::unique_username("other")).await?;

    let res = owner
        .post(server.url("/cats/create/"))
        .form(&[("name", "Whiskers"), ("breed", "Tabby"), ("description", "Likes boxes"), ("age", "2")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let detail = common::location(&res).context("redirect to the new cat")?;

    let mine = owner.get(server.url("/cats/")).send().await?.text().await?;
    assert!(mine.contains("Whiskers"));
    let theirs = other.get(server.url("/cats/")).send().await?.text().await?;
    assert!(!theirs.contains("Whiskers"));

    let res = other.get(server.url(&detail)).send().await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let res = owner
        .post(server.url(&format!("{detail}add_feeding/")))
        .form(&[("date", "2024-01-01"), ("meal", "B")])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&res).as_deref(), Some(detail.as_str()));

    let page = owner.get(server.url(&detail)).send().await?.text().await?;
    assert!(page.contains("<td>2024-01-01</td><td>Breakfast</td>"));

    let res = owner.post(server.url(&format!("{detail}delete/"))).send().await?;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let res = owner.get(server.url(&detail)).send().await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}
