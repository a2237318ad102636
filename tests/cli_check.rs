mod common;

use common::TestContext;
use mockito::Matcher;
use predicates::prelude::*;

const DESCRIPTOR: &str = r#"{
    "fmt": {"git": {"repository": "https://github.com/fmtlib/fmt", "tag": "10.1.0"}, "target": {"type": "imported"}},
    "json": {"git": {"repository": "git@github.com:nlohmann/json.git", "tag": "v3.11.3"}, "target": {"type": "imported"}},
    "zlib": {"url": "https://zlib.net/zlib-1.3.zip", "target": {"type": "imported"}}
}"#;

fn point_at(ctx: &TestContext, server: &mockito::Server) {
    let config = format!("[github]\napi_url = \"{}\"\ntimeout_secs = 5\n", server.url());
    ctx.write_file("depgen.toml", &config);
}

fn mock_tag(server: &mut mockito::Server, repo: &str, tag: &str) -> mockito::Mock {
    server
        .mock("GET", format!("/repos/{}/tags", repo).as_str())
        .match_query(Matcher::UrlEncoded("per_page".into(), "1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"[{{"name": "{}"}}]"#, tag))
        .expect(1)
        .create()
}

#[test]
fn check_reports_outdated_dependencies() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let fmt = mock_tag(&mut server, "fmtlib/fmt", "10.2.1");
    let json = mock_tag(&mut server, "nlohmann/json", "v3.11.3");
    point_at(&ctx, &server);
    ctx.write_file("dependencies.json", DESCRIPTOR);

    ctx.cli()
        .arg("check")
        .assert()
        .success()
        .stdout("Upgrade fmt from 10.1.0 to 10.2.1\n");

    fmt.assert();
    json.assert();
}

#[test]
fn check_accepts_descriptor_argument_and_alias() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _fmt = mock_tag(&mut server, "fmtlib/fmt", "10.1.0");
    let _json = mock_tag(&mut server, "nlohmann/json", "v3.12.0");
    point_at(&ctx, &server);
    ctx.write_file("third_party/deps.json", DESCRIPTOR);

    ctx.cli()
        .args(["c", "third_party/deps.json"])
        .assert()
        .success()
        .stdout("Upgrade json from v3.11.3 to v3.12.0\n");
}

#[test]
fn check_surfaces_api_errors() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/repos/fmtlib/fmt/tags")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"message": "API rate limit exceeded"}"#)
        .create();
    point_at(&ctx, &server);
    ctx.write_file("dependencies.json", DESCRIPTOR);

    ctx.cli()
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: GitHub API error (403): API rate limit exceeded"));
}

#[test]
fn check_without_descriptor_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Descriptor file not found: dependencies.json"));
}
