// ABOUTME: End-to-end pipeline tests against a mock HTTP server.
// ABOUTME: Covers the detail-page strategy, per-item failure isolation, and source-fatal listing errors.

use std::time::Duration;

use httpmock::prelude::*;
use pretty_assertions::assert_eq;

use darbai_scrape::{Client, ErrorCode, Source, Strategy};

fn mock_source(server: &MockServer) -> Source {
    Source {
        name: "mock".to_string(),
        listing_url: server.url("/careers"),
        href_prefix: server.url("/job/"),
        href_needle: "/job/".to_string(),
        strategy: Strategy::DetailPage,
    }
}

fn test_client() -> Client {
    Client::builder()
        .allow_private_networks(true)
        .pacing(Duration::from_millis(5))
        .build()
}

fn listing_body(server: &MockServer) -> String {
    format!(
        r#"<html><body>
            <a href="{a}">Inžinierius</a>
            <a href="{broken}">Analitikas</a>
            <a href="{b}">Vadovas</a>
            <a href="{a}">Inžinierius (dar kartą)</a>
            <a href="/job/relative">Relative</a>
        </body></html>"#,
        a = server.url("/job/inzinierius-vilniuje-1"),
        broken = server.url("/job/broken-2"),
        b = server.url("/job/vadovas-kaune-3"),
    )
}

#[tokio::test]
async fn detail_pipeline_survives_one_broken_posting() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/careers");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(listing_body(&server));
    });
    server.mock(|when, then| {
        when.method(GET).path("/job/inzinierius-vilniuje-1");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(
                r#"<html><body>
                    <h1 class="job-title">Elektros tinklo inžinierius</h1>
                    <p>Visa darbo diena, Vilnius. Mėnesinis atlygis 2500–3500 EUR.</p>
                    <p>Galima dirbti nuotoliniu būdu.</p>
                </body></html>"#,
            );
    });
    server.mock(|when, then| {
        when.method(GET).path("/job/broken-2");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path("/job/vadovas-kaune-3");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body("<html><body><h1>Projektų vadovas</h1><p>Kaunas</p></body></html>");
    });

    let client = test_client();
    let source = mock_source(&server);

    let records = client.scrape(&source).await.expect("scrape should succeed");

    // Broken posting skipped, duplicate collapsed, relative href excluded,
    // discovery order preserved.
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Elektros tinklo inžinierius");
    assert_eq!(records[0].location.as_deref(), Some("Vilnius"));
    assert_eq!(records[0].work_type.as_deref(), Some("Visa darbo diena"));
    assert_eq!(records[0].salary.as_deref(), Some("2500–3500 EUR"));
    assert!(records[0].remote_work);
    assert_eq!(records[1].title, "Projektų vadovas");
    assert_eq!(records[1].location.as_deref(), Some("Kaunas"));
    assert!(!records[1].remote_work);
}

#[tokio::test]
async fn rerun_yields_identical_collection() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/careers");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(format!(
                r#"<a href="{a}">A</a><a href="{b}">B</a>"#,
                a = server.url("/job/a-1"),
                b = server.url("/job/b-2"),
            ));
    });
    server.mock(|when, then| {
        when.method(GET).path("/job/a-1");
        then.status(200).body("<h1>Specialistas</h1>");
    });
    server.mock(|when, then| {
        when.method(GET).path("/job/b-2");
        then.status(200).body("<h1>Analitikas</h1>");
    });

    let client = test_client();
    let source = mock_source(&server);

    let first = client.scrape(&source).await.expect("first run");
    let second = client.scrape(&source).await.expect("second run");
    assert_eq!(first, second);
}

#[tokio::test]
async fn listing_failure_is_source_fatal() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/careers");
        then.status(503);
    });

    let client = test_client();
    let source = mock_source(&server);

    let err = client.scrape(&source).await.expect_err("listing 503 is fatal");
    assert_eq!(err.code, ErrorCode::Fetch);
}

#[tokio::test]
async fn empty_listing_yields_empty_collection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/careers");
        then.status(200)
            .body("<html><body><p>Laisvų vietų nėra.</p></body></html>");
    });

    let client = test_client();
    let records = client
        .scrape(&mock_source(&server))
        .await
        .expect("empty listing is not an error");
    assert!(records.is_empty());
}

#[tokio::test]
async fn untitled_posting_is_rejected_silently() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/careers");
        then.status(200).body(format!(
            r#"<a href="{a}">A</a><a href="{b}">B</a>"#,
            a = server.url("/job/untitled-1"),
            b = server.url("/job/titled-2"),
        ));
    });
    server.mock(|when, then| {
        when.method(GET).path("/job/untitled-1");
        then.status(200).body("<p>Jokio pavadinimo čia nėra.</p>");
    });
    server.mock(|when, then| {
        when.method(GET).path("/job/titled-2");
        then.status(200).body("<h1>Buhalteris</h1>");
    });

    let client = test_client();
    let records = client
        .scrape(&mock_source(&server))
        .await
        .expect("scrape should succeed");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Buhalteris");
}

#[tokio::test]
async fn accepted_records_have_title_and_unique_url() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/careers");
        then.status(200).body(format!(
            r#"<a href="{a}">A</a><a href="{a}">A again</a>"#,
            a = server.url("/job/one-1"),
        ));
    });
    server.mock(|when, then| {
        when.method(GET).path("/job/one-1");
        then.status(200).body("<h1>Inžinierius</h1>");
    });

    let client = test_client();
    let records = client
        .scrape(&mock_source(&server))
        .await
        .expect("scrape should succeed");

    assert_eq!(records.len(), 1);
    for record in &records {
        assert!(!record.title.is_empty());
        assert!(!record.url.is_empty());
    }
}
