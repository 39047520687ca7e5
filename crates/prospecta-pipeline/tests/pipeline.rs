//! End-to-end tests for `ProspectingPipeline` against wiremock stand-ins for
//! the search API and the company websites.

use std::time::{Duration, Instant};

use prospecta_pipeline::{
    CancelSignal, HitFilter, PipelineError, PipelineSettings, ProspectingPipeline,
    VariantGenerator,
};
use prospecta_scraper::SiteExtractor;
use prospecta_search::SearchClient;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/customsearch/v1";

fn settings(max_variants: usize) -> PipelineSettings {
    PipelineSettings {
        max_variants,
        variant_delay: Duration::ZERO,
        page_size: 10,
    }
}

fn pipeline(server: &MockServer, settings: PipelineSettings) -> ProspectingPipeline {
    let search = SearchClient::with_base_url(
        "test-key",
        "test-cx",
        5,
        1,
        &format!("{}{SEARCH_PATH}", server.uri()),
    )
    .expect("search client");
    let extractor = SiteExtractor::new(2, "prospecta-test/1.0").expect("extractor");
    ProspectingPipeline::new(
        search,
        extractor,
        HitFilter::default(),
        VariantGenerator::default(),
        settings,
    )
}

fn hit(link: &str, title: &str, snippet: &str) -> Value {
    json!({ "link": link, "title": title, "snippet": snippet })
}

async fn mount_page(server: &MockServer, page_path: &str, title: &str) {
    let body = format!(
        "<html><head><title>{title}</title></head><body><p>Tél : 04 78 12 34 56</p></body></html>"
    );
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn keeps_only_the_valid_company_hit() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                hit(
                    "https://www.linkedin.com/company/ateliers-dupont",
                    "Ateliers Dupont | LinkedIn",
                    "Entreprise de chaudronnerie",
                ),
                hit(
                    &format!("{base}/accueil"),
                    "Accueil",
                    "Entreprise de chaudronnerie, bienvenue",
                ),
                hit(
                    &format!("{base}/ateliers-dupont"),
                    "Ateliers Dupont Chaudronnerie",
                    "Entreprise de chaudronnerie industrielle à Lyon",
                ),
            ]
        })))
        .expect(8)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/accueil"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ateliers-dupont"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<title>Ateliers Dupont Chaudronnerie</title><p>Appelez le 04 78 12 34 56</p>",
            "text/html",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let results = pipeline(&server, settings(8))
        .run("chaudronnerie", 30, &CancelSignal::new())
        .await
        .expect("run should succeed");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Ateliers Dupont Chaudronnerie");
    assert_eq!(results[0].website, format!("{base}/ateliers-dupont"));
    assert_eq!(results[0].phone.as_deref(), Some("04 78 12 34 56"));
}

#[tokio::test]
async fn zero_limit_makes_no_network_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let results = pipeline(&server, settings(8))
        .run("chaudronnerie", 0, &CancelSignal::new())
        .await
        .unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn blank_keyword_is_rejected() {
    let server = MockServer::start().await;
    let err = pipeline(&server, settings(8))
        .run("   ", 10, &CancelSignal::new())
        .await
        .unwrap_err();
    assert!(matches!(err, PipelineError::EmptyKeyword));
}

#[tokio::test]
async fn stops_at_limit_mid_page() {
    let server = MockServer::start().await;
    let base = server.uri();

    let names = ["Alpha Métal", "Beta Tôlerie", "Gamma Soudure", "Delta Inox"];
    let items: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            hit(
                &format!("{base}/societe-{i}"),
                &format!("{name} Chaudronnerie"),
                "Entreprise de chaudronnerie",
            )
        })
        .collect();

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": items })))
        .expect(1)
        .mount(&server)
        .await;

    for (i, name) in names.iter().enumerate() {
        mount_page(&server, &format!("/societe-{i}"), &format!("{name} | Chaudronnerie")).await;
    }

    let results = pipeline(&server, settings(8))
        .run("chaudronnerie", 2, &CancelSignal::new())
        .await
        .unwrap();

    let found: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(found, vec!["Alpha Métal", "Beta Tôlerie"]);
}

#[tokio::test]
async fn same_company_on_two_urls_is_kept_once() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                hit(&format!("{base}/lyon"), "Ateliers Dupont Lyon", "Entreprise de chaudronnerie"),
                hit(&format!("{base}/paris"), "Ateliers Dupont Paris", "Entreprise de chaudronnerie"),
            ]
        })))
        .mount(&server)
        .await;

    mount_page(&server, "/lyon", "Ateliers Dupont | Lyon").await;
    mount_page(&server, "/paris", "  ATELIERS DUPONT - Paris").await;

    let results = pipeline(&server, settings(2))
        .run("chaudronnerie", 10, &CancelSignal::new())
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].website, format!("{base}/lyon"));
}

#[tokio::test]
async fn failed_variant_does_not_halt_the_run() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", "chaudronnerie"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", "chaudronnerie entreprise"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [hit(
                &format!("{base}/ateliers-dupont"),
                "Ateliers Dupont Chaudronnerie",
                "Entreprise de chaudronnerie industrielle",
            )]
        })))
        .expect(1)
        .mount(&server)
        .await;

    mount_page(&server, "/ateliers-dupont", "Ateliers Dupont").await;

    let results = pipeline(&server, settings(2))
        .run("chaudronnerie", 10, &CancelSignal::new())
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Ateliers Dupont");
}

#[tokio::test]
async fn cancelled_before_start_returns_empty_without_searching() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let cancel = CancelSignal::new();
    cancel.cancel();

    let results = pipeline(&server, settings(8))
        .run("chaudronnerie", 10, &cancel)
        .await
        .unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn cancel_during_delay_returns_partial_results() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [hit(
                &format!("{base}/ateliers-dupont"),
                "Ateliers Dupont Chaudronnerie",
                "Entreprise de chaudronnerie industrielle",
            )]
        })))
        .expect(1)
        .mount(&server)
        .await;

    mount_page(&server, "/ateliers-dupont", "Ateliers Dupont").await;

    let slow = PipelineSettings {
        variant_delay: Duration::from_secs(30),
        ..settings(8)
    };
    let pipeline = pipeline(&server, slow);
    let cancel = CancelSignal::new();

    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(1)).await;
        canceller.cancel();
    });

    let started = Instant::now();
    let results = pipeline.run("chaudronnerie", 10, &cancel).await.unwrap();

    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Ateliers Dupont");
}

#[tokio::test]
async fn single_variant_run_skips_the_delay() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let slow = PipelineSettings {
        variant_delay: Duration::from_secs(30),
        ..settings(1)
    };

    let started = Instant::now();
    let results = pipeline(&server, slow)
        .run("chaudronnerie", 10, &CancelSignal::new())
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(results.is_empty());
}

#[tokio::test]
async fn limit_reached_on_first_variant_skips_the_delay() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [hit(
                &format!("{base}/ateliers-dupont"),
                "Ateliers Dupont Chaudronnerie",
                "Entreprise de chaudronnerie industrielle",
            )]
        })))
        .expect(1)
        .mount(&server)
        .await;

    mount_page(&server, "/ateliers-dupont", "Ateliers Dupont").await;

    let slow = PipelineSettings {
        variant_delay: Duration::from_secs(30),
        ..settings(8)
    };

    let started = Instant::now();
    let results = pipeline(&server, slow)
        .run("chaudronnerie", 1, &CancelSignal::new())
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Ateliers Dupont");
}
