//! Integration tests for `SiteExtractor` using wiremock HTTP mocks.

use prospecta_scraper::{ScraperError, SiteExtractor};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_UA: &str = "prospecta-test/1.0";

fn extractor() -> SiteExtractor {
    SiteExtractor::new(2, TEST_UA).expect("extractor construction should not fail")
}

#[tokio::test]
async fn extract_reads_name_phone_and_email() {
    let server = MockServer::start().await;

    let page = r#"<!doctype html><html><head>
        <title>Ateliers Dupont - Chaudronnerie industrielle</title></head>
        <body><h1>Bienvenue</h1>
        <p>Téléphone : 04 78 12 34 56</p>
        <p>Écrivez à <a href="mailto:contact@ateliers-dupont.fr">contact@ateliers-dupont.fr</a></p>
        </body></html>"#;

    Mock::given(method("GET"))
        .and(path("/ateliers-dupont"))
        .and(header("user-agent", TEST_UA))
        .respond_with(ResponseTemplate::new(200).set_body_raw(page, "text/html; charset=utf-8"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/ateliers-dupont", server.uri());
    let record = extractor().extract(&url).await;

    assert_eq!(record.name, "Ateliers Dupont");
    assert_eq!(record.website, url);
    assert_eq!(record.phone.as_deref(), Some("04 78 12 34 56"));
    assert_eq!(record.email.as_deref(), Some("contact@ateliers-dupont.fr"));
}

#[tokio::test]
async fn extract_phone_without_email() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<title>Plomberie Martin</title><p>Contactez-nous au 01 23 45 67 89 ou par mail.</p>",
            "text/html",
        ))
        .mount(&server)
        .await;

    let record = extractor().extract(&server.uri()).await;
    assert_eq!(record.phone.as_deref(), Some("01 23 45 67 89"));
    assert_eq!(record.email, None);
}

#[tokio::test]
async fn server_error_degrades_to_domain_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(503).set_body_raw("<title>Maintenance en cours</title>", "text/html"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/", server.uri());
    let err = extractor().try_extract(&url).await.unwrap_err();
    assert!(matches!(err, ScraperError::UnexpectedStatus { status: 503, .. }));

    // Mock servers listen on an IP literal, so the first host label is "127".
    let record = extractor().extract(&url).await;
    assert_eq!(record.name, "127");
    assert_eq!(record.phone, None);
    assert_eq!(record.email, None);
}

#[tokio::test]
async fn network_error_degrades_to_domain_name() {
    let record = extractor()
        .extract("https://www.boulangerie-dupont.invalid/")
        .await;

    assert_eq!(record.name, "Boulangerie-Dupont");
    assert_eq!(record.website, "https://www.boulangerie-dupont.invalid/");
    assert_eq!(record.phone, None);
    assert_eq!(record.email, None);
}

#[tokio::test]
async fn non_http_url_is_rejected_without_fetching() {
    let err = extractor()
        .try_extract("ftp://boulangerie-dupont.fr/")
        .await
        .unwrap_err();
    assert!(matches!(err, ScraperError::InvalidUrl { .. }));

    let record = extractor().extract("ftp://boulangerie-dupont.fr/").await;
    assert_eq!(record.name, "Boulangerie-Dupont");
}
