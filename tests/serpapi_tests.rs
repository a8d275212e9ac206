use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jobintel::error::FetchError;
use jobintel::search::{PageFetcher, PageOutcome, SerpApiFetcher};

fn fetcher_for(server: &MockServer) -> SerpApiFetcher {
    SerpApiFetcher::new("test-key".to_string())
        .unwrap()
        .with_endpoint(server.uri())
}

#[tokio::test]
async fn decodes_a_page_of_listings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("engine", "google_jobs"))
        .and(query_param("q", "data analyst"))
        .and(query_param("location", "Denver, Colorado"))
        .and(query_param("start", "0"))
        .and(query_param("hl", "en"))
        .and(query_param("gl", "us"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs_results": [{
                "title": "Data Analyst",
                "company_name": "Acme Corp",
                "description": "Crunch numbers",
                "job_id": "abc123",
                "location": "Denver, CO",
                "job_highlights": [
                    {"title": "Qualifications", "items": ["SQL"]}
                ],
                "detected_extensions": {"posted_at": "3 days ago", "work_from_home": true},
                "via": "via LinkedIn"
            }]
        })))
        .mount(&server)
        .await;

    let outcome = fetcher_for(&server)
        .fetch_page("data analyst", "Denver, Colorado", 0)
        .await
        .unwrap();

    match outcome {
        PageOutcome::Listings(listings) => {
            assert_eq!(listings.len(), 1);
            assert_eq!(listings[0].job_id, "abc123");
            assert_eq!(listings[0].via, "via LinkedIn");
            assert_eq!(
                listings[0].detected_extensions.posted_at.as_deref(),
                Some("3 days ago")
            );
            assert_eq!(listings[0].detected_extensions.work_from_home, Some(true));
        }
        PageOutcome::Exhausted => panic!("expected a page of listings"),
    }
}

#[tokio::test]
async fn listings_with_sparse_fields_still_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs_results": [{
                "title": "Data Analyst",
                "company_name": "Acme Corp",
                "description": "Crunch numbers",
                "job_id": "abc123",
                "job_highlights": [{"items": ["Great team"]}],
                "via": "via Indeed"
            }]
        })))
        .mount(&server)
        .await;

    let outcome = fetcher_for(&server)
        .fetch_page("data analyst", "Denver, Colorado", 0)
        .await
        .unwrap();

    match outcome {
        PageOutcome::Listings(listings) => {
            assert_eq!(listings[0].location, None);
            assert_eq!(listings[0].job_highlights[0].title, None);
            assert_eq!(listings[0].detected_extensions.schedule_type, None);
        }
        PageOutcome::Exhausted => panic!("expected a page of listings"),
    }
}

#[tokio::test]
async fn error_payload_is_the_terminal_signal() {
    let server = MockServer::start().await;
    // The provider answers pages past the end with a non-2xx status and an
    // in-band error payload.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Google Jobs hasn't returned any results for this query."
        })))
        .mount(&server)
        .await;

    let outcome = fetcher_for(&server)
        .fetch_page("data analyst", "Denver, Colorado", 40)
        .await
        .unwrap();

    assert!(matches!(outcome, PageOutcome::Exhausted));
}

#[tokio::test]
async fn payload_with_neither_field_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch_page("data analyst", "Denver, Colorado", 0)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::UnexpectedPayload(_)));
}

#[tokio::test]
async fn non_json_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = fetcher_for(&server)
        .fetch_page("data analyst", "Denver, Colorado", 0)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Request(_)));
}
