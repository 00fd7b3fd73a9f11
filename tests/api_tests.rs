use std::sync::{Arc, Mutex};

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use dine_recs::{
    models::{outcome::NO_RESULTS_MESSAGE, Field, FALLBACK_CITIES},
    HttpBackend, Outcome, RecommendationBackend, Session, SessionEvent, SortMode,
};

/// Serves `router` on an ephemeral local port and returns its base URL
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL nothing is listening on
async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn catalog_routes() -> Router {
    Router::new()
        .route(
            "/cities",
            get(|| async { Json(json!({"cities": ["bangalore", "pune"]})) }),
        )
        .route(
            "/price-range",
            get(|| async { Json(json!({"min": 200.0, "max": 1500.0})) }),
        )
}

fn recommendations_route(status: StatusCode, body: Value) -> Router {
    catalog_routes().route(
        "/recommendations",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    )
}

async fn submit_for(city: &str, router: Router) -> Session {
    let backend = HttpBackend::new(&spawn_stub(router).await).unwrap();
    let mut session = Session::new();
    session.bootstrap(&backend).await;
    session.apply(SessionEvent::CityChanged(city.to_string()));
    session.submit(&backend).await;
    session
}

#[tokio::test]
async fn test_bootstrap_from_service() {
    let backend = HttpBackend::new(&spawn_stub(catalog_routes()).await).unwrap();
    let mut session = Session::new();
    session.bootstrap(&backend).await;

    let input = session.input();
    assert_eq!(
        input.catalog.as_slice().to_vec(),
        vec!["bangalore".to_string(), "pune".to_string()]
    );
    assert_eq!(input.bounds.min, 200.0);
    assert_eq!(input.bounds.max, 1500.0);
    assert_eq!(input.budget_text, "850");
}

#[tokio::test]
async fn test_bootstrap_with_unreachable_service() {
    let backend = HttpBackend::new(&dead_url().await).unwrap();
    let mut session = Session::new();
    session.bootstrap(&backend).await;

    let expected: Vec<String> = FALLBACK_CITIES.iter().map(|c| c.to_string()).collect();
    assert_eq!(session.input().catalog.as_slice().to_vec(), expected);
    assert_eq!(session.input().budget_text, "800");
}

#[tokio::test]
async fn test_bootstrap_non_ok_statuses_fall_back_independently() {
    let router = Router::new()
        .route("/cities", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route(
            "/price-range",
            get(|| async { Json(json!({"min": "300", "max": "x"})) }),
        );
    let backend = HttpBackend::new(&spawn_stub(router).await).unwrap();
    let mut session = Session::new();
    session.bootstrap(&backend).await;

    assert_eq!(session.input().catalog.len(), FALLBACK_CITIES.len());
    assert_eq!(session.input().bounds.min, 300.0);
    assert_eq!(session.input().bounds.max, 3000.0);
    assert_eq!(session.input().budget_text, "1650");
}

#[tokio::test]
async fn test_request_body_sends_null_budget() {
    let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let captured = seen.clone();

    let router = catalog_routes().route(
        "/recommendations",
        post(move |Json(body): Json<Value>| {
            let captured = captured.clone();
            async move {
                *captured.lock().unwrap() = Some(body);
                Json(json!({"recommendations": []}))
            }
        }),
    );
    let backend = HttpBackend::new(&spawn_stub(router).await).unwrap();

    let mut session = Session::new();
    session.apply(SessionEvent::CityChanged("pune".to_string()));
    let outcome = session.submit(&backend).await.clone();

    assert_eq!(
        seen.lock().unwrap().clone(),
        Some(json!({"city": "pune", "price_text": null}))
    );
    assert_eq!(
        outcome,
        Outcome::Empty {
            message: NO_RESULTS_MESSAGE.to_string()
        }
    );
}

#[tokio::test]
async fn test_validation_error_attached_to_city() {
    let session = submit_for(
        "atlantis",
        recommendations_route(
            StatusCode::BAD_REQUEST,
            json!({"detail": [{"field": "city", "message": "Invalid city"}]}),
        ),
    )
    .await;

    assert_eq!(session.outcome().field_error(Field::City), Some("Invalid city"));
    assert!(session.visible_recommendations().is_empty());
}

#[tokio::test]
async fn test_duplicate_recommendations_collapsed() {
    let session = submit_for(
        "pune",
        recommendations_route(
            StatusCode::OK,
            json!({"recommendations": [
                {"name": "Cafe X", "city": "Pune", "rating": 4.1, "price_for_two": 600},
                {"name": "cafe x", "city": "PUNE", "rating": 3.2, "price_for_two": 400},
                {"name": "Bistro Y", "city": "Pune", "rating": 4.6}
            ]}),
        ),
    )
    .await;

    let names: Vec<&str> = session
        .visible_recommendations()
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(names, vec!["Cafe X", "Bistro Y"]);
}

#[tokio::test]
async fn test_sorting_applies_to_service_results() {
    let mut session = submit_for(
        "pune",
        recommendations_route(
            StatusCode::OK,
            json!({"recommendations": [
                {"name": "A", "city": "pune", "price_for_two": 900},
                {"name": "B", "city": "pune"},
                {"name": "C", "city": "pune", "price_for_two": 300}
            ]}),
        ),
    )
    .await;

    session.apply(SessionEvent::SortChanged(SortMode::PriceAsc));
    let names: Vec<&str> = session
        .visible_recommendations()
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[tokio::test]
async fn test_service_unavailable() {
    let router = catalog_routes().route(
        "/recommendations",
        post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let session = submit_for("pune", router).await;

    assert_eq!(
        session.outcome().message(),
        Some("AI service is temporarily unavailable. Please try again later.")
    );
}

#[tokio::test]
async fn test_upstream_invalid_message_forwarded() {
    let session = submit_for(
        "pune",
        recommendations_route(
            StatusCode::BAD_GATEWAY,
            json!({"detail": [{"field": "llm", "message": "LLM returned no JSON"}]}),
        ),
    )
    .await;

    assert_eq!(
        session.outcome(),
        &Outcome::UpstreamInvalid {
            message: "LLM returned no JSON".to_string()
        }
    );
}

#[tokio::test]
async fn test_unhandled_status_is_not_silent_success() {
    let session = submit_for(
        "pune",
        recommendations_route(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({"detail": "Internal Server Error"}),
        ),
    )
    .await;

    assert_eq!(
        session.outcome().message(),
        Some("Unable to reach the backend. Check if the API is running.")
    );
}

#[tokio::test]
async fn test_unreachable_backend_on_submit() {
    let backend = HttpBackend::new(&dead_url().await).unwrap();
    let mut session = Session::new();
    session.bootstrap(&backend).await;
    session.apply(SessionEvent::CityChanged("pune".to_string()));
    session.submit(&backend).await;

    assert_eq!(
        session.outcome(),
        &Outcome::ServiceUnavailable {
            message: "Unable to reach the backend. Check if the API is running.".to_string()
        }
    );
    assert!(session.can_submit());
}

#[tokio::test]
async fn test_health_check() {
    let router = Router::new().route(
        "/health",
        get(|| async { Json(json!({"status": "ok", "restaurants_loaded": 5120})) }),
    );
    let backend = HttpBackend::new(&spawn_stub(router).await).unwrap();

    let health = backend.health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.restaurants_loaded, Some(5120));

    let backend = HttpBackend::new(&dead_url().await).unwrap();
    assert!(backend.health().await.is_err());
}
