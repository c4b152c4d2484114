//! Integration tests for the TripWeaver HTTP API
//!
//! The router is exercised directly with a mock generator, so every test
//! runs without touching the network. The mock counts invocations, which is
//! how the tests prove validation failures never issue an external call.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tripweaver::TripWeaverError;
use tripweaver::api::{AppState, router};
use tripweaver::generator::ItineraryGenerator;
use tripweaver::models::{DayItinerary, Itinerary};

/// Generator double that counts calls and answers with a canned plan
struct MockGenerator {
    calls: AtomicUsize,
    last_day_count: AtomicUsize,
    fail: bool,
}

impl MockGenerator {
    fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            last_day_count: AtomicUsize::new(0),
            fail: false,
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            last_day_count: AtomicUsize::new(0),
            fail: true,
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItineraryGenerator for MockGenerator {
    async fn generate(
        &self,
        _city: &str,
        day_count: u32,
        _start_date: NaiveDate,
    ) -> Result<Itinerary> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_day_count
            .store(day_count as usize, Ordering::SeqCst);

        if self.fail {
            return Err(TripWeaverError::api("upstream returned HTTP 500").into());
        }

        let days = (0..day_count)
            .map(|i| DayItinerary {
                morning: vec![format!("Day {} morning activity", i + 1)],
                afternoon: vec![format!("Day {} afternoon activity", i + 1)],
                evening: vec![format!("Day {} evening activity", i + 1)],
            })
            .collect();

        Ok(Itinerary {
            days,
            tips: vec!["Carry small change".to_string()],
        })
    }
}

fn app(generator: Arc<MockGenerator>) -> Router {
    router(AppState { generator })
}

fn post_itinerary(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/itinerary")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Submitting with an empty city never issues an external call
#[tokio::test]
async fn test_empty_city_is_rejected_without_generator_call() {
    let generator = MockGenerator::succeeding();

    let response = app(generator.clone())
        .oneshot(post_itinerary(serde_json::json!({
            "city": "   ",
            "start_date": "2024-06-03",
            "end_date": "2024-06-05"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Please enter a city name");
    assert_eq!(generator.call_count(), 0);
}

/// An incomplete date range never issues an external call
#[tokio::test]
async fn test_missing_dates_are_rejected_without_generator_call() {
    let generator = MockGenerator::succeeding();

    let response = app(generator.clone())
        .oneshot(post_itinerary(serde_json::json!({
            "city": "Tokyo",
            "start_date": "2024-06-03"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Please select both start and end dates");
    assert_eq!(generator.call_count(), 0);
}

/// A city outside the supported table never issues an external call
#[tokio::test]
async fn test_unsupported_city_is_rejected_without_generator_call() {
    let generator = MockGenerator::succeeding();

    let response = app(generator.clone())
        .oneshot(post_itinerary(serde_json::json!({
            "city": "Atlantis",
            "start_date": "2024-06-03",
            "end_date": "2024-06-05"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Please enter a supported city name");
    assert_eq!(generator.call_count(), 0);
}

/// A successful generation renders one dated section per returned day
#[tokio::test]
async fn test_successful_submission_renders_sequential_days() {
    let generator = MockGenerator::succeeding();

    // 2024-06-03 is a Monday
    let response = app(generator.clone())
        .oneshot(post_itinerary(serde_json::json!({
            "city": "Tokyo",
            "start_date": "2024-06-03",
            "end_date": "2024-06-05"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["city"], "Tokyo");
    assert_eq!(body["day_count"], 3);
    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 3);
    assert_eq!(days[0]["date_label"], "Monday, June 3");
    assert_eq!(days[1]["date_label"], "Tuesday, June 4");
    assert_eq!(days[2]["date_label"], "Wednesday, June 5");
    assert_eq!(generator.call_count(), 1);
}

/// City matching is case-insensitive and answers with the canonical name
#[tokio::test]
async fn test_city_match_is_case_insensitive() {
    let generator = MockGenerator::succeeding();

    let response = app(generator.clone())
        .oneshot(post_itinerary(serde_json::json!({
            "city": "  new york ",
            "start_date": "2024-06-03",
            "end_date": "2024-06-03"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["city"], "New York");
    assert_eq!(body["day_count"], 1);
}

/// Long ranges are clamped to the 14-day maximum before generation
#[tokio::test]
async fn test_long_range_is_clamped_to_fourteen_days() {
    let generator = MockGenerator::succeeding();

    let response = app(generator.clone())
        .oneshot(post_itinerary(serde_json::json!({
            "city": "Paris",
            "start_date": "2024-06-01",
            "end_date": "2024-06-20"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["day_count"], 14);
    assert_eq!(generator.last_day_count.load(Ordering::SeqCst), 14);
}

/// A rejected external call answers with exactly one generic failure
#[tokio::test]
async fn test_generator_failure_maps_to_generic_message() {
    let generator = MockGenerator::failing();

    let response = app(generator.clone())
        .oneshot(post_itinerary(serde_json::json!({
            "city": "Tokyo",
            "start_date": "2024-06-03",
            "end_date": "2024-06-05"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to generate itinerary. Please try again.");
    assert_eq!(generator.call_count(), 1);
}

/// The suggestions endpoint lists the supported cities
#[tokio::test]
async fn test_cities_endpoint_lists_supported_cities() {
    let response = app(MockGenerator::succeeding())
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/cities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let cities = body.as_array().unwrap();
    assert!(!cities.is_empty());
    assert!(cities.iter().any(|c| c["name"] == "Tokyo"));
}
