//! HTTP API for the itinerary planner
//!
//! `POST /itinerary` runs the submission sequence: validate the form input,
//! look the city up, compute the clamped day count, call the generator, and
//! render the result. Validation failures answer with the exact notification
//! text the page toasts; generation failures answer with one generic message
//! while the detail goes to the diagnostic log.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{debug, error};

use crate::TripWeaverError;
use crate::cities;
use crate::generator::ItineraryGenerator;
use crate::models::{DateRange, TripRequest};
use crate::render::{self, RenderedItinerary};

/// Shared state for the API handlers
#[derive(Clone)]
pub struct AppState {
    /// Itinerary source; a trait object so tests can inject a mock
    pub generator: Arc<dyn ItineraryGenerator>,
}

/// API-facing city record for the suggestions endpoint
#[derive(Serialize)]
pub struct ApiCity {
    pub name: &'static str,
    pub country: &'static str,
}

/// JSON error body the form page shows as a toast
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Handler error carrying the status and user-facing message
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn validation(message: &str) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.to_string(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        // Full detail goes to the log; the user sees one generic message.
        error!("Itinerary generation failed: {:#}", err);

        let message = err.downcast_ref::<TripWeaverError>().map_or_else(
            || TripWeaverError::api("upstream failure").user_message(),
            TripWeaverError::user_message,
        );

        Self {
            status: StatusCode::BAD_GATEWAY,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cities", get(get_cities))
        .route("/itinerary", post(create_itinerary))
        .with_state(state)
}

async fn get_cities() -> Json<Vec<ApiCity>> {
    let cities: Vec<ApiCity> = cities::supported_cities()
        .iter()
        .map(|city| ApiCity {
            name: city.name,
            country: city.country,
        })
        .collect();
    Json(cities)
}

async fn create_itinerary(
    State(state): State<AppState>,
    Json(request): Json<TripRequest>,
) -> Result<Json<RenderedItinerary>, ApiError> {
    let city = request.city.trim();
    if city.is_empty() {
        debug!("Rejected submission with empty city");
        return Err(ApiError::validation("Please enter a city name"));
    }

    let (Some(start), Some(end)) = (request.start_date, request.end_date) else {
        debug!("Rejected submission with incomplete date range");
        return Err(ApiError::validation("Please select both start and end dates"));
    };

    let Some(city_info) = cities::lookup(city) else {
        debug!("Rejected unsupported city: {}", city);
        return Err(ApiError::validation("Please enter a supported city name"));
    };

    // Clamped to MAX_TRIP_DAYS, so no separate duration check is needed.
    let day_count = DateRange::new(start, end).day_count();

    let itinerary = state
        .generator
        .generate(city_info.name, day_count, start)
        .await?;

    Ok(Json(render::render(
        &itinerary,
        city_info.name,
        start,
        day_count,
    )))
}
