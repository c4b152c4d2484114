//! `TripWeaver` - AI-powered seasonal city itinerary planning
//!
//! This library provides the core functionality for validating trip
//! requests, generating multi-day itineraries through the Groq
//! chat-completion API, and rendering them for the browser form.

pub mod api;
pub mod cities;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod render;
pub mod web;

// Re-export core types for public API
pub use cities::{CityInfo, Hemisphere};
pub use config::TripWeaverConfig;
pub use error::TripWeaverError;
pub use generator::{GroqClient, ItineraryGenerator};
pub use models::{DateRange, DayItinerary, Itinerary, TripRequest};
pub use render::{RenderedDay, RenderedItinerary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
