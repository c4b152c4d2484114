//! Trip request and date-range types

use chrono::NaiveDate;
use serde::Deserialize;

/// Longest trip the planner will generate, in days
pub const MAX_TRIP_DAYS: i64 = 14;

/// Raw form submission from the browser
///
/// Dates are optional at the wire level so the handler can tell the user
/// exactly which part of the form is incomplete.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRequest {
    /// Free-text city name
    #[serde(default)]
    pub city: String,
    /// First day of the trip (ISO 8601 date)
    pub start_date: Option<NaiveDate>,
    /// Last day of the trip (ISO 8601 date)
    pub end_date: Option<NaiveDate>,
}

/// A fully chosen pair of trip dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the trip
    pub start: NaiveDate,
    /// Last day of the trip
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new date range
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of itinerary days the range spans, clamped to
    /// `1..=MAX_TRIP_DAYS`. Both endpoints count, so a same-day trip is one
    /// day and consecutive days are two.
    #[must_use]
    pub fn day_count(&self) -> u32 {
        let days = (self.end - self.start).num_days().abs() + 1;
        u32::try_from(days.clamp(1, MAX_TRIP_DAYS)).unwrap_or(1)
    }
}
