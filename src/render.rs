//! Server-side rendering of generated itineraries
//!
//! Pure view-model construction: pairs each generated day with its calendar
//! date and produces the labels the form page displays. Re-rendering is
//! wholesale; the view model carries no interactive state.

use crate::models::Itinerary;
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// One renderable day section
#[derive(Debug, Clone, Serialize)]
pub struct RenderedDay {
    /// 1-based day number within the trip
    pub day_number: u32,
    /// Calendar date of this day
    pub date: NaiveDate,
    /// Display label, e.g. "Monday, June 3"
    pub date_label: String,
    /// Morning activities
    pub morning: Vec<String>,
    /// Afternoon activities
    pub afternoon: Vec<String>,
    /// Evening activities
    pub evening: Vec<String>,
}

/// Complete view model returned to the form page
#[derive(Debug, Clone, Serialize)]
pub struct RenderedItinerary {
    /// City the plan is for, echoed for the page heading
    pub city: String,
    /// Day count that was requested
    pub day_count: u32,
    /// Ordered day sections
    pub days: Vec<RenderedDay>,
    /// Local tips and recommendations
    pub tips: Vec<String>,
}

/// Render a generated itinerary against its start date
///
/// Day `i` (0-based) is dated `start_date + i` days. The day list is taken
/// verbatim from the model output, so the number of sections follows the
/// response rather than the requested day count.
#[must_use]
pub fn render(
    itinerary: &Itinerary,
    city: &str,
    start_date: NaiveDate,
    day_count: u32,
) -> RenderedItinerary {
    let days = itinerary
        .days
        .iter()
        .enumerate()
        .map(|(index, day)| {
            let date = start_date
                .checked_add_days(Days::new(index as u64))
                .unwrap_or(start_date);

            RenderedDay {
                day_number: index as u32 + 1,
                date,
                date_label: date.format("%A, %B %-d").to_string(),
                morning: day.morning.clone(),
                afternoon: day.afternoon.clone(),
                evening: day.evening.clone(),
            }
        })
        .collect();

    RenderedItinerary {
        city: city.to_string(),
        day_count,
        days,
        tips: itinerary.tips.clone(),
    }
}
