//! Structured itinerary types produced by the language model
//!
//! Activity strings are opaque free text; the model owns their content.
//! All fields are required during deserialization so an incomplete payload
//! fails the parse instead of silently rendering as empty sections.

use serde::{Deserialize, Serialize};

/// One day of activities, split into three parts of the day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayItinerary {
    /// Morning activities (7AM to 12PM)
    pub morning: Vec<String>,
    /// Afternoon activities (12PM to 5PM)
    pub afternoon: Vec<String>,
    /// Evening activities (5PM to 11:30PM)
    pub evening: Vec<String>,
}

/// A complete multi-day plan plus local tips
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Itinerary {
    /// Ordered day plans; the model is asked for one per requested day
    pub days: Vec<DayItinerary>,
    /// Local tips and recommendations
    pub tips: Vec<String>,
}

/// Envelope shape the model is instructed to return
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryResponse {
    pub itinerary: Itinerary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itinerary_response_parses_documented_shape() {
        let payload = r#"{
            "itinerary": {
                "days": [
                    {
                        "morning": ["Visit the fish market at 7AM"],
                        "afternoon": ["Walk the old town"],
                        "evening": ["Dinner at a local izakaya"]
                    }
                ],
                "tips": ["Carry cash; many small shops do not take cards"]
            }
        }"#;

        let response: ItineraryResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.itinerary.days.len(), 1);
        assert_eq!(response.itinerary.tips.len(), 1);
        assert_eq!(
            response.itinerary.days[0].morning[0],
            "Visit the fish market at 7AM"
        );
    }

    #[test]
    fn test_missing_itinerary_object_fails_parse() {
        let result = serde_json::from_str::<ItineraryResponse>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_day_missing_a_section_fails_parse() {
        let payload = r#"{
            "itinerary": {
                "days": [{"morning": [], "afternoon": []}],
                "tips": []
            }
        }"#;
        let result = serde_json::from_str::<ItineraryResponse>(payload);
        assert!(result.is_err());
    }
}
