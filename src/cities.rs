//! Supported-city lookup table
//!
//! A fixed in-memory table of the cities the planner knows how to handle.
//! The table exists purely to validate user input before a generation
//! request is issued; no network or disk I/O is involved.

use serde::Serialize;

/// Hemisphere a city lies in (seasons are inverted between the two)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    Northern,
    Southern,
}

/// Static metadata for a supported city
#[derive(Debug, Clone, Serialize)]
pub struct CityInfo {
    /// Canonical city name
    pub name: &'static str,
    /// Country the city is in
    pub country: &'static str,
    /// Hemisphere, for seasonal reasoning
    pub hemisphere: Hemisphere,
}

/// Cities the planner accepts, matched case-insensitively
static SUPPORTED_CITIES: &[CityInfo] = &[
    CityInfo { name: "Amsterdam", country: "Netherlands", hemisphere: Hemisphere::Northern },
    CityInfo { name: "Bangkok", country: "Thailand", hemisphere: Hemisphere::Northern },
    CityInfo { name: "Barcelona", country: "Spain", hemisphere: Hemisphere::Northern },
    CityInfo { name: "Berlin", country: "Germany", hemisphere: Hemisphere::Northern },
    CityInfo { name: "Buenos Aires", country: "Argentina", hemisphere: Hemisphere::Southern },
    CityInfo { name: "Cape Town", country: "South Africa", hemisphere: Hemisphere::Southern },
    CityInfo { name: "Dubai", country: "United Arab Emirates", hemisphere: Hemisphere::Northern },
    CityInfo { name: "Istanbul", country: "Turkey", hemisphere: Hemisphere::Northern },
    CityInfo { name: "Lisbon", country: "Portugal", hemisphere: Hemisphere::Northern },
    CityInfo { name: "London", country: "United Kingdom", hemisphere: Hemisphere::Northern },
    CityInfo { name: "Mexico City", country: "Mexico", hemisphere: Hemisphere::Northern },
    CityInfo { name: "New York", country: "United States", hemisphere: Hemisphere::Northern },
    CityInfo { name: "Paris", country: "France", hemisphere: Hemisphere::Northern },
    CityInfo { name: "Prague", country: "Czech Republic", hemisphere: Hemisphere::Northern },
    CityInfo { name: "Rio de Janeiro", country: "Brazil", hemisphere: Hemisphere::Southern },
    CityInfo { name: "Rome", country: "Italy", hemisphere: Hemisphere::Northern },
    CityInfo { name: "San Francisco", country: "United States", hemisphere: Hemisphere::Northern },
    CityInfo { name: "Seoul", country: "South Korea", hemisphere: Hemisphere::Northern },
    CityInfo { name: "Singapore", country: "Singapore", hemisphere: Hemisphere::Northern },
    CityInfo { name: "Sydney", country: "Australia", hemisphere: Hemisphere::Southern },
    CityInfo { name: "Tokyo", country: "Japan", hemisphere: Hemisphere::Northern },
    CityInfo { name: "Vienna", country: "Austria", hemisphere: Hemisphere::Northern },
];

/// Look up a city by name, case-insensitively and ignoring surrounding
/// whitespace. Returns `None` for any city outside the supported table.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static CityInfo> {
    let normalized = name.trim();
    SUPPORTED_CITIES
        .iter()
        .find(|city| city.name.eq_ignore_ascii_case(normalized))
}

/// The full supported-city table, for the suggestions endpoint
#[must_use]
pub fn supported_cities() -> &'static [CityInfo] {
    SUPPORTED_CITIES
}
