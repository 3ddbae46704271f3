use serde::Deserialize;
use crate::models::Flight;

/// Free-text flight filters. Every filter is optional and blank values are
/// ignored. Matching is a case-insensitive substring test; the date filter is
/// tested against the rendered departure (`2024-12-01 10:00:00`), so `"2024-12"`
/// or `"10:00"` both match.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FlightSearchQuery {
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl FlightSearchQuery {
    pub fn new(origin: &str, destination: &str, date: &str) -> Self {
        Self {
            origin: Some(origin.to_string()),
            destination: Some(destination.to_string()),
            date: Some(date.to_string()),
        }
        .normalized()
    }

    /// Trims every filter and drops the blank ones.
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            origin: clean(self.origin),
            destination: clean(self.destination),
            date: clean(self.date),
        }
    }

    pub fn matches(&self, flight: &Flight) -> bool {
        let q = self.clone().normalized();
        contains_ignore_case(&flight.origin, q.origin.as_deref())
            && contains_ignore_case(&flight.destination, q.destination.as_deref())
            && contains_ignore_case(&flight.departure_display(), q.date.as_deref())
    }
}

fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn flight(origin: &str, destination: &str) -> Flight {
        let departure = NaiveDate::from_ymd_opt(2024, 12, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Flight::new("FL001", origin, destination, departure, 100, 50000, "USD")
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = FlightSearchQuery::new("", "  ", "");
        assert_eq!(query, FlightSearchQuery::default());
        assert!(query.matches(&flight("New York", "London")));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let f = flight("New York", "London");
        assert!(FlightSearchQuery::new("new york", "LOND", "").matches(&f));
        assert!(FlightSearchQuery::new("york", "", "").matches(&f));
        assert!(!FlightSearchQuery::new("Paris", "", "").matches(&f));
    }

    #[test]
    fn test_date_filter_is_string_contains() {
        let f = flight("New York", "London");
        assert!(FlightSearchQuery::new("", "", "2024-12").matches(&f));
        assert!(FlightSearchQuery::new("", "", "10:00").matches(&f));
        assert!(!FlightSearchQuery::new("", "", "2024-11").matches(&f));
    }

    #[test]
    fn test_pattern_characters_are_literal() {
        let f = flight("New York", "London");
        assert!(!FlightSearchQuery::new("N.w", "", "").matches(&f));
    }

    #[test]
    fn test_query_deserializes_with_missing_fields() {
        let query: FlightSearchQuery = serde_json::from_str(r#"{"origin": "London"}"#)
            .expect("Failed to deserialize");
        assert_eq!(query.origin.as_deref(), Some("London"));
        assert!(query.destination.is_none());
    }
}
