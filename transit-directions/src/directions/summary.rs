//! One-sentence route summaries, used when sharing a route.

use crate::domain::{Leg, LegKind};

use super::DirectionsConfig;

/// Format a leg distance (in miles) for display.
pub fn format_distance(miles: f64) -> String {
    format!("{miles:.1} mi")
}

/// Summarize a route in one sentence.
///
/// Routes with bus rides list each ride ("take Route N from A to B.").
/// Walk-only routes describe the walk. Returns an empty string when there
/// are no legs.
///
/// # Examples
///
/// ```
/// use transit_directions::directions::{DirectionsConfig, summarize};
///
/// let summary = summarize("Arts Quad", "Commons", &[], &DirectionsConfig::default());
/// assert_eq!(summary, "");
/// ```
pub fn summarize(
    start_name: &str,
    end_name: &str,
    legs: &[Leg],
    config: &DirectionsConfig,
) -> String {
    let rides: Vec<&Leg> = legs
        .iter()
        .filter(|leg| match leg.kind {
            LegKind::Depart => true,
            LegKind::Walk | LegKind::Arrive | LegKind::Transfer => false,
        })
        .collect();

    if rides.is_empty() {
        let Some(first) = legs.first() else {
            return String::new();
        };
        return format!(
            "Walk {} from {start_name} to {end_name}.",
            format_distance(first.travel_distance)
        );
    }

    let mut description = if start_name == config.current_location_label {
        format!("To get to {end_name},")
    } else {
        format!("To get from {start_name} to {end_name},")
    };

    for (index, ride) in rides.iter().enumerate() {
        let separator = if index == 0 { " " } else { " Then, " };
        description.push_str(separator);
        description.push_str(&format!(
            "take Route {} from {} to {}.",
            ride.route_number, ride.start.name, ride.end.name
        ));
    }

    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::fixtures::{coord, depart_leg, walk_leg};

    fn config() -> DirectionsConfig {
        DirectionsConfig::default()
    }

    #[test]
    fn distance_formatting() {
        assert_eq!(format_distance(0.4), "0.4 mi");
        assert_eq!(format_distance(1.26), "1.3 mi");
        assert_eq!(format_distance(0.0), "0.0 mi");
    }

    #[test]
    fn no_legs_no_summary() {
        assert_eq!(summarize("Arts Quad", "Commons", &[], &config()), "");
    }

    #[test]
    fn walk_only_summary() {
        let walk = walk_leg("Commons", coord(42.4491, -76.4837), coord(42.4396, -76.4965));
        let summary = summarize("Arts Quad", "Commons", &[walk], &config());

        assert_eq!(summary, "Walk 0.4 mi from Arts Quad to Commons.");
    }

    #[test]
    fn single_ride_summary() {
        let legs = vec![depart_leg(10, &["Carpenter Hall", "Seneca @ Commons"])];
        let summary = summarize("Arts Quad", "Commons", &legs, &config());

        assert_eq!(
            summary,
            "To get from Arts Quad to Commons, take Route 10 from Carpenter Hall to Seneca @ Commons."
        );
    }

    #[test]
    fn multiple_rides_joined_with_then() {
        let legs = vec![
            walk_leg("Arts Quad", coord(42.4491, -76.4837), coord(42.44, -76.48)),
            depart_leg(10, &["A", "B"]),
            depart_leg(30, &["C", "D"]),
        ];
        let summary = summarize("Arts Quad", "Ithaca Mall", &legs, &config());

        assert_eq!(
            summary,
            "To get from Arts Quad to Ithaca Mall, take Route 10 from A to B. Then, take Route 30 from C to D."
        );
    }

    #[test]
    fn current_location_start_drops_from_clause() {
        let legs = vec![depart_leg(81, &["A", "B"])];
        let summary = summarize("Current Location", "Ithaca Mall", &legs, &config());

        assert_eq!(summary, "To get to Ithaca Mall, take Route 81 from A to B.");
    }

    #[test]
    fn transfer_and_arrive_legs_not_listed() {
        let mut transfer = depart_leg(10, &["A", "B"]);
        transfer.kind = LegKind::Transfer;
        let mut arrive = depart_leg(11, &["C", "D"]);
        arrive.kind = LegKind::Arrive;
        let legs = vec![transfer, depart_leg(17, &["E", "F"]), arrive];

        let summary = summarize("Arts Quad", "Mall", &legs, &config());

        assert_eq!(
            summary,
            "To get from Arts Quad to Mall, take Route 17 from E to F."
        );
    }
}
