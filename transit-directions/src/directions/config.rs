//! Configuration for itinerary post-processing.

/// Label used when the user starts from their own position.
pub const CURRENT_LOCATION: &str = "Current Location";

/// Label used when the caller does not name the destination.
pub const DESTINATION: &str = "your destination";

/// Name given to a synthesized arrival leg whose ride has no stops.
pub const MISSING_STOP_NAME: &str = "Nil";

/// Configuration parameters for the directions pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsConfig {
    /// Start label meaning "wherever the user is now".
    /// Summaries drop the "from" clause for this label.
    pub current_location_label: String,

    /// End label used when neither caller nor backend names the destination.
    pub destination_label: String,

    /// Name for an arrival leg synthesized from a ride with no stops.
    pub missing_stop_name: String,

    /// Tag interior bus-path points that coincide with the leg's
    /// start or end location as `Stop` waypoints.
    pub mark_stop_waypoints: bool,

    /// Tag interior walk-leg endpoints as `Walk` waypoints.
    pub mark_walk_endpoints: bool,
}

impl DirectionsConfig {
    /// Set the current-location label.
    pub fn with_current_location_label(mut self, label: impl Into<String>) -> Self {
        self.current_location_label = label.into();
        self
    }

    /// Set the default destination label.
    pub fn with_destination_label(mut self, label: impl Into<String>) -> Self {
        self.destination_label = label.into();
        self
    }

    /// Set the placeholder name for stopless arrival legs.
    pub fn with_missing_stop_name(mut self, name: impl Into<String>) -> Self {
        self.missing_stop_name = name.into();
        self
    }

    /// Enable or disable `Stop` waypoint tagging.
    pub fn with_stop_waypoints(mut self, enabled: bool) -> Self {
        self.mark_stop_waypoints = enabled;
        self
    }

    /// Enable or disable `Walk` endpoint tagging.
    pub fn with_walk_endpoints(mut self, enabled: bool) -> Self {
        self.mark_walk_endpoints = enabled;
        self
    }
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            current_location_label: CURRENT_LOCATION.to_string(),
            destination_label: DESTINATION.to_string(),
            missing_stop_name: MISSING_STOP_NAME.to_string(),
            mark_stop_waypoints: false,
            mark_walk_endpoints: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DirectionsConfig::default();

        assert_eq!(config.current_location_label, "Current Location");
        assert_eq!(config.destination_label, "your destination");
        assert_eq!(config.missing_stop_name, "Nil");
        assert!(!config.mark_stop_waypoints);
        assert!(!config.mark_walk_endpoints);
    }

    #[test]
    fn custom_config() {
        let config = DirectionsConfig::default()
            .with_current_location_label("Here")
            .with_destination_label("there")
            .with_missing_stop_name("Unknown stop")
            .with_stop_waypoints(true)
            .with_walk_endpoints(true);

        assert_eq!(config.current_location_label, "Here");
        assert_eq!(config.destination_label, "there");
        assert_eq!(config.missing_stop_name, "Unknown stop");
        assert!(config.mark_stop_waypoints);
        assert!(config.mark_walk_endpoints);
    }
}
