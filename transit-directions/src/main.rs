use std::process::ExitCode;
use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_directions::backend::{
    BackendConfig, RouteClient, RouteError, RouteQuery, parse_response,
};
use transit_directions::cache::{CacheConfig, CachedRouteClient};
use transit_directions::directions::{DirectionsConfig, format_distance};
use transit_directions::domain::{Coordinate, DomainError, Itinerary, Leg};

/// Environment variable holding the routing backend base URL.
const BACKEND_URL_VAR: &str = "TRANSIT_BACKEND_URL";

const USAGE: &str = "usage:
  transit-directions <route.json> [start-name] [end-name]
  transit-directions --fetch <lat,long> <lat,long> [start-name] [end-name]";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{}", USAGE)]
    Usage,

    #[error("{} is not set", BACKEND_URL_VAR)]
    MissingBackendUrl,

    #[error("invalid coordinate {0:?}, expected lat,long")]
    BadCoordinate(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Route(#[from] RouteError),
}

enum Command {
    File {
        path: String,
        start_name: Option<String>,
        end_name: Option<String>,
    },
    Fetch {
        start: Coordinate,
        end: Coordinate,
        start_name: Option<String>,
        end_name: Option<String>,
    },
}

fn parse_coordinate(arg: &str) -> Result<Coordinate, CliError> {
    let (lat, long) = arg
        .split_once(',')
        .ok_or_else(|| CliError::BadCoordinate(arg.to_string()))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| CliError::BadCoordinate(arg.to_string()))?;
    let long: f64 = long
        .trim()
        .parse()
        .map_err(|_| CliError::BadCoordinate(arg.to_string()))?;
    Ok(Coordinate::new(lat, long)?)
}

fn parse_args(args: &[String]) -> Result<Command, CliError> {
    match args {
        [flag, start, end, rest @ ..] if flag.as_str() == "--fetch" && rest.len() <= 2 => {
            Ok(Command::Fetch {
                start: parse_coordinate(start)?,
                end: parse_coordinate(end)?,
                start_name: rest.first().cloned(),
                end_name: rest.get(1).cloned(),
            })
        }
        [path, rest @ ..] if !path.starts_with("--") && rest.len() <= 2 => Ok(Command::File {
            path: path.clone(),
            start_name: rest.first().cloned(),
            end_name: rest.get(1).cloned(),
        }),
        _ => Err(CliError::Usage),
    }
}

/// Route label for legs spent on a bus; walks and arrivals get none.
fn route_badge(leg: &Leg) -> Option<String> {
    (leg.kind.is_transit() && leg.route_number > 0)
        .then(|| format!(" [Route {}]", leg.route_number))
}

fn print_itinerary(index: usize, itinerary: &Itinerary, config: &DirectionsConfig) {
    println!(
        "Route {}: {} -> {} ({} min, {} transfer(s))",
        index + 1,
        itinerary.departure_time().format("%H:%M"),
        itinerary.arrival_time().format("%H:%M"),
        itinerary.total_duration_mins(),
        itinerary.transfer_count(),
    );
    println!("  {}", itinerary.summary(config));
    println!(
        "  {:.0} m to {}",
        itinerary.travel_distance(),
        if itinerary.is_walking_route() {
            "the end of the first walk"
        } else {
            "the first stop"
        }
    );

    for (leg, path) in itinerary.directions().iter().zip(itinerary.paths(config)) {
        println!(
            "  {:>8} {}{} ({}, {} stop(s), {} waypoint(s))",
            leg.kind.as_str(),
            leg.name,
            route_badge(leg).unwrap_or_default(),
            format_distance(leg.travel_distance),
            leg.stop_count(),
            path.waypoints.len(),
        );
    }
}

async fn run(command: Command, config: DirectionsConfig) -> Result<Vec<Itinerary>, CliError> {
    match command {
        Command::File {
            path,
            start_name,
            end_name,
        } => {
            info!(%path, "reading route document");
            let body = std::fs::read_to_string(&path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            Ok(parse_response(
                &body,
                start_name.as_deref(),
                end_name.as_deref(),
                &config,
            )?)
        }
        Command::Fetch {
            start,
            end,
            start_name,
            end_name,
        } => {
            let base_url =
                std::env::var(BACKEND_URL_VAR).map_err(|_| CliError::MissingBackendUrl)?;
            info!(%base_url, %start, %end, "fetching routes");

            let client = RouteClient::new(BackendConfig::new(base_url), config)?;
            let client = CachedRouteClient::new(client, &CacheConfig::default());

            let mut query = RouteQuery::depart_at(start, end, Utc::now());
            query.start_name = start_name;
            query.end_name = end_name;

            let itineraries = client.get_routes(&query).await?;
            Ok(Arc::unwrap_or_clone(itineraries))
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let config = DirectionsConfig::default();
    match run(command, config.clone()).await {
        Ok(itineraries) => {
            info!(count = itineraries.len(), "routes ready");
            for (index, itinerary) in itineraries.iter().enumerate() {
                print_itinerary(index, itinerary, &config);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transit_directions::domain::{LegKind, Location};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn coordinate_argument() {
        let c = parse_coordinate("42.4491, -76.4837").unwrap();
        assert_eq!(c.lat(), 42.4491);
        assert_eq!(c.long(), -76.4837);

        assert!(matches!(
            parse_coordinate("42.4491"),
            Err(CliError::BadCoordinate(_))
        ));
        assert!(matches!(
            parse_coordinate("north,west"),
            Err(CliError::BadCoordinate(_))
        ));
        assert!(matches!(
            parse_coordinate("95,0"),
            Err(CliError::Domain(_))
        ));
    }

    #[test]
    fn file_command() {
        let command = parse_args(&args(&["route.json", "Arts Quad"])).unwrap();
        let Command::File {
            path,
            start_name,
            end_name,
        } = command
        else {
            panic!("expected file command");
        };
        assert_eq!(path, "route.json");
        assert_eq!(start_name.as_deref(), Some("Arts Quad"));
        assert_eq!(end_name, None);
    }

    #[test]
    fn fetch_command() {
        let command = parse_args(&args(&[
            "--fetch",
            "42.4491,-76.4837",
            "42.4396,-76.4965",
            "Arts Quad",
            "Commons",
        ]))
        .unwrap();
        let Command::Fetch {
            start_name,
            end_name,
            ..
        } = command
        else {
            panic!("expected fetch command");
        };
        assert_eq!(start_name.as_deref(), Some("Arts Quad"));
        assert_eq!(end_name.as_deref(), Some("Commons"));
    }

    #[test]
    fn badge_only_on_bus_legs() {
        let at = Coordinate::new(42.4491, -76.4837).unwrap();
        let when = Utc::now();
        let leg = |kind| {
            let mut leg = Leg::new(
                kind,
                "Sage Hall",
                Location::new("Sage Hall", at),
                Location::new("Commons", at),
                when,
                when,
            );
            leg.route_number = 10;
            leg
        };

        assert_eq!(
            route_badge(&leg(LegKind::Depart)).as_deref(),
            Some(" [Route 10]")
        );
        assert_eq!(
            route_badge(&leg(LegKind::Transfer)).as_deref(),
            Some(" [Route 10]")
        );
        // Arrivals copy the route number from their ride
        assert_eq!(route_badge(&leg(LegKind::Arrive)), None);
        assert_eq!(route_badge(&leg(LegKind::Walk)), None);

        let mut unnumbered = leg(LegKind::Depart);
        unnumbered.route_number = 0;
        assert_eq!(route_badge(&unnumbered), None);
    }

    #[test]
    fn bad_usage() {
        assert!(matches!(parse_args(&[]), Err(CliError::Usage)));
        assert!(matches!(
            parse_args(&args(&["--fetch", "42,-76"])),
            Err(CliError::Usage)
        ));
        assert!(matches!(
            parse_args(&args(&["a.json", "b", "c", "d"])),
            Err(CliError::Usage)
        ));
    }
}
