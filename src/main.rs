use anyhow::{Context, Result};
use clap::Parser;
use detour::{best_detour, detour_candidates, Coordinate};
use tracing::{debug, info, Level};

#[derive(Parser, Debug)]
#[command(name = "detour")]
#[command(about = "Shortest detour (km) for trips A->B and C->D when one driver picks up the other.", long_about = None)]
struct Cli {
    /// Start of the first trip, as LAT,LON
    #[arg(short, long, allow_hyphen_values = true)]
    a: Coordinate,

    /// End of the first trip, as LAT,LON
    #[arg(short, long, allow_hyphen_values = true)]
    b: Coordinate,

    /// Start of the second trip, as LAT,LON
    #[arg(short, long, allow_hyphen_values = true)]
    c: Coordinate,

    /// End of the second trip, as LAT,LON
    #[arg(short, long, allow_hyphen_values = true)]
    d: Coordinate,

    /// Reject coordinates outside [-90, 90] latitude or [-180, 180] longitude
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Log at debug level
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn validate_points(points: &[(&str, Coordinate)]) -> Result<()> {
    for (name, point) in points {
        point.validate().with_context(|| format!("point {}", name))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let points = [("a", cli.a), ("b", cli.b), ("c", cli.c), ("d", cli.d)];
    if cli.strict {
        validate_points(&points)?;
        debug!("All four points are in range");
    }

    let [a, b, c, d] = points.map(|(_, point)| point);
    for candidate in detour_candidates(&a, &b, &c, &d) {
        debug!(
            "{} driver picks up: {:.6} km",
            candidate.pickup.as_str(),
            candidate.extra_km
        );
    }

    let best = best_detour(&a, &b, &c, &d);
    if best.extra_km < 0.0 {
        info!("Detour came out negative ({} km); reporting it unclamped", best.extra_km);
    }
    println!("Shortest detour (km): {:.6}", best.extra_km);
    println!("Pickup by: {} driver", best.pickup.as_str());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_check_names_the_point() {
        let ok = Coordinate::new(-88.221674, 40.105706);
        let points = [("a", ok), ("b", ok), ("c", Coordinate::new(190.0, 40.0)), ("d", ok)];
        let message = format!("{:#}", validate_points(&points).unwrap_err());
        assert!(message.contains("point c"), "{}", message);
        assert!(message.contains("longitude"), "{}", message);
    }

    #[test]
    fn strict_check_accepts_in_range_points() {
        let ok = Coordinate::new(-88.221674, 40.105706);
        assert!(validate_points(&[("a", ok), ("b", ok), ("c", ok), ("d", ok)]).is_ok());
    }

    #[test]
    fn cli_accepts_negative_latitudes() {
        let cli = Cli::try_parse_from([
            "detour", "-a", "-33.86,151.21", "-b", "-33.87,151.20", "-c", "-33.85,151.22", "-d",
            "-33.88,151.19",
        ])
        .unwrap();
        assert_eq!(cli.a, Coordinate::new(151.21, -33.86));
        assert!(!cli.strict);
    }
}
