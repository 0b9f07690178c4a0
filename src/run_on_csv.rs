use anyhow::{Context, Result};
use clap::Parser;
use csv::{ReaderBuilder, StringRecord, Writer};
use detour::{best_detour, Coordinate, Detour, Pickup};
use ordered_float::OrderedFloat;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn, Level};

#[derive(Parser, Debug)]
#[command(name = "detour-csv")]
#[command(about = "Compute the shortest detour for every pair of trips in a CSV with a_lat,a_lon,b_lat,b_lon,c_lat,c_lon,d_lat,d_lon per row.", long_about = None)]
struct Cli {
    /// Path to the .csv file
    #[arg(short, long)]
    csv: PathBuf,

    /// Output CSV (line, detour_km, pickup) sorted by detour. If omitted, prints a summary to stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Reject coordinates outside [-90, 90] latitude or [-180, 180] longitude
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Log at debug level
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

const COLUMNS: usize = 8;

/// Reads the four points of one row, each stored as a latitude column followed by a longitude column.
fn parse_trip_record(record: &StringRecord) -> Result<[Coordinate; 4]> {
    anyhow::ensure!(
        record.len() == COLUMNS,
        "expected {} columns, found {}",
        COLUMNS,
        record.len()
    );
    let mut values = [0.0_f64; COLUMNS];
    for (i, value) in values.iter_mut().enumerate() {
        *value = record[i]
            .trim()
            .parse()
            .with_context(|| format!("column {} ({:?})", i, &record[i]))?;
    }
    Ok([
        Coordinate::new(values[1], values[0]),
        Coordinate::new(values[3], values[2]),
        Coordinate::new(values[5], values[4]),
        Coordinate::new(values[7], values[6]),
    ])
}

/// Loads every data row, keyed by the line it starts on in the file (the header is line 1).
fn read_trip_pairs(path: &Path, strict: bool) -> Result<Vec<(u64, [Coordinate; 4])>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true) // important: skip header line
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut pairs = Vec::new();
    for result in rdr.records() {
        let record = result.context("reading CSV record")?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let points = parse_trip_record(&record).with_context(|| format!("line {}", line))?;
        if strict {
            for point in &points {
                point.validate().with_context(|| format!("line {}", line))?;
            }
        }
        pairs.push((line, points));
    }
    Ok(pairs)
}

/// Ascending by distance. NaN sorts last.
fn sort_by_detour(rows: &mut [(u64, Detour)]) {
    rows.sort_by_key(|(_, detour)| OrderedFloat(detour.extra_km));
}

/// Output label for the driver; empty when the detour is not a finite number.
fn pickup_label(detour: &Detour) -> &'static str {
    if detour.extra_km.is_finite() {
        detour.pickup.as_str()
    } else {
        ""
    }
}

#[derive(Debug, Default, PartialEq)]
struct Summary {
    pairs: usize,
    /// (line, km) of the smallest finite detour
    min: Option<(u64, f64)>,
    /// (line, km) of the largest finite detour
    max: Option<(u64, f64)>,
    first_driver: usize,
    second_driver: usize,
    non_finite: usize,
}

fn summarize(rows: &[(u64, Detour)]) -> Summary {
    let mut summary = Summary {
        pairs: rows.len(),
        ..Summary::default()
    };
    for &(line, detour) in rows {
        let km = detour.extra_km;
        if !km.is_finite() {
            summary.non_finite += 1;
            continue;
        }
        match detour.pickup {
            Pickup::FirstDriver => summary.first_driver += 1,
            Pickup::SecondDriver => summary.second_driver += 1,
        }
        if summary.min.map_or(true, |(_, min)| km < min) {
            summary.min = Some((line, km));
        }
        if summary.max.map_or(true, |(_, max)| km > max) {
            summary.max = Some((line, km));
        }
    }
    summary
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let pairs = read_trip_pairs(&cli.csv, cli.strict)?;
    info!("Loaded {} trip pairs from {}", pairs.len(), cli.csv.display());

    let mut rows: Vec<(u64, Detour)> = pairs
        .iter()
        .map(|(line, [a, b, c, d])| (*line, best_detour(a, b, c, d)))
        .collect();
    sort_by_detour(&mut rows);

    if let Some(out_path) = cli.out {
        let mut wtr = Writer::from_path(&out_path)
            .with_context(|| format!("creating CSV {}", out_path.display()))?;
        wtr.write_record(["line", "detour_km", "pickup"])?;
        for (line, detour) in &rows {
            wtr.write_record(&[
                line.to_string(),
                format!("{:.6}", detour.extra_km),
                pickup_label(detour).to_string(),
            ])?;
        }
        wtr.flush()?;
        info!(
            "Wrote detours for {} trip pairs to {}",
            rows.len(),
            out_path.display()
        );
    } else {
        let summary = summarize(&rows);
        println!("Trip pairs: {}", summary.pairs);
        if let Some((line, km)) = summary.min {
            println!("Min detour (km): {:.6} (line {})", km, line);
        }
        if let Some((line, km)) = summary.max {
            println!("Max detour (km): {:.6} (line {})", km, line);
        }
        println!("Picked up by first driver: {}", summary.first_driver);
        println!("Picked up by second driver: {}", summary.second_driver);
        if summary.non_finite > 0 {
            warn!("{} trip pairs have a non-finite detour", summary.non_finite);
        }
        println!("Non-finite detours: {}", summary.non_finite);
    }
    debug!("Done");

    Ok(())
}
