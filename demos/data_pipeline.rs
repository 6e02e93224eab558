//! Data pipeline example - parsing, cleaning and summarising records lazily
//!
//! Run with: cargo run --example data_pipeline

use pullstream::prelude::*;

// ============================================================================
// Domain Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Reading {
    sensor: String,
    celsius: f64,
}

fn parse(line: &str) -> Optional<Reading> {
    let mut parts = line.split(',');
    let sensor = parts.next().map(str::trim).filter(|s| !s.is_empty());
    let celsius = parts.next().and_then(|v| v.trim().parse::<f64>().ok());
    match (sensor, celsius) {
        (Some(sensor), Some(celsius)) => Optional::of(Reading {
            sensor: sensor.to_string(),
            celsius,
        }),
        _ => Optional::empty(),
    }
}

// ============================================================================
// Pipeline
// ============================================================================

fn main() {
    let raw = vec![
        "kitchen, 21.5",
        "garage, 9.0",
        "broken line",
        "attic, 31.25",
        "kitchen, 22.0",
        ", 10.0",
        "cellar, 12.5",
    ];

    println!("=== Valid readings ===");
    Stream::of(raw.clone())
        .flat_map_optional(parse)
        .for_each(|r| println!("  {:<8} {:>6.2}", r.sensor, r.celsius));

    println!("\n=== Distinct sensors, alphabetical ===");
    let sensors = Stream::of(raw.clone())
        .flat_map_optional(parse)
        .map(|r| r.sensor)
        .distinct()
        .sorted()
        .collect(collector::joining(", "));
    println!("  {}", sensors);

    println!("\n=== Readings grouped by sensor ===");
    let groups = Stream::of(raw.clone())
        .flat_map_optional(parse)
        .collect(collector::grouping_by(|r: &Reading| r.sensor.clone()));
    let mut names: Vec<_> = groups.keys().cloned().collect();
    names.sort();
    for name in names {
        let values: Vec<f64> = groups[&name].iter().map(|r| r.celsius).collect();
        println!("  {}: {:?}", name, values);
    }

    println!("\n=== Hottest reading ===");
    let hottest = Stream::of(raw.clone())
        .flat_map_optional(parse)
        .max_by(|a, b| a.celsius.total_cmp(&b.celsius));
    match hottest.get() {
        Ok(r) => println!("  {} at {:.2}", r.sensor, r.celsius),
        Err(e) => println!("  none: {}", e),
    }

    println!("\n=== First reading below freezing ===");
    let frozen = Stream::of(raw)
        .flat_map_optional(parse)
        .filter(|r| r.celsius < 0.0)
        .find_first();
    println!("  present: {}", frozen.is_present());

    println!("\n=== Infinite source, bounded by limit ===");
    let doubling = Stream::iterate(1u32, |x| x * 2)
        .skip(2)
        .limit(5)
        .to_vec();
    println!("  {:?}", doubling);
}
