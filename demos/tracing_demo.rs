//! Demonstrates tracing integration with stream pipelines
//!
//! Run with: cargo run --example tracing_demo --features tracing

use pullstream::{collector, Stream};

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    // Stage appends are traced as the chain is built
    let words = Stream::of(["pull", "based", "streams", "pull", "lazily"])
        .map(str::to_uppercase)
        .distinct()
        .limit(3);

    // The distinct stage drains upstream and the limit closes after three
    let joined = words.collect(collector::joining(" "));
    tracing::info!("Collected: {}", joined);

    // Short-circuiting terminal operations report where they stopped
    let found = Stream::iterate(1u64, |x| x * 3).any_match(|x| *x > 1_000);
    tracing::info!("Found a power of three above 1000: {}", found);
}
