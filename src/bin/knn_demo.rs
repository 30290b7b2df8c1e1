//! Demo harness: does a 33 year old like pineapple on pizza?
//!
//! The dataset pairs an age with whether that person likes pineapple on
//! pizza (1 = likes, 0 = dislikes). The query age and k are taken from
//! the command line so their effect on the vote can be explored.

use anyhow::Result;
use clap::Parser;
use nearest_neighbors::{DataPoint, knn};

#[derive(Parser, Debug)]
#[command(
    name = "knn-demo",
    about = "Predict pineapple-on-pizza preference from age"
)]
struct Cli {
    /// Age to classify
    #[arg(long, default_value_t = 33.0)]
    age: f64,

    /// Number of neighbors consulted for the vote
    #[arg(short, long, default_value_t = 3)]
    k: usize,
}

fn dataset() -> Vec<DataPoint<f64, u8>> {
    let raw: [(f64, u8); 10] = [
        (22.0, 1),
        (23.0, 1),
        (21.0, 1),
        (18.0, 1),
        (19.0, 1),
        (25.0, 0),
        (27.0, 0),
        (29.0, 0),
        (31.0, 0),
        (45.0, 0),
    ];
    raw.iter()
        .map(|&(age, likes)| DataPoint::new(vec![age], likes))
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let data = dataset();

    tracing::debug!(age = cli.age, k = cli.k, "classifying query");
    let result = knn(&data, &[cli.age], cli.k)?;

    for neighbor in &result.neighbors {
        let point = &data[neighbor.index];
        println!(
            "age {:>4}  label {}  distance {:.1}",
            point.features[0], point.label, neighbor.distance
        );
    }

    let verdict = if result.label == 1 {
        "likes"
    } else {
        "does not like"
    };
    println!(
        "prediction: a {} year old {} pineapple on pizza",
        cli.age, verdict
    );

    Ok(())
}
