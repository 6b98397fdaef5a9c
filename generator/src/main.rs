use std::num::NonZero;

use linkwright::{Generator, GeneratorConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GeneratorConfig::for_size(NonZero::new(10).unwrap(), NonZero::new(10).unwrap());
    let generator = Generator::new(config).unwrap();

    let mut rng = StdRng::seed_from_u64(2024);
    let puzzle = generator.generate(&mut rng);
    info!(pairs = puzzle.pair_count(), "generated puzzle");

    println!("{}", puzzle);
    println!("{}", puzzle.solution());
}
