//! Limits of classic series, computed with exact rationals.
//!
//! Usage: `limits [--e-terms N] [--halving-terms N] [--product-terms N] [--samples N] [--seed S]`
//!
//! Set `RUST_LOG=exact_ratio=trace` to watch the factorial cache grow.

use std::f64::consts::E;
use std::process;

use clap::Parser;
use exact_ratio::{series, FactorialCache, Rational};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "limits")]
#[command(about = "Approximate series limits and sort random fractions")]
struct Args {
    /// Terms of 1/0! + 1/1! + 1/2! + ... used to approximate e (at most 21)
    #[arg(long, default_value_t = 20)]
    e_terms: usize,

    /// Terms of 1 + 1/2 + 1/4 + ... used to approach 2 (at most 63)
    #[arg(long, default_value_t = 15)]
    halving_terms: u32,

    /// Last denominator n of the product 1/2 * 2/3 * ... * (n-1)/n
    #[arg(long, default_value_t = 20)]
    product_terms: i64,

    /// Number of random fractions to generate and sort
    #[arg(long, default_value_t = 20)]
    samples: usize,

    /// Seed for the random fractions; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,exact_ratio=info"));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn run(args: &Args) -> exact_ratio::Result<()> {
    let cache = FactorialCache::new();

    let e = series::approximate_e(&cache, args.e_terms)?;
    info!("Value of e: {}", E);
    info!("Approximation of e using {} terms: {e}", args.e_terms);
    info!("Error: {}", series::relative_error(E, e));

    let halving = series::halving_sum(args.halving_terms)?;
    info!("Summing sequence 1/1 + 1/2 + 1/4 + 1/8 + ...");
    info!("Approximation of 2: {} = {}", halving, halving.to_f64());
    info!("Error: {}", series::relative_error(2.0, halving.to_f64()));

    let product = series::telescoping_product(args.product_terms)?;
    info!(
        "Product of sequence 1/2 * 2/3 * 3/4 * ... * {}/{}",
        args.product_terms - 1,
        args.product_terms
    );
    info!("Result is: {product}");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut fractions = series::random_ratios(&mut rng, args.samples, -50..50, -50..50)?;
    fractions.sort();
    let rendered: Vec<String> = fractions.iter().map(Rational::display_compact).collect();
    info!(
        "Sorted {} random fractions: [{}]",
        args.samples,
        rendered.join(", ")
    );

    let r1 = Rational::new(8, -24)?;
    let r2 = Rational::new(-123, -456)?;
    info!("8/-24 = {r1}");
    info!("-123/-456 = {r2}");
    info!("2 * {r2} = {} = {}", 2 * r2, r2 * 2);

    Ok(())
}

fn main() {
    init_logging();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        error!("{err}");
        process::exit(1);
    }
}
