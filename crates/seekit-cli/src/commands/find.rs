//! Find command - search a caller-supplied sequence
//!
//! Usage:
//! ```bash
//! seekit find 2.7 --values 2.4,2.7,3.0,6.4,6.5,8.1
//! seekit find 5.0 --values 2.4,2.7,3.0,6.4,6.5,8.1 --algo binary
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use seekit_core::prelude::*;

/// Arguments for the find command
#[derive(Args)]
pub struct FindArgs {
    /// Item to search for
    pub item: f64,

    /// Comma-separated sequence values; must already be sorted ascending for
    /// every algorithm except `linear` and `recursive-linear`
    #[arg(long, value_delimiter = ',', required = true)]
    pub values: Vec<f64>,

    /// Algorithm to run
    #[arg(long, value_enum, default_value = "all")]
    pub algo: Algorithm,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    All,
    Linear,
    RecursiveLinear,
    Binary,
    Jump,
    Interpolation,
    Exponential,
    Fibonacci,
}

type SearchFn = fn(&[f64], &f64) -> bool;

fn searches() -> Vec<(Algorithm, &'static str, SearchFn)> {
    vec![
        (Algorithm::Linear, "linear", linear_search::<f64>),
        (
            Algorithm::RecursiveLinear,
            "recursive linear",
            recursive_linear_search::<f64>,
        ),
        (Algorithm::Binary, "binary", binary_search::<f64>),
        (Algorithm::Jump, "jump", jump_search::<f64>),
        (
            Algorithm::Interpolation,
            "interpolation",
            interpolation_search::<f64>,
        ),
        (
            Algorithm::Exponential,
            "exponential",
            exponential_search::<f64>,
        ),
        (Algorithm::Fibonacci, "fibonacci", fibonacci_search::<f64>),
    ]
}

/// Run the find command
pub fn run(args: FindArgs) -> Result<()> {
    tracing::debug!(count = args.values.len(), "searching supplied sequence");

    for (algo, name, search) in searches() {
        if args.algo != Algorithm::All && args.algo != algo {
            continue;
        }
        let found = search(&args.values, &args.item);
        let label = format!("{name:<18}");
        let verdict = if found {
            "found".green()
        } else {
            "not found".red()
        };
        println!("{} {}", label.dimmed(), verdict);
    }

    Ok(())
}
