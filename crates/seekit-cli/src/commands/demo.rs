//! Demo command - run every search over the classic sample data
//!
//! Usage:
//! ```bash
//! seekit demo
//! seekit demo --item 5.0
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use rand::Rng;
use seekit_core::prelude::*;
use std::collections::LinkedList;

/// Arguments for the demo command
#[derive(Args)]
pub struct DemoArgs {
    /// Item to search for in the sample array
    #[arg(long, default_value_t = 2.7)]
    pub item: f64,
}

/// Run the demo command
pub fn run(args: DemoArgs) -> Result<()> {
    let sample = [2.4, 2.7, 3.0, 6.4, 6.5, 8.1];
    let item = args.item;

    println!("{}", "Indexable sequence".bold());
    println!("  values: {sample:?}");
    println!("  item:   {item}");
    report("linear", linear_search(&sample, &item));
    report("recursive linear", recursive_linear_search(&sample, &item));
    report("binary", binary_search(&sample, &item));
    report("jump", jump_search(&sample, &item));
    report("interpolation", interpolation_search(&sample, &item));
    report("exponential", exponential_search(&sample, &item));
    report("fibonacci", fibonacci_search(&sample, &item));

    let (large, small) = random_lists();
    println!();
    println!("{}", "Linked sequence".bold());
    println!("  large: {large:?}");
    println!("  small: {small:?}");
    report("sublist", sublist_search(&large, &small));
    report("recursive sublist", recursive_sublist_search(&large, &small));

    Ok(())
}

/// Build a six-node list of one-decimal values in `[0.0, 9.9]` whose last
/// three nodes double as the needle list.
fn random_lists() -> (LinkedList<f64>, LinkedList<f64>) {
    let mut rng = rand::rng();
    let mut large = LinkedList::new();
    let mut small = LinkedList::new();
    for i in 0..6 {
        let value = rng.random_range(0..100) as f64 / 10.0;
        large.push_back(value);
        if i > 2 {
            small.push_back(value);
        }
    }
    (large, small)
}

fn report(name: &str, found: bool) {
    let label = format!("{name:<18}");
    let verdict = if found {
        "true".green()
    } else {
        "false".red()
    };
    println!("  {} {}", label.dimmed(), verdict);
}
