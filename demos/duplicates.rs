//! Every duplicate policy applied to the same command line.
//!
//! Run with: cargo run --example duplicates

use get_options::{parse_with_config, AliasPropagation, Config, Duplicates, Schema};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let schema = Schema::new().option("-s, --set-size", "<width=\\d+> <height=\\d+>");
    let args = [
        "alpha", "--set-size", "640", "480", "beta", "-s", "800", "600", "gamma", "-s", "1024",
    ];
    println!("Input: {:?}\n", args);

    for policy in Duplicates::ALL {
        let config = Config::new()
            .with_alias_propagation(AliasPropagation::FirstOnly)
            .with_duplicates(policy);

        match parse_with_config(args, &schema, &config) {
            Ok(parsed) => println!("{:<13} {}", policy, serde_json::to_string(&parsed)?),
            Err(e) => println!("{:<13} error: {}", policy, e),
        }
    }

    Ok(())
}
