//! Schemas, bundling and alias propagation.
//!
//! Run with: cargo run --example basic -- -vn3 --output=report.txt notes.md

use get_options::{parse, parse_with_config, schema, AliasPropagation, Config, Schema};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let schema = schema! {
        "-h, --help" => "",
        "-v, --verbose" => "",
        "-n, --number-of-lines" => "<number=\\d+>",
        "-o, --output" => "<file>",
        "-r, --range" => ["<min=\\d+>", "<max=\\d+>"],
    };

    // Real arguments when given, a canned command line otherwise
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        args = ["-vn3", "--output=report.txt", "-r1", "9", "notes.md"]
            .map(String::from)
            .to_vec();
    }
    println!("Input: {:?}\n", args);

    println!("Every alias (default):");
    let parsed = parse(args.clone(), &schema)?;
    println!("{}\n", serde_json::to_string_pretty(&parsed)?);

    println!("First alias only:");
    let config = Config::new().with_alias_propagation(AliasPropagation::FirstOnly);
    let parsed = parse_with_config(args.clone(), &schema, &config)?;
    println!("{}\n", serde_json::to_string_pretty(&parsed)?);

    println!("Getopt shorthand \"hvn:o:\":");
    let parsed = parse(args.clone(), &Schema::shorthand("hvn:o:"))?;
    println!("{}\n", serde_json::to_string_pretty(&parsed)?);

    println!("No schema at all:");
    let parsed = parse(args, &Schema::auto())?;
    println!("{}", serde_json::to_string_pretty(&parsed)?);

    Ok(())
}
