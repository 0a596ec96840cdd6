//! Quoting and escaping in command strings.
//!
//! Run with: cargo run --example string_input

use get_options::{parse_str_with_config, tokenize, Config, Schema};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let schema = Schema::new()
        .option("-t, --title", "<text>")
        .option("-f, --files", "<paths...>")
        .option("-q, --quiet", "");
    let config = Config::new().with_terminator("--");

    let inputs = [
        r#"--title "Hello world" -q"#,
        r#"--title='Foo \"Bar\" Baz'"#,
        r"--files one\ file another\ file -- -q",
        r#"-qt "it's quoted" rest"#,
        r"\--title literal",
    ];

    for input in inputs {
        println!("Input:  {}", input);
        println!("Tokens: {:?}", tokenize(input));
        let parsed = parse_str_with_config(input, &schema, &config)?;
        println!("Result: {}\n", serde_json::to_string(&parsed)?);
    }

    Ok(())
}
