use get_options::{parse_with_config, AliasPropagation, Config, Duplicates, Schema, Terminator};
use regex::Regex;
use serde_json::{json, Value as Json};

fn flags() -> Schema {
    Schema::new().option("--foo", "").option("--bar", "")
}

fn run(input: &[&str], schema: &Schema, config: &Config) -> Json {
    let parsed = parse_with_config(input.iter().copied(), schema, config).unwrap();
    serde_json::to_value(&parsed).unwrap()
}

fn with_terminators<I, T>(terminators: I) -> Config
where
    I: IntoIterator<Item = T>,
    T: Into<Terminator>,
{
    terminators
        .into_iter()
        .fold(Config::new(), |config, t| config.with_terminator(t))
}

fn pattern(re: &str) -> Terminator {
    Terminator::from(Regex::new(re).unwrap())
}

#[test]
fn test_no_terminator_by_default() {
    let expected = json!({"options": {"foo": true, "bar": true}, "argv": ["--"]});
    assert_eq!(run(&["--foo", "--", "--bar"], &flags(), &Config::new()), expected);
    assert_eq!(
        run(&["--foo", "--", "--bar"], &flags(), &with_terminators([""])),
        expected
    );
}

#[test]
fn test_single_string() {
    let config = with_terminators(["--"]);
    let cases = [
        (
            vec!["--foo", "--", "--bar"],
            json!({"options": {"foo": true}, "argv": ["--bar"]}),
        ),
        (
            vec!["--", "--foo", "--bar"],
            json!({"options": {}, "argv": ["--foo", "--bar"]}),
        ),
        (
            vec!["--foo", "--bar", "--"],
            json!({"options": {"foo": true, "bar": true}, "argv": []}),
        ),
        (
            vec!["--", "--", "--foo"],
            json!({"options": {}, "argv": ["--", "--foo"]}),
        ),
        (
            vec!["--bar", "--", "--"],
            json!({"options": {"bar": true}, "argv": ["--"]}),
        ),
        (
            vec!["--foo", "--bar", "--baz", "--", "--", "---"],
            json!({"options": {"foo": true, "bar": true}, "argv": ["--baz", "--", "---"]}),
        ),
        (vec!["--"], json!({"options": {}, "argv": []})),
    ];
    for (input, expected) in cases {
        assert_eq!(run(&input, &flags(), &config), expected, "parsing {:?}", input);
    }

    let config = with_terminators(["#"]);
    let cases = [
        (
            vec!["--foo", "#", "--bar"],
            json!({"options": {"foo": true}, "argv": ["--bar"]}),
        ),
        (
            vec!["--foo", "--", "#", "--bar"],
            json!({"options": {"foo": true}, "argv": ["--", "--bar"]}),
        ),
        (vec!["#"], json!({"options": {}, "argv": []})),
    ];
    for (input, expected) in cases {
        assert_eq!(run(&input, &flags(), &config), expected, "parsing {:?}", input);
    }
}

#[test]
fn test_multiple_strings() {
    let config = with_terminators(["STOP", "THIS", "HALT"]);
    let cases = [
        (
            vec!["--bar", "STOP", "--foo"],
            json!({"options": {"bar": true}, "argv": ["--foo"]}),
        ),
        (
            vec!["--foo", "HALT", "--bar"],
            json!({"options": {"foo": true}, "argv": ["--bar"]}),
        ),
        (
            vec!["THIS", "--foo", "IS", "--bar", "HALT"],
            json!({"options": {}, "argv": ["--foo", "IS", "--bar", "HALT"]}),
        ),
        (vec!["--foo"], json!({"options": {"foo": true}, "argv": []})),
        (vec!["STOP"], json!({"options": {}, "argv": []})),
    ];
    for (input, expected) in cases {
        assert_eq!(run(&input, &flags(), &config), expected, "parsing {:?}", input);
    }
}

#[test]
fn test_single_pattern() {
    let config = with_terminators([pattern("^STOP:")]);
    let cases = [
        (
            vec!["--foo", "STOP:", "--bar"],
            json!({"options": {"foo": true}, "argv": ["--bar"]}),
        ),
        (
            vec!["STOP:", "--foo", "STOP:", "--bar"],
            json!({"options": {}, "argv": ["--foo", "STOP:", "--bar"]}),
        ),
        (
            vec!["stop:", "--foo", "STOP:", "--bar"],
            json!({"options": {"foo": true}, "argv": ["stop:", "--bar"]}),
        ),
        (
            vec!["STOP:", "STOP:"],
            json!({"options": {}, "argv": ["STOP:"]}),
        ),
        (
            vec![" STOP:", "--foo", "STOP:"],
            json!({"options": {"foo": true}, "argv": [" STOP:"]}),
        ),
    ];
    for (input, expected) in cases {
        assert_eq!(run(&input, &flags(), &config), expected, "parsing {:?}", input);
    }

    let config = with_terminators([pattern(r"^ENOUGH[, ]+ALREADY\b")]);
    for input in [
        vec!["--foo", "ENOUGH ALREADY", "--bar"],
        vec!["--foo", "ENOUGH, ,ALREADY!", "--bar"],
    ] {
        assert_eq!(
            run(&input, &flags(), &config),
            json!({"options": {"foo": true}, "argv": ["--bar"]}),
            "parsing {:?}",
            input
        );
    }
}

#[test]
fn test_multiple_patterns() {
    let config = with_terminators([pattern(r"^STOP\b"), pattern(r"\bTHAT$")]);
    assert_eq!(
        run(&["--foo", "STOP!", "--bar"], &flags(), &config),
        json!({"options": {"foo": true}, "argv": ["--bar"]})
    );
    assert_eq!(
        run(&["--bar", "STOPPPP", "--foo", "THAT"], &flags(), &config),
        json!({"options": {"bar": true, "foo": true}, "argv": ["STOPPPP"]})
    );
}

#[test]
fn test_mixed_kinds() {
    let config = Config::new()
        .with_terminator("STOP")
        .with_terminator(Regex::new("(?i)^(THAT|THIS)$").unwrap())
        .with_terminator("HALT");
    let cases = [
        (
            vec!["--foo", "STOP", "--bar"],
            json!({"options": {"foo": true}, "argv": ["--bar"]}),
        ),
        (
            vec!["THAT", "--foo", "--bar", "HALT"],
            json!({"options": {}, "argv": ["--foo", "--bar", "HALT"]}),
        ),
        (
            vec!["--foo", "this", "and", "that", "--bar"],
            json!({"options": {"foo": true}, "argv": ["and", "that", "--bar"]}),
        ),
        (
            vec!["--bar", "that", "and", "this", "--foo"],
            json!({"options": {"bar": true}, "argv": ["and", "this", "--foo"]}),
        ),
    ];
    for (input, expected) in cases {
        assert_eq!(run(&input, &flags(), &config), expected, "parsing {:?}", input);
    }
}

#[test]
fn test_parameter_interruption() {
    let schema = Schema::new()
        .option("--foo", "<value>")
        .option("--bar", "<name> <value>")
        .option("--files", "<paths...>");
    let config = with_terminators(["--"]);

    let cases = [
        (
            vec!["--foo", "--", "3"],
            json!({"options": {"foo": null}, "argv": ["3"]}),
        ),
        (
            vec!["--foo", "3", "--bar", "--", "4"],
            json!({"options": {"foo": "3", "bar": []}, "argv": ["4"]}),
        ),
        (
            vec!["--files", "foo", "bar", "--", "baz"],
            json!({"options": {"files": ["foo", "bar"]}, "argv": ["baz"]}),
        ),
        (
            vec!["--files", "--", "foo", "bar"],
            json!({"options": {"files": []}, "argv": ["foo", "bar"]}),
        ),
        (
            vec!["--bar", "3", "--", "4", "--foo", "1"],
            json!({"options": {"bar": ["3"]}, "argv": ["4", "--foo", "1"]}),
        ),
    ];
    for (input, expected) in cases {
        assert_eq!(run(&input, &schema, &config), expected, "parsing {:?}", input);
    }

    let config = with_terminators(["--"])
        .with_duplicates(Duplicates::Append)
        .with_alias_propagation(AliasPropagation::MatchedOnly);
    assert_eq!(
        run(
            &["--foo", "1", "--foo", "2", "--foo", "--", "--foo", "4"],
            &schema,
            &config
        ),
        json!({"options": {"foo": ["1", "2", null]}, "argv": ["--foo", "4"]})
    );
}

#[test]
fn test_tokens_after_terminator_are_already_expanded() {
    let schema = Schema::shorthand("ab");
    assert_eq!(
        run(&["-a", "--", "-ab"], &schema, &with_terminators(["--"])),
        json!({"options": {"a": true}, "argv": ["-a", "-b"]})
    );

    let unmixed = Config::new().with_mixed_order(false);
    assert_eq!(
        run(&["x", "-ab"], &schema, &unmixed),
        json!({"options": {}, "argv": ["x", "-a", "-b"]})
    );
}
