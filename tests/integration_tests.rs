use get_options::{
    parse, parse_str, parse_with_config, AliasPropagation, Config, ParsedArgs, Schema, Value,
};
use serde_json::{json, Value as Json};

fn first_only() -> Config {
    Config::new().with_alias_propagation(AliasPropagation::FirstOnly)
}

fn split(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

fn to_json(parsed: &ParsedArgs) -> Json {
    serde_json::to_value(parsed).unwrap()
}

fn bundling_schema() -> Schema {
    Schema::new()
        .option("-h, --help, --usage", "")
        .option("-v, --version", "")
        .option("-n, --number-of-lines", "<number=\\d+>")
        .option("-m, --messages", "")
        .option("-i, --invert-matches", "")
        .option("-l, --level", "<number=\\d+>")
        .option("-d, --debug-level", "<number=\\d+>")
        .option("-c, --config", "<key> <value>")
        .option("-r, --range", "<min=\\d+> <max=\\d+>")
}

#[test]
fn test_bundled_short_options() {
    let cases = [
        (
            "-hvn2",
            json!({
                "options": {"help": true, "version": true, "numberOfLines": "2"},
                "argv": []
            }),
        ),
        (
            "-r10 20 -vn55id2",
            json!({
                "options": {
                    "range": ["10", "20"],
                    "version": true,
                    "numberOfLines": "55",
                    "invertMatches": true,
                    "debugLevel": "2"
                },
                "argv": []
            }),
        ),
        (
            "-mvl2",
            json!({
                "options": {"messages": true, "version": true, "level": "2"},
                "argv": []
            }),
        ),
    ];

    for (input, expected) in cases {
        let parsed = parse_with_config(split(input), &bundling_schema(), &first_only()).unwrap();
        assert_eq!(to_json(&parsed), expected, "parsing {}", input);
    }
}

#[test]
fn test_bundled_values_propagate_to_aliases() {
    let schema = Schema::new()
        .option("-m, --mutilate", "<bool>")
        .option("-u, --underline-urls", "<bool>")
        .option("-i, --indent", "<string>")
        .option("-c, --colour, --colours, --colourise", "<bool>");

    let parsed = parse(["-c0", "-u0"], &schema).unwrap();
    assert_eq!(
        to_json(&parsed),
        json!({
            "options": {
                "c": "0",
                "colour": "0",
                "colours": "0",
                "colourise": "0",
                "u": "0",
                "underlineUrls": "0"
            },
            "argv": []
        })
    );
}

#[test]
fn test_argument_and_option_order() {
    let schema = Schema::new()
        .option("-l, --level", "<level>")
        .option("-t, --type", "<type>")
        .option("-z, --set-size", "[width=\\d+] [height=\\d+]")
        .option("-c, --set-config", "<numbers=\\d+> <letters=[A-Za-z]+>")
        .option("-d, --delete-files", "<safely> <files...>")
        .option("-s, -T, --set-type", "<key> <type>");

    let parsed = parse_with_config(
        split("-l 2 --set-size 640 480 -s alpha beta gamma"),
        &schema,
        &first_only(),
    )
    .unwrap();
    assert_eq!(
        to_json(&parsed),
        json!({
            "options": {
                "level": "2",
                "setSize": ["640", "480"],
                "setType": ["alpha", "beta"]
            },
            "argv": ["gamma"]
        })
    );

    let parsed = parse_with_config(
        split("foo -l 2 bar --set-size 640 480 760 -s alpha beta gamma"),
        &schema,
        &first_only(),
    )
    .unwrap();
    assert_eq!(parsed.argv, vec!["foo", "bar", "760", "gamma"]);
    assert_eq!(parsed.options.get("level"), Some(&Value::from("2")));
}

#[test]
fn test_equals_sign_assignment() {
    let schema = Schema::new()
        .option("-w, --width", "<number>")
        .option("-c, --config", "<string>");

    let parsed = parse_with_config(
        split("--width=320 --config=/path/to/some/file"),
        &schema,
        &first_only(),
    )
    .unwrap();
    assert_eq!(
        to_json(&parsed),
        json!({
            "options": {"width": "320", "config": "/path/to/some/file"},
            "argv": []
        })
    );

    let config = first_only().with_equals(false);
    let parsed = parse_with_config(["--width=320"], &schema, &config).unwrap();
    assert!(parsed.options.is_empty());
    assert_eq!(parsed.argv, vec!["--width=320"]);
}

#[test]
fn test_niladic_bundles() {
    let schema = Schema::new()
        .option("-a", "")
        .option("-b", "")
        .option("-c", "")
        .option("-d", "<arg>");

    let parsed = parse_with_config(["-ab0c"], &schema, &first_only()).unwrap();
    assert_eq!(
        to_json(&parsed),
        json!({"options": {"a": true, "b": true}, "argv": ["0c"]})
    );

    let parsed = parse_with_config(["-a0", "-cda0"], &schema, &first_only()).unwrap();
    assert_eq!(
        to_json(&parsed),
        json!({"options": {"a": true, "c": true, "d": "a0"}, "argv": ["0"]})
    );
}

#[test]
fn test_bundling_can_be_disabled() {
    let schema = Schema::shorthand("abc");
    let config = Config::new().with_bundling(false);
    let parsed = parse_with_config(["-ab", "-c"], &schema, &config).unwrap();
    assert_eq!(
        to_json(&parsed),
        json!({"options": {"c": true}, "argv": ["-ab"]})
    );
}

#[test]
fn test_variadic_options() {
    let schema = Schema::new()
        .option("-f, --files", "<list...>")
        .option("-l, --list", "<letter=[A-Za-z]> <integer=\\d+> <mystery...>")
        .option("-n, --name", "<name>");

    let parsed = parse_with_config(
        split("-f one two three four five"),
        &schema,
        &first_only(),
    )
    .unwrap();
    assert_eq!(
        to_json(&parsed),
        json!({
            "options": {"files": ["one", "two", "three", "four", "five"]},
            "argv": []
        })
    );

    let parsed = parse_with_config(
        split("-f one two three 4 5 -lA3 uno dos tres cuatro -n Ajaja"),
        &schema,
        &first_only(),
    )
    .unwrap();
    assert_eq!(
        to_json(&parsed),
        json!({
            "options": {
                "files": ["one", "two", "three", "4", "5"],
                "list": ["A", "3", "uno", "dos", "tres", "cuatro"],
                "name": "Ajaja"
            },
            "argv": []
        })
    );
}

#[test]
fn test_anonymous_options() {
    let cases = [
        (
            "--something --size 640 480 --yea=nah unknown",
            json!({
                "options": {"something": true, "size": ["640", "480"], "yea": "nah"},
                "argv": ["unknown"]
            }),
        ),
        (
            "--something --size=640 480 --yea nah unknown",
            json!({
                "options": {"something": true, "size": "640", "yea": true},
                "argv": ["480", "nah", "unknown"]
            }),
        ),
        (
            "--path /to/some/file --verbose -q argv1 argv2",
            json!({
                "options": {"path": "/to/some/file", "verbose": true, "q": true},
                "argv": ["argv1", "argv2"]
            }),
        ),
        (
            "--path /to/some/file /and/some/other/file --verbose",
            json!({
                "options": {
                    "path": ["/to/some/file", "/and/some/other/file"],
                    "verbose": true
                },
                "argv": []
            }),
        ),
        (
            "one two three --path /to/some/file /and/another/file /and/yet/another --files everywhere man",
            json!({
                "options": {
                    "path": ["/to/some/file", "/and/another/file", "/and/yet/another"],
                    "files": true
                },
                "argv": ["one", "two", "three", "everywhere", "man"]
            }),
        ),
        (
            "1-one 2-two 3-three 4-four --path=/to/some file --verbose -log=log.txt argv1 argv2",
            json!({
                "options": {"path": "/to/some", "verbose": true, "log": "log.txt"},
                "argv": ["1-one", "2-two", "3-three", "4-four", "file", "argv1", "argv2"]
            }),
        ),
    ];

    for (input, expected) in cases {
        let parsed = parse(split(input), &Schema::auto()).unwrap();
        assert_eq!(to_json(&parsed), expected, "parsing {}", input);
    }
}

#[test]
fn test_anonymous_options_without_camel_case() {
    let config = Config::new().with_camel_case(false);
    let parsed = parse_with_config(
        split("--not-camel-cased --file-name output.log --verbose-logging"),
        &Schema::auto(),
        &config,
    )
    .unwrap();
    assert_eq!(
        to_json(&parsed),
        json!({
            "options": {
                "not-camel-cased": true,
                "file-name": "output.log",
                "verbose-logging": true
            },
            "argv": []
        })
    );
}

#[test]
fn test_shell_style_definitions() {
    let cases = [
        ("abc", "-a -b -c", json!({"a": true, "b": true, "c": true})),
        ("a:b:c:", "-a1 -b2 -c3", json!({"a": "1", "b": "2", "c": "3"})),
        (
            "ab:c:de:f:",
            "-abc -c1 -d -ef",
            json!({"a": true, "b": "c", "c": "1", "d": true, "e": "f"}),
        ),
        (
            "abc d:e2: f1:",
            "-a1b -bd2 -c2a",
            json!({"a": true, "b": true, "d": "2", "c": true, "2": "a", "1": "b"}),
        ),
    ];

    for (shorthand, input, expected) in cases {
        let parsed = parse(split(input), &Schema::shorthand(shorthand)).unwrap();
        assert_eq!(
            to_json(&parsed),
            json!({"options": expected, "argv": []}),
            "parsing {} with {}",
            input,
            shorthand
        );
    }
}

#[test]
fn test_key_order_follows_first_assignment() {
    let schema = Schema::new()
        .option("-b, --beta", "")
        .option("-a, --alpha", "");
    let parsed = parse(["-a", "-b", "-a"], &schema).unwrap();
    let keys: Vec<_> = parsed.options.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "alpha", "b", "beta"]);
}

#[test]
fn test_empty_input() {
    let schema = Schema::new().option("-e", "");

    assert_eq!(parse(Vec::<&str>::new(), &schema).unwrap(), ParsedArgs::default());
    assert_eq!(parse_str("", &schema).unwrap(), ParsedArgs::default());
    assert_eq!(
        to_json(&parse(Vec::<String>::new(), &Schema::auto()).unwrap()),
        json!({"options": {}, "argv": []})
    );
}

#[test]
fn test_empty_schema() {
    let parsed = parse(["--option=value"], &Schema::new()).unwrap();
    assert_eq!(
        to_json(&parsed),
        json!({"options": {}, "argv": ["--option=value"]})
    );

    let parsed = parse(["--option=value"], &Schema::auto()).unwrap();
    assert_eq!(
        to_json(&parsed),
        json!({"options": {"option": "value"}, "argv": []})
    );

    let parsed = parse(["value"], &Schema::new()).unwrap();
    assert_eq!(to_json(&parsed), json!({"options": {}, "argv": ["value"]}));
}

#[test]
fn test_values_convert_to_native_types() {
    let schema = Schema::new()
        .option("-v", "")
        .option("-o", "<file>")
        .option("-I", "<dirs...>");
    let parsed = parse(["-v", "-o", "out", "-I", "a", "b"], &schema).unwrap();

    let verbose: bool = parsed.options.get("v").cloned().unwrap().try_into().unwrap();
    let output: String = parsed.options.get("o").cloned().unwrap().try_into().unwrap();
    let dirs: Vec<String> = parsed.options.get("I").cloned().unwrap().try_into().unwrap();

    assert!(verbose);
    assert_eq!(output, "out");
    assert_eq!(dirs, vec!["a", "b"]);
}
