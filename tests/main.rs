use argbind::{CommandLineParser, DecodeError, Kind, OptionNames, ParseError};
use std::path::PathBuf;

#[test]
fn missing_required_positional() {
    let mut parser = CommandLineParser::new(["prog"]);
    parser.positional::<PathBuf>("input").required();

    let result = parser.parse();

    assert_eq!(
        result,
        Err(ParseError::MissingPositional {
            name: "input".to_string()
        })
    );
}

#[test]
fn missing_required_option() {
    let mut parser = CommandLineParser::new(["prog", "input"]);
    parser.positional::<PathBuf>("input").required();
    parser.option::<PathBuf>(("--output", "-o")).required();

    let result = parser.parse();

    assert_eq!(
        result,
        Err(ParseError::MissingOption {
            name: "--output".to_string()
        })
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "missing required option: --output"
    );
}

#[test]
fn unknown_option() {
    let mut parser = CommandLineParser::new(["prog", "--nope"]);
    parser.positional::<PathBuf>("input");
    parser.option::<PathBuf>(("--output", "-o"));

    let result = parser.parse();

    assert_eq!(
        result,
        Err(ParseError::UnknownOption {
            name: "--nope".to_string()
        })
    );
    assert_eq!(result.unwrap_err().to_string(), "unknown option: --nope");
}

#[test]
fn bool_flag_sets_true() {
    let mut parser = CommandLineParser::new(["prog", "--do-thing", "file", "-o", "out"]);
    let input = parser.positional::<PathBuf>("input").required().key();
    let output = parser.option::<PathBuf>(("--output", "-o")).key();
    let do_thing = parser.option::<bool>(("--do-thing", "-do")).key();

    let matches = parser.parse().unwrap();

    assert_eq!(matches.get(do_thing), Some(true));
    assert_eq!(matches.get(input), Some(PathBuf::from("file")));
    assert_eq!(matches.get(output), Some(PathBuf::from("out")));
}

#[test]
fn short_bool_flag_sets_true() {
    let mut parser = CommandLineParser::new(["prog", "-do"]);
    let do_thing = parser.option::<bool>(("--do-thing", "-do")).key();

    let matches = parser.parse().unwrap();

    assert_eq!(matches.get(do_thing), Some(true));
}

#[test]
fn path_option_parses() {
    let mut parser = CommandLineParser::new(["prog", "in.txt", "-o", "res/out.txt"]);
    let input = parser.positional::<PathBuf>("input").required().key();
    let output = parser.option::<PathBuf>(("--output", "-o")).required().key();

    let matches = parser.parse().unwrap();

    assert_eq!(matches.get(input), Some(PathBuf::from("in.txt")));
    assert_eq!(matches.get(output), Some(PathBuf::from("res/out.txt")));
}

#[test]
fn mixed_types_and_prefixes() {
    let mut parser = CommandLineParser::new([
        "prog",
        "src/in",
        "--level=-3",
        "-r",
        "0.25",
        "--name=copy",
        "7",
        "--verbose=false",
    ]);
    let input = parser.positional::<PathBuf>("input").required().key();
    let count = parser.positional::<u64>("count").required().key();
    let level = parser.option::<i64>(OptionNames::long("--level")).key();
    let ratio = parser.option::<f64>(("--ratio", "-r")).required().key();
    let name = parser.option::<String>(("--name", "-n")).key();
    let verbose = parser.option::<bool>(("--verbose", "-v")).key();

    let matches = parser.parse().unwrap();

    assert_eq!(matches.get(input), Some(PathBuf::from("src/in")));
    assert_eq!(matches.get(count), Some(7));
    assert_eq!(matches.get(level), Some(-3));
    assert_eq!(matches.get(ratio), Some(0.25));
    assert_eq!(matches.get(name), Some("copy".to_string()));
    assert_eq!(matches.get(verbose), Some(false));
}

#[test]
fn missing_value_after_short_option() {
    let mut parser = CommandLineParser::new(["prog", "in", "-o"]);
    parser.positional::<PathBuf>("input").required();
    parser.option::<PathBuf>(("--output", "-o")).required();

    let result = parser.parse();

    assert_eq!(
        result,
        Err(ParseError::MissingValue {
            name: "-o".to_string()
        })
    );
}

#[test]
fn bad_value() {
    let mut parser = CommandLineParser::new(["prog", "--jobs=four"]);
    parser.option::<u64>(OptionNames::long("--jobs"));

    let result = parser.parse();

    assert_eq!(
        result,
        Err(ParseError::InvalidValue {
            name: "--jobs".to_string(),
            raw: "four".to_string(),
            source: DecodeError::Invalid { kind: Kind::UInt64 },
        })
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "--jobs: bad value (uint64) 'four'"
    );
}

#[test]
fn too_many_positionals() {
    let mut parser = CommandLineParser::new(["prog", "a", "b"]);
    parser.positional::<String>("only");

    let result = parser.parse();

    assert_eq!(
        result.unwrap_err().to_string(),
        "unexpected positional argument #1: 'b'"
    );
}

#[test]
fn optional_arguments_absent() {
    let mut parser = CommandLineParser::new(["prog"]);
    let input = parser.positional::<PathBuf>("input").key();
    let level = parser.option::<i64>(("--level", "-l")).key();
    let verbose = parser.option::<bool>(("--verbose", "-v")).key();

    let matches = parser.parse().unwrap();

    assert_eq!(matches.get(input), None);
    assert_eq!(matches.get_or(level, -1), -1);
    assert!(!matches.contains(verbose));
}
