//! End-to-end scenarios covering the parser's main behaviors: mixed flags
//! and positionals, the separator, unknown flags, the help flag, aliases,
//! and configuration rejection.

use crate::*;

fn argv(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_owned()).collect()
}

fn default_mixed_config() -> ParserConfig {
    let mut config = ParserConfig::default();
    config
        .add_flag("-a", DataType::Presence, 0, 1, None, None)
        .unwrap();
    config
        .add_flag("-b", DataType::Double, 0, -1, None, None)
        .unwrap();
    config
        .add_flag("-c", DataType::String, 1, 2, None, None)
        .unwrap();
    config
        .add_positional("word", DataType::String, true, false, None, None)
        .unwrap();
    config
        .add_positional("another", DataType::Int, true, false, None, None)
        .unwrap();
    config
}

#[test]
fn mixed_flags_and_positionals() {
    let config = default_mixed_config();
    let outcome = config
        .parse(&argv(&[
            "prog", "-b", "0", "abcd", "-c", "string", "100", "-c", "anotherstring", "-b", "-1",
            "-b", "-100",
        ]))
        .unwrap();
    let ParseOutcome::Success { flags, positionals } = outcome else {
        panic!("expected success")
    };

    assert!(!flags.has("-a"));
    assert_eq!(flags.count("-b"), 3);
    assert_eq!(flags.get_at("-b", 0).unwrap().as_double(), 0.0);
    assert_eq!(flags.get_at("-b", 1).unwrap().as_double(), -1.0);
    assert_eq!(flags.get_at("-b", 2).unwrap().as_double(), -100.0);

    assert_eq!(flags.count("-c"), 2);
    assert_eq!(flags.get_at("-c", 0).unwrap().as_str(), "string");
    assert_eq!(flags.get_at("-c", 1).unwrap().as_str(), "anotherstring");

    assert_eq!(positionals.get("word").unwrap().as_str(), "abcd");
    assert_eq!(positionals.get("another").unwrap().as_int(), 100);
}

#[test]
fn negative_number_positional_via_separator() {
    let config = default_mixed_config();
    let outcome = config
        .parse(&argv(&[
            "prog", "-b", "0", "abcd", "-c", "string", "--", "-100",
        ]))
        .unwrap();
    let ParseOutcome::Success { positionals, .. } = outcome else {
        panic!("expected success")
    };
    assert_eq!(positionals.get("another").unwrap().as_int(), -100);
}

#[test]
fn unknown_flag_without_separator() {
    let config = default_mixed_config();
    let err = config
        .parse(&argv(&[
            "prog", "-b", "0", "abcd", "-c", "string", "-100",
        ]))
        .unwrap_err();
    assert_eq!(err, ParseError::UnknownFlag("-100".into()));
}

#[test]
fn help_wins_over_everything_else() {
    let config = ParserConfig::default();
    let outcome = config
        .parse(&argv(&[
            "prog", "--bonk", "-a", "100", "wordle", "-h", "bamboo",
        ]))
        .unwrap();
    assert!(matches!(outcome, ParseOutcome::HelpRequested));
}

#[test]
fn alias_accumulates_under_canonical_name() {
    let mut config = ParserConfig::new();
    config
        .add_flag("--file", DataType::String, 0, -1, None, None)
        .unwrap();
    config.add_flag_alias("--file", "--fi").unwrap();
    config.add_flag_alias("--file", "-f").unwrap();

    let outcome = config
        .parse(&argv(&[
            "prog", "-f", "a", "--fi", "b", "--fi", "c", "-f", "d",
        ]))
        .unwrap();
    let ParseOutcome::Success { flags, .. } = outcome else {
        panic!("expected success")
    };

    assert_eq!(flags.count("--file"), 4);
    assert_eq!(
        flags
            .entry("--file")
            .unwrap()
            .values()
            .iter()
            .map(Value::as_str)
            .collect::<Vec<_>>(),
        vec!["a", "b", "c", "d"]
    );
    assert!(!flags.has("-f"));
    assert!(!flags.has("--fi"));
}

#[test]
fn configuration_rejection_for_positional_ordering() {
    let mut config = ParserConfig::new();
    config
        .add_positional("required_one", DataType::String, true, false, None, None)
        .unwrap();
    config
        .add_positional("optional_one", DataType::String, false, false, None, None)
        .unwrap();
    assert_eq!(
        config.add_positional("required_two", DataType::String, true, false, None, None),
        Err(ConfigError::RequiredAfterOptional("required_two".into()))
    );

    let mut config = ParserConfig::new();
    config
        .add_positional("variadic_one", DataType::String, true, true, None, None)
        .unwrap();
    assert_eq!(
        config.add_positional("anything", DataType::String, false, false, None, None),
        Err(ConfigError::AnythingAfterVariadic("anything".into()))
    );
}

#[test]
fn trailing_separator_is_not_an_error() {
    let mut config = ParserConfig::default();
    config
        .add_positional("word", DataType::String, false, false, None, None)
        .unwrap();
    let outcome = config.parse(&argv(&["prog", "--"])).unwrap();
    let ParseOutcome::Success { positionals, .. } = outcome else {
        panic!("expected success")
    };
    assert!(!positionals.has("word"));
}

#[test]
fn flag_like_token_after_separator_becomes_positional() {
    let mut config = ParserConfig::default();
    config
        .add_positional("word", DataType::String, true, false, None, None)
        .unwrap();
    let outcome = config.parse(&argv(&["prog", "--", "-x"])).unwrap();
    let ParseOutcome::Success { positionals, .. } = outcome else {
        panic!("expected success")
    };
    assert_eq!(positionals.get("word").unwrap().as_str(), "-x");
}

#[test]
fn variadic_positional_absorbs_remaining_tokens() {
    let mut config = ParserConfig::new();
    config
        .add_positional("head", DataType::String, true, false, None, None)
        .unwrap();
    config
        .add_positional("rest", DataType::Int, true, true, None, None)
        .unwrap();
    let outcome = config
        .parse(&argv(&["prog", "first", "1", "2", "3"]))
        .unwrap();
    let ParseOutcome::Success { positionals, .. } = outcome else {
        panic!("expected success")
    };
    assert_eq!(positionals.get("head").unwrap().as_str(), "first");
    assert_eq!(positionals.count("rest"), 3);
    assert_eq!(positionals.get_at("rest", 2).unwrap().as_int(), 3);
}

#[test]
fn too_many_positionals_without_variadic_absorber() {
    let mut config = ParserConfig::new();
    config
        .add_positional("only", DataType::String, true, false, None, None)
        .unwrap();
    let err = config.parse(&argv(&["prog", "a", "b"])).unwrap_err();
    assert_eq!(err, ParseError::TooManyPositionals);
}

#[test]
fn cannot_parse_flag_value() {
    let mut config = ParserConfig::new();
    config
        .add_flag("-n", DataType::Int, 0, 1, None, None)
        .unwrap();
    let err = config.parse(&argv(&["prog", "-n", "abc"])).unwrap_err();
    assert_eq!(
        err,
        ParseError::CannotParseFlag {
            flag: "-n".into(),
            raw: "abc".into()
        }
    );
}

#[test]
fn cannot_parse_positional_value() {
    let mut config = ParserConfig::new();
    config
        .add_positional("count", DataType::Int, true, false, None, None)
        .unwrap();
    let err = config.parse(&argv(&["prog", "abc"])).unwrap_err();
    assert_eq!(
        err,
        ParseError::CannotParsePositional {
            name: "count".into(),
            raw: "abc".into()
        }
    );
}

#[test]
fn empty_argument_in_argv_is_rejected() {
    let config = ParserConfig::default();
    let err = config.parse(&argv(&["prog", ""])).unwrap_err();
    assert_eq!(err, ParseError::EmptyArgument);
}

#[test]
fn program_name_falls_back_to_argv_zero() {
    let config = ParserConfig::new();
    assert_eq!(config.program_name(&argv(&["my-prog"])), "my-prog");
}

#[test]
fn program_name_override_wins_over_argv_zero() {
    let mut config = ParserConfig::new();
    config.set_program_name("overridden");
    assert_eq!(config.program_name(&argv(&["my-prog"])), "overridden");
}
