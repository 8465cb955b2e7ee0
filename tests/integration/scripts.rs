//! Config scripts and map text through the scanner.

use gametext::scanner::{
    Source, StopPolicy, parse_next_float, parse_next_int, parse_worldspawn_key, try_parse_float,
    try_parse_int,
};

const AUTOEXEC: &str = "\
seta name \"Big Bob\"
seta sensitivity 3.5
bind MOUSE1 \"+attack\"

seta com_maxfps 125
";

fn command_words(line: &str) -> Vec<String> {
    Source::new(line)
        .cursor()
        .tokens(StopPolicy::StopOnNewline)
        .map(|t| t.to_string())
        .collect()
}

// =============================================================================
// Scripts
// =============================================================================

#[test]
fn script_splits_into_commands() {
    let commands: Vec<_> = AUTOEXEC
        .lines()
        .map(command_words)
        .filter(|words| !words.is_empty())
        .collect();
    assert_eq!(commands.len(), 4);
    assert_eq!(commands[0], ["seta", "name", "Big Bob"]);
    assert_eq!(commands[2], ["bind", "MOUSE1", "+attack"]);
    assert_eq!(commands[3], ["seta", "com_maxfps", "125"]);
}

#[test]
fn numeric_arguments_line_by_line() {
    let mut cursor = Source::new("seta sensitivity 3.5\nseta com_maxfps 125").cursor();
    cursor.next_token(StopPolicy::StopOnNewline);
    cursor.next_token(StopPolicy::StopOnNewline);
    assert_eq!(parse_next_float(&mut cursor, 1.0, StopPolicy::StopOnNewline), 3.5);

    // the line is done; the newline is left for the caller
    assert_eq!(parse_next_float(&mut cursor, 1.0, StopPolicy::StopOnNewline), 1.0);

    // resuming without the stop policy steps over it
    assert_eq!(cursor.next_token(StopPolicy::DontStop).unwrap(), "seta");
    cursor.next_token(StopPolicy::StopOnNewline);
    assert_eq!(parse_next_int(&mut cursor, 0, StopPolicy::StopOnNewline), 125);
    assert!(cursor.is_exhausted());
}

#[test]
fn whole_script_token_count() {
    let total = Source::new(AUTOEXEC)
        .cursor()
        .tokens(StopPolicy::DontStop)
        .count();
    assert_eq!(total, 12);
}

// =============================================================================
// Map Text
// =============================================================================

#[test]
fn worldspawn_settings_parse_as_numbers() {
    let entities =
        "{\n\"classname\" \"worldspawn\"\n\"gravity\" \"600\"\n\"_ambient\" \"0.35\"\n}\n";
    let gravity = parse_worldspawn_key(entities, "gravity").unwrap().unwrap();
    assert_eq!(try_parse_int(gravity.as_bytes()), Some(600));
    let ambient = parse_worldspawn_key(entities, "_ambient").unwrap().unwrap();
    assert_eq!(try_parse_float(ambient.as_bytes()), Some(0.35));
}

#[test]
fn corrupt_map_text_is_fatal() {
    let err = parse_worldspawn_key("\"classname\" \"worldspawn\"", "classname").unwrap_err();
    assert!(err.is_fatal());
}
