//! Integration tests for the token scanner
//!
//! Tests token boundaries, quoting, stop policies, and both source kinds.

use gametext_scanner::{Source, StopPolicy, Token, parse_token, tokenize_all};

fn words(source: &str) -> Vec<String> {
    tokenize_all(source)
        .iter()
        .map(|token| token.as_str().unwrap_or_default().to_string())
        .collect()
}

fn line(cursor: &mut gametext_scanner::Cursor<'_>) -> Vec<String> {
    std::iter::from_fn(|| cursor.next_token(StopPolicy::StopOnNewline))
        .map(|token| token.to_string())
        .collect()
}

// =============================================================================
// Basic Scanning
// =============================================================================

#[test]
fn words_split_on_whitespace() {
    assert_eq!(
        words("  bind\tmouse1 \r\n +attack  "),
        ["bind", "mouse1", "+attack"]
    );
}

#[test]
fn punctuation_is_not_special() {
    assert_eq!(words("say hi;quit"), ["say", "hi;quit"]);
    assert_eq!(words("{ } ( )"), ["{", "}", "(", ")"]);
}

#[test]
fn empty_and_blank_sources() {
    assert!(tokenize_all("").is_empty());
    assert!(tokenize_all(" \t\r\n ").is_empty());
}

#[test]
fn exhausted_cursor_stays_put() {
    let mut cursor = Source::new("one").cursor();
    assert!(cursor.next_token(StopPolicy::DontStop).is_some());
    let end = cursor.position();
    for _ in 0..3 {
        assert!(cursor.next_token(StopPolicy::DontStop).is_none());
        assert_eq!(cursor.position(), end);
    }
    assert!(cursor.is_exhausted());
}

// =============================================================================
// Quoting
// =============================================================================

#[test]
fn quoted_token_keeps_whitespace() {
    let tokens = tokenize_all("seta name \"Big Bob\" 1");
    assert_eq!(tokens[2], "Big Bob");
    assert!(tokens[2].is_quoted());
    assert_eq!(tokens[3], "1");
}

#[test]
fn empty_quotes_are_a_real_token() {
    let tokens = tokenize_all("set motd \"\" next");
    assert_eq!(tokens.len(), 4);
    assert!(tokens[2].is_empty());
    assert!(tokens[2].is_quoted());
    assert_eq!(tokens[3], "next");
}

#[test]
fn unterminated_quote_runs_to_end() {
    let tokens = tokenize_all("echo \"no closing quote");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1], "no closing quote");
}

#[test]
fn quote_inside_word_is_literal() {
    assert_eq!(words("ab\"cd ef"), ["ab\"cd", "ef"]);
}

#[test]
fn quoted_token_crosses_newlines() {
    let mut cursor = Source::new("say \"line one\nline two\" end").cursor();
    assert_eq!(line(&mut cursor), ["say", "line one\nline two", "end"]);
}

// =============================================================================
// Stop Policies
// =============================================================================

#[test]
fn stop_on_newline_reads_one_line_at_a_time() {
    let mut cursor = Source::new("a b\nc\n\nd").cursor();
    assert_eq!(line(&mut cursor), ["a", "b"]);
    assert!(line(&mut cursor).is_empty());
    assert_eq!(cursor.peek_byte(), Some(b'\n'));

    // switch policy to step over the newline
    let c = cursor.next_token(StopPolicy::DontStop).unwrap();
    assert_eq!(c, "c");
    assert_eq!(line(&mut cursor), Vec::<String>::new());
    assert_eq!(cursor.next_token(StopPolicy::DontStop).unwrap(), "d");
}

#[test]
fn tokens_iterator_yields_one_line() {
    let tokens = Source::new("map dm1\nkick all").cursor().tokens(StopPolicy::StopOnNewline);
    let first: Vec<_> = tokens.clone().map(|t| t.to_string()).collect();
    assert_eq!(first, ["map", "dm1"]);

    let mut rest = tokens.into_cursor();
    let all: Vec<_> = std::iter::from_fn(|| parse_token(&mut rest, StopPolicy::DontStop))
        .map(|t| t.to_string())
        .collect();
    assert_eq!(all, ["map", "dm1", "kick", "all"]);
}

// =============================================================================
// Sources
// =============================================================================

#[test]
fn nul_terminated_source_stops_at_nul() {
    let buffer = b"bind x \"+jump\"\0garbage after";
    let source = Source::from_nul_terminated(buffer);
    assert_eq!(source.len(), 14);
    let tokens: Vec<Token<'_>> = source.cursor().tokens(StopPolicy::DontStop).collect();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2], "+jump");
}

#[test]
fn bounded_source_ignores_bytes_past_end() {
    let buffer = b"alpha beta gamma";
    let source = Source::from_bytes(&buffer[..8]);
    let tokens: Vec<_> = source.cursor().tokens(StopPolicy::DontStop).collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].as_bytes(), b"be");
}

#[test]
fn spans_point_back_into_source() {
    let text = "ent \"light\" 300";
    for token in tokenize_all(text) {
        assert_eq!(token.span().slice(text.as_bytes()), token.as_bytes());
    }
}

#[test]
fn non_utf8_bytes_are_scanned() {
    let buffer = [b'a', 0xff, b' ', b'b'];
    let tokens: Vec<_> = Source::from_bytes(&buffer)
        .cursor()
        .tokens(StopPolicy::DontStop)
        .collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].as_str(), None);
    assert_eq!(tokens[0].as_bytes(), &[b'a', 0xff]);
}
