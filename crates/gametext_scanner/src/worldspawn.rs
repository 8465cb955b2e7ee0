//! Worldspawn property lookup.
//!
//! Map entity text is a sequence of brace-delimited blocks of quoted
//! key/value pairs. The first block is the worldspawn entity, whose
//! properties configure the whole map:
//!
//! ```text
//! {
//! "classname" "worldspawn"
//! "message" "The Edge"
//! }
//! ```
//!
//! Entity text comes out of the map compiler, so a block that does not open
//! with `{` means the content pipeline is broken. That is reported as
//! [`ErrorKind::CorruptContent`](gametext_foundation::ErrorKind::CorruptContent)
//! and the caller decides whether to abort.

use gametext_foundation::{Error, ErrorContext, Result};

use crate::source::Source;
use crate::token::{StopPolicy, Token};

/// Looks up `name` in the first entity block of `entities`.
///
/// Keys match ASCII case-insensitively and the first match wins. The walk
/// ends at `}`, at end of input, or at the first empty key or value.
///
/// # Errors
///
/// Returns a fatal corrupt-content error if the first token is not `{`.
pub fn extract_entity_property<'src>(
    entities: Source<'src>,
    name: &str,
) -> Result<Option<Token<'src>>> {
    let mut cursor = entities.cursor();

    match cursor.next_token(StopPolicy::DontStop) {
        Some(open) if open == "{" => {}
        other => {
            let offset = other.map_or(cursor.position(), |token| token.span().start);
            tracing::warn!(offset, "entity string does not start with '{{'");
            return Err(
                Error::corrupt_content("entity string doesn't start with {").with_context(
                    ErrorContext::new()
                        .with_offset(offset)
                        .with_frame(format!("extract_entity_property({name})")),
                ),
            );
        }
    }

    loop {
        let key = cursor.next_token(StopPolicy::DontStop);
        let value = cursor.next_token(StopPolicy::DontStop);

        let (Some(key), Some(value)) = (key, value) else {
            break;
        };
        if key.is_empty() || value.is_empty() || key == "}" {
            break;
        }

        if key.eq_ignore_ascii_case(name) {
            tracing::trace!(name, offset = value.span().start, "worldspawn key found");
            return Ok(Some(value));
        }
    }

    Ok(None)
}

/// [`extract_entity_property`] over UTF-8 entity text.
///
/// # Errors
///
/// Returns a fatal corrupt-content error if the first token is not `{`.
pub fn parse_worldspawn_key<'src>(entities: &'src str, name: &str) -> Result<Option<&'src str>> {
    let value = extract_entity_property(Source::new(entities), name)?;
    // tokens of a &str source always split at ASCII bytes
    Ok(value.and_then(|token| token.as_str()))
}
