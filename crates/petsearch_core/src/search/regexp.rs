//! Case-insensitive `regexp` SQL function.
//!
//! SQLite parses `X REGEXP Y` as `regexp(Y, X)` but ships no implementation.
//! This module registers one backed by the `regex` crate. Patterns compile
//! once per statement through SQLite auxiliary data.

use regex::{Regex, RegexBuilder};
use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::types::ValueRef;
use rusqlite::Connection;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

const REGEXP_FUNCTION: &str = "regexp";

/// Compiles a caller pattern with case-insensitive matching.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Registers `regexp(pattern, text)` on the connection.
///
/// Non-text values never match. A pattern that does not compile fails the
/// statement with the compiler's message.
pub fn register_regexp_function(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        REGEXP_FUNCTION,
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        regexp_match,
    )
}

fn regexp_match(ctx: &Context<'_>) -> rusqlite::Result<bool> {
    let matcher = ctx.get_or_create_aux(0, |pattern| -> Result<Regex, BoxError> {
        Ok(compile_pattern(pattern.as_str()?)?)
    })?;

    match ctx.get_raw(1) {
        ValueRef::Text(bytes) => {
            let text = std::str::from_utf8(bytes)
                .map_err(|err| rusqlite::Error::UserFunctionError(err.into()))?;
            Ok(matcher.is_match(text))
        }
        _ => Ok(false),
    }
}
