//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates an entry of the lexer's rule table
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a rule for the lexer's rule table.
///
/// The pattern is anchored to the start of the remaining input. A rule
/// without a kind consumes its match without emitting a token.
///
/// # Example
///
/// ```ignore
/// MK_RULE!("[0-9]+", TokenKind::Number);
/// MK_RULE!("\\s+");
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:literal) => {
        Rule {
            regex: Regex::new(concat!("^", $pattern)).unwrap(),
            kind: None,
        }
    };
    ($pattern:literal, $kind:expr) => {
        Rule {
            regex: Regex::new(concat!("^", $pattern)).unwrap(),
            kind: Some($kind),
        }
    };
}
