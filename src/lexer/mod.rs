//! Lexical analysis for arithmetic expressions.
//!
//! This module contains the lexer (tokenizer) that converts an expression
//! into a sequence of tokens for a downstream parser. It handles:
//!
//! - Tokenization through an ordered table of anchored regex rules
//! - Recognition of numbers, identifiers, operators and parentheses
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
