use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_RULE, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub struct Rule {
    pub regex: Regex,
    /// `None` consumes the match without producing a token.
    pub kind: Option<TokenKind>,
}

lazy_static! {
    /// Classification rules in priority order. The first rule whose pattern
    /// matches at the cursor wins, and its match is taken whole.
    pub static ref RULES: Vec<Rule> = vec![
        // Separators minus the no-break spaces, plus the ASCII control separators.
        MK_RULE!(r"[[\t\n\x0B\x0C\r\x1C-\x1F\p{Zs}\p{Zl}\p{Zp}]--[\x{A0}\x{2007}\x{202F}]]+"),
        MK_RULE!("[0-9]+", TokenKind::Number),
        MK_RULE!("[a-zA-Z_][a-zA-Z0-9_]*", TokenKind::Identifier),
        MK_RULE!("[+\\-*/]", TokenKind::Operator),
        MK_RULE!("[()]", TokenKind::Parenthesis),
    ];
}

pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            tokens: vec![],
        }
    }

    pub fn push(&mut self, token: Token) {
        tracing::trace!(kind = %token.kind, value = %token.value, start = token.span.start.0, "token");
        self.tokens.push(token);
    }

    /// Character at byte offset `pos`, or `None` past the end of input.
    pub fn at(&self, pos: usize) -> Option<char> {
        self.remainder(pos).chars().next()
    }

    pub fn remainder(&self, pos: usize) -> &'a str {
        self.source.get(pos..).unwrap_or("")
    }

    pub fn at_eof(&self, pos: usize) -> bool {
        pos >= self.source.len()
    }

    /// Scans one rule match starting at `pos`.
    ///
    /// Returns the token produced (if the rule emits one) and the offset
    /// where the next step starts, which is always past `pos`.
    pub fn step(&self, pos: usize, current: char) -> Result<(Option<Token>, usize), Error> {
        let remaining = self.remainder(pos);

        for rule in RULES.iter() {
            if let Some(matched) = rule.regex.find(remaining) {
                let end = pos + matched.end();
                let token = rule.kind.map(|kind| {
                    MK_TOKEN!(kind, String::from(matched.as_str()), Span { start: Position(pos), end: Position(end) })
                });

                return Ok((token, end));
            }
        }

        tracing::debug!(character = ?current, offset = pos, "unrecognised character");
        Err(Error::new(ErrorImpl::UnrecognisedCharacter { character: current }, Position(pos)))
    }

    pub fn finish(mut self) -> Vec<Token> {
        let end = self.source.len();
        self.push(MK_TOKEN!(TokenKind::EOF, String::new(), Span { start: Position(end), end: Position(end) }));
        self.tokens
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);
    let mut pos = 0;

    while let Some(current) = lex.at(pos) {
        let (token, next) = lex.step(pos, current)?;

        if let Some(token) = token {
            lex.push(token);
        }

        pos = next;
    }

    debug_assert!(lex.at_eof(pos));
    Ok(lex.finish())
}
