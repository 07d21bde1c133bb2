#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use crate::lexer::lexer::tokenize;

/// Byte offset into the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line's text (including its line
/// terminator) and the character column of `position` within it.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= content.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = line.get(..position - start)?.chars().count();
            return Some((index + 1, line.to_string(), line_pos));
        }

        start = end;
    }

    None
}


/// Columns a tab occupies in rendered diagnostics.
const TAB_WIDTH: usize = 4;

/// Renders `error` as a caret diagnostic pointing into `source`.
///
/// ```text
/// Error: UnrecognisedCharacter (`&` is not a number, ...)
/// -> stdin
///   |
/// 1 | 3 & 4
///   | --^
/// ```
pub fn render_error(error: &Error, source: &str, name: &str) -> String {
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    rendered.push_str(&format!("-> {}\n", name));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0) else {
        return rendered;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text, line_pos);
    let echoed = line_text_removed.trim_end_matches(&['\r', '\n'][..]).replace('\t', &" ".repeat(TAB_WIDTH));
    rendered.push_str(&format!("{} | {}\n", line_string, echoed));

    let arrows = display_width(line_text_removed.chars().take(line_pos - removed_whitespace)) + 1;

    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    rendered
}

/// Strips leading whitespace, but never past the character at `limit`.
fn remove_starting_whitespace(string: &str, limit: usize) -> (String, usize) {
    let start = string.chars().take(limit).take_while(|c| c.is_whitespace()).count();

    (string.chars().skip(start).collect(), start)
}

fn display_width(chars: impl Iterator<Item = char>) -> usize {
    chars.map(|c| if c == '\t' { TAB_WIDTH } else { 1 }).sum()
}
