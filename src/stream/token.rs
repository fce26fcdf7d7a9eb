//! Classification of raw input tokens
//!
//! Every line of input is either a number, a control command, or garbage.
//! [`Token::parse`] never fails; callers match on the variant.

use core::str::FromStr;

#[cfg(feature = "std")]
use std::string::{String, ToString};

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

/// Control commands recognised in the input stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `q`, `quit`, `end`
    Quit,
    /// `flush`, `reset`, `clear`
    Reset,
    /// `precision`, optionally followed by the new value
    Precision(Option<i64>),
}

/// A classified input token
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A finite real number
    Value(f64),
    /// A control command
    Command(Command),
    /// Anything else, including empty input and non-finite numbers
    Malformed(String),
}

impl Token {
    /// Classify a raw token
    ///
    /// Surrounding whitespace is ignored and command words match
    /// case-insensitively.
    ///
    /// ```
    /// use streamstats::stream::{Command, Token};
    ///
    /// assert_eq!(Token::parse(" 2.5 "), Token::Value(2.5));
    /// assert_eq!(Token::parse("QUIT"), Token::Command(Command::Quit));
    /// assert_eq!(Token::parse("precision 3"), Token::Command(Command::Precision(Some(3))));
    /// assert!(matches!(Token::parse("inf"), Token::Malformed(_)));
    /// ```
    pub fn parse(raw: &str) -> Token {
        let trimmed = raw.trim();

        if let Some(command) = parse_command(trimmed) {
            return command;
        }

        match f64::from_str(trimmed) {
            Ok(v) if v.is_finite() => Token::Value(v),
            _ => Token::Malformed(trimmed.to_string()),
        }
    }
}

fn parse_command(trimmed: &str) -> Option<Token> {
    let mut words = trimmed.split_whitespace();
    let head = words.next()?;

    let command = if head.eq_ignore_ascii_case("precision") {
        let arg = words.next();
        if words.next().is_some() {
            return Some(Token::Malformed(trimmed.to_string()));
        }
        match arg {
            None => Command::Precision(None),
            Some(arg) => match i64::from_str(arg) {
                Ok(p) => Command::Precision(Some(p)),
                Err(_) => return Some(Token::Malformed(trimmed.to_string())),
            },
        }
    } else if words.next().is_some() {
        return None;
    } else if ["q", "quit", "end"].iter().any(|w| head.eq_ignore_ascii_case(w)) {
        Command::Quit
    } else if ["flush", "reset", "clear"].iter().any(|w| head.eq_ignore_ascii_case(w)) {
        Command::Reset
    } else {
        return None;
    };

    Some(Token::Command(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(Token::parse("1"), Token::Value(1.0));
        assert_eq!(Token::parse("-3.25"), Token::Value(-3.25));
        assert_eq!(Token::parse("1e3"), Token::Value(1000.0));
        assert_eq!(Token::parse("\t137.036\n"), Token::Value(137.036));
        assert_eq!(Token::parse("+.5"), Token::Value(0.5));
    }

    #[test]
    fn test_malformed() {
        for raw in ["", "   ", "abc", "1.2.3", "12abc", "inf", "-infinity", "NaN", "1e999"] {
            assert!(
                matches!(Token::parse(raw), Token::Malformed(_)),
                "{:?} should be malformed",
                raw
            );
        }
        assert_eq!(Token::parse(" xyz "), Token::Malformed("xyz".into()));
    }

    #[test]
    fn test_commands_case_insensitive() {
        for raw in ["q", "Q", "quit", "QUIT", "end", "End"] {
            assert_eq!(Token::parse(raw), Token::Command(Command::Quit));
        }
        for raw in ["flush", "RESET", "Clear"] {
            assert_eq!(Token::parse(raw), Token::Command(Command::Reset));
        }
    }

    #[test]
    fn test_precision() {
        assert_eq!(Token::parse("precision"), Token::Command(Command::Precision(None)));
        assert_eq!(
            Token::parse("PRECISION 7"),
            Token::Command(Command::Precision(Some(7)))
        );
        assert_eq!(
            Token::parse("precision -1"),
            Token::Command(Command::Precision(Some(-1)))
        );
        assert!(matches!(Token::parse("precision x"), Token::Malformed(_)));
        assert!(matches!(Token::parse("precision 1 2"), Token::Malformed(_)));
    }

    #[test]
    fn test_command_word_with_trailing_text_is_not_a_command() {
        assert!(matches!(Token::parse("quit now"), Token::Malformed(_)));
        assert!(matches!(Token::parse("1 2"), Token::Malformed(_)));
    }
}
