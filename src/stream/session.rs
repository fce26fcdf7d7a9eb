//! Line-driven session over a [`StreamCoordinator`]
//!
//! Handles what sits between raw input lines and the coordinator: control
//! commands, the interactive `precision` prompt, and lines carrying several
//! whitespace-separated numbers.

use super::coordinator::{StreamConfig, StreamCoordinator};
use super::summary::Summary;
use super::token::{Command, Token};
use crate::traits::{check_precision, StatsError};

#[cfg(feature = "std")]
use std::{string::ToString, vec::Vec};

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec, vec::Vec};

/// Outcome of handling one piece of input
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    /// A value was accepted
    Summary(Summary),
    /// Input was rejected; the session continues
    Warning(StatsError),
    /// `precision` was given without a value; the next line supplies it
    PrecisionPrompt,
    /// Precision changed to the given value
    PrecisionChanged(u32),
    /// Statistics were cleared
    Reset,
    /// The session is over
    Quit,
}

/// Feeds input lines to a coordinator
///
/// # Example
///
/// ```
/// use streamstats::stream::{Response, Session};
///
/// let mut session = Session::new();
///
/// let responses = session.handle_line("1 2 oops");
/// assert_eq!(responses.len(), 3);
/// assert!(matches!(responses[2], Response::Warning(_)));
///
/// assert_eq!(session.handle_line("precision"), [Response::PrecisionPrompt]);
/// assert_eq!(session.handle_line("2"), [Response::PrecisionChanged(2)]);
///
/// assert_eq!(session.handle_line("quit"), [Response::Quit]);
/// assert!(session.is_finished());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Session {
    stream: StreamCoordinator,
    awaiting_precision: bool,
    finished: bool,
}

impl Session {
    /// Create a session with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with the given configuration
    pub fn with_config(config: StreamConfig) -> Self {
        Self {
            stream: StreamCoordinator::with_config(config),
            awaiting_precision: false,
            finished: false,
        }
    }

    /// Handle one input line
    ///
    /// Returns one response per value on the line. Lines after a quit
    /// command produce nothing.
    pub fn handle_line(&mut self, line: &str) -> Vec<Response> {
        if self.finished {
            return Vec::new();
        }

        if self.awaiting_precision {
            self.awaiting_precision = false;
            return vec![self.answer_precision_prompt(line)];
        }

        match Token::parse(line) {
            Token::Value(v) => vec![self.accept(v)],
            Token::Command(command) => vec![self.apply(command)],
            Token::Malformed(_) if line.split_whitespace().nth(1).is_some() => line
                .split_whitespace()
                .map(|piece| match Token::parse(piece) {
                    Token::Value(v) => self.accept(v),
                    Token::Command(_) => Response::Warning(StatsError::Malformed(piece.to_string())),
                    Token::Malformed(raw) => Response::Warning(StatsError::Malformed(raw)),
                })
                .collect(),
            Token::Malformed(raw) => vec![Response::Warning(StatsError::Malformed(raw))],
        }
    }

    fn accept(&mut self, value: f64) -> Response {
        match self.stream.observe_value(value) {
            Ok(summary) => Response::Summary(summary),
            Err(e) => Response::Warning(e),
        }
    }

    fn apply(&mut self, command: Command) -> Response {
        match command {
            Command::Quit => {
                self.finished = true;
                Response::Quit
            }
            Command::Reset => {
                self.stream.reset();
                Response::Reset
            }
            Command::Precision(None) => {
                self.awaiting_precision = true;
                Response::PrecisionPrompt
            }
            Command::Precision(Some(p)) => self.change_precision(p),
        }
    }

    fn answer_precision_prompt(&mut self, line: &str) -> Response {
        match parse_precision(line) {
            Ok(p) => self.change_precision(p as i64),
            Err(e) => Response::Warning(e),
        }
    }

    fn change_precision(&mut self, precision: i64) -> Response {
        match self.stream.set_precision(precision) {
            Ok(()) => Response::PrecisionChanged(self.stream.precision()),
            Err(e) => Response::Warning(e),
        }
    }

    /// Whether a quit command has been seen
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the next line will be read as a precision value
    pub fn is_awaiting_precision(&self) -> bool {
        self.awaiting_precision
    }

    /// The underlying coordinator
    pub fn stream(&self) -> &StreamCoordinator {
        &self.stream
    }
}

/// Validate a precision given on the command line or in a config
pub fn parse_precision(raw: &str) -> Result<u32, StatsError> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| StatsError::Malformed(trimmed.to_string()))?;
    check_precision(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(responses: &[Response]) -> Vec<String> {
        responses
            .iter()
            .filter_map(|r| match r {
                Response::Summary(s) => Some(s.to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_single_values() {
        let mut session = Session::new();
        session.handle_line("precision 3");
        let mut out = Vec::new();
        for line in ["1", "2", "3", "137.036"] {
            out.extend(summaries(&session.handle_line(line)));
        }
        assert_eq!(out, ["1,0,1", "1.5,0.5,1.5", "2,0.816,2", "35.759,58.477,2.5"]);
    }

    #[test]
    fn test_multi_value_line() {
        let mut session = Session::new();
        let responses = session.handle_line("1 2\t3");
        assert_eq!(summaries(&responses), ["1,0,1", "1.5,0.5,1.5", "2,0.8165,2"]);
    }

    #[test]
    fn test_multi_value_line_with_garbage() {
        let mut session = Session::new();
        let responses = session.handle_line("1 x reset 2");
        assert_eq!(responses.len(), 4);
        assert_eq!(responses[1], Response::Warning(StatsError::Malformed("x".into())));
        assert_eq!(
            responses[2],
            Response::Warning(StatsError::Malformed("reset".into()))
        );
        assert_eq!(session.stream().count(), 2);
    }

    #[test]
    fn test_precision_prompt() {
        let mut session = Session::new();
        assert_eq!(session.handle_line("Precision"), [Response::PrecisionPrompt]);
        assert!(session.is_awaiting_precision());

        // The answer is not treated as an observation
        assert_eq!(session.handle_line(" 1 "), [Response::PrecisionChanged(1)]);
        assert!(!session.is_awaiting_precision());
        assert!(session.stream().is_empty());
    }

    #[test]
    fn test_precision_prompt_bad_answer() {
        let mut session = Session::new();
        session.handle_line("precision");

        assert_eq!(
            session.handle_line("lots"),
            [Response::Warning(StatsError::Malformed("lots".into()))]
        );
        assert_eq!(session.stream().precision(), 5);

        session.handle_line("precision");
        assert_eq!(
            session.handle_line("-2"),
            [Response::Warning(StatsError::InvalidPrecision(-2))]
        );
        assert_eq!(session.stream().precision(), 5);
    }

    #[test]
    fn test_reset_command() {
        let mut session = Session::new();
        session.handle_line("1");
        session.handle_line("2");
        assert_eq!(session.handle_line("FLUSH"), [Response::Reset]);
        assert_eq!(summaries(&session.handle_line("5")), ["5,0,5"]);
    }

    #[test]
    fn test_quit_stops_processing() {
        let mut session = Session::new();
        session.handle_line("1");
        assert_eq!(session.handle_line("end"), [Response::Quit]);
        assert!(session.handle_line("2").is_empty());
        assert_eq!(session.stream().count(), 1);
    }

    #[test]
    fn test_empty_line_warns() {
        let mut session = Session::new();
        assert_eq!(
            session.handle_line(""),
            [Response::Warning(StatsError::Malformed(String::new()))]
        );
    }

    #[test]
    fn test_parse_precision() {
        assert_eq!(parse_precision(" 3 "), Ok(3));
        assert_eq!(parse_precision("-1"), Err(StatsError::InvalidPrecision(-1)));
        assert_eq!(parse_precision("x"), Err(StatsError::Malformed("x".into())));
    }
}
