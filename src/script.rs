//! Batch mode: replay a key script against a fresh session.

use crate::calculator::{Digit, Input, format_number};
use crate::keymap::input_for_name;
use crate::session::{Session, Snapshot};
use std::fmt::Write as _;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown key '{key}' at position {position}")]
    UnknownKey { key: String, position: usize },
}

/// Parse key names into inputs.
///
/// Each item is one key name. Runs of digits and decimal points such as
/// `"12.5"` expand to one key per character. Positions in errors are 1-based.
pub fn parse_keys<S: AsRef<str>>(keys: &[S]) -> Result<Vec<Input>, ScriptError> {
    let mut inputs = Vec::with_capacity(keys.len());

    for (index, key) in keys
        .iter()
        .flat_map(|k| k.as_ref().split_whitespace())
        .enumerate()
    {
        if key.len() > 1 && key.chars().all(|c| c.is_ascii_digit() || c == '.') {
            inputs.extend(key.chars().map(|c| match Digit::from_char(c) {
                Some(digit) => Input::Digit(digit),
                None => Input::DecimalPoint,
            }));
            continue;
        }

        let input = input_for_name(key).ok_or_else(|| ScriptError::UnknownKey {
            key: key.to_string(),
            position: index + 1,
        })?;
        inputs.push(input);
    }

    Ok(inputs)
}

/// Run a key script and return the resulting session.
pub fn run<S: AsRef<str>>(keys: &[S]) -> Result<Session, ScriptError> {
    let inputs = parse_keys(keys)?;
    debug!(count = inputs.len(), "replaying key script");

    let mut session = Session::new();
    for input in inputs {
        session.dispatch(input);
    }
    Ok(session)
}

/// Plain-text report of a snapshot.
pub fn render_report(snapshot: &Snapshot<'_>) -> String {
    let mut out = String::new();

    if let Some(pending) = &snapshot.pending {
        let _ = writeln!(out, "{pending}");
    }
    let _ = writeln!(out, "{}", snapshot.display);
    if snapshot.memory != 0.0 {
        let _ = writeln!(out, "Memory: {}", format_number(snapshot.memory));
    }

    if !snapshot.history.is_empty() {
        let _ = writeln!(out, "\nHistory:");
        for entry in &snapshot.history {
            let _ = writeln!(
                out,
                "  [{}] {} = {}",
                entry.time_of_day(),
                entry.expression(),
                entry.result()
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;

    #[test]
    fn test_parse_expands_digit_runs() {
        let inputs = parse_keys(&["12.5", "+"]).unwrap();
        assert_eq!(inputs.len(), 5);
        assert_eq!(inputs[2], Input::DecimalPoint);
        assert_eq!(inputs[4], Input::Operator(Operator::Add));
    }

    #[test]
    fn test_parse_splits_whitespace() {
        let inputs = parse_keys(&["7 x 6 ="]).unwrap();
        assert_eq!(inputs.len(), 4);
        assert_eq!(inputs[3], Input::Equals);
    }

    #[test]
    fn test_unknown_key_reports_position() {
        let err = parse_keys(&["1", "+", "banana"]).unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownKey {
                key: "banana".to_string(),
                position: 3,
            }
        );
        assert_eq!(err.to_string(), "unknown key 'banana' at position 3");
    }

    #[test]
    fn test_run_multiply_scenario() {
        let session = run(&["7", "×", "6", "="]).unwrap();
        assert_eq!(session.state().display(), "42");
        let entry = session.history().get(0).unwrap();
        assert_eq!(entry.expression(), "7 × 6");
        assert_eq!(entry.result(), "42");
    }

    #[test]
    fn test_run_empty_script() {
        let session = run::<&str>(&[]).unwrap();
        assert_eq!(session.state().display(), "0");
    }

    #[test]
    fn test_report_contents() {
        let session = run(&["5 M+ C 2 + 3 = 4 *"]).unwrap();
        let report = render_report(&session.snapshot());
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines[0], "4 ×");
        assert_eq!(lines[1], "4");
        assert_eq!(lines[2], "Memory: 5");
        assert!(report.contains("History:"));
        assert!(report.contains("2 + 3 = 5"));
    }
}
