//! Mapping from keys to actions.
//!
//! Key names are shared by the interactive UI and batch scripts, so
//! `mathwiz eval 7 x 6 =` presses the same keys as typing `7*6<Enter>`.

use crate::calculator::{Digit, Input, MemoryOp, Operator, UnaryFunction};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something a key or click can trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Calc(Input),
    ToggleScientific,
    ToggleHistory,
    ToggleSettings,
    CopyDisplay,
    Quit,
}

/// Look up a calculator key by name.
pub fn input_for_name(name: &str) -> Option<Input> {
    if let Some(digit) = single_char(name).and_then(Digit::from_char) {
        return Some(Input::Digit(digit));
    }

    let input = match name {
        "." | "," => Input::DecimalPoint,
        "+" => Input::Operator(Operator::Add),
        "-" | "−" => Input::Operator(Operator::Subtract),
        "*" | "×" | "x" | "X" => Input::Operator(Operator::Multiply),
        "/" | "÷" => Input::Operator(Operator::Divide),
        "=" | "Enter" => Input::Equals,
        "Escape" | "C" | "c" => Input::Clear,
        "Backspace" | "⌫" => Input::Backspace,
        "%" => Input::Percent,
        "sin" => Input::Function(UnaryFunction::Sine),
        "cos" => Input::Function(UnaryFunction::Cosine),
        "tan" => Input::Function(UnaryFunction::Tangent),
        "log" => Input::Function(UnaryFunction::Log10),
        "ln" => Input::Function(UnaryFunction::Ln),
        "sqrt" | "√" => Input::Function(UnaryFunction::SquareRoot),
        "sq" | "x²" => Input::Function(UnaryFunction::Square),
        "inv" | "1/x" => Input::Function(UnaryFunction::Reciprocal),
        "MC" => Input::Memory(MemoryOp::Clear),
        "MR" => Input::Memory(MemoryOp::Recall),
        "M+" => Input::Memory(MemoryOp::Add),
        "M-" => Input::Memory(MemoryOp::Subtract),
        _ => return None,
    };
    Some(input)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// Map a terminal key press to an action.
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Action::Calc(Input::Equals)),
        KeyCode::Esc => Some(Action::Calc(Input::Clear)),
        KeyCode::Backspace => Some(Action::Calc(Input::Backspace)),
        KeyCode::Char(c) => action_for_char(c),
        _ => None,
    }
}

fn action_for_char(c: char) -> Option<Action> {
    match c {
        's' => Some(Action::ToggleScientific),
        'h' => Some(Action::ToggleHistory),
        'o' => Some(Action::ToggleSettings),
        'y' => Some(Action::CopyDisplay),
        'q' => Some(Action::Quit),
        // Letters other than the clear key are not calculator keys when typed.
        'x' | 'X' => None,
        c => input_for_name(c.encode_utf8(&mut [0; 4])).map(Action::Calc),
    }
}
