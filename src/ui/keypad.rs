//! On-screen key layout.
//!
//! The same table drives rendering and mouse hit-testing.

use crate::calculator::{Digit, Input, MemoryOp, Operator, UnaryFunction};

/// Keypad columns per row; a key may span several.
pub const COLUMNS: u16 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Digit,
    Operator,
    Function,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Key {
    pub label: &'static str,
    pub input: Input,
    pub kind: KeyKind,
    pub span: u16,
}

impl Key {
    fn new(label: &'static str, input: Input, kind: KeyKind) -> Self {
        Self {
            label,
            input,
            kind,
            span: 1,
        }
    }

    fn wide(self, span: u16) -> Self {
        Self { span, ..self }
    }
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

fn digit(value: usize) -> Key {
    let digit = Digit::ALL[value];
    Key::new(DIGIT_LABELS[value], Input::Digit(digit), KeyKind::Digit)
}

fn operator(op: Operator) -> Key {
    Key::new(op.symbol(), Input::Operator(op), KeyKind::Operator)
}

fn function(label: &'static str, input: Input) -> Key {
    Key::new(label, input, KeyKind::Function)
}

/// Rows of keys, top to bottom.
pub fn rows(scientific: bool) -> Vec<Vec<Key>> {
    let mut rows = Vec::with_capacity(8);

    if scientific {
        let functions: Vec<Key> = UnaryFunction::ALL
            .iter()
            .map(|&f| function(f.label(), Input::Function(f)))
            .collect();
        rows.extend(functions.chunks(COLUMNS as usize).map(<[Key]>::to_vec));
    }

    rows.push(
        MemoryOp::ALL
            .iter()
            .map(|&op| function(op.label(), Input::Memory(op)))
            .collect(),
    );

    rows.push(vec![
        function("C", Input::Clear),
        function("⌫", Input::Backspace),
        function("%", Input::Percent),
        operator(Operator::Divide),
    ]);
    rows.push(vec![digit(7), digit(8), digit(9), operator(Operator::Multiply)]);
    rows.push(vec![digit(4), digit(5), digit(6), operator(Operator::Subtract)]);
    rows.push(vec![digit(1), digit(2), digit(3), operator(Operator::Add)]);
    rows.push(vec![
        digit(0).wide(2),
        Key::new(".", Input::DecimalPoint, KeyKind::Digit),
        Key::new("=", Input::Equals, KeyKind::Operator),
    ]);

    rows
}
