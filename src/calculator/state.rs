//! The calculation state record and the transitions over it.
//!
//! Every transition borrows the current state and returns the next one, so a
//! key press never mutates anything in place. Transitions that complete a
//! binary operation also hand back the finished [`Calculation`] for the
//! history.

use super::evaluation::{Operator, UnaryFunction};
use super::number::{format_display, format_number, parse_number};
use serde::Serialize;

/// A single decimal digit key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub const ALL: [Digit; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// Memory register keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryOp {
    Clear,
    Recall,
    Add,
    Subtract,
}

impl MemoryOp {
    pub const ALL: [MemoryOp; 4] = [Self::Clear, Self::Recall, Self::Add, Self::Subtract];

    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "MC",
            Self::Recall => "MR",
            Self::Add => "M+",
            Self::Subtract => "M-",
        }
    }
}

/// Every event the calculator understands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    Percent,
    Function(UnaryFunction),
    Memory(MemoryOp),
}

/// A left-hand operand together with the operator waiting to consume it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PendingOperation {
    pub operand: f64,
    pub operator: Operator,
}

impl PendingOperation {
    /// Summary shown above the display, e.g. `"7 ×"`.
    pub fn summary(&self) -> String {
        format!("{} {}", format_number(self.operand), self.operator)
    }
}

/// One completed binary step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub expression: String,
    pub result: String,
}

/// The next state after an input, plus the calculation it completed, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: CalculationState,
    pub completed: Option<Calculation>,
}

impl From<CalculationState> for Transition {
    fn from(state: CalculationState) -> Self {
        Self {
            state,
            completed: None,
        }
    }
}

/// The live calculator record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculationState {
    display: String,
    pending: Option<PendingOperation>,
    waiting_for_new_value: bool,
    memory: f64,
}

impl Default for CalculationState {
    fn default() -> Self {
        Self::with_memory(0.0)
    }
}

impl CalculationState {
    fn with_memory(memory: f64) -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            waiting_for_new_value: false,
            memory,
        }
    }

    /// Raw display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Display text as it should appear on screen.
    pub fn formatted_display(&self) -> String {
        format_display(&self.display)
    }

    pub fn display_value(&self) -> f64 {
        parse_number(&self.display)
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    pub fn previous_value(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    pub fn operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    pub fn is_waiting_for_new_value(&self) -> bool {
        self.waiting_for_new_value
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Apply any input.
    pub fn apply(&self, input: Input) -> Transition {
        match input {
            Input::Digit(d) => self.input_digit(d).into(),
            Input::DecimalPoint => self.input_decimal_point().into(),
            Input::Operator(op) => self.apply_operator(op),
            Input::Equals => self.evaluate(),
            Input::Clear => self.clear().into(),
            Input::Backspace => self.backspace().into(),
            Input::Percent => self.apply_percent().into(),
            Input::Function(f) => self.apply_unary_function(f).into(),
            Input::Memory(op) => self.apply_memory(op).into(),
        }
    }

    pub fn input_digit(&self, digit: Digit) -> Self {
        let display = if self.waiting_for_new_value || self.display == "0" {
            digit.as_char().to_string()
        } else {
            let mut display = self.display.clone();
            display.push(digit.as_char());
            display
        };

        Self {
            display,
            waiting_for_new_value: false,
            ..self.clone()
        }
    }

    pub fn input_decimal_point(&self) -> Self {
        if self.waiting_for_new_value {
            return Self {
                display: "0.".to_string(),
                waiting_for_new_value: false,
                ..self.clone()
            };
        }

        if self.display.contains('.') {
            return self.clone();
        }

        Self {
            display: format!("{}.", self.display),
            ..self.clone()
        }
    }

    pub fn apply_operator(&self, operator: Operator) -> Transition {
        let operand = self.display_value();

        match self.pending {
            None => Self {
                pending: Some(PendingOperation { operand, operator }),
                waiting_for_new_value: true,
                ..self.clone()
            }
            .into(),
            Some(pending) if !self.waiting_for_new_value => {
                let (value, calculation) = complete(pending, operand);
                Transition {
                    state: Self {
                        display: calculation.result.clone(),
                        pending: Some(PendingOperation {
                            operand: value,
                            operator,
                        }),
                        waiting_for_new_value: true,
                        ..self.clone()
                    },
                    completed: Some(calculation),
                }
            }
            // Operator pressed twice in a row: swap it.
            Some(pending) => Self {
                pending: Some(PendingOperation {
                    operator,
                    ..pending
                }),
                waiting_for_new_value: true,
                ..self.clone()
            }
            .into(),
        }
    }

    /// The `=` key. A no-op without a pending operator.
    pub fn evaluate(&self) -> Transition {
        let Some(pending) = self.pending else {
            return self.clone().into();
        };

        let (_, calculation) = complete(pending, self.display_value());
        Transition {
            state: Self {
                display: calculation.result.clone(),
                pending: None,
                waiting_for_new_value: true,
                ..self.clone()
            },
            completed: Some(calculation),
        }
    }

    /// Reset to defaults, keeping memory.
    pub fn clear(&self) -> Self {
        Self::with_memory(self.memory)
    }

    pub fn backspace(&self) -> Self {
        let mut display = self.display.clone();
        if display.chars().count() > 1 {
            display.pop();
        } else {
            display = "0".to_string();
        }

        Self {
            display,
            ..self.clone()
        }
    }

    pub fn apply_percent(&self) -> Self {
        Self {
            display: format_number(self.display_value() / 100.0),
            ..self.clone()
        }
    }

    pub fn apply_unary_function(&self, function: UnaryFunction) -> Self {
        Self {
            display: format_number(function.apply(self.display_value())),
            waiting_for_new_value: true,
            ..self.clone()
        }
    }

    pub fn apply_memory(&self, op: MemoryOp) -> Self {
        match op {
            MemoryOp::Clear => Self {
                memory: 0.0,
                ..self.clone()
            },
            MemoryOp::Recall => Self {
                display: format_number(self.memory),
                waiting_for_new_value: true,
                ..self.clone()
            },
            MemoryOp::Add => Self {
                memory: self.memory + self.display_value(),
                ..self.clone()
            },
            MemoryOp::Subtract => Self {
                memory: self.memory - self.display_value(),
                ..self.clone()
            },
        }
    }

    /// Show a previously computed result, dropping any pending operation.
    pub fn restore(&self, result: &str) -> Self {
        let display = if result.is_empty() { "0" } else { result };

        Self {
            display: display.to_string(),
            pending: None,
            waiting_for_new_value: true,
            ..self.clone()
        }
    }
}

fn complete(pending: PendingOperation, operand: f64) -> (f64, Calculation) {
    let value = pending.operator.apply(pending.operand, operand);
    let calculation = Calculation {
        expression: format!("{} {}", pending.summary(), format_number(operand)),
        result: format_number(value),
    };
    (value, calculation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn digit(c: char) -> Input {
        Input::Digit(Digit::from_char(c).unwrap())
    }

    fn run(inputs: &[Input]) -> (CalculationState, Vec<Calculation>) {
        let mut state = CalculationState::default();
        let mut completed = Vec::new();
        for &input in inputs {
            let transition = state.apply(input);
            state = transition.state;
            completed.extend(transition.completed);
        }
        (state, completed)
    }

    fn keys(script: &str) -> Vec<Input> {
        script
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '+' => Input::Operator(Operator::Add),
                '-' => Input::Operator(Operator::Subtract),
                '*' => Input::Operator(Operator::Multiply),
                '/' => Input::Operator(Operator::Divide),
                '=' => Input::Equals,
                '.' => Input::DecimalPoint,
                '<' => Input::Backspace,
                '%' => Input::Percent,
                c => digit(c),
            })
            .collect()
    }

    #[test]
    fn test_defaults() {
        let state = CalculationState::default();
        assert_eq!(state.display(), "0");
        assert_eq!(state.pending(), None);
        assert!(!state.is_waiting_for_new_value());
        assert_eq!(state.memory(), 0.0);
    }

    #[test]
    fn test_digit_entry_replaces_leading_zero() {
        let (state, _) = run(&keys("0 0 7 5"));
        assert_eq!(state.display(), "75");
    }

    #[test]
    fn test_single_decimal_point() {
        let (state, _) = run(&keys("1 . . 5 ."));
        assert_eq!(state.display(), "1.5");

        let (state, _) = run(&keys(". ."));
        assert_eq!(state.display(), "0.");
    }

    #[test]
    fn test_decimal_after_operator_starts_fresh() {
        let (state, _) = run(&keys("8 + . 5"));
        assert_eq!(state.display(), "0.5");
    }

    #[test]
    fn test_multiply_scenario() {
        let (state, completed) = run(&keys("7 * 6 ="));
        assert_eq!(state.display(), "42");
        assert_eq!(state.pending(), None);
        assert!(state.is_waiting_for_new_value());
        assert_eq!(
            completed,
            vec![Calculation {
                expression: "7 × 6".to_string(),
                result: "42".to_string(),
            }]
        );
    }

    #[test]
    fn test_operator_chaining_evaluates_left_to_right() {
        let (state, completed) = run(&keys("2 + 3 * 4"));
        assert_eq!(state.display(), "4");
        assert_eq!(state.previous_value(), Some(5.0));
        assert_eq!(state.operator(), Some(Operator::Multiply));
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].expression, "2 + 3");

        let (state, completed) = run(&keys("2 + 3 * 4 ="));
        assert_eq!(state.display(), "20");
        assert_eq!(completed[1].expression, "5 × 4");
    }

    #[test]
    fn test_operator_substitution() {
        let (state, completed) = run(&keys("9 + - *"));
        assert!(completed.is_empty());
        assert_eq!(state.previous_value(), Some(9.0));
        assert_eq!(state.operator(), Some(Operator::Multiply));

        let (state, _) = run(&keys("9 + - 4 ="));
        assert_eq!(state.display(), "5");
    }

    #[test]
    fn test_evaluate_twice_is_noop() {
        let (once, _) = run(&keys("3 - 5 ="));
        let second = once.evaluate();
        assert_eq!(second.state, once);
        assert_eq!(second.completed, None);
        assert_eq!(once.display(), "-2");
    }

    #[test]
    fn test_evaluate_without_operator_is_noop() {
        let (state, _) = run(&keys("1 2"));
        let transition = state.evaluate();
        assert_eq!(transition.state, state);
        assert!(transition.completed.is_none());
    }

    #[test]
    fn test_divide_by_zero_shows_zero() {
        let (state, completed) = run(&keys("1 / 0 ="));
        assert_eq!(state.display(), "0");
        assert_eq!(completed[0].expression, "1 ÷ 0");
        assert_eq!(completed[0].result, "0");
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        let (state, _) = run(&keys("7 * 6 = 1"));
        assert_eq!(state.display(), "1");
    }

    #[test]
    fn test_backspace() {
        let (state, _) = run(&keys("1 2 3 <"));
        assert_eq!(state.display(), "12");

        let (state, _) = run(&keys("5 <"));
        assert_eq!(state.display(), "0");

        let (state, _) = run(&keys("<"));
        assert_eq!(state.display(), "0");
    }

    #[test]
    fn test_percent_keeps_pending_operator() {
        let (state, _) = run(&keys("5 0 + 2 5 %"));
        assert_eq!(state.display(), "0.25");
        assert_eq!(state.previous_value(), Some(50.0));
        assert_eq!(state.operator(), Some(Operator::Add));
    }

    #[test]
    fn test_unary_functions_write_display() {
        let state = CalculationState::default()
            .input_digit(Digit::new(9).unwrap())
            .apply_unary_function(UnaryFunction::SquareRoot);
        assert_eq!(state.display(), "3");
        assert!(state.is_waiting_for_new_value());

        let state = CalculationState::default().apply_unary_function(UnaryFunction::Reciprocal);
        assert_eq!(state.display(), "Infinity");

        let (state, _) = run(&keys("4 - 8 +"));
        assert_eq!(state.display(), "-4");
        let state = state.apply_unary_function(UnaryFunction::Log10);
        assert_eq!(state.display(), "NaN");
    }

    #[test]
    fn test_memory_operations() {
        let (state, _) = run(&keys("5"));
        let state = state.apply_memory(MemoryOp::Add);
        assert_eq!(state.memory(), 5.0);
        assert_eq!(state.display(), "5");

        let state = state.input_digit(Digit::new(2).unwrap());
        let state = state.apply_memory(MemoryOp::Subtract);
        assert_eq!(state.memory(), -47.0);

        let state = state.apply_memory(MemoryOp::Recall);
        assert_eq!(state.display(), "-47");
        assert!(state.is_waiting_for_new_value());

        let state = state.apply_memory(MemoryOp::Clear);
        assert_eq!(state.memory(), 0.0);
        assert_eq!(state.display(), "-47");
    }

    #[test]
    fn test_clear_preserves_memory() {
        let (state, _) = run(&keys("5"));
        let mut state = state.apply_memory(MemoryOp::Add);
        for input in keys("+ 3") {
            state = state.apply(input).state;
        }
        let cleared = state.clear();
        assert_eq!(cleared.display(), "0");
        assert_eq!(cleared.pending(), None);
        assert_eq!(cleared.memory(), 5.0);
    }

    #[test]
    fn test_restore_drops_pending_operation() {
        let (state, _) = run(&keys("4 +"));
        let restored = state.restore("42");
        assert_eq!(restored.display(), "42");
        assert_eq!(restored.pending(), None);
        assert_eq!(restored.evaluate().state.display(), "42");
    }

    #[test]
    fn test_long_results_use_scientific_display() {
        let (state, _) = run(&keys("1 2 3 4 5 6 7 * 1 0 0 0 0 0 0 ="));
        assert_eq!(state.display(), "1234567000000");
        assert_eq!(state.formatted_display(), "1.234567e+12");
    }

    #[test]
    fn test_pending_summary() {
        let (state, _) = run(&keys("1 . 5 /"));
        assert_eq!(state.pending().map(PendingOperation::summary).as_deref(), Some("1.5 ÷"));
    }

    proptest! {
        #[test]
        fn prop_digits_concatenate(
            digits in proptest::collection::vec(0u8..10, 1..20),
            dots in proptest::collection::vec(any::<bool>(), 20),
        ) {
            let mut state = CalculationState::default();
            let mut expected = String::new();
            let mut seen_dot = false;

            for (i, &d) in digits.iter().enumerate() {
                state = state.input_digit(Digit::new(d).unwrap());
                if expected == "0" {
                    expected.clear();
                }
                expected.push(char::from(b'0' + d));

                if dots[i] {
                    state = state.input_decimal_point();
                    if !seen_dot {
                        expected.push('.');
                        seen_dot = true;
                    }
                }
            }

            prop_assert_eq!(state.display(), expected.as_str());
            prop_assert!(state.display().matches('.').count() <= 1);
        }
    }
}
