//! Arithmetic behind the operator and function keys.

use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

/// A binary operator waiting for its right-hand operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The symbol shown on the key and in expressions.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator to `(a, b)` in that order.
    ///
    /// Division by zero yields `0` rather than infinity.
    // FIXME: zero-on-divide is probably unintended, but existing results depend on it.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b != 0.0 {
                    a / b
                } else {
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single-operand scientific function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryFunction {
    /// Sine of an angle in degrees.
    Sine,
    /// Cosine of an angle in degrees.
    Cosine,
    /// Tangent of an angle in degrees.
    Tangent,
    Log10,
    Ln,
    SquareRoot,
    Square,
    Reciprocal,
}

impl UnaryFunction {
    pub const ALL: [UnaryFunction; 8] = [
        Self::Sine,
        Self::Cosine,
        Self::Tangent,
        Self::Log10,
        Self::Ln,
        Self::SquareRoot,
        Self::Square,
        Self::Reciprocal,
    ];

    /// Key label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sine => "sin",
            Self::Cosine => "cos",
            Self::Tangent => "tan",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::SquareRoot => "√",
            Self::Square => "x²",
            Self::Reciprocal => "1/x",
        }
    }

    /// Apply the function. Out-of-domain inputs give `NaN` or an infinity.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sine => to_radians(value).sin(),
            Self::Cosine => to_radians(value).cos(),
            Self::Tangent => to_radians(value).tan(),
            Self::Log10 => value.log10(),
            Self::Ln => value.ln(),
            Self::SquareRoot => value.sqrt(),
            Self::Square => value * value,
            Self::Reciprocal => 1.0 / value,
        }
    }
}

fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
