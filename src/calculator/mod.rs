//! The calculator evaluator.
//!
//! This module provides:
//! - The calculation state record and its pure transitions
//! - Binary operators and scientific functions
//! - Conversions between display text and numbers

mod evaluation;
mod number;
mod state;

pub use evaluation::{Operator, UnaryFunction};
pub use number::{MAX_PLAIN_DISPLAY_LEN, format_display, format_number, parse_number};
pub use state::{
    CalculationState, Calculation, Digit, Input, MemoryOp, PendingOperation, Transition,
};
