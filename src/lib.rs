//! A calculator with memory, scientific functions and a capped history,
//! driven from a full-screen terminal UI or from key scripts.

pub mod calculator;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod history;
pub mod keymap;
pub mod script;
pub mod session;
pub mod theme;
pub mod ui;
