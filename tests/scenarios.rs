use mathwiz::calculator::{Digit, Input, MemoryOp, Operator};
use mathwiz::history::{HISTORY_CAPACITY, HistoryLog};
use mathwiz::script;
use mathwiz::session::Session;

fn press(session: &mut Session, keys: &str) {
    let keys: Vec<&str> = keys.split_whitespace().collect();
    for input in script::parse_keys(&keys).unwrap() {
        session.dispatch(input);
    }
}

#[test]
fn test_multiply_then_equals() {
    let mut session = Session::new();
    press(&mut session, "7 × 6 =");

    assert_eq!(session.state().display(), "42");
    assert_eq!(session.history().len(), 1);
    let entry = session.history().get(0).unwrap();
    assert_eq!(entry.expression(), "7 × 6");
    assert_eq!(entry.result(), "42");
}

#[test]
fn test_one_divided_by_zero_is_zero() {
    let session = script::run(&["1", "/", "0", "="]).unwrap();
    assert_eq!(session.state().display(), "0");
}

#[test]
fn test_equals_twice_is_noop() {
    let mut session = Session::new();
    press(&mut session, "8 - 3 =");
    let before = session.state().clone();

    session.dispatch(Input::Equals);
    assert_eq!(session.state(), &before);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_history_select_then_equals_keeps_result() {
    let mut session = Session::new();
    press(&mut session, "1 . 5 × 4 = 9 +");

    let entry = session.history().get(0).unwrap().clone();
    session.restore(&entry);
    session.dispatch(Input::Equals);

    assert_eq!(session.state().display(), entry.result());
    assert_eq!(session.state().display(), "6");
}

#[test]
fn test_history_capped_after_many_records() {
    let mut log = HistoryLog::new();
    for i in 0..=HISTORY_CAPACITY {
        log.record(format!("{i} + 0"), i.to_string());
    }

    assert_eq!(log.len(), HISTORY_CAPACITY);
    assert_eq!(log.get(0).unwrap().expression(), "50 + 0");
    assert!(log.iter().all(|entry| entry.expression() != "0 + 0"));
}

#[test]
fn test_backspace_single_character() {
    let mut session = Session::new();
    press(&mut session, "4 Backspace");
    assert_eq!(session.state().display(), "0");
    press(&mut session, "Backspace");
    assert_eq!(session.state().display(), "0");
}

#[test]
fn test_clear_preserves_memory() {
    let mut session = Session::new();
    session.dispatch(Input::Digit(Digit::new(5).unwrap()));
    session.dispatch(Input::Memory(MemoryOp::Add));
    session.dispatch(Input::Operator(Operator::Multiply));
    session.dispatch(Input::Clear);

    assert_eq!(session.state().memory(), 5.0);
    assert_eq!(session.state().display(), "0");
    assert_eq!(session.state().pending(), None);
}

#[test]
fn test_scientific_chain() {
    let session = script::run(&["9 sqrt x² inv"]).unwrap();
    let value: f64 = session.state().display().parse().unwrap();
    assert!((value - 1.0 / 9.0).abs() < 1e-15);
}

#[test]
fn test_json_snapshot() {
    let session = script::run(&["2", "+", "2", "=", "M+"]).unwrap();
    let json = serde_json::to_value(session.snapshot()).unwrap();

    assert_eq!(json["display"], "4");
    assert_eq!(json["memory"], 4.0);
    assert_eq!(json["history"][0]["expression"], "2 + 2");
    assert_eq!(json["history"][0]["result"], "4");
    assert!(json["history"][0]["id"].is_string());
}
