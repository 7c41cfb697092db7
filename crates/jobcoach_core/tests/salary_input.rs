use jobcoach_core::db::open_db_in_memory;
use jobcoach_core::{
    InMemoryPreferenceStore, SalaryInput, SalaryUnit, SqlitePreferenceStore, UnitPreferenceStore,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn field_starts_in_preferred_unit() {
    let store = InMemoryPreferenceStore::with_unit(SalaryUnit::MonthlyNet);
    let input = SalaryInput::new(&store, 30_000);

    assert_eq!(input.unit(), SalaryUnit::MonthlyNet);
    assert_eq!(input.display(), "2\u{a0}000");
    assert_eq!(input.value(), 30_000);
}

#[test]
fn clean_keystrokes_are_kept_verbatim() {
    let mut input = SalaryInput::new(InMemoryPreferenceStore::new(), 0);

    assert_eq!(input.handle_text_change("2000,50"), 2001);
    assert_eq!(input.display(), "2000,50");
}

#[test]
fn stripped_characters_rewrite_the_display() {
    let store = InMemoryPreferenceStore::with_unit(SalaryUnit::MonthlyNet);
    let mut input = SalaryInput::new(&store, 0);

    assert_eq!(input.handle_text_change("2 000,50"), 30_008);
    assert_eq!(input.display(), "2\u{a0}000,533");

    assert_eq!(input.handle_text_change("abc"), 0);
    assert_eq!(input.display(), "");
}

#[test]
fn clearing_the_field_reports_unset() {
    let mut input = SalaryInput::new(InMemoryPreferenceStore::new(), 42_000);

    assert_eq!(input.handle_text_change(""), 0);
    assert_eq!(input.display(), "");
    assert_eq!(input.value(), 0);
}

#[test]
fn listener_receives_every_accepted_value() {
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    let mut input = SalaryInput::new(InMemoryPreferenceStore::new(), 0);
    input.on_change(move |value| sink.borrow_mut().push(value));

    input.handle_text_change("15");
    input.handle_unit_change(SalaryUnit::HourlyNet);
    input.handle_text_change("15");

    assert_eq!(*received.borrow(), vec![15, 15, 34_125]);
}

#[test]
fn unit_change_keeps_value_and_persists_preference() {
    let store = InMemoryPreferenceStore::new();
    let mut input = SalaryInput::new(&store, 45_000);

    assert_eq!(input.handle_unit_change(SalaryUnit::MonthlyNet), 45_000);
    assert_eq!(input.unit(), SalaryUnit::MonthlyNet);
    assert_eq!(input.display(), "3\u{a0}000");
    assert_eq!(store.preferred_unit().unwrap(), Some(SalaryUnit::MonthlyNet));

    assert_eq!(input.handle_unit_change(SalaryUnit::AnnualGross), 45_000);
    assert_eq!(input.display(), "45\u{a0}000");
    assert_eq!(
        input.store().preferred_unit().unwrap(),
        Some(SalaryUnit::AnnualGross)
    );
}

#[test]
fn keystrokes_do_not_touch_the_preference() {
    let store = InMemoryPreferenceStore::new();
    let mut input = SalaryInput::new(&store, 0);

    input.handle_text_change("1500");
    assert_eq!(store.preferred_unit().unwrap(), None);
}

#[test]
fn unreadable_store_falls_back_to_annual_gross() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO user_preferences (key, value, updated_at) VALUES (?1, ?2, 0);",
        ["preferred_salary_unit", "garbage"],
    )
    .unwrap();

    let input = SalaryInput::new(SqlitePreferenceStore::new(&conn), 21_500);
    assert_eq!(input.unit(), SalaryUnit::AnnualGross);
    assert_eq!(input.display(), "21\u{a0}500");
}

#[test]
fn failed_preference_write_still_changes_unit() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE user_preferences;").unwrap();

    let mut input = SalaryInput::new(SqlitePreferenceStore::new(&conn), 34_125);
    assert_eq!(input.handle_unit_change(SalaryUnit::HourlyNet), 34_125);
    assert_eq!(input.display(), "15");
}
