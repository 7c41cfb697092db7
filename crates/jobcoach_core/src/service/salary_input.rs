//! Salary amount field with a unit selector.
//!
//! # Responsibility
//! - Hold the text currently shown in the amount field.
//! - Turn keystrokes and unit changes into canonical annual gross amounts.
//! - Persist explicit unit choices to the injected preference store.
//!
//! # Invariants
//! - The canonical value only changes on text edits or external `set_value`.
//! - Unit writes are fire-and-forget: store failures are logged, never returned.
//! - Keystrokes are kept verbatim unless cleaning stripped characters.

use crate::convert::salary::{change_unit, parse_input_detailed, to_display_string};
use crate::model::salary_unit::{SalaryUnit, SALARY_UNITS};
use crate::repo::preference_repo::UnitPreferenceStore;
use log::{info, warn};

type ChangeListener = Box<dyn FnMut(u64)>;

/// Returns `(unit, label)` pairs in selector order.
pub fn unit_options() -> impl Iterator<Item = (SalaryUnit, &'static str)> {
    SALARY_UNITS.into_iter().map(|unit| (unit, unit.label()))
}

/// Stateful salary field bound to a preference store.
pub struct SalaryInput<S: UnitPreferenceStore> {
    store: S,
    unit: SalaryUnit,
    value: u64,
    display: String,
    listener: Option<ChangeListener>,
}

impl<S: UnitPreferenceStore> SalaryInput<S> {
    /// Creates a field showing `value` in the store's preferred unit.
    ///
    /// Falls back to annual gross when no preference exists or the store
    /// cannot be read.
    pub fn new(store: S, value: u64) -> Self {
        let unit = match store.preferred_unit() {
            Ok(unit) => unit.unwrap_or_default(),
            Err(err) => {
                warn!(
                    "event=salary_unit_load module=service status=error fallback={} error={}",
                    SalaryUnit::default(),
                    err
                );
                SalaryUnit::default()
            }
        };

        Self {
            store,
            unit,
            value,
            display: to_display_string(Some(value), unit),
            listener: None,
        }
    }

    /// Registers the callback receiving every accepted canonical value.
    pub fn on_change(&mut self, listener: impl FnMut(u64) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn unit(&self) -> SalaryUnit {
        self.unit
    }

    /// Text currently shown in the amount field.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Canonical annual gross amount, `0` when unset.
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Applies a value pushed from the owning form.
    ///
    /// The display is re-derived only when the value actually differs.
    pub fn set_value(&mut self, value: u64) {
        if value == self.value {
            return;
        }
        self.value = value;
        self.display = to_display_string(Some(value), self.unit);
    }

    /// Handles a keystroke in the amount field and returns the new value.
    pub fn handle_text_change(&mut self, raw: &str) -> u64 {
        self.display = raw.to_string();

        let canonical = if raw.is_empty() {
            0
        } else {
            let parsed = parse_input_detailed(raw, self.unit);
            if parsed.was_cleaned {
                self.display = to_display_string(Some(parsed.canonical), self.unit);
            }
            parsed.canonical
        };

        self.accept(canonical)
    }

    /// Handles an explicit unit selection and returns the (unchanged) value.
    pub fn handle_unit_change(&mut self, unit: SalaryUnit) -> u64 {
        match self.store.set_preferred_unit(unit) {
            Ok(()) => info!(
                "event=salary_unit_pref module=service status=ok unit={}",
                unit
            ),
            Err(err) => warn!(
                "event=salary_unit_pref module=service status=error unit={} error={}",
                unit, err
            ),
        }

        let (canonical, display) = change_unit(self.value, self.unit, unit);
        self.unit = unit;
        self.display = display;
        self.accept(canonical)
    }

    fn accept(&mut self, canonical: u64) -> u64 {
        self.value = canonical;
        if let Some(listener) = self.listener.as_mut() {
            listener(canonical);
        }
        canonical
    }
}
