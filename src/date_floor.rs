//! Default `min` on date inputs so past dates cannot be picked.

#[cfg(test)]
#[path = "date_floor_test.rs"]
mod date_floor_test;

use crate::config::PageConfig;
use crate::host::{CalendarDate, Host};

/// Set `min` to `today` on every date input that declares none.
///
/// Returns how many inputs changed. Inputs with an explicit `min` keep it, so
/// running twice changes nothing the second time.
pub fn apply<H: Host>(host: &H, today: CalendarDate, config: &PageConfig) -> usize {
    let inputs = match host.query_all(&config.date_input_selector) {
        Ok(inputs) => inputs,
        Err(err) => {
            log::warn!("date floor: querying date inputs failed: {err}");
            return 0;
        }
    };

    let floor = today.to_string();
    let mut changed = 0;
    for input in inputs.iter().filter(|i| host.attribute(i, "min").is_none()) {
        match host.set_attribute(input, "min", &floor) {
            Ok(()) => changed += 1,
            Err(err) => log::warn!("date floor: setting min failed: {err}"),
        }
    }
    changed
}
