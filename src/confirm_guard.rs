//! Yes/no prompt in front of destructive links and buttons.

#[cfg(test)]
#[path = "confirm_guard_test.rs"]
mod confirm_guard_test;

use crate::config::PageConfig;
use crate::host::{Host, Verdict};

/// Handle `click` on an element carrying the confirmation attribute.
pub fn on_click<H: Host>(host: &H, element: &H::Node, config: &PageConfig) -> Verdict {
    let Some(message) = host.attribute(element, &config.confirm_attribute) else {
        return Verdict::Proceed;
    };
    if host.confirm(&message) { Verdict::Proceed } else { Verdict::Cancel }
}
