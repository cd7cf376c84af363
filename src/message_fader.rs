//! Auto-dismiss for transient notification banners.
//!
//! Each banner present at load gets its own one-shot timers: fade first, then
//! detach once the opacity transition has run. Timers are never cancelled.

#[cfg(test)]
#[path = "message_fader_test.rs"]
mod message_fader_test;

use crate::config::PageConfig;
use crate::host::Host;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeStep {
    /// Start the opacity transition to 0.
    Fade,
    /// Detach the element.
    Remove,
}

/// When each step fires. `remove_after_ms` counts from the fade, not from load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadePlan {
    pub fade_after_ms: u32,
    pub remove_after_ms: u32,
}

impl FadePlan {
    pub fn from_config(config: &PageConfig) -> Self {
        Self { fade_after_ms: config.fade_delay_ms, remove_after_ms: config.fade_duration_ms }
    }

    /// Absolute offsets from attachment, in firing order. One timer per entry.
    pub fn timeline(&self) -> [(u32, FadeStep); 2] {
        [
            (self.fade_after_ms, FadeStep::Fade),
            (self.fade_after_ms.saturating_add(self.remove_after_ms), FadeStep::Remove),
        ]
    }
}

impl Default for FadePlan {
    fn default() -> Self {
        Self::from_config(&PageConfig::default())
    }
}

/// Carry out one step on `element`.
pub fn apply<H: Host>(host: &H, element: &H::Node, step: FadeStep, config: &PageConfig) {
    match step {
        FadeStep::Fade => {
            let styles = [("opacity", "0".to_owned()), ("transition", config.fade_transition())];
            for (property, value) in styles {
                if let Err(err) = host.set_style(element, property, &value) {
                    log::warn!("message fader: setting {property} failed: {err}");
                }
            }
        }
        FadeStep::Remove => host.detach(element),
    }
}
