//! Page controller: owns the host, the preference store and the config, and
//! exposes one entry point per page event.
//!
//! ARCHITECTURE
//! ============
//! `boot` does the load-time work and reports which elements need listeners.
//! The browser layer attaches those listeners and routes each event back into
//! `submit`, `click_confirm`, `click_toggle` or `fade_step`. Nothing here
//! registers listeners itself, so tests drive a page deterministically.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::PageConfig;
use crate::host::{Host, Verdict};
use crate::message_fader::{FadePlan, FadeStep};
use crate::prefs::PreferenceStore;
use crate::theme::Theme;
use crate::{confirm_guard, date_floor, form_guard, message_fader, theme};

/// Elements found at load that the browser layer must wire.
#[derive(Clone, Debug)]
pub struct BootReport<N> {
    pub forms: Vec<N>,
    pub confirms: Vec<N>,
    pub messages: Vec<N>,
    pub toggle: Option<N>,
    pub fade: FadePlan,
    /// Theme in effect once boot finished.
    pub theme: Theme,
    /// Inputs given a date floor, or `None` when the floor is not enabled.
    pub dated_inputs: Option<usize>,
}

pub struct PageController<H: Host, S: PreferenceStore> {
    host: H,
    store: S,
    config: PageConfig,
}

impl<H: Host, S: PreferenceStore> PageController<H, S> {
    pub fn new(host: H, store: S, config: PageConfig) -> Self {
        Self { host, store, config }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run load-time work and collect the elements to wire.
    pub fn boot(&self) -> BootReport<H::Node> {
        if self.config.restore_theme {
            theme::restore(&self.host, &self.store, &self.config);
        }

        let toggle = self.host.by_id(&self.config.toggle_id);
        let theme = match &toggle {
            Some(control) => theme::sync_icon(&self.host, control, &self.config),
            None => {
                log::debug!("no #{} control on this page", self.config.toggle_id);
                theme::current(&self.host, &self.config)
            }
        };

        let dated_inputs = self
            .config
            .date_floor
            .then(|| date_floor::apply(&self.host, self.host.today(), &self.config));

        BootReport {
            forms: self.collect(&self.config.form_selector),
            confirms: self.collect(&self.config.confirm_selector()),
            messages: self.collect(&self.config.message_selector),
            toggle,
            fade: FadePlan::from_config(&self.config),
            theme,
            dated_inputs,
        }
    }

    pub fn submit(&self, form: &H::Node) -> Verdict {
        form_guard::on_submit(&self.host, form, &self.config)
    }

    pub fn click_confirm(&self, element: &H::Node) -> Verdict {
        confirm_guard::on_click(&self.host, element, &self.config)
    }

    pub fn click_toggle(&self, control: &H::Node) -> Theme {
        theme::toggle(&self.host, &self.store, control, &self.config)
    }

    pub fn fade_step(&self, message: &H::Node, step: FadeStep) {
        message_fader::apply(&self.host, message, step, &self.config);
    }

    fn collect(&self, selector: &str) -> Vec<H::Node> {
        self.host.query_all(selector).unwrap_or_else(|err| {
            log::warn!("querying {selector} failed: {err}");
            Vec::new()
        })
    }
}
