//! # pageglue
//!
//! Progressive enhancement for server-rendered pages, compiled to WebAssembly.
//! The server owns markup and data; this crate adds the small interactive
//! layer on top: required-field checks, confirmation prompts, self-dismissing
//! flash messages, an optional date floor and a persisted light/dark toggle.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Explicitly constructed page controller, one entry point per event |
//! | [`host`] | DOM seam (`Host` trait), `Verdict`, `CalendarDate` |
//! | [`prefs`] | Preference store service (memory and `localStorage`) |
//! | [`form_guard`] | Blocks submits with blank mandatory fields |
//! | [`confirm_guard`] | Yes/no prompt before destructive actions |
//! | [`message_fader`] | Fade-then-remove schedule for flash messages |
//! | [`date_floor`] | Default `min` on date inputs |
//! | [`theme`] | Theme state and toggle |
//! | [`config`] | Page configuration and defaults |
//! | [`error`] | `PageError` |
//! | `web` | `web_sys` host, listeners and timers (`hydrate` feature) |

pub mod config;
pub mod confirm_guard;
pub mod controller;
pub mod date_floor;
pub mod error;
pub mod form_guard;
pub mod host;
pub mod message_fader;
pub mod prefs;
pub mod theme;
#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
mod testing;

pub use config::PageConfig;
pub use controller::{BootReport, PageController};
pub use error::PageError;
pub use host::{CalendarDate, Host, Verdict};
pub use prefs::{MemoryStore, PreferenceStore};
pub use theme::Theme;
