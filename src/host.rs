//! The DOM surface page behaviors are written against.
//!
//! DESIGN
//! ======
//! Behaviors talk to a `Host` instead of `web_sys` directly so the controller
//! runs unchanged in the browser (`web::WebHost`) and under native tests
//! (an in-memory fake). Node handles are opaque and cheap to clone.

use std::fmt;

use crate::error::PageError;

/// Answer an event handler gives about the event's default action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verdict {
    /// Let the browser carry out the default action.
    #[default]
    Proceed,
    /// Call `preventDefault()` on the event.
    Cancel,
}

impl Verdict {
    pub fn is_cancel(self) -> bool {
        self == Self::Cancel
    }
}

/// A local calendar date, rendered as ISO `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

pub trait Host {
    type Node: Clone;

    /// All elements in the document matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Node>, PageError>;

    /// Descendants of `scope` matching `selector`, in document order.
    fn query_within(&self, scope: &Self::Node, selector: &str) -> Result<Vec<Self::Node>, PageError>;

    fn by_id(&self, id: &str) -> Option<Self::Node>;

    /// The document root (`<html>`).
    fn root(&self) -> Result<Self::Node, PageError>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), PageError>;

    fn remove_attribute(&self, node: &Self::Node, name: &str) -> Result<(), PageError>;

    /// Current value of a form control; empty for non-controls.
    fn value(&self, node: &Self::Node) -> String;

    /// Set one inline style property.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> Result<(), PageError>;

    fn set_text(&self, node: &Self::Node, text: &str);

    /// Detach `node` from the document. Detached nodes are left alone.
    fn detach(&self, node: &Self::Node);

    /// Blocking notice.
    fn alert(&self, message: &str);

    /// Blocking yes/no prompt; `true` when the user accepts.
    fn confirm(&self, message: &str) -> bool;

    /// Today's date on the local clock.
    fn today(&self) -> CalendarDate;

    /// Whether the environment reports a dark color-scheme preference.
    fn prefers_dark(&self) -> bool;
}
