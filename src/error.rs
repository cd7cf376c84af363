//! Error type shared by the host seam, the preference store and configuration.
//!
//! Page behaviors never surface these to the user; the controller logs them
//! and keeps going.

/// Failures raised while talking to the page or its storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// `window` is not available (not running in a browser).
    #[error("no window available")]
    NoWindow,

    /// The window has no document.
    #[error("no document available")]
    NoDocument,

    /// The document has no root element.
    #[error("document has no root element")]
    NoRoot,

    /// A DOM call threw; carries the rendered exception.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Reading or writing the preference store failed.
    #[error("preference storage failed: {0}")]
    Storage(String),

    /// Page configuration could not be parsed or is invalid.
    #[error("config parse failed: {0}")]
    Config(String),

    /// A stored or supplied theme name is not recognized.
    #[error("unknown theme: {0}")]
    Theme(String),
}
