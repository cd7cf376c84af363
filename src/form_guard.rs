//! Blocks form submission while any mandatory field is blank.

#[cfg(test)]
#[path = "form_guard_test.rs"]
mod form_guard_test;

use crate::config::PageConfig;
use crate::host::{Host, Verdict};

/// Validity of each mandatory field, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldReport {
    pub fields: Vec<bool>,
}

impl FieldReport {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|ok| *ok)
    }

    pub fn invalid_count(&self) -> usize {
        self.fields.iter().filter(|ok| !**ok).count()
    }
}

/// A field passes when its trimmed value is non-empty.
pub fn check<'a>(values: impl IntoIterator<Item = &'a str>) -> FieldReport {
    FieldReport { fields: values.into_iter().map(|v| !v.trim().is_empty()).collect() }
}

/// Handle `submit` on `form`.
///
/// Every mandatory field gets its border reset to the valid or invalid token so
/// a corrected field loses the marker from an earlier attempt. One notice is
/// shown per rejected submission.
pub fn on_submit<H: Host>(host: &H, form: &H::Node, config: &PageConfig) -> Verdict {
    let fields = match host.query_within(form, &config.required_selector) {
        Ok(fields) => fields,
        Err(err) => {
            log::warn!("form guard: querying required fields failed: {err}");
            return Verdict::Proceed;
        }
    };

    let values = fields.iter().map(|f| host.value(f)).collect::<Vec<_>>();
    let report = check(values.iter().map(String::as_str));

    for (field, ok) in fields.iter().zip(&report.fields) {
        let border = if *ok { &config.valid_border } else { &config.invalid_border };
        if let Err(err) = host.set_style(field, "border-color", border) {
            log::warn!("form guard: styling field failed: {err}");
        }
    }

    if report.is_valid() {
        return Verdict::Proceed;
    }
    log::debug!("form guard: blocked submit with {} blank field(s)", report.invalid_count());
    host.alert(&config.required_notice);
    Verdict::Cancel
}
