use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// DOM id the quiz form is reachable by.
pub const QUIZ_FORM_ID: &str = "quiz-form";

/// Snapshot of a form's named controls at submit time.
///
/// Field order is preserved as captured; names are expected to be unique per
/// submission (a duplicate name keeps its first value on lookup).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormData {
    id: String,
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new(fields: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self::with_id(QUIZ_FORM_ID, fields)
    }

    pub fn with_id(
        id: impl Into<String>,
        fields: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            id: id.into(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw textual value of a named control, if present.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All field/value pairs in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// A user-initiated submit event.
///
/// The handler must cancel the browser's default full-page submission on every
/// invocation; the flag here makes that observable.
#[derive(Debug)]
pub struct SubmitEvent {
    form: FormData,
    default_prevented: AtomicBool,
}

impl SubmitEvent {
    pub fn new(form: FormData) -> Self {
        Self {
            form,
            default_prevented: AtomicBool::new(false),
        }
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::SeqCst);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::SeqCst)
    }
}

/// Lenient, `parseInt`-like integer parse: optional sign, then the leading run
/// of ASCII digits. Anything unparseable yields `None`, the not-a-number
/// sentinel, which serializes to JSON `null`. Never an error.
pub fn parse_answer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let run: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if run.is_empty() {
        return None;
    }

    run.parse::<i64>().ok().map(|n| if negative { -n } else { n })
}
