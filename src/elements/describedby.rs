use crate::elements::error_message::ErrorMessage;
use crate::elements::hint::Hint;

/// Position of an entry in the rendered attribute: hints first, then errors,
/// then caller-supplied ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DescriptionKind {
    Hint,
    Error,
    Extra,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionEntry {
    pub kind: DescriptionKind,
    pub id: String,
    pub present: bool,
}

/// The auxiliary descriptions attached to one control or fieldset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionSet {
    entries: Vec<DescriptionEntry>,
}

impl DescriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: DescriptionKind, id: impl Into<String>, present: bool) {
        self.entries.push(DescriptionEntry {
            kind,
            id: id.into(),
            present,
        });
    }

    pub fn with_hint(mut self, hint: Option<&Hint>) -> Self {
        if let Some(hint) = hint {
            self.push(DescriptionKind::Hint, hint.id.as_str(), true);
        }
        self
    }

    pub fn with_error(mut self, error: Option<&ErrorMessage>) -> Self {
        if let Some(error) = error {
            self.push(DescriptionKind::Error, error.id.as_str(), true);
        }
        self
    }

    /// Caller-supplied ids, kept in the order given.
    pub fn with_extras<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            self.push(DescriptionKind::Extra, id.as_ref(), true);
        }
        self
    }

    pub fn entries(&self) -> &[DescriptionEntry] {
        &self.entries
    }

    pub fn aggregate(&self) -> Option<String> {
        aggregate(&self.entries)
    }
}

/// Space-joined ids of the present entries, ordered hint, error, extras.
/// Ids are trimmed, blank ids are skipped and repeats keep only their first
/// position. `None` when nothing is present, so the attribute is left out entirely.
pub fn aggregate(entries: &[DescriptionEntry]) -> Option<String> {
    let mut present = entries
        .iter()
        .filter(|entry| entry.present && !entry.id.trim().is_empty())
        .collect::<Vec<_>>();

    // stable: extras keep their supplied order
    present.sort_by_key(|entry| entry.kind);

    let mut ids: Vec<&str> = Vec::with_capacity(present.len());
    for entry in present {
        let id = entry.id.trim();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    if ids.is_empty() {
        None
    } else {
        Some(ids.join(" "))
    }
}
