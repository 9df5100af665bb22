//! Resource link id history
//!
//! When a content item is copied or replaced, the ids it used to have are kept
//! in its settings under `id_history` as a comma-joined list of `content:<id>`
//! so launches carrying an old resource link id can still be resolved.

use std::fmt;

use serde_json::{Map, Value};
use tracing::debug;

use crate::content::ContentRecord;
use crate::error::Result;

/// Settings key holding the history
pub const ID_HISTORY: &str = "id_history";

const CONTENT_PREFIX: &str = "content:";

/// Ordered set of `content:<id>` entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct IdHistory {
    entries: Vec<String>,
}

impl IdHistory {
    fn from_settings(settings: &Map<String, Value>) -> Self {
        let mut history = Self::default();
        history.extend_from_settings(settings);
        history
    }

    fn extend_from_settings(&mut self, settings: &Map<String, Value>) {
        let Some(joined) = settings.get(ID_HISTORY).and_then(Value::as_str) else {
            return;
        };

        for entry in joined.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
            self.push(entry);
        }
    }

    fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    fn push_content(&mut self, id: &str) {
        self.push(format!("{CONTENT_PREFIX}{id}"));
    }
}

impl fmt::Display for IdHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.join(","))
    }
}

/// History of `old` including its own id
pub fn track_resource_link_id(old: &ContentRecord) -> Result<String> {
    let mut history = IdHistory::from_settings(&old.settings_object()?);
    history.push_content(&old.id);
    Ok(history.to_string())
}

/// Carries `old`'s history and id into `new`'s settings
///
/// Entries keep first-seen order: `old`'s history, then `new`'s, then `old`'s
/// own id. Returns whether `new`'s stored history changed; other settings keys
/// are preserved.
pub fn track_resource_link_id_into(new: &mut ContentRecord, old: &ContentRecord) -> Result<bool> {
    let mut settings = new.settings_object()?;
    let before = settings.get(ID_HISTORY).and_then(Value::as_str).unwrap_or_default().to_string();

    let mut history = IdHistory::from_settings(&old.settings_object()?);
    history.extend_from_settings(&settings);
    history.push_content(&old.id);

    let after = history.to_string();
    if after == before {
        return Ok(false);
    }

    debug!(new = %new.id, old = %old.id, history = %after, "Resource link id history updated");
    settings.insert(ID_HISTORY.to_string(), Value::String(after));
    new.set_settings_object(settings)?;
    Ok(true)
}
