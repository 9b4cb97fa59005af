use std::sync::Arc;

use async_trait::async_trait;

use crate::bullets;
use crate::resolve::Resolved;

/// One appended row: language, word, category, definition, quote.
/// Absent category and quote are stored as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub language: String,
    pub word: String,
    pub category: String,
    pub definition: String,
    pub quote: String,
}

/// The most recent logged entry, as the editor needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastEntry {
    /// 1-based row position in the log.
    pub row: usize,
    pub word: String,
    pub definition: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("vocabulary log backend error: {0}")]
    Backend(String),
    #[error("vocabulary log is empty")]
    Empty,
}

/// Append-only vocabulary log. Row identity is position; the last row is
/// recomputed from the word column on every call, with no lock held across
/// calls.
#[async_trait]
pub trait VocabLog: Send + Sync {
    /// Append a row, returning the 1-based position it landed at.
    async fn append(&self, row: &LogRow) -> Result<usize, LogError>;

    /// Position, word and definition of the last row with a word.
    async fn last_entry(&self) -> Result<LastEntry, LogError>;

    /// Rewrite one row's definition, leaving its other columns untouched.
    async fn update_definition(&self, row: usize, definition: &str) -> Result<(), LogError>;
}

/// Appends resolved entries and formats the confirmation reply.
pub struct LogWriter {
    log: Arc<dyn VocabLog>,
}

impl LogWriter {
    pub fn new(log: Arc<dyn VocabLog>) -> Self {
        Self { log }
    }

    /// Append one resolved entry and return the confirmation text.
    pub async fn append(&self, language: &str, resolved: &Resolved) -> Result<String, LogError> {
        let row = LogRow {
            language: language.to_string(),
            word: resolved.word.clone(),
            category: resolved.category.clone(),
            definition: resolved.definition.clone(),
            quote: resolved.quote.clone().unwrap_or_default(),
        };
        self.log.append(&row).await?;
        Ok(confirmation(&resolved.word, &resolved.definition))
    }
}

/// `*word*: def` for a bare definition, `*word*:` then the block on its own
/// lines for a bulleted one.
pub fn confirmation(word: &str, definition: &str) -> String {
    if bullets::is_bulleted(definition) {
        format!("*{word}*:\n{definition}")
    } else {
        format!("*{word}*: {definition}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_definition_sits_on_the_same_line() {
        assert_eq!(confirmation("run", "to move fast"), "*run*: to move fast");
    }

    #[test]
    fn bulleted_definition_starts_on_its_own_line() {
        let definition = "\u{2022}\u{a0} to move fast\n\u{2022}\u{a0} to operate";
        assert_eq!(
            confirmation("run", definition),
            "*run*:\n\u{2022}\u{a0} to move fast\n\u{2022}\u{a0} to operate"
        );
    }
}
