/// Service keyword, always the first token of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    AddWord,
    SpeakFr,
    SpeakEn,
    KeepLast,
    DeleteLast,
    Unknown,
}

impl Service {
    fn from_keyword(keyword: &str) -> Self {
        match keyword.to_lowercase().as_str() {
            "vocab" => Self::AddWord,
            "dis" => Self::SpeakFr,
            "say" => Self::SpeakEn,
            "keep" => Self::KeepLast,
            "delete" => Self::DeleteLast,
            _ => Self::Unknown,
        }
    }
}

/// One inbound message split into its command parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub service: Service,
    /// Second token, lowercased. The add flow reads a language code here;
    /// the categories pseudo-code also lands in this slot.
    pub language_code: String,
    /// Text after the first two tokens, comma-split and trimmed. Original
    /// casing is preserved, empty pieces are dropped.
    pub items: Vec<String>,
    /// Everything after the service keyword, trimmed and lowercased. The
    /// speak and keep/delete flows consume this whole.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("expected a service keyword followed by at least one argument")]
    TooShort,
}

impl Command {
    /// Split a raw message into keyword, language slot, items and body.
    /// Messages with fewer than two whitespace tokens are rejected.
    pub fn parse(text: &str) -> Result<Self, CommandError> {
        let trimmed = text.trim();
        let mut tokens = trimmed.split_whitespace();
        let keyword = tokens.next().ok_or(CommandError::TooShort)?;
        let second = tokens.next().ok_or(CommandError::TooShort)?;

        let after_keyword = trimmed[keyword.len()..].trim_start();
        let rest = after_keyword[second.len()..].trim();

        let items = rest
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            service: Service::from_keyword(keyword),
            language_code: second.to_lowercase(),
            items,
            body: after_keyword.to_lowercase(),
        })
    }
}
