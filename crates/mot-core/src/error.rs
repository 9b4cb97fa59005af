/// Why a definition could not be produced. `Display` is the user-facing
/// reply text, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveFailure {
    /// Word absent from every English reference.
    #[error("{word} not found in any dictionary.")]
    NotFound { word: String },

    /// References answered but produced no usable short definitions.
    #[error("No definition found for the word '{word}'")]
    NoDefinition { word: String },

    /// The article exists but has no section for the target language.
    #[error("No definition found for the word {word}")]
    LanguageSectionMissing { word: String },

    /// The word exists but not under the requested grammatical category.
    #[error("{word} is not a {category}.")]
    CategoryMismatch { word: String, category: String },

    /// The article has no sub-section for the requested category.
    #[error(
        "No definition found for the word {word} in the {category} category. Are you sure *{word} is a {category}?*\n\nIf you need the list of grammatical categories, send a message using the following template: 'vocab categories language'.\n\nFor example, in French: 'vocab categories fr'"
    )]
    CategoryNotInArticle { word: String, category: String },

    /// The French flows require a category up front.
    #[error(
        "Please specify in parentheses the category of the word: verb, noun, adjective, adverb, expression.\nExample: berger (noun)"
    )]
    MissingCategory,

    /// None of the layered block patterns matched the sub-section body.
    #[error("No definition found for the word {word}. Error of matches.")]
    NoDefinitionBlock { word: String },

    /// A block was extracted but every line of it was filtered away.
    #[error("Word found, but definition not retrieved")]
    DefinitionFiltered,

    /// The article query returned no extract text at all.
    #[error("No article text came back for '{word}'. This is a bug, please report it.")]
    ArticleMissing { word: String },

    /// A reference call failed at the transport or protocol level.
    #[error("Failed to use the API for the word '{word}'")]
    BackendFailed { word: String },

    /// The language slot named something we do not serve.
    #[error("This language does not exist or is not supported.")]
    UnsupportedLanguage,

    /// Unrecognized or malformed command.
    #[error("Error - no action taken.")]
    UnknownCommand,
}

/// Coarse failure classification, used for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    CategoryMismatch,
    MissingCategory,
    ParseFailure,
    UnsupportedLanguage,
    UnknownCommand,
    InternalError,
}

impl ResolveFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound { .. }
            | Self::NoDefinition { .. }
            | Self::LanguageSectionMissing { .. } => FailureKind::NotFound,
            Self::CategoryMismatch { .. } | Self::CategoryNotInArticle { .. } => {
                FailureKind::CategoryMismatch
            }
            Self::MissingCategory => FailureKind::MissingCategory,
            Self::NoDefinitionBlock { .. } | Self::DefinitionFiltered => FailureKind::ParseFailure,
            Self::UnsupportedLanguage => FailureKind::UnsupportedLanguage,
            Self::UnknownCommand => FailureKind::UnknownCommand,
            Self::ArticleMissing { .. } | Self::BackendFailed { .. } => FailureKind::InternalError,
        }
    }
}
