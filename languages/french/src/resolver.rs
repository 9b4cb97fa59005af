use std::sync::Arc;

use async_trait::async_trait;

use mot_core::bullets;
use mot_core::entry::WordEntry;
use mot_core::error::ResolveFailure;
use mot_core::resolve::{DefinitionResolver, Resolved};
use mot_dict::ArticleSource;

use crate::article::{self, FilterProfile};

const FR_CATEGORY_HELP: &str = "Please choose a grammatical category among the following:\n\u{2022} Nom commun\n\u{2022} Nom propre\n\u{2022} Adjectif\n\u{2022} Verbe\n\u{2022} Adverbe\n\u{2022} Pronom\n\u{2022} Pr\u{e9}position\n\u{2022} Conjonction\n\u{2022} Interjection\n\u{2022} D\u{e9}terminant\n\u{2022} Article\n\u{2022} Onomatop\u{e9}e\n\u{2022} Locution nominale\n\u{2022} Locution verbale\n\u{2022} Locution adjectivale\n\u{2022} Locution adverbiale\n\u{2022} Locution pr\u{e9}positive";

const FREN_CATEGORY_HELP: &str = "Please choose a grammatical category among the following:\n\u{2022} Noun\n\u{2022} Proper noun\n\u{2022} Adjective\n\u{2022} Verb\n\u{2022} Adverb\n\u{2022} Pronoun\n\u{2022} Preposition\n\u{2022} Conjunction\n\u{2022} Interjection\n\u{2022} Determiner\n\u{2022} Article\n\u{2022} Onomatopoeia\n\u{2022} Phrase";

/// Both French strategies walk the same article pipeline; they differ only
/// in the edition they query, the language section they look for and the
/// line filter they apply.
async fn resolve_from_articles(
    source: &dyn ArticleSource,
    section_name: &str,
    profile: FilterProfile,
    entry: &WordEntry,
) -> Result<Resolved, ResolveFailure> {
    let Some(category) = entry.category.as_deref() else {
        return Err(ResolveFailure::MissingCategory);
    };
    let word = entry.word.as_str();

    let extract = source
        .extract(word)
        .await
        .map_err(|err| {
            tracing::warn!(%word, error = %err, "article fetch failed");
            ResolveFailure::BackendFailed { word: word.to_string() }
        })?
        .ok_or_else(|| ResolveFailure::ArticleMissing { word: word.to_string() })?;

    let section = article::language_section(&extract, section_name)
        .ok_or_else(|| ResolveFailure::LanguageSectionMissing { word: word.to_string() })?;

    let sub_section = article::category_section(section, category).ok_or_else(|| {
        ResolveFailure::CategoryNotInArticle {
            word: word.to_string(),
            category: category.to_string(),
        }
    })?;

    let block = article::definition_block(sub_section)
        .ok_or_else(|| ResolveFailure::NoDefinitionBlock { word: word.to_string() })?;

    let lines = article::filter_lines(&block, word, profile);
    if lines.is_empty() {
        return Err(ResolveFailure::DefinitionFiltered);
    }

    Ok(Resolved {
        word: word.to_string(),
        category: category.to_string(),
        definition: bullets::join_definitions(&lines),
        quote: entry.quote.clone(),
    })
}

/// French words glossed in English: the English-language edition's
/// `== French ==` section.
pub struct FrenchEnglishResolver {
    source: Arc<dyn ArticleSource>,
}

impl FrenchEnglishResolver {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl DefinitionResolver for FrenchEnglishResolver {
    fn language_code(&self) -> &str {
        "fren"
    }

    fn category_help(&self) -> String {
        FREN_CATEGORY_HELP.to_string()
    }

    async fn resolve(&self, entry: &WordEntry) -> Result<Resolved, ResolveFailure> {
        resolve_from_articles(self.source.as_ref(), "french", FilterProfile::Gloss, entry).await
    }
}

/// Monolingual French: the French-language edition's `== Français ==`
/// section.
pub struct FrenchFrenchResolver {
    source: Arc<dyn ArticleSource>,
}

impl FrenchFrenchResolver {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl DefinitionResolver for FrenchFrenchResolver {
    fn language_code(&self) -> &str {
        "fr"
    }

    fn category_help(&self) -> String {
        FR_CATEGORY_HELP.to_string()
    }

    async fn resolve(&self, entry: &WordEntry) -> Result<Resolved, ResolveFailure> {
        resolve_from_articles(
            self.source.as_ref(),
            "fran\u{e7}ais",
            FilterProfile::Monolingual,
            entry,
        )
        .await
    }
}
