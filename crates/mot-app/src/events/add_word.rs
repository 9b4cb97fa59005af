use mot_core::command::Command;
use mot_core::entry::WordEntry;
use mot_core::error::ResolveFailure;

use super::Bot;

/// `vocab <lang> item, item, ...`: resolve each item and append it to the
/// vocabulary log, one reply per item. `vocab categories <lang>` answers
/// with the language's category list instead.
pub async fn handle_add_word(bot: &Bot, command: &Command) {
    if command.items.is_empty() {
        bot.reply(&ResolveFailure::UnknownCommand.to_string()).await;
        return;
    }

    if matches!(
        command.language_code.as_str(),
        "categories" | "categorie" | "category"
    ) {
        for item in &command.items {
            bot.reply(&no_action(&category_help(bot, item))).await;
        }
        return;
    }

    for item in &command.items {
        let reply = add_one(bot, &command.language_code, item).await;
        bot.reply(&reply).await;
    }
}

/// The per-language category list, or the unsupported-language text.
fn category_help(bot: &Bot, language_code: &str) -> String {
    match bot.resolvers.get(&language_code.trim().to_lowercase()) {
        Some(resolver) => resolver.category_help(),
        None => ResolveFailure::UnsupportedLanguage.to_string(),
    }
}

/// Resolve one raw item and append it, producing the whole reply text.
async fn add_one(bot: &Bot, language_code: &str, item: &str) -> String {
    let Some(resolver) = bot.resolvers.get(language_code) else {
        return no_action(&ResolveFailure::UnsupportedLanguage.to_string());
    };

    let entry = WordEntry::extract(item);
    let resolved = match resolver.resolve(&entry).await {
        Ok(resolved) => resolved,
        Err(failure) => {
            tracing::debug!(kind = ?failure.kind(), %item, "resolution failed");
            return no_action(&failure.to_string());
        }
    };

    match bot.writer.append(language_code, &resolved).await {
        Ok(confirmation) => format!("{confirmation}\n\n*{item}* added to database."),
        Err(e) => {
            tracing::error!(error = %e, word = %resolved.word, "failed to append row");
            no_action("Retrieval failed.")
        }
    }
}

fn no_action(text: &str) -> String {
    format!("{text}\n\nNo action taken.")
}
