use mot_core::editor::EditOp;

use super::Bot;

/// `keep` / `delete`: rewrite the bullet list of the last logged
/// definition and confirm with the rewritten entry.
pub async fn handle_edit_last(bot: &Bot, keep: bool, body: &str) {
    let indices = match parse_indices(body) {
        Ok(indices) => indices,
        Err(bad) => {
            bot.reply(&format!(
                "Could not read '{bad}' as a bullet number - no action taken."
            ))
            .await;
            return;
        }
    };

    let op = if keep {
        EditOp::Keep(indices)
    } else {
        EditOp::Delete(indices)
    };

    match bot.editor.edit(op).await {
        Ok(outcome) => {
            bot.reply(&format!(
                "*Definition updated* \u{2705}\n\n*{}*:\n{}",
                outcome.word, outcome.definition
            ))
            .await;
        }
        Err(e) => {
            tracing::debug!(error = %e, "edit rejected");
            bot.reply(&e.to_string()).await;
        }
    }
}

/// Comma-separated 1-based bullet numbers: "1, 3" parses to [1, 3].
fn parse_indices(body: &str) -> Result<Vec<usize>, String> {
    body.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<usize>().map_err(|_| token.to_string())
        })
        .collect()
}
