use super::Bot;

/// `dis` / `say`: synthesize the body and send it back as a voice note.
pub async fn handle_speak(bot: &Bot, lang: &str, text: &str) {
    if let Err(e) = say(bot, lang, text).await {
        tracing::warn!(error = %e, %lang, "voice note failed");
        bot.reply(&format!("Tried to send you a vocal, but could not: {e}"))
            .await;
    }
}

async fn say(bot: &Bot, lang: &str, text: &str) -> anyhow::Result<()> {
    let clip = bot.speech.synthesize(lang, text).await?;
    bot.messenger
        .send_audio(&bot.recipient, &clip.bytes, &clip.mime_type)
        .await?;
    tracing::info!(%lang, bytes = clip.bytes.len(), "voice note delivered");
    Ok(())
}
