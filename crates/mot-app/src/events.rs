use std::sync::Arc;

use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

use mot_config::Config;
use mot_core::command::{Command, CommandError, Service};
use mot_core::editor::LastEntryEditor;
use mot_core::error::ResolveFailure;
use mot_core::log::{LogWriter, VocabLog};
use mot_core::resolve::ResolverSet;
use mot_dict::{MerriamWebsterClient, Reference, WiktionaryClient};
use mot_lang_english::EnglishResolver;
use mot_lang_french::{FrenchEnglishResolver, FrenchFrenchResolver};
use mot_sheets::SheetsClient;
use mot_speech::{SpeechSynthesizer, TranslateTts};
use mot_whatsapp::{CloudApiClient, Messenger};

use crate::state::AppState;

pub mod add_word;
pub mod edit_last;
pub mod speak;

use add_word::handle_add_word;
use edit_last::handle_edit_last;
use speak::handle_speak;

/// Events flowing from the webhook listener to the dispatcher.
#[derive(Debug, Clone)]
pub enum AppEvent {
    InboundMessage {
        message_id: String,
        from: String,
        text: String,
    },
}

/// Everything one message dispatch needs.
pub struct Bot {
    pub resolvers: ResolverSet,
    pub writer: LogWriter,
    pub editor: LastEntryEditor,
    pub messenger: Arc<dyn Messenger>,
    pub speech: Arc<dyn SpeechSynthesizer>,
    /// Replies always go to the configured recipient, not the sender.
    pub recipient: String,
}

impl Bot {
    /// Dispatch one inbound message. Failures turn into reply text or log
    /// lines; nothing propagates out.
    pub async fn handle_message(&self, text: &str) {
        let command = match Command::parse(text) {
            Ok(command) => command,
            Err(CommandError::TooShort) => {
                tracing::debug!("rejected a message with fewer than two tokens");
                self.reply(&ResolveFailure::UnknownCommand.to_string()).await;
                return;
            }
        };

        match command.service {
            Service::AddWord => handle_add_word(self, &command).await,
            Service::SpeakFr => handle_speak(self, "fr", &command.body).await,
            Service::SpeakEn => handle_speak(self, "en", &command.body).await,
            Service::KeepLast => handle_edit_last(self, true, &command.body).await,
            Service::DeleteLast => handle_edit_last(self, false, &command.body).await,
            Service::Unknown => {
                tracing::debug!("unknown service keyword");
                self.reply(&ResolveFailure::UnknownCommand.to_string()).await;
            }
        }
    }

    /// Send a text reply to the configured recipient, logging failures.
    pub async fn reply(&self, text: &str) {
        if let Err(e) = self.messenger.send_text(&self.recipient, text).await {
            tracing::error!(error = %e, "failed to deliver reply");
        }
    }
}

/// Dispatcher loop: builds the bot from config, then drains the webhook
/// channel until cancelled.
pub async fn event_loop(
    state: Arc<AppState>,
    webhook_rx: AsyncReceiver<AppEvent>,
    cancel_token: CancellationToken,
) -> anyhow::Result<()> {
    let bot = {
        let config = state.config.read().await;
        build_bot(&config)
    };

    tracing::info!("dispatcher ready, waiting for messages");
    loop {
        let event = tokio::select! {
            event = webhook_rx.recv() => event?,
            () = cancel_token.cancelled() => {
                tracing::info!("dispatcher stopping");
                return Ok(());
            }
        };

        match event {
            AppEvent::InboundMessage { message_id, from, text } => {
                tracing::info!(%message_id, %from, "handling inbound message");
                bot.handle_message(&text).await;
            }
        }
    }
}

/// Wire the resolver strategies and outbound clients from config.
fn build_bot(config: &Config) -> Bot {
    let learners = Arc::new(MerriamWebsterClient::new(
        config.dictionary.base_url.clone(),
        Reference::Learners,
        config.dictionary.learners_key.clone(),
    ));
    let collegiate = Arc::new(MerriamWebsterClient::new(
        config.dictionary.base_url.clone(),
        Reference::Collegiate,
        config.dictionary.collegiate_key.clone(),
    ));

    let wiktionary_en = Arc::new(WiktionaryClient::new(config.dictionary.wiktionary_en.clone()));
    let wiktionary_fr = Arc::new(WiktionaryClient::new(config.dictionary.wiktionary_fr.clone()));

    let resolvers = ResolverSet::new(vec![
        Arc::new(EnglishResolver::new(learners, collegiate)),
        Arc::new(FrenchEnglishResolver::new(wiktionary_en)),
        Arc::new(FrenchFrenchResolver::new(wiktionary_fr)),
    ]);

    let log: Arc<dyn VocabLog> = Arc::new(SheetsClient::new(
        config.sheets.base_url.clone(),
        config.sheets.spreadsheet_id.clone(),
        config.sheets.access_token.clone(),
    ));

    let messenger = Arc::new(CloudApiClient::new(
        config.whatsapp.base_url.clone(),
        config.whatsapp.api_version.clone(),
        config.whatsapp.phone_number_id.clone(),
        config.whatsapp.access_token.clone(),
    ));

    Bot {
        resolvers,
        writer: LogWriter::new(Arc::clone(&log)),
        editor: LastEntryEditor::new(log),
        messenger,
        speech: Arc::new(TranslateTts::new(config.speech.base_url.clone())),
        recipient: config.whatsapp.recipient_waid.clone(),
    }
}
