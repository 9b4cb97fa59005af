use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::server::ServerConfig;
use self::sheets::SheetsConfig;
use self::speech::SpeechConfig;
use self::whatsapp::WhatsAppConfig;

pub mod dictionary;
pub mod server;
pub mod sheets;
pub mod speech;
pub mod whatsapp;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub whatsapp: WhatsAppConfig,
    pub dictionary: DictionaryConfig,
    pub sheets: SheetsConfig,
    pub speech: SpeechConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            server: ServerConfig::new(),
            whatsapp: WhatsAppConfig::new(),
            dictionary: DictionaryConfig::new(),
            sheets: SheetsConfig::new(),
            speech: SpeechConfig::new(),
        }
    }
}
