use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address the webhook listener binds to.
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn new() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Self { bind_addr }
    }
}
