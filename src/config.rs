use std::env;
use std::path::PathBuf;

use crate::error::{BotError, Result};
use crate::profile::Profile;

#[derive(Clone)]
pub struct Config {
    /// Plain-text file holding the permalink of the last post we announced.
    pub state_file: PathBuf,
    pub profile: Profile,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let state_file = env::var("STATE_FILE")
            .map_err(|_| BotError::Config("STATE_FILE is not set".to_string()))?;
        if state_file.is_empty() {
            return Err(BotError::Config("STATE_FILE is empty".to_string()));
        }

        let profile = match env::var("BOT_PROFILE") {
            Ok(name) => name.parse().map_err(BotError::Config)?,
            Err(_) => Profile::Xbot,
        };

        Ok(Config {
            state_file: PathBuf::from(state_file),
            profile,
        })
    }
}
