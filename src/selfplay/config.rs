use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Tournament settings, loaded once from `arena_config.json` next to the
/// binary. A missing or unreadable file falls back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub version: String,
    pub games_to_play: usize,
    pub pacing: PacingConfig,
    pub save_results: bool,
}

/// Delays (in milliseconds) that make the console playback watchable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PacingConfig {
    pub new_game_delay_ms: u64,
    pub think_delay_ms: u64,
    pub move_delay_ms: u64,
    pub between_games_delay_ms: u64,
}

static CONFIG: Lazy<ArenaConfig> = Lazy::new(ArenaConfig::load_or_default);

impl ArenaConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string("arena_config.json")?;
        let config: ArenaConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }

    /// Cached config - loaded on first access, immutable afterwards.
    pub fn get() -> &'static ArenaConfig {
        &CONFIG
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            version: "1.0".to_string(),
            games_to_play: 5,
            pacing: PacingConfig {
                new_game_delay_ms: 2000,
                think_delay_ms: 1000,
                move_delay_ms: 2000,
                between_games_delay_ms: 3000,
            },
            save_results: false,
        }
    }
}
