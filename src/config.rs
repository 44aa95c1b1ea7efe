//! Runtime configuration from `LED_GAMER_*` environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `LED_GAMER_GAME` | `tetris` |
//! | `LED_GAMER_SEED` | derived from the system clock |
//! | `LED_GAMER_FRAME_MS` | `16` (1..=1000) |
//! | `LED_GAMER_LOG` | unset, logging off |
//! | `LED_GAMER_LOG_LEVEL` | `info` |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Context, Result};

use crate::types::GameKind;

pub const GAME_VAR: &str = "LED_GAMER_GAME";
pub const SEED_VAR: &str = "LED_GAMER_SEED";
pub const FRAME_MS_VAR: &str = "LED_GAMER_FRAME_MS";
pub const LOG_VAR: &str = "LED_GAMER_LOG";
pub const LOG_LEVEL_VAR: &str = "LED_GAMER_LOG_LEVEL";

pub const DEFAULT_FRAME_MS: u64 = 16;
const MAX_FRAME_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub game: GameKind,
    /// `None` means seed from the clock at startup
    pub seed: Option<u32>,
    pub frame_ms: u64,
    pub log_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameKind::Tetris,
            seed: None,
            frame_ms: DEFAULT_FRAME_MS,
            log_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let mut config = Self::default();

        if let Some(name) = get(GAME_VAR) {
            config.game = GameKind::from_str(&name).ok_or_else(|| {
                anyhow!("{GAME_VAR}: unknown game {name:?} (expected snake, tetris or paint)")
            })?;
        }

        if let Some(seed) = get(SEED_VAR) {
            config.seed = Some(
                seed.parse()
                    .with_context(|| format!("{SEED_VAR}: {seed:?} is not a u32"))?,
            );
        }

        if let Some(ms) = get(FRAME_MS_VAR) {
            let ms: u64 = ms
                .parse()
                .with_context(|| format!("{FRAME_MS_VAR}: {ms:?} is not a number"))?;
            if !(1..=MAX_FRAME_MS).contains(&ms) {
                bail!("{FRAME_MS_VAR}: {ms} is outside 1..={MAX_FRAME_MS}");
            }
            config.frame_ms = ms;
        }

        config.log_path = get(LOG_VAR).map(PathBuf::from);
        if let Some(level) = get(LOG_LEVEL_VAR) {
            config.log_level = level;
        }

        Ok(config)
    }

    /// The configured seed, or one taken from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.game, GameKind::Tetris);
        assert_eq!(config.frame_ms, 16);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_all_values() {
        let config = parse(&[
            (GAME_VAR, " Snake "),
            (SEED_VAR, "42"),
            (FRAME_MS_VAR, "33"),
            (LOG_VAR, "/tmp/led-gamer.log"),
            (LOG_LEVEL_VAR, "debug"),
        ])
        .unwrap();
        assert_eq!(config.game, GameKind::Snake);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.seed_or_clock(), 42);
        assert_eq!(config.frame_ms, 33);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/led-gamer.log")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = parse(&[(GAME_VAR, "  "), (LOG_VAR, "")]).unwrap();
        assert_eq!(config.game, GameKind::Tetris);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_errors_name_the_variable() {
        let err = parse(&[(GAME_VAR, "pong")]).unwrap_err();
        assert!(err.to_string().contains(GAME_VAR));

        let err = parse(&[(SEED_VAR, "-1")]).unwrap_err();
        assert!(err.to_string().contains(SEED_VAR));

        let err = parse(&[(FRAME_MS_VAR, "0")]).unwrap_err();
        assert!(err.to_string().contains(FRAME_MS_VAR));

        let err = parse(&[(FRAME_MS_VAR, "1001")]).unwrap_err();
        assert!(err.to_string().contains("1..=1000"));

        assert!(parse(&[(FRAME_MS_VAR, "fast")]).is_err());
    }
}
