use anyhow::Context;
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_PATH: &str = "teeko_config.json";

static CONFIG: Lazy<AIConfig> = Lazy::new(AIConfig::load_or_default);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AIConfig {
    pub version: String,
    pub search: SearchConfig,
    pub tactics: TacticsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched below the root before falling back to the heuristic.
    pub depth_limit: usize,
    pub opponent_model: OpponentModel,
    /// Evaluate root successors on the rayon pool.
    pub parallel_root: bool,
}

/// Whose moves the search generates at the opponent's plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentModel {
    /// Min nodes generate the opponent's moves.
    Alternating,
    /// Every ply generates the agent's own moves (legacy engine behaviour).
    Mirror,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticsConfig {
    /// Run the win/block/opening shortcuts before searching.
    pub enabled: bool,
}

impl AIConfig {
    /// Process-wide config, read from `teeko_config.json` on first use.
    pub fn get() -> &'static AIConfig {
        &CONFIG
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: AIConfig = serde_json::from_str(&config_str)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        if !Path::new(CONFIG_PATH).exists() {
            debug!("{} not found, using default AI config", CONFIG_PATH);
            return Self::default();
        }
        Self::load().unwrap_or_else(|e| {
            warn!("{:#}; using default AI config", e);
            Self::default()
        })
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            search: SearchConfig::default(),
            tactics: TacticsConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth_limit: 3,
            opponent_model: OpponentModel::Alternating,
            parallel_root: false,
        }
    }
}

impl Default for TacticsConfig {
    fn default() -> Self {
        TacticsConfig { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let json = r#"{ "search": { "opponent_model": "mirror" } }"#;
        let config: AIConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.search.opponent_model, OpponentModel::Mirror);
        assert_eq!(config.search.depth_limit, 3);
        assert!(!config.search.parallel_root);
        assert!(config.tactics.enabled);
        assert_eq!(config.version, "1.0");
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut config = AIConfig::default();
        config.search.parallel_root = true;
        let text = serde_json::to_string(&config).unwrap();
        assert!(text.contains("\"alternating\""));
        let back: AIConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        let err = AIConfig::load_from("definitely/not/here.json").unwrap_err();
        assert!(format!("{:#}", err).contains("not/here.json"));
    }
}
