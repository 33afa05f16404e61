use serde::{Deserialize, Serialize};
use snake_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use snake_engine::games::snake::GameSettings;

use crate::autopilot::AutopilotKind;

pub const DEFAULT_CONFIG_FILE: &str = "snake_sim.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, SimulatorConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SimulatorConfig {
    pub game: GameSettings,
    pub games: u32,
    pub max_ticks_per_game: u64,
    pub autopilot: AutopilotKind,
}

impl Validate for SimulatorConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.games < 1 {
            return Err("games must be at least 1".to_string());
        }
        if self.max_ticks_per_game < 1 {
            return Err("max_ticks_per_game must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            games: 10,
            max_ticks_per_game: 100_000,
            autopilot: AutopilotKind::Greedy,
        }
    }
}
