use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::game::GameSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "snake_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(&get_config_path())
}

pub fn config_manager_at(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameSettings,
    pub window: WindowConfig,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    /// Pixel side length of the square play-field canvas.
    pub canvas_size: u32,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        Ok(())
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.canvas_size < 200 || self.canvas_size > 4000 {
            return Err("Canvas size must be between 200 and 4000 pixels".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { canvas_size: 900 }
    }
}
