use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

use snake_engine::log;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub static_files_path: String,
    pub scores_file: String,
    pub max_top_scores: usize,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.bind_address.is_empty() {
            return Err("bind_address must not be empty".to_string());
        }
        if self.scores_file.is_empty() {
            return Err("scores_file must not be empty".to_string());
        }
        if self.max_top_scores < 1 || self.max_top_scores > 100 {
            return Err("max_top_scores must be between 1 and 100".to_string());
        }
        Ok(())
    }

    pub fn load(file_path: &str) -> Result<Self, String> {
        let content = match std::fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log!("Config file {} not found, using defaults", file_path);
                return Ok(Self::default());
            }
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5001".to_string(),
            static_files_path: "ui".to_string(),
            scores_file: "scores.yaml".to_string(),
            max_top_scores: 10,
        }
    }
}
