use std::io::ErrorKind;
use std::sync::Arc;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use snake_engine::scores::{ScoreEntry, ScoreService};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub player_name: String,
    pub score: u32,
    pub date: String,
}

#[derive(Clone)]
pub struct ScoreStore {
    records: Arc<Mutex<Vec<ScoreRecord>>>,
    file_path: Option<String>,
    max_top_scores: usize,
}

impl ScoreStore {
    #[cfg(test)]
    pub fn in_memory(max_top_scores: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            file_path: None,
            max_top_scores,
        }
    }

    pub fn load(file_path: &str, max_top_scores: usize) -> Result<Self, String> {
        let records = match std::fs::read_to_string(file_path) {
            Ok(content) => serde_yaml_ng::from_str(&content)
                .map_err(|e| format!("Failed to deserialize scores file: {}", e))?,
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(format!("Failed to read scores file: {}", err)),
        };

        Ok(Self {
            records: Arc::new(Mutex::new(records)),
            file_path: Some(file_path.to_string()),
            max_top_scores,
        })
    }

    pub async fn add(&self, player_name: &str, score: u32) -> Result<ScoreRecord, String> {
        let record = ScoreRecord {
            player_name: player_name.to_string(),
            score,
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        let mut records = self.records.lock().await;
        records.push(record.clone());
        if let Err(e) = self.persist(&records) {
            records.pop();
            return Err(e);
        }

        Ok(record)
    }

    pub async fn top_scores(&self) -> Vec<ScoreRecord> {
        let records = self.records.lock().await;
        let mut sorted = records.clone();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted.truncate(self.max_top_scores);
        sorted
    }

    fn persist(&self, records: &[ScoreRecord]) -> Result<(), String> {
        let Some(ref file_path) = self.file_path else {
            return Ok(());
        };

        let serialized = serde_yaml_ng::to_string(records)
            .map_err(|e| format!("Failed to serialize scores: {}", e))?;
        std::fs::write(file_path, serialized)
            .map_err(|e| format!("Failed to write scores file: {}", e))
    }
}

impl ScoreService for ScoreStore {
    async fn submit_score(&self, player_name: &str, score: u32) -> Result<(), String> {
        self.add(player_name, score).await.map(|_| ())
    }

    async fn fetch_top_scores(&self) -> Result<Vec<ScoreEntry>, String> {
        Ok(self
            .top_scores()
            .await
            .into_iter()
            .map(|record| ScoreEntry {
                player_name: record.player_name,
                score: record.score,
            })
            .collect())
    }
}
