use std::future::Future;

use crate::log;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    pub player_name: String,
    pub score: u32,
}

pub trait ScoreService: Send + Sync + Clone + 'static {
    fn submit_score(
        &self,
        player_name: &str,
        score: u32,
    ) -> impl Future<Output = Result<(), String>> + Send;

    fn fetch_top_scores(&self) -> impl Future<Output = Result<Vec<ScoreEntry>, String>> + Send;
}

pub fn submit_score_in_background(service: impl ScoreService, player_name: String, score: u32) {
    if player_name.is_empty() {
        return;
    }

    tokio::spawn(async move {
        if let Err(e) = service.submit_score(&player_name, score).await {
            log!("Failed to submit score for {}: {}", player_name, e);
        }
    });
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::Mutex;

    use super::*;

    #[derive(Clone)]
    struct FakeScoreService {
        submitted: Arc<Mutex<Vec<ScoreEntry>>>,
        fail: bool,
    }

    impl FakeScoreService {
        fn new(fail: bool) -> Self {
            Self {
                submitted: Arc::new(Mutex::new(Vec::new())),
                fail,
            }
        }
    }

    impl ScoreService for FakeScoreService {
        async fn submit_score(&self, player_name: &str, score: u32) -> Result<(), String> {
            if self.fail {
                return Err("service unavailable".to_string());
            }
            self.submitted.lock().await.push(ScoreEntry {
                player_name: player_name.to_string(),
                score,
            });
            Ok(())
        }

        async fn fetch_top_scores(&self) -> Result<Vec<ScoreEntry>, String> {
            Ok(self.submitted.lock().await.clone())
        }
    }

    #[tokio::test]
    async fn test_background_submit_reaches_service() {
        let service = FakeScoreService::new(false);

        submit_score_in_background(service.clone(), "Alice".to_string(), 120);
        tokio::task::yield_now().await;

        let submitted = service.submitted.lock().await;
        assert_eq!(
            *submitted,
            vec![ScoreEntry {
                player_name: "Alice".to_string(),
                score: 120,
            }]
        );
    }

    #[tokio::test]
    async fn test_background_submit_skips_empty_name() {
        let service = FakeScoreService::new(false);

        submit_score_in_background(service.clone(), String::new(), 120);
        tokio::task::yield_now().await;

        assert!(service.submitted.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_background_submit_failure_does_not_panic() {
        let service = FakeScoreService::new(true);

        submit_score_in_background(service.clone(), "Bob".to_string(), 40);
        tokio::task::yield_now().await;

        assert!(service.submitted.lock().await.is_empty());
    }
}
