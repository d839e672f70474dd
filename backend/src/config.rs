//! Upstream recommender settings read from the environment.

use std::time::Duration;

const DEFAULT_RECOMMENDER_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct RecommenderConfig {
    pub recommender_url: String,
    pub request_timeout: Duration,
}

impl RecommenderConfig {
    pub fn from_env() -> Self {
        Self {
            recommender_url: std::env::var("RECOMMENDER_URL").unwrap_or(DEFAULT_RECOMMENDER_URL.to_string()),
            request_timeout: parse_timeout(std::env::var("RECOMMENDER_TIMEOUT_SECS").ok()),
        }
    }
}

fn parse_timeout(raw: Option<String>) -> Duration {
    let secs = raw
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_falls_back_on_garbage() {
        assert_eq!(parse_timeout(None), Duration::from_secs(60));
        assert_eq!(parse_timeout(Some("abc".into())), Duration::from_secs(60));
        assert_eq!(parse_timeout(Some("0".into())), Duration::from_secs(60));
        assert_eq!(parse_timeout(Some(" 15 ".into())), Duration::from_secs(15));
    }
}
