use std::{env, path::PathBuf};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:2017";
pub const DEFAULT_STATE_PATH: &str = "data/state.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub state_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("CALC_API_URL").ok(),
            env::var("CALC_STATE_PATH").ok(),
        )
    }

    fn from_values(api_url: Option<String>, state_path: Option<String>) -> Self {
        let api_url = api_url
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            state_path: state_path
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_PATH)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_values(None, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.state_path, PathBuf::from(DEFAULT_STATE_PATH));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = Config::from_values(Some("http://calc.local:8080/".into()), Some("/tmp/s.json".into()));
        assert_eq!(config.api_url, "http://calc.local:8080");
        assert_eq!(config.state_path, PathBuf::from("/tmp/s.json"));
    }
}
