use std::env;
use std::path::PathBuf;

/// Default artifact location, shipped next to the binary.
pub const DEFAULT_MODEL_PATH: &str = "model/emotion_model.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub window_width: f32,
    pub window_height: f32,
    pub app_title: String,
    pub bot_name: String,
    pub greeting: String,
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();

        let model_path = env::var("EMOTION_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));

        let window_width = env::var("EMOCHAT_WINDOW_WIDTH")
            .ok()
            .and_then(|v| v.parse::<f32>().ok())
            .unwrap_or(480.0);

        let window_height = env::var("EMOCHAT_WINDOW_HEIGHT")
            .ok()
            .and_then(|v| v.parse::<f32>().ok())
            .unwrap_or(640.0);

        Self {
            model_path,
            window_width,
            window_height,
            app_title: "Emotion Detection Chatbot".to_string(),
            bot_name: "Emochat".to_string(),
            greeting: "Hello! How are you feeling today?".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_bundled_artifact() {
        // Only assert the fallback when the override is not set in the
        // surrounding environment.
        if env::var("EMOTION_MODEL_PATH").is_err() {
            let config = Config::default();
            assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
        }
    }
}
