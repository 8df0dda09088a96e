use std::fmt;
use std::path::Path;

use super::bundle::ModelBundle;
use crate::error::ClassifierError;

/// Emotion tags the response table knows about, plus an open fallback
/// for anything else the label encoder may produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmotionLabel {
    Joy,
    Sadness,
    Anger,
    Fear,
    Love,
    Surprise,
    Neutral,
    Other(String),
}

impl EmotionLabel {
    /// Case-insensitive parse of an encoder class string.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "joy" => Self::Joy,
            "sadness" => Self::Sadness,
            "anger" => Self::Anger,
            "fear" => Self::Fear,
            "love" => Self::Love,
            "surprise" => Self::Surprise,
            "neutral" => Self::Neutral,
            _ => Self::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Joy => "joy",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Love => "love",
            Self::Surprise => "surprise",
            Self::Neutral => "neutral",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classification outcome: the label plus an optional one-line
/// diagnostic for the user-facing surface.
#[derive(Debug, Clone)]
pub struct Detection {
    pub label: EmotionLabel,
    pub diagnostic: Option<String>,
}

/// Wraps the model bundle behind an infallible `classify`.
///
/// The bundle is loaded once. A failed load permanently disables ML
/// classification for the session and pins every detection to "joy";
/// an inference error downgrades a single turn to "neutral". No retry
/// in either case.
pub struct EmotionClassifier {
    bundle: Option<ModelBundle>,
    load_error: Option<String>,
}

impl EmotionClassifier {
    pub fn load(path: &Path) -> Self {
        match ModelBundle::load(path) {
            Ok(bundle) => {
                log::info!("✓ ML model loaded from {}", path.display());
                Self {
                    bundle: Some(bundle),
                    load_error: None,
                }
            }
            Err(e) => {
                let err = ClassifierError::Load(format!("{:#}", e));
                log::warn!("⚠️ {}", err);
                Self {
                    bundle: None,
                    load_error: Some(err.to_string()),
                }
            }
        }
    }

    pub fn from_bundle(bundle: ModelBundle) -> Self {
        Self {
            bundle: Some(bundle),
            load_error: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.bundle.is_some()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn classify(&self, text: &str) -> Detection {
        let bundle = match &self.bundle {
            Some(bundle) => bundle,
            None => {
                return Detection {
                    label: EmotionLabel::Joy,
                    diagnostic: self.load_error.clone(),
                }
            }
        };

        match bundle.predict(text) {
            Ok(raw) => Detection {
                label: EmotionLabel::parse(&raw),
                diagnostic: None,
            },
            Err(e) => {
                log::error!("{}", e);
                Detection {
                    label: EmotionLabel::Neutral,
                    diagnostic: Some(e.to_string()),
                }
            }
        }
    }
}
