use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::classifier::EmotionClassifier;
use crate::config::Config;
use crate::responses;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Per-session chat context: the classifier, the transcript and the
/// response RNG live here instead of in ambient globals, so independent
/// sessions stay independent. The transcript is append-only; each turn
/// adds exactly one user and one assistant message.
pub struct ChatAgent {
    classifier: EmotionClassifier,
    transcript: Vec<Message>,
    rng: StdRng,
}

impl ChatAgent {
    pub fn new(config: &Config) -> Self {
        Self::with_parts(
            EmotionClassifier::load(&config.model_path),
            StdRng::from_entropy(),
            &config.greeting,
        )
    }

    pub fn with_parts(classifier: EmotionClassifier, rng: StdRng, greeting: &str) -> Self {
        // The session opens with the greeting; it precedes all turns.
        let transcript = vec![Message {
            role: Role::Assistant,
            content: greeting.to_string(),
        }];

        Self {
            classifier,
            transcript,
            rng,
        }
    }

    /// One blocking turn: classify the input, pick a reply, append the
    /// user message and the assistant message in that order. Returns the
    /// assistant message.
    pub fn handle_turn(&mut self, user_input: &str) -> Message {
        let detection = self.classifier.classify(user_input);
        let reply = responses::respond(&detection.label, &mut self.rng);

        let mut content = String::new();
        if let Some(diagnostic) = &detection.diagnostic {
            content.push_str(diagnostic);
            content.push_str("\n\n");
        }
        content.push_str(&format!(
            "Detected Emotion: {}\n\n{}",
            detection.label.as_str().to_uppercase(),
            reply
        ));

        let assistant = Message {
            role: Role::Assistant,
            content,
        };

        self.transcript.push(Message {
            role: Role::User,
            content: user_input.to_string(),
        });
        self.transcript.push(assistant.clone());

        log::debug!("Turn complete, detected emotion: {}", detection.label);
        assistant
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn model_loaded(&self) -> bool {
        self.classifier.is_loaded()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.classifier.load_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::bundle::{LabelEncoder, LinearModel, ModelBundle, Vectorizer};
    use crate::classifier::EmotionLabel;
    use crate::responses::candidates;
    use std::path::Path;

    fn joy_only_bundle() -> ModelBundle {
        ModelBundle {
            vectorizer: Vectorizer {
                vocabulary: [("excited".to_string(), 0), ("trip".to_string(), 1)]
                    .into_iter()
                    .collect(),
            },
            model: LinearModel {
                weights: vec![vec![1.0, 1.0]],
                intercepts: vec![0.0],
            },
            label_encoder: LabelEncoder {
                classes: vec!["joy".to_string()],
            },
        }
    }

    fn healthy_agent() -> ChatAgent {
        ChatAgent::with_parts(
            EmotionClassifier::from_bundle(joy_only_bundle()),
            StdRng::seed_from_u64(1),
            "Hello! How are you feeling today?",
        )
    }

    #[test]
    fn session_opens_with_the_greeting() {
        let agent = healthy_agent();
        assert_eq!(agent.transcript().len(), 1);
        assert_eq!(agent.transcript()[0].role, Role::Assistant);
        assert_eq!(
            agent.transcript()[0].content,
            "Hello! How are you feeling today?"
        );
    }

    #[test]
    fn each_turn_appends_exactly_one_user_and_one_assistant_message() {
        let mut agent = healthy_agent();
        let before = agent.transcript().len();

        agent.handle_turn("I am so excited about my trip!");
        assert_eq!(agent.transcript().len(), before + 2);

        agent.handle_turn("still excited");
        assert_eq!(agent.transcript().len(), before + 4);

        let tail = &agent.transcript()[before..];
        assert_eq!(tail[0].role, Role::User);
        assert_eq!(tail[0].content, "I am so excited about my trip!");
        assert_eq!(tail[1].role, Role::Assistant);
        assert_eq!(tail[2].role, Role::User);
        assert_eq!(tail[3].role, Role::Assistant);
    }

    #[test]
    fn assistant_message_carries_the_uppercased_label_and_a_table_reply() {
        let mut agent = healthy_agent();
        let assistant = agent.handle_turn("I am so excited about my trip!");

        let (header, reply) = assistant
            .content
            .split_once("\n\n")
            .expect("header separator");
        assert_eq!(header, "Detected Emotion: JOY");

        let joy_list = candidates(&EmotionLabel::Joy).unwrap();
        assert!(joy_list.contains(&reply));
    }

    #[test]
    fn load_failure_turns_still_complete_with_a_diagnostic() {
        let mut agent = ChatAgent::with_parts(
            EmotionClassifier::load(Path::new("missing/model.json")),
            StdRng::seed_from_u64(2),
            "hi",
        );
        assert!(!agent.model_loaded());

        let assistant = agent.handle_turn("anything at all");
        assert!(assistant.content.starts_with("Error loading ML model"));
        assert!(assistant.content.contains("Detected Emotion: JOY"));
        assert_eq!(agent.transcript().len(), 3);
    }

    #[test]
    fn empty_input_is_still_a_turn() {
        let mut agent = healthy_agent();
        let before = agent.transcript().len();
        agent.handle_turn("");
        assert_eq!(agent.transcript().len(), before + 2);
    }

    #[test]
    fn message_roles_serialize_lowercase() {
        let message = Message {
            role: Role::User,
            content: "hi".to_string(),
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"role\":\"user\""));
    }
}
