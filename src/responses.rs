//! Canned empathetic replies keyed by detected emotion.

use rand::Rng;

use crate::classifier::EmotionLabel;

const JOY: &[&str] = &[
    "That's wonderful! I'm glad you're feeling happy. What made your day so great?",
    "It's great to see you in such a positive mood! Keep that energy going!",
    "Your joy is contagious! Tell me more about what's bringing you happiness.",
    "I love your positive energy! What's making you so happy today?",
];

const SADNESS: &[&str] = &[
    "I'm sorry you're feeling down. Would you like to talk about what's bothering you?",
    "It's okay to feel sad sometimes. I'm here to listen if you need someone to talk to.",
    "I understand this is a difficult moment. How can I support you?",
    "Your feelings are valid. Take your time, I'm here for you.",
];

const ANGER: &[&str] = &[
    "I can sense your frustration. Take a deep breath. What happened?",
    "It sounds like something really upset you. Would you like to share what's on your mind?",
    "Your feelings are valid. Let's talk about what's making you angry.",
    "I understand you're upset. Sometimes it helps to talk about it.",
];

const FEAR: &[&str] = &[
    "I understand you're feeling anxious. You're not alone. What's worrying you?",
    "It's natural to feel afraid sometimes. Let's work through this together.",
    "I'm here for you. Tell me what's making you feel this way.",
    "Take a moment to breathe. I'm here to help you through this.",
];

const LOVE: &[&str] = &[
    "How beautiful! Love is such a powerful emotion. Tell me more!",
    "That's heartwarming! I'd love to hear more about what you're experiencing.",
    "Love makes the world brighter. Share more about this feeling!",
    "What a wonderful feeling! I'm happy for you.",
];

const SURPRISE: &[&str] = &[
    "Oh wow! That must have been unexpected. What happened?",
    "Surprises can be exciting! Tell me all about it.",
    "I'm curious to know more about what surprised you!",
    "That sounds interesting! What was the surprise?",
];

const NEUTRAL: &[&str] = &[
    "I'm listening. Tell me more about what's on your mind.",
    "How are you feeling right now? I'm here to chat.",
    "I understand. Would you like to share more?",
    "I'm here for you. What would you like to talk about?",
];

pub(crate) fn candidates(label: &EmotionLabel) -> Option<&'static [&'static str]> {
    match label {
        EmotionLabel::Joy => Some(JOY),
        EmotionLabel::Sadness => Some(SADNESS),
        EmotionLabel::Anger => Some(ANGER),
        EmotionLabel::Fear => Some(FEAR),
        EmotionLabel::Love => Some(LOVE),
        EmotionLabel::Surprise => Some(SURPRISE),
        EmotionLabel::Neutral => Some(NEUTRAL),
        EmotionLabel::Other(_) => None,
    }
}

/// Picks one empathetic reply for the label, uniformly over its fixed
/// candidates. The random source is an explicit parameter so callers
/// can seed it. Labels outside the table get a generic sentence with
/// the label text interpolated verbatim.
pub fn respond<R: Rng + ?Sized>(label: &EmotionLabel, rng: &mut R) -> String {
    match candidates(label) {
        Some(list) => list[rng.gen_range(0..list.len())].to_string(),
        None => format!(
            "I understand you're feeling {}. Tell me more about what's going on.",
            label
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const KNOWN: &[EmotionLabel] = &[
        EmotionLabel::Joy,
        EmotionLabel::Sadness,
        EmotionLabel::Anger,
        EmotionLabel::Fear,
        EmotionLabel::Love,
        EmotionLabel::Surprise,
        EmotionLabel::Neutral,
    ];

    #[test]
    fn known_labels_always_answer_from_their_candidate_list() {
        let mut rng = StdRng::seed_from_u64(42);
        for label in KNOWN {
            let list = candidates(label).unwrap();
            for _ in 0..20 {
                let reply = respond(label, &mut rng);
                assert!(list.contains(&reply.as_str()), "{} not in {} list", reply, label);
            }
        }
    }

    #[test]
    fn unknown_label_is_interpolated_verbatim() {
        let mut rng = StdRng::seed_from_u64(0);
        let reply = respond(&EmotionLabel::Other("boredom".to_string()), &mut rng);
        assert_eq!(
            reply,
            "I understand you're feeling boredom. Tell me more about what's going on."
        );
    }

    #[test]
    fn equal_seeds_give_equal_choices() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for label in KNOWN {
            assert_eq!(respond(label, &mut a), respond(label, &mut b));
        }
    }
}
