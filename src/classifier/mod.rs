pub mod bundle;
pub mod emotion;

pub use bundle::ModelBundle;
pub use emotion::{Detection, EmotionClassifier, EmotionLabel};
