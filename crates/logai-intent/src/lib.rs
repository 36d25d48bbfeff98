// LogAI intent stub - keyword based chat message classification

pub mod classifier;

pub use classifier::{ChatResult, GeneratedQuery, Intent, IntentClassifier};
