// インフラ層

pub mod gemini;

pub use gemini::{GeminiClient, GeneratedPuzzle, OfflineBackend, TextBackend};
