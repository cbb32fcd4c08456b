// アプリケーション層

pub mod generator;
pub mod hint;

pub use generator::GenerationResult;
