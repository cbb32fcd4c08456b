// アプリケーションシェル（egui）

pub mod message;
pub mod state;
pub mod ui;

pub use message::Message;
pub use state::{App, StatusKind};
