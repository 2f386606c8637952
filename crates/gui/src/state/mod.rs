pub mod layers;
pub mod messages;

pub use layers::{LayerStack, LoadState, OverlayId};
pub use messages::{AppMessage, LogEntry, LogLevel};
