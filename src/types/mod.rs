//! Domain elements returned by the API.

pub mod history;
pub mod user;
pub mod voice;

pub use history::{History, HistoryItem, HistoryState};
pub use user::{AvailableModel, Subscription, SupportedLanguage, User};
pub use voice::{FineTuning, Sample, Voice, VoiceSettings};
