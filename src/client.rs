//! Client facade for the ElevenLabs API.
//!
//! One method per remote operation, grouped by resource under `src/client/`.

pub mod builder;
pub mod core;
mod history;
mod user;
mod voices;

pub use builder::ElevenLabsClientBuilder;
pub use core::ElevenLabsClient;
