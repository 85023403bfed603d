//! # elevenlabs-rs
//!
//! Typed, blocking client for the ElevenLabs text-to-speech REST API.
//!
//! ## Overview
//!
//! Every remote operation is a request value implementing [`request::ApiRequest`].
//! The client dispatches it over HTTP, checks the status and maps the body into the
//! operation's result type: a domain element, an acknowledgement string, or a file
//! written to a caller-supplied path.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use elevenlabs_rs::{ElevenLabsClient, VoiceSettings};
//!
//! fn main() -> elevenlabs_rs::Result<()> {
//!     let client = ElevenLabsClient::new("your-api-key")?;
//!
//!     let voices = client.get_voices()?;
//!     let voice = &voices[0];
//!     let settings = VoiceSettings::new(0.5, 0.75);
//!     client.text_to_speech(voice, "Hello there", Some(&settings), "/tmp/hello.mp3")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Facade with one method per operation, and its builder |
//! | [`request`] | Request value objects |
//! | [`response`] | Status checking and resolution |
//! | [`transformers`] | Body-to-result mapping |
//! | [`transport`] | HTTP dispatch and multipart encoding |
//! | [`types`] | Domain elements (voices, history, user) |
//! | [`config`] | Client configuration and environment overrides |

pub mod client;
pub mod config;
pub mod request;
pub mod response;
pub mod transformers;
pub mod transport;
pub mod types;

pub use client::{ElevenLabsClient, ElevenLabsClientBuilder};
pub use config::ClientConfig;
pub use request::voices::{SampleFile, VoiceForm};
pub use types::{
    History, HistoryItem, HistoryState, Sample, Subscription, User, Voice, VoiceSettings,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
