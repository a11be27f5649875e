//! saral - sentence simplification service core
//!
//! Two independent components behind one crate:
//! - [`store::SentenceStore`], an in-memory repository of users and
//!   complex/simplified sentence pairs, with fuzzy lookup over normalized
//!   sentence text
//! - [`images::ImageClient`], a thin client for an external text-to-image
//!   generation API
//!
//! The outer request-handling layer (HTTP routes or similar) lives outside
//! this crate; it constructs a store and a client and hands them to its
//! handlers.

pub mod config;
pub mod images;
pub mod store;

pub use config::{Config, ImageConfig};
pub use images::{ImageClient, ImageError};
pub use store::{SentenceStore, SimplificationLevel};
