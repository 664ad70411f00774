//! Core types shared across lotform facilities
//!
//! This crate provides foundational types used by the gateway, composer and
//! server crates:
//!
//! - **Correlation types**: RequestId, RequestContext
//! - **Language**: the fixed-language-tag value type used by text lookups
//! - **Schema constants**: canonical backend field keys and logging keys

pub mod correlation;
pub mod language;
pub mod schema;

pub use correlation::{RequestContext, RequestId};
pub use language::LanguageTag;
