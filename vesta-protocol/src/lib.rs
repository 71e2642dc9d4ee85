//! Vesta Display Wire Grammar
//!
//! This crate defines the text protocol spoken to the touch panel
//! firmware. The panel is a "dumb terminal": it receives one message per
//! visible card and indexes the fields positionally to draw its widgets.
//!
//! # Protocol Overview
//!
//! Every message is a sequence of tokens joined by a single reserved
//! separator byte:
//!
//! ```text
//! ┌─────────────┬───┬───────┬───┬───────────┬───┬─────────────────┐
//! │ instruction │ ~ │ title │ ~ │ nav block │ ~ │ card payload    │
//! └─────────────┴───┴───────┴───┴───────────┴───┴─────────────────┘
//! ```
//!
//! Field counts are fixed per card kind. The panel has no tolerance for
//! missing or reordered fields, so variable-length content (alarm
//! buttons, hvac modes) is always padded with empty fields to a constant
//! width. Encoders must never emit a short message; a slightly wrong
//! value is recoverable, a shifted field corrupts the whole card.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod encoding;
pub mod icons;
pub mod tokens;

pub use encoding::{parse_f32_or, scale_x10, scale_x10_str};
pub use icons::{icon_for, Icon};
pub use tokens::{ArmAction, CardKind, SEPARATOR};
