//! Boot-protocol keyboard and mouse report decoding
//!
//! This crate turns one raw HID boot-protocol input report plus a
//! [`padmux_bindings::BindingTable`] into a canonical [`ControlState`]: the
//! decoded button mask, trigger bytes, and 128-centered stick axes for a
//! single input source. Decoding is I/O-free and allocation-free; the
//! surrounding registry owns buffering and polling.

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod apply;
pub mod keyboard;
pub mod mouse;
pub mod state;

pub use apply::*;
pub use keyboard::*;
pub use mouse::*;
pub use state::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("report too short: expected at least {expected} bytes, got {actual}")]
    ReportTooShort { expected: usize, actual: usize },
}

pub type DecodeResult<T> = Result<T, DecodeError>;
