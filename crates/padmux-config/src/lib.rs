//! Binding-table configuration
//!
//! One INI-style file carries a `[section]` per title; this crate parses a
//! single requested section into a [`padmux_bindings::BindingTable`] and
//! owns the [`ConfigStore`] lifecycle: the shell/default table, the table
//! loaded for the current foreground title, and the single active table the
//! decoder consults. A failed load never leaves a half-written table; every
//! swap is a wholesale copy.

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod ini;
pub mod loader;
pub mod store;

pub use ini::*;
pub use loader::*;
pub use store::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
