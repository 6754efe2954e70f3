//! Virtual controller actions and binding tables
//!
//! This crate defines the translation vocabulary for padmux: the
//! [`VirtualAction`] a physical input event can be bound to, and the dense
//! [`BindingTable`] that maps keyboard usage codes, keyboard modifiers, and
//! mouse inputs to those actions. Tables are plain `Copy` data so the active
//! table can always be swapped wholesale, never observed half-written.

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod action;
pub mod names;
pub mod table;

pub use action::*;
pub use names::*;
pub use table::*;
