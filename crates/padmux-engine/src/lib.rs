//! Device registry and controller-frame merge engine
//!
//! This crate ties the I/O-free decoder to a platform: a two-slot device
//! registry driven by transport read completions, and a merge engine that
//! folds the decoded control states into the controller frames a native
//! read call produced. Transport and platform services are traits so the
//! whole pipeline runs against mocks in tests.

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod merge;
pub mod platform;
pub mod registry;
pub mod transport;
pub mod variants;

pub use merge::{PadFrame, merge};
pub use platform::{BUTTON_EMULATION_TICKS, Platform};
pub use registry::{
    AttachError, AttachResult, DeviceRegistry, DeviceSnapshot, MAX_DEVICES, MAX_PACKET_SIZE,
};
pub use transport::{
    DeviceId, DeviceKind, InterfaceDescriptor, OpenedDevice, Transport, TransportError,
    TransportResult,
};
pub use variants::{ButtonLogic, CallVariant};
