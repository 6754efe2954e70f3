//! Transport abstraction
//!
//! The registry never talks to a bus directly; it drives a [`Transport`]
//! that can open a device's pipes, switch it to the boot protocol, and
//! submit interrupt-in reads. Completions flow back by the transport's
//! owner calling [`crate::DeviceRegistry::complete_read`].

use thiserror::Error;

/// Opaque device handle as assigned by the transport layer.
pub type DeviceId = u32;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("failed to open device pipes: {0}")]
    OpenFailed(String),

    #[error("control request failed: {0}")]
    ControlFailed(String),

    #[error("interrupt transfer failed: {0}")]
    TransferFailed(String),
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Interface triple reported during enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    pub class: u8,
    pub subclass: u8,
    pub protocol: u8,
}

const CLASS_HID: u8 = 3;
const SUBCLASS_BOOT: u8 = 1;
const PROTOCOL_KEYBOARD: u8 = 1;
const PROTOCOL_MOUSE: u8 = 2;

/// Device classes the registry accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Keyboard,
    Mouse,
}

impl DeviceKind {
    /// Classify an interface triple, `None` for anything that is not a
    /// boot-protocol keyboard or mouse.
    pub fn classify(desc: &InterfaceDescriptor) -> Option<Self> {
        if desc.class != CLASS_HID || desc.subclass != SUBCLASS_BOOT {
            return None;
        }
        match desc.protocol {
            PROTOCOL_KEYBOARD => Some(Self::Keyboard),
            PROTOCOL_MOUSE => Some(Self::Mouse),
            _ => None,
        }
    }
}

/// Pipes negotiated by a successful open.
#[derive(Debug, Clone, Copy)]
pub struct OpenedDevice {
    /// Maximum packet size of the interrupt-in endpoint.
    pub packet_size: usize,
}

pub trait Transport: Send + Sync {
    /// Open the control and interrupt-in pipes of `device`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::OpenFailed`] if either pipe cannot be
    /// opened.
    fn open(&self, device: DeviceId) -> TransportResult<OpenedDevice>;

    /// Issue the class request switching `device` to the boot protocol.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ControlFailed`] if the request is
    /// rejected.
    fn request_boot_protocol(&self, device: DeviceId) -> TransportResult<()>;

    /// Submit one interrupt-in read of `len` bytes on `device`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::TransferFailed`] if the transfer cannot
    /// be queued.
    fn submit_read(&self, device: DeviceId, len: usize) -> TransportResult<()>;

    /// Close the device's pipes. Infallible; a half-closed device is gone
    /// either way.
    fn close(&self, device: DeviceId);
}

pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// In-memory transport recording every call, for driving the registry
    /// in tests.
    pub struct MockTransport {
        packet_size: usize,
        fail_open: Mutex<bool>,
        submitted_reads: Mutex<Vec<(DeviceId, usize)>>,
        boot_requests: Mutex<Vec<DeviceId>>,
        closed: Mutex<Vec<DeviceId>>,
    }

    impl MockTransport {
        pub fn new(packet_size: usize) -> Self {
            Self {
                packet_size,
                fail_open: Mutex::new(false),
                submitted_reads: Mutex::new(Vec::new()),
                boot_requests: Mutex::new(Vec::new()),
                closed: Mutex::new(Vec::new()),
            }
        }

        pub fn fail_next_open(&self) {
            *self.fail_open.lock().unwrap_or_else(|e| e.into_inner()) = true;
        }

        pub fn submitted_reads(&self) -> Vec<(DeviceId, usize)> {
            self.submitted_reads
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .clone()
        }

        pub fn boot_requests(&self) -> Vec<DeviceId> {
            self.boot_requests
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .clone()
        }

        pub fn closed_devices(&self) -> Vec<DeviceId> {
            self.closed.lock().unwrap_or_else(|e| e.into_inner()).clone()
        }
    }

    impl Transport for MockTransport {
        fn open(&self, device: DeviceId) -> TransportResult<OpenedDevice> {
            let mut fail = self.fail_open.lock().unwrap_or_else(|e| e.into_inner());
            if *fail {
                *fail = false;
                return Err(TransportError::OpenFailed(format!("device {device}")));
            }
            Ok(OpenedDevice {
                packet_size: self.packet_size,
            })
        }

        fn request_boot_protocol(&self, device: DeviceId) -> TransportResult<()> {
            self.boot_requests
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(device);
            Ok(())
        }

        fn submit_read(&self, device: DeviceId, len: usize) -> TransportResult<()> {
            self.submitted_reads
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push((device, len));
            Ok(())
        }

        fn close(&self, device: DeviceId) {
            self.closed
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(device);
        }
    }
}
