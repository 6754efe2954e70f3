//! Device registry
//!
//! Two slots, one per supported device, each guarded by its own lock. The
//! transport's completion path re-enters here through
//! [`DeviceRegistry::complete_read`], which decodes the report, publishes
//! the new control state, and re-arms the next read. The read cycle is made
//! explicit so there is exactly one place a transfer can be outstanding per
//! device.

use crate::platform::Platform;
use crate::transport::{
    DeviceId, DeviceKind, InterfaceDescriptor, Transport, TransportError,
};
use hid_kbm_protocol::{ControlState, decode_keyboard, decode_mouse};
use padmux_config::ConfigStore;
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Slots available; one keyboard plus one mouse in practice.
pub const MAX_DEVICES: usize = 2;

/// Largest interrupt-in packet the fixed report buffers accept.
pub const MAX_PACKET_SIZE: usize = 64;

#[derive(Error, Debug)]
pub enum AttachError {
    #[error("no free device slot")]
    NoFreeSlot,

    #[error("interface is not a boot-protocol keyboard or mouse")]
    UnsupportedInterface,

    #[error("negotiated packet size {size} exceeds the {MAX_PACKET_SIZE}-byte report buffer")]
    PacketTooLarge { size: usize },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type AttachResult<T> = Result<T, AttachError>;

/// Whether a slot has an interrupt transfer outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadCycle {
    Idle,
    ReadPending,
}

struct DeviceSlot {
    device: DeviceId,
    kind: DeviceKind,
    packet_size: usize,
    /// Cleared first on detach; gates every completion.
    inited: bool,
    cycle: ReadCycle,
    state: ControlState,
}

/// Control states of the attached devices, copied out under the slot locks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceSnapshot {
    states: [Option<ControlState>; MAX_DEVICES],
}

impl DeviceSnapshot {
    pub fn states(&self) -> impl Iterator<Item = &ControlState> {
        self.states.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.states.iter().all(Option::is_none)
    }

    /// Build a snapshot from explicit states; anything past
    /// [`MAX_DEVICES`] entries is ignored.
    pub fn from_states(states: &[ControlState]) -> Self {
        let mut snapshot = Self::default();
        for (slot, state) in snapshot.states.iter_mut().zip(states) {
            *slot = Some(*state);
        }
        snapshot
    }
}

pub struct DeviceRegistry {
    transport: Arc<dyn Transport>,
    slots: [Mutex<Option<DeviceSlot>>; MAX_DEVICES],
}

impl DeviceRegistry {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            slots: [const { Mutex::new(None) }; MAX_DEVICES],
        }
    }

    /// Probe `desc` and, if it is a supported interface, claim a slot for
    /// `device`: open its pipes, request the boot protocol, and arm the
    /// first read. Returns the slot index.
    ///
    /// # Errors
    ///
    /// Fails if the interface triple is not a boot keyboard or mouse, both
    /// slots are taken, the transport cannot open or configure the device,
    /// or the negotiated packet exceeds [`MAX_PACKET_SIZE`]. The packet
    /// check is the only condition that permanently rejects an otherwise
    /// supported device.
    pub fn attach(&self, device: DeviceId, desc: &InterfaceDescriptor) -> AttachResult<usize> {
        let kind = DeviceKind::classify(desc).ok_or(AttachError::UnsupportedInterface)?;

        let (index, mut slot) = self
            .slots
            .iter()
            .enumerate()
            .find_map(|(i, s)| {
                let guard = s.lock();
                guard.is_none().then_some((i, guard))
            })
            .ok_or(AttachError::NoFreeSlot)?;

        let opened = self.transport.open(device)?;
        if opened.packet_size > MAX_PACKET_SIZE {
            warn!(
                device,
                packet_size = opened.packet_size,
                "packet size exceeds report buffer, rejecting device"
            );
            self.transport.close(device);
            return Err(AttachError::PacketTooLarge {
                size: opened.packet_size,
            });
        }

        if let Err(err) = self
            .transport
            .request_boot_protocol(device)
            .and_then(|()| self.transport.submit_read(device, opened.packet_size))
        {
            self.transport.close(device);
            return Err(err.into());
        }

        info!(device, ?kind, slot = index, "device attached");
        *slot = Some(DeviceSlot {
            device,
            kind,
            packet_size: opened.packet_size,
            inited: true,
            cycle: ReadCycle::ReadPending,
            state: ControlState::NEUTRAL,
        });
        Ok(index)
    }

    /// Drop `device` from its slot. The init flag is cleared before
    /// anything else so a completion racing this call finds the slot dead
    /// and contributes nothing further.
    pub fn detach(&self, device: DeviceId) {
        for slot in &self.slots {
            let mut guard = slot.lock();
            if let Some(entry) = guard.as_mut() {
                if entry.device != device {
                    continue;
                }
                entry.inited = false;
                entry.state.reset();
                *guard = None;
                drop(guard);
                self.transport.close(device);
                info!(device, "device detached");
                return;
            }
        }
        debug!(device, "detach for unknown device ignored");
    }

    /// Deliver one read completion for `device`.
    ///
    /// On success the report is decoded against the active binding table
    /// and the slot's state replaced; decode and transfer errors are
    /// logged and swallowed. Either way the next read is re-armed: the
    /// cycle is never left idle while the device stays attached.
    pub fn complete_read(
        &self,
        device: DeviceId,
        outcome: Result<&[u8], TransportError>,
        store: &ConfigStore,
        platform: &dyn Platform,
    ) {
        for slot in &self.slots {
            let mut guard = slot.lock();
            let Some(entry) = guard.as_mut() else {
                continue;
            };
            if entry.device != device {
                continue;
            }
            if !entry.inited {
                return;
            }
            if entry.cycle != ReadCycle::ReadPending {
                debug!(device, "completion without an outstanding read ignored");
                return;
            }

            entry.cycle = ReadCycle::Idle;

            match outcome {
                Ok(report) => {
                    let table = store.active();
                    let decoded = match entry.kind {
                        DeviceKind::Keyboard => decode_keyboard(report, &table),
                        DeviceKind::Mouse => decode_mouse(report, &table),
                    };
                    match decoded {
                        Ok(state) => {
                            entry.state = state;
                            platform.power_tick();
                        }
                        Err(err) => {
                            warn!(device, %err, "report decode failed");
                        }
                    }
                }
                Err(err) => {
                    warn!(device, %err, "read completed with transfer error");
                }
            }

            if let Err(err) = self.transport.submit_read(device, entry.packet_size) {
                warn!(device, %err, "failed to re-arm read");
            } else {
                entry.cycle = ReadCycle::ReadPending;
            }
            return;
        }
        debug!(device, "completion for unknown device ignored");
    }

    /// Copy out the control states of every initialized slot.
    pub fn snapshot(&self) -> DeviceSnapshot {
        let mut snapshot = DeviceSnapshot::default();
        for (slot, out) in self.slots.iter().zip(snapshot.states.iter_mut()) {
            let guard = slot.lock();
            if let Some(entry) = guard.as_ref() {
                if entry.inited {
                    *out = Some(entry.state);
                }
            }
        }
        snapshot
    }
}
