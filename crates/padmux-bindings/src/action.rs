//! Virtual controller action codes

use serde::{Deserialize, Serialize};

/// Raw table value meaning "slot was never assigned".
pub const ACTION_UNASSIGNED: u8 = 0x00;

/// Raw table value meaning "slot was explicitly unbound".
pub const ACTION_UNBOUND: u8 = 0xFF;

/// One emulated controller action a physical input can be bound to.
///
/// Fourteen digital buttons (the two trigger buttons carry an analog byte as
/// well) plus the eight analog-stick half-axes. The raw byte values `0x00`
/// and `0xFF` are reserved sentinels and never name an action; see
/// [`VirtualAction::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum VirtualAction {
    DpadUp = 0x01,
    DpadDown = 0x02,
    DpadLeft = 0x03,
    DpadRight = 0x04,
    Cross = 0x05,
    Circle = 0x06,
    Triangle = 0x07,
    Square = 0x08,
    Select = 0x09,
    Start = 0x0A,
    Home = 0x0B,
    L1 = 0x0C,
    L2 = 0x0D,
    L3 = 0x0E,
    R1 = 0x0F,
    R2 = 0x10,
    R3 = 0x11,
    /// Left stick, X axis toward 0.
    LeftStickLeft = 0x12,
    /// Left stick, X axis toward 255.
    LeftStickRight = 0x13,
    /// Left stick, Y axis toward 0.
    LeftStickUp = 0x14,
    /// Left stick, Y axis toward 255.
    LeftStickDown = 0x15,
    RightStickLeft = 0x16,
    RightStickRight = 0x17,
    RightStickUp = 0x18,
    RightStickDown = 0x19,
}

impl VirtualAction {
    /// Every defined action, in raw-value order.
    pub const ALL: [VirtualAction; 25] = [
        VirtualAction::DpadUp,
        VirtualAction::DpadDown,
        VirtualAction::DpadLeft,
        VirtualAction::DpadRight,
        VirtualAction::Cross,
        VirtualAction::Circle,
        VirtualAction::Triangle,
        VirtualAction::Square,
        VirtualAction::Select,
        VirtualAction::Start,
        VirtualAction::Home,
        VirtualAction::L1,
        VirtualAction::L2,
        VirtualAction::L3,
        VirtualAction::R1,
        VirtualAction::R2,
        VirtualAction::R3,
        VirtualAction::LeftStickLeft,
        VirtualAction::LeftStickRight,
        VirtualAction::LeftStickUp,
        VirtualAction::LeftStickDown,
        VirtualAction::RightStickLeft,
        VirtualAction::RightStickRight,
        VirtualAction::RightStickUp,
        VirtualAction::RightStickDown,
    ];

    /// Decode a raw table byte. Sentinels and unknown values are `None`,
    /// which every consumer treats as a no-op; the translation surface is
    /// deliberately total.
    pub fn from_raw(raw: u8) -> Option<Self> {
        VirtualAction::ALL
            .iter()
            .copied()
            .find(|action| *action as u8 == raw)
    }

    pub fn as_raw(self) -> u8 {
        self as u8
    }

    /// Symbolic name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            VirtualAction::DpadUp => "DPAD_UP",
            VirtualAction::DpadDown => "DPAD_DOWN",
            VirtualAction::DpadLeft => "DPAD_LEFT",
            VirtualAction::DpadRight => "DPAD_RIGHT",
            VirtualAction::Cross => "CROSS",
            VirtualAction::Circle => "CIRCLE",
            VirtualAction::Triangle => "TRIANGLE",
            VirtualAction::Square => "SQUARE",
            VirtualAction::Select => "SELECT",
            VirtualAction::Start => "START",
            VirtualAction::Home => "HOME",
            VirtualAction::L1 => "L1",
            VirtualAction::L2 => "L2",
            VirtualAction::L3 => "L3",
            VirtualAction::R1 => "R1",
            VirtualAction::R2 => "R2",
            VirtualAction::R3 => "R3",
            VirtualAction::LeftStickLeft => "LEFT_ANALOG_LEFT",
            VirtualAction::LeftStickRight => "LEFT_ANALOG_RIGHT",
            VirtualAction::LeftStickUp => "LEFT_ANALOG_UP",
            VirtualAction::LeftStickDown => "LEFT_ANALOG_DOWN",
            VirtualAction::RightStickLeft => "RIGHT_ANALOG_LEFT",
            VirtualAction::RightStickRight => "RIGHT_ANALOG_RIGHT",
            VirtualAction::RightStickUp => "RIGHT_ANALOG_UP",
            VirtualAction::RightStickDown => "RIGHT_ANALOG_DOWN",
        }
    }

    /// Resolve a symbolic configuration value. Unresolvable names are `None`
    /// (ignored by the loader, never an error).
    pub fn from_name(name: &str) -> Option<Self> {
        VirtualAction::ALL
            .iter()
            .copied()
            .find(|action| action.name() == name)
    }
}
