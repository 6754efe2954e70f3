//! Canonical decoded control state

use bitflags::bitflags;

/// Neutral center value for the four stick axes.
pub const AXIS_NEUTRAL: u8 = 128;

/// Trigger byte for a fully pressed digital trigger.
pub const TRIGGER_PRESSED: u8 = 0xFF;

bitflags! {
    /// Controller button mask in the platform's native bit layout.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PadButtons: u32 {
        const SELECT = 0x0000_0001;
        const L3 = 0x0000_0002;
        const R3 = 0x0000_0004;
        const START = 0x0000_0008;
        const UP = 0x0000_0010;
        const RIGHT = 0x0000_0020;
        const DOWN = 0x0000_0040;
        const LEFT = 0x0000_0080;
        const L2 = 0x0000_0100;
        const R2 = 0x0000_0200;
        const L1 = 0x0000_0400;
        const R1 = 0x0000_0800;
        const TRIANGLE = 0x0000_1000;
        const CIRCLE = 0x0000_2000;
        const CROSS = 0x0000_4000;
        const SQUARE = 0x0000_8000;
        const HOME = 0x0001_0000;
    }
}

/// Decoded snapshot of one input source.
///
/// Owned exclusively by the source's registry slot; reset to neutral at the
/// start of every decode pass and mutated only by the action applier while
/// that single report is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub buttons: PadButtons,
    /// Left trigger: 0 released, 0xFF pressed, analog in between.
    pub l2: u8,
    /// Right trigger.
    pub r2: u8,
    pub left_x: u8,
    pub left_y: u8,
    pub right_x: u8,
    pub right_y: u8,
}

impl ControlState {
    pub const NEUTRAL: ControlState = ControlState {
        buttons: PadButtons::empty(),
        l2: 0,
        r2: 0,
        left_x: AXIS_NEUTRAL,
        left_y: AXIS_NEUTRAL,
        right_x: AXIS_NEUTRAL,
        right_y: AXIS_NEUTRAL,
    };

    pub fn reset(&mut self) {
        *self = ControlState::NEUTRAL;
    }

    pub fn is_neutral(&self) -> bool {
        *self == ControlState::NEUTRAL
    }
}

impl Default for ControlState {
    fn default() -> Self {
        ControlState::NEUTRAL
    }
}
