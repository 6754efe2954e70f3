//! Dense binding tables
//!
//! A [`BindingTable`] is total over its domain: every keyboard usage code,
//! modifier bit, and mouse slot has a defined raw value, with the sentinels
//! `0x00`/`0xFF` meaning "no binding". Lookups resolve through
//! [`VirtualAction::from_raw`], so a sentinel is an ordinary `None`, never a
//! lookup failure. The table stays a dense array rather than a map: the
//! decoder wants O(1) total-domain lookup by raw byte value.

use crate::action::{ACTION_UNASSIGNED, VirtualAction};
use serde::{Deserialize, Serialize};

/// Keyboard usage-code domain (boot protocol reports one byte per key).
pub const KEYBOARD_KEY_SLOTS: usize = 256;

/// Modifier-bit domain (byte 0 of a boot keyboard report).
pub const MODIFIER_SLOTS: usize = 8;

/// Mouse slot domain: three buttons plus four motion directions.
pub const MOUSE_SLOTS: usize = 8;

/// Default mouse sensitivity multiplier for the built-in shell bindings.
pub const DEFAULT_SENSITIVITY: u8 = 10;

/// One bindable mouse input: a button bit of report byte 0, or a motion
/// direction derived from the sign of the relative X/Y deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MouseInput {
    Button1 = 0,
    Button2 = 1,
    Button3 = 2,
    /// Negative X delta.
    MotionLeft = 3,
    /// Positive X delta.
    MotionRight = 4,
    /// Negative Y delta.
    MotionUp = 5,
    /// Positive Y delta.
    MotionDown = 6,
}

impl MouseInput {
    pub const BUTTONS: [MouseInput; 3] =
        [MouseInput::Button1, MouseInput::Button2, MouseInput::Button3];

    pub fn slot(self) -> usize {
        self as usize
    }
}

/// Scancode-to-action mapping for one title, plus the two mouse sensitivity
/// scalars. Small enough to copy wholesale under a trivial critical section,
/// which is the only supported way to swap the active table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingTable {
    keys: [u8; KEYBOARD_KEY_SLOTS],
    modifiers: [u8; MODIFIER_SLOTS],
    mouse: [u8; MOUSE_SLOTS],
    pub sensitivity_x: u8,
    pub sensitivity_y: u8,
}

impl BindingTable {
    /// A table with every slot unassigned and default sensitivity.
    pub fn empty() -> Self {
        Self {
            keys: [ACTION_UNASSIGNED; KEYBOARD_KEY_SLOTS],
            modifiers: [ACTION_UNASSIGNED; MODIFIER_SLOTS],
            mouse: [ACTION_UNASSIGNED; MOUSE_SLOTS],
            sensitivity_x: DEFAULT_SENSITIVITY,
            sensitivity_y: DEFAULT_SENSITIVITY,
        }
    }

    /// The built-in shell bindings installed when no configuration file is
    /// present: arrows drive the d-pad, Escape/F1 are Start/Select, the main
    /// face buttons sit on Enter/Backspace/Space/Right-Ctrl, the shoulder
    /// cluster on the navigation block, and the mouse drives the left stick.
    pub fn shell_default() -> Self {
        let mut table = Self::empty();

        table.bind_key(usage::UP_ARROW, VirtualAction::DpadUp);
        table.bind_key(usage::DOWN_ARROW, VirtualAction::DpadDown);
        table.bind_key(usage::LEFT_ARROW, VirtualAction::DpadLeft);
        table.bind_key(usage::RIGHT_ARROW, VirtualAction::DpadRight);

        table.bind_key(usage::ESCAPE, VirtualAction::Start);
        table.bind_key(usage::F1, VirtualAction::Select);

        table.bind_key(usage::ENTER, VirtualAction::Cross);
        table.bind_key(usage::BACKSPACE, VirtualAction::Circle);
        table.bind_key(usage::SPACE, VirtualAction::Triangle);
        table.bind_modifier(modifier::RIGHT_CTRL, VirtualAction::Square);

        table.bind_key(usage::END, VirtualAction::L1);
        table.bind_key(usage::PAGE_DOWN, VirtualAction::R1);
        table.bind_key(usage::HOME, VirtualAction::L2);
        table.bind_key(usage::PAGE_UP, VirtualAction::R2);
        table.bind_key(usage::INSERT, VirtualAction::L3);
        table.bind_key(usage::DELETE, VirtualAction::R3);

        table.bind_mouse(MouseInput::Button1, VirtualAction::R1);
        table.bind_mouse(MouseInput::Button2, VirtualAction::L1);
        table.bind_mouse(MouseInput::Button3, VirtualAction::Triangle);
        table.bind_mouse(MouseInput::MotionLeft, VirtualAction::LeftStickLeft);
        table.bind_mouse(MouseInput::MotionRight, VirtualAction::LeftStickRight);
        table.bind_mouse(MouseInput::MotionUp, VirtualAction::LeftStickUp);
        table.bind_mouse(MouseInput::MotionDown, VirtualAction::LeftStickDown);

        table
    }

    pub fn bind_key(&mut self, usage_code: u8, action: VirtualAction) {
        self.keys[usage_code as usize] = action.as_raw();
    }

    pub fn bind_modifier(&mut self, bit: u8, action: VirtualAction) {
        if let Some(slot) = self.modifiers.get_mut(bit as usize) {
            *slot = action.as_raw();
        }
    }

    pub fn bind_mouse(&mut self, input: MouseInput, action: VirtualAction) {
        self.mouse[input.slot()] = action.as_raw();
    }

    /// Action bound to a keyboard usage code, if any.
    pub fn key_action(&self, usage_code: u8) -> Option<VirtualAction> {
        VirtualAction::from_raw(self.keys[usage_code as usize])
    }

    /// Action bound to a modifier bit, if any. Out-of-range bits are `None`.
    pub fn modifier_action(&self, bit: u8) -> Option<VirtualAction> {
        self.modifiers
            .get(bit as usize)
            .and_then(|raw| VirtualAction::from_raw(*raw))
    }

    /// Action bound to a mouse button or motion direction, if any.
    pub fn mouse_action(&self, input: MouseInput) -> Option<VirtualAction> {
        VirtualAction::from_raw(self.mouse[input.slot()])
    }

    /// True when no slot carries a binding.
    pub fn is_empty(&self) -> bool {
        self.keys.iter().all(|raw| VirtualAction::from_raw(*raw).is_none())
            && self
                .modifiers
                .iter()
                .all(|raw| VirtualAction::from_raw(*raw).is_none())
            && self
                .mouse
                .iter()
                .all(|raw| VirtualAction::from_raw(*raw).is_none())
    }
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::empty()
    }
}

/// Boot-keyboard usage codes (HID usage page 0x07) for the keys the default
/// bindings and the configuration name table reference.
pub mod usage {
    pub const A: u8 = 0x04;
    pub const ENTER: u8 = 0x28;
    pub const ESCAPE: u8 = 0x29;
    pub const BACKSPACE: u8 = 0x2A;
    pub const TAB: u8 = 0x2B;
    pub const SPACE: u8 = 0x2C;
    pub const CAPS_LOCK: u8 = 0x39;
    pub const F1: u8 = 0x3A;
    pub const PRINT_SCREEN: u8 = 0x46;
    pub const SCROLL_LOCK: u8 = 0x47;
    pub const PAUSE: u8 = 0x48;
    pub const INSERT: u8 = 0x49;
    pub const HOME: u8 = 0x4A;
    pub const PAGE_UP: u8 = 0x4B;
    pub const DELETE: u8 = 0x4C;
    pub const END: u8 = 0x4D;
    pub const PAGE_DOWN: u8 = 0x4E;
    pub const RIGHT_ARROW: u8 = 0x4F;
    pub const LEFT_ARROW: u8 = 0x50;
    pub const DOWN_ARROW: u8 = 0x51;
    pub const UP_ARROW: u8 = 0x52;
}

/// Modifier bit indices of boot-keyboard report byte 0.
pub mod modifier {
    pub const LEFT_CTRL: u8 = 0;
    pub const LEFT_SHIFT: u8 = 1;
    pub const LEFT_ALT: u8 = 2;
    pub const LEFT_GUI: u8 = 3;
    pub const RIGHT_CTRL: u8 = 4;
    pub const RIGHT_SHIFT: u8 = 5;
    pub const RIGHT_ALT: u8 = 6;
    pub const RIGHT_GUI: u8 = 7;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_has_no_bindings() {
        let table = BindingTable::empty();
        assert!(table.is_empty());
        for code in 0..=u8::MAX {
            assert_eq!(table.key_action(code), None);
        }
        for bit in 0..MODIFIER_SLOTS as u8 {
            assert_eq!(table.modifier_action(bit), None);
        }
    }

    #[test]
    fn out_of_range_modifier_bit_is_none() {
        let mut table = BindingTable::empty();
        table.bind_modifier(200, VirtualAction::Cross);
        assert_eq!(table.modifier_action(200), None);
        assert!(table.is_empty());
    }

    #[test]
    fn bound_key_resolves() {
        let mut table = BindingTable::empty();
        table.bind_key(usage::SPACE, VirtualAction::Triangle);
        assert_eq!(table.key_action(usage::SPACE), Some(VirtualAction::Triangle));
        assert_eq!(table.key_action(usage::ENTER), None);
        assert!(!table.is_empty());
    }

    #[test]
    fn shell_default_matches_documented_bindings() {
        let table = BindingTable::shell_default();
        assert_eq!(table.key_action(usage::UP_ARROW), Some(VirtualAction::DpadUp));
        assert_eq!(table.key_action(usage::ESCAPE), Some(VirtualAction::Start));
        assert_eq!(table.key_action(usage::F1), Some(VirtualAction::Select));
        assert_eq!(
            table.modifier_action(modifier::RIGHT_CTRL),
            Some(VirtualAction::Square)
        );
        assert_eq!(
            table.mouse_action(MouseInput::MotionLeft),
            Some(VirtualAction::LeftStickLeft)
        );
        assert_eq!(table.sensitivity_x, DEFAULT_SENSITIVITY);
        assert_eq!(table.sensitivity_y, DEFAULT_SENSITIVITY);
    }

    #[test]
    fn table_copies_are_independent() {
        let mut original = BindingTable::shell_default();
        let snapshot = original;
        original.bind_key(usage::A, VirtualAction::Circle);
        assert_eq!(snapshot.key_action(usage::A), None);
        assert_eq!(original.key_action(usage::A), Some(VirtualAction::Circle));
    }
}
