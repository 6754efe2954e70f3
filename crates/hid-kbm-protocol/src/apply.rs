//! Total action applier
//!
//! Three apply flavors, all total over the [`VirtualAction`] domain: an
//! action the flavor does not handle is a defined no-op, never an error.
//! Every reachable operation is idempotent (button OR, axis snap, value
//! set), which is what makes the decoder's duplicate-match tolerance safe.

use crate::state::{ControlState, PadButtons, TRIGGER_PRESSED};
use padmux_bindings::VirtualAction;

fn button_bit(action: VirtualAction) -> Option<PadButtons> {
    match action {
        VirtualAction::DpadUp => Some(PadButtons::UP),
        VirtualAction::DpadDown => Some(PadButtons::DOWN),
        VirtualAction::DpadLeft => Some(PadButtons::LEFT),
        VirtualAction::DpadRight => Some(PadButtons::RIGHT),
        VirtualAction::Cross => Some(PadButtons::CROSS),
        VirtualAction::Circle => Some(PadButtons::CIRCLE),
        VirtualAction::Triangle => Some(PadButtons::TRIANGLE),
        VirtualAction::Square => Some(PadButtons::SQUARE),
        VirtualAction::Select => Some(PadButtons::SELECT),
        VirtualAction::Start => Some(PadButtons::START),
        VirtualAction::Home => Some(PadButtons::HOME),
        VirtualAction::L1 => Some(PadButtons::L1),
        VirtualAction::L3 => Some(PadButtons::L3),
        VirtualAction::R1 => Some(PadButtons::R1),
        VirtualAction::R3 => Some(PadButtons::R3),
        _ => None,
    }
}

/// Apply an action in its digital (pressed) form: buttons OR their bit in,
/// triggers additionally force the analog byte to full, and stick half-axes
/// snap to their extreme.
pub fn apply_digital(state: &mut ControlState, action: VirtualAction) {
    if let Some(bit) = button_bit(action) {
        state.buttons |= bit;
        return;
    }

    match action {
        VirtualAction::L2 => {
            state.buttons |= PadButtons::L2;
            state.l2 = TRIGGER_PRESSED;
        }
        VirtualAction::R2 => {
            state.buttons |= PadButtons::R2;
            state.r2 = TRIGGER_PRESSED;
        }
        VirtualAction::LeftStickLeft => state.left_x = 0,
        VirtualAction::LeftStickRight => state.left_x = 255,
        VirtualAction::LeftStickUp => state.left_y = 0,
        VirtualAction::LeftStickDown => state.left_y = 255,
        VirtualAction::RightStickLeft => state.right_x = 0,
        VirtualAction::RightStickRight => state.right_x = 255,
        VirtualAction::RightStickUp => state.right_y = 0,
        VirtualAction::RightStickDown => state.right_y = 255,
        _ => {}
    }
}

/// Apply an action with an analog value: triggers set their bit and carry
/// the value, half-axes set the named axis directly. Plain buttons have no
/// analog form; they fall through untouched.
pub fn apply_analog(state: &mut ControlState, action: VirtualAction, value: u8) {
    match action {
        VirtualAction::L2 => {
            state.buttons |= PadButtons::L2;
            state.l2 = value;
        }
        VirtualAction::R2 => {
            state.buttons |= PadButtons::R2;
            state.r2 = value;
        }
        VirtualAction::LeftStickLeft | VirtualAction::LeftStickRight => state.left_x = value,
        VirtualAction::LeftStickUp | VirtualAction::LeftStickDown => state.left_y = value,
        VirtualAction::RightStickLeft | VirtualAction::RightStickRight => state.right_x = value,
        VirtualAction::RightStickUp | VirtualAction::RightStickDown => state.right_y = value,
        _ => {}
    }
}

/// Apply only the digital button edge of an action: no trigger bytes, no
/// axis snap. This is the second half of the mouse-motion dual path, where
/// the analog value has already been applied and a binding to a plain
/// button still needs its press registered.
pub fn apply_button_edge(state: &mut ControlState, action: VirtualAction) {
    if let Some(bit) = button_bit(action) {
        state.buttons |= bit;
    }
}
