//! Controller-frame merge
//!
//! After a native controller read fills its frames, the decoded device
//! states are folded in. Port 0 is the system port: only an aggregate
//! button mask is installed there, through the platform's button
//! emulation. Port 1 frames are patched in place, buttons by the call's
//! logic and the analog fields by clamped addition. Higher ports are
//! never touched.

use crate::platform::{BUTTON_EMULATION_TICKS, Platform};
use crate::registry::DeviceSnapshot;
use crate::variants::{ButtonLogic, CallVariant};
use hid_kbm_protocol::{AXIS_NEUTRAL, ControlState};

/// One native controller sample as the intercepted call returned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadFrame {
    pub buttons: u32,
    pub l2: u8,
    pub r2: u8,
    pub left_x: u8,
    pub left_y: u8,
    pub right_x: u8,
    pub right_y: u8,
}

impl PadFrame {
    /// A frame with nothing pressed under positive logic.
    pub const NEUTRAL: PadFrame = PadFrame {
        buttons: 0,
        l2: 0,
        r2: 0,
        left_x: AXIS_NEUTRAL,
        left_y: AXIS_NEUTRAL,
        right_x: AXIS_NEUTRAL,
        right_y: AXIS_NEUTRAL,
    };
}

impl Default for PadFrame {
    fn default() -> Self {
        PadFrame::NEUTRAL
    }
}

/// Shift an axis by a device's deflection from center, clamped to the
/// byte range.
fn patch_axis(axis: u8, device: u8) -> u8 {
    (i32::from(axis) + i32::from(device) - i32::from(AXIS_NEUTRAL)).clamp(0, 255) as u8
}

fn patch_frame(frame: &mut PadFrame, state: &ControlState, logic: ButtonLogic) {
    let bits = state.buttons.bits();
    frame.buttons = match logic {
        ButtonLogic::Positive => frame.buttons | bits,
        ButtonLogic::Negative => frame.buttons & !bits,
    };
    frame.l2 = frame.l2.saturating_add(state.l2);
    frame.r2 = frame.r2.saturating_add(state.r2);
    frame.left_x = patch_axis(frame.left_x, state.left_x);
    frame.left_y = patch_axis(frame.left_y, state.left_y);
    frame.right_x = patch_axis(frame.right_x, state.right_x);
    frame.right_y = patch_axis(frame.right_y, state.right_y);
}

/// Fold the attached devices' states into `frames` for `port`.
///
/// Runs once per intercepted call; with an empty snapshot the frames are
/// left byte-identical. Device order never affects the result: positive
/// logic ORs, negative logic AND-NOTs, and the clamped additions commute.
pub fn merge(
    port: u32,
    frames: &mut [PadFrame],
    snapshot: &DeviceSnapshot,
    variant: CallVariant,
    platform: &dyn Platform,
) {
    match port {
        0 => {
            if snapshot.is_empty() {
                return;
            }
            let aggregate = snapshot
                .states()
                .fold(0u32, |acc, state| acc | state.buttons.bits());
            platform.set_button_emulation(0, aggregate, BUTTON_EMULATION_TICKS);
        }
        1 => {
            let logic = variant.logic();
            for frame in frames {
                for state in snapshot.states() {
                    patch_frame(frame, state, logic);
                }
            }
        }
        _ => {}
    }
}
