//! Boot mouse input report decoding
//!
//! Boot-protocol mouse reports carry a button bitmask in byte 0 and signed
//! relative X/Y deltas in bytes 1 and 2.

use crate::apply::{apply_analog, apply_button_edge, apply_digital};
use crate::state::{AXIS_NEUTRAL, ControlState};
use crate::{DecodeError, DecodeResult};
use padmux_bindings::{BindingTable, MouseInput};

/// Button byte plus the two delta bytes.
pub const MOUSE_REPORT_MIN: usize = 3;

/// Scale a raw signed delta by a sensitivity multiplier and rebias it into
/// the 0–255 analog range: `clamp(delta * sensitivity, -128, 127) + 128`.
pub fn scale_delta(delta: i8, sensitivity: u8) -> u8 {
    let scaled = (i32::from(delta) * i32::from(sensitivity)).clamp(-128, 127);
    (scaled + i32::from(AXIS_NEUTRAL)) as u8
}

/// Decode one mouse report against the active binding table.
///
/// Each motion direction whose *raw* delta points its way applies both the
/// analog value (the scaled, rebiased delta) and the discrete button edge
/// of its binding, so a mouse axis can drive either an analog stick or a
/// digital button depending on what the user bound it to.
///
/// # Errors
///
/// Returns [`DecodeError::ReportTooShort`] when the report cannot carry the
/// button byte and both deltas.
pub fn decode_mouse(report: &[u8], table: &BindingTable) -> DecodeResult<ControlState> {
    if report.len() < MOUSE_REPORT_MIN {
        return Err(DecodeError::ReportTooShort {
            expected: MOUSE_REPORT_MIN,
            actual: report.len(),
        });
    }

    let mut state = ControlState::NEUTRAL;

    let raw_x = report[1] as i8;
    let raw_y = report[2] as i8;
    let x = scale_delta(raw_x, table.sensitivity_x);
    let y = scale_delta(raw_y, table.sensitivity_y);

    let buttons = report[0];
    for input in MouseInput::BUTTONS {
        if (buttons >> input.slot()) & 1 == 0 {
            continue;
        }
        if let Some(action) = table.mouse_action(input) {
            apply_digital(&mut state, action);
        }
    }

    let motions = [
        (MouseInput::MotionLeft, raw_x < 0, x),
        (MouseInput::MotionRight, raw_x > 0, x),
        (MouseInput::MotionUp, raw_y < 0, y),
        (MouseInput::MotionDown, raw_y > 0, y),
    ];
    for (input, moved, value) in motions {
        if !moved {
            continue;
        }
        if let Some(action) = table.mouse_action(input) {
            apply_analog(&mut state, action, value);
            apply_button_edge(&mut state, action);
        }
    }

    Ok(state)
}
