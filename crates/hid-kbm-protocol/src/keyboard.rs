//! Boot keyboard input report decoding
//!
//! Boot-protocol keyboard reports carry a modifier bitmask in byte 0, a
//! reserved byte, and one pressed usage code per remaining byte.

use crate::apply::apply_digital;
use crate::state::ControlState;
use crate::{DecodeError, DecodeResult};
use padmux_bindings::BindingTable;

/// Modifier byte plus the reserved byte.
pub const KEYBOARD_REPORT_MIN: usize = 2;

/// Decode one keyboard report against the active binding table.
///
/// The key scan walks every report byte past the reserved header without
/// deduplication; a usage code that appears twice re-applies the same
/// action, which is unobservable because every apply operation is
/// idempotent. Modifier bits are consulted starting at bit 1; bit 0 is
/// never bindable.
///
/// # Errors
///
/// Returns [`DecodeError::ReportTooShort`] when the report cannot carry the
/// two-byte header.
pub fn decode_keyboard(report: &[u8], table: &BindingTable) -> DecodeResult<ControlState> {
    if report.len() < KEYBOARD_REPORT_MIN {
        return Err(DecodeError::ReportTooShort {
            expected: KEYBOARD_REPORT_MIN,
            actual: report.len(),
        });
    }

    let mut state = ControlState::NEUTRAL;

    let modifiers = report[0];
    for bit in 1..8 {
        if (modifiers >> bit) & 1 == 0 {
            continue;
        }
        if let Some(action) = table.modifier_action(bit) {
            apply_digital(&mut state, action);
        }
    }

    for &code in &report[KEYBOARD_REPORT_MIN..] {
        if code == 0 {
            continue;
        }
        if let Some(action) = table.key_action(code) {
            apply_digital(&mut state, action);
        }
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PadButtons;
    use padmux_bindings::{VirtualAction, modifier, usage};

    fn report(modifiers: u8, keys: &[u8]) -> Vec<u8> {
        let mut data = vec![modifiers, 0x00];
        data.extend_from_slice(keys);
        data.resize(8, 0);
        data
    }

    #[test]
    fn empty_table_decodes_to_neutral() {
        let table = BindingTable::empty();
        let state = decode_keyboard(&report(0xFF, &[0x04, 0x52, 0x29]), &table)
            .expect("decode should succeed");
        assert!(state.is_neutral());
    }

    #[test]
    fn bound_key_sets_button() {
        let table = BindingTable::shell_default();
        let state = decode_keyboard(&report(0, &[usage::UP_ARROW]), &table)
            .expect("decode should succeed");
        assert_eq!(state.buttons, PadButtons::UP);
    }

    #[test]
    fn multiple_keys_accumulate() {
        let table = BindingTable::shell_default();
        let state = decode_keyboard(
            &report(0, &[usage::UP_ARROW, usage::ENTER, usage::HOME]),
            &table,
        )
        .expect("decode should succeed");
        assert_eq!(
            state.buttons,
            PadButtons::UP | PadButtons::CROSS | PadButtons::L2
        );
        assert_eq!(state.l2, 0xFF);
    }

    #[test]
    fn duplicate_key_bytes_match_single_occurrence() {
        let table = BindingTable::shell_default();
        let once = decode_keyboard(&report(0, &[usage::ENTER]), &table)
            .expect("decode should succeed");
        let twice = decode_keyboard(&report(0, &[usage::ENTER, usage::ENTER]), &table)
            .expect("decode should succeed");
        assert_eq!(once, twice);
    }

    #[test]
    fn bound_modifier_applies() {
        let table = BindingTable::shell_default();
        let state = decode_keyboard(&report(1 << modifier::RIGHT_CTRL, &[]), &table)
            .expect("decode should succeed");
        assert_eq!(state.buttons, PadButtons::SQUARE);
    }

    #[test]
    fn modifier_bit_zero_is_never_consulted() {
        let mut table = BindingTable::empty();
        table.bind_modifier(modifier::LEFT_CTRL, VirtualAction::Cross);
        let state = decode_keyboard(&report(1 << modifier::LEFT_CTRL, &[]), &table)
            .expect("decode should succeed");
        assert!(state.is_neutral());
    }

    #[test]
    fn each_decode_starts_from_neutral() {
        let table = BindingTable::shell_default();
        let pressed = decode_keyboard(&report(0, &[usage::ENTER]), &table)
            .expect("decode should succeed");
        assert!(!pressed.is_neutral());

        let released = decode_keyboard(&report(0, &[]), &table).expect("decode should succeed");
        assert!(released.is_neutral());
    }

    #[test]
    fn short_report_is_an_error() {
        let table = BindingTable::shell_default();
        assert_eq!(
            decode_keyboard(&[0x01], &table),
            Err(DecodeError::ReportTooShort {
                expected: KEYBOARD_REPORT_MIN,
                actual: 1
            })
        );
    }

    #[test]
    fn full_64_byte_report_is_scanned_to_the_end() {
        let table = BindingTable::shell_default();
        let mut data = vec![0u8; 64];
        data[63] = usage::ENTER;
        let state = decode_keyboard(&data, &table).expect("decode should succeed");
        assert_eq!(state.buttons, PadButtons::CROSS);
    }
}
