//! Property tests for report decoding.

use hid_kbm_protocol::{decode_keyboard, decode_mouse, scale_delta};
use padmux_bindings::BindingTable;
use proptest::prelude::*;

proptest! {
    #[test]
    fn scale_delta_matches_reference_model(delta in i8::MIN..=i8::MAX, sensitivity in 0u8..=255) {
        let expected = ((delta as i64) * (sensitivity as i64)).clamp(-128, 127) + 128;
        prop_assert_eq!(scale_delta(delta, sensitivity) as i64, expected);
    }

    #[test]
    fn empty_table_always_decodes_neutral_keyboard(report in proptest::collection::vec(any::<u8>(), 2..=64)) {
        let table = BindingTable::empty();
        let state = decode_keyboard(&report, &table).expect("decode should succeed");
        prop_assert!(state.is_neutral());
    }

    #[test]
    fn empty_table_always_decodes_neutral_mouse(report in proptest::collection::vec(any::<u8>(), 3..=8)) {
        let table = BindingTable::empty();
        let state = decode_mouse(&report, &table).expect("decode should succeed");
        prop_assert!(state.is_neutral());
    }

    #[test]
    fn duplicated_key_bytes_never_change_the_state(
        modifiers in any::<u8>(),
        key in 1u8..=255,
    ) {
        let table = BindingTable::shell_default();
        let single = decode_keyboard(&[modifiers, 0, key, 0, 0, 0, 0, 0], &table)
            .expect("decode should succeed");
        let repeated = decode_keyboard(&[modifiers, 0, key, key, key, key, key, key], &table)
            .expect("decode should succeed");
        prop_assert_eq!(single, repeated);
    }

    #[test]
    fn keyboard_decode_is_deterministic(report in proptest::collection::vec(any::<u8>(), 2..=16)) {
        let table = BindingTable::shell_default();
        let first = decode_keyboard(&report, &table).expect("decode should succeed");
        let second = decode_keyboard(&report, &table).expect("decode should succeed");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn mouse_axes_stay_in_scaled_bounds(dx in i8::MIN..=i8::MAX, dy in i8::MIN..=i8::MAX) {
        let table = BindingTable::shell_default();
        let state = decode_mouse(&[0, dx as u8, dy as u8], &table)
            .expect("decode should succeed");
        prop_assert_eq!(state.left_x, scale_delta(dx, table.sensitivity_x));
        prop_assert_eq!(state.left_y, scale_delta(dy, table.sensitivity_y));
    }
}
