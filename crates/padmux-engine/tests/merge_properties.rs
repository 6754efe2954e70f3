//! Property-based checks of the merge contract.

use hid_kbm_protocol::{AXIS_NEUTRAL, ControlState, PadButtons};
use padmux_engine::platform::mock::MockPlatform;
use padmux_engine::{CallVariant, DeviceSnapshot, PadFrame, merge};
use proptest::prelude::*;

fn arb_state() -> impl Strategy<Value = ControlState> {
    (
        any::<u32>(),
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
    )
        .prop_map(|(bits, l2, r2, lx, ly, rx, ry)| ControlState {
            buttons: PadButtons::from_bits_truncate(bits),
            l2,
            r2,
            left_x: lx,
            left_y: ly,
            right_x: rx,
            right_y: ry,
        })
}

fn arb_frame() -> impl Strategy<Value = PadFrame> {
    (
        any::<u32>(),
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
    )
        .prop_map(|(buttons, l2, r2, lx, ly, rx, ry)| PadFrame {
            buttons,
            l2,
            r2,
            left_x: lx,
            left_y: ly,
            right_x: rx,
            right_y: ry,
        })
}

fn arb_variant() -> impl Strategy<Value = CallVariant> {
    proptest::sample::select(CallVariant::ALL.to_vec())
}

proptest! {
    #[test]
    fn empty_snapshot_leaves_frames_byte_identical(
        frame in arb_frame(),
        variant in arb_variant(),
        port in 0u32..4,
    ) {
        let platform = MockPlatform::new();
        let mut frames = [frame];
        merge(port, &mut frames, &DeviceSnapshot::default(), variant, &platform);
        prop_assert_eq!(frames[0], frame);
        prop_assert!(platform.emulation_calls().is_empty());
    }

    #[test]
    fn button_merge_is_order_independent(
        frame in arb_frame(),
        a in arb_state(),
        b in arb_state(),
        variant in arb_variant(),
    ) {
        let platform = MockPlatform::new();
        let mut forward = [frame];
        let mut reversed = [frame];
        merge(1, &mut forward, &DeviceSnapshot::from_states(&[a, b]), variant, &platform);
        merge(1, &mut reversed, &DeviceSnapshot::from_states(&[b, a]), variant, &platform);
        prop_assert_eq!(forward[0].buttons, reversed[0].buttons);
        // Trigger adds commute too: both deflections are non-negative, so
        // saturation hits the same ceiling in either order.
        prop_assert_eq!(forward[0].l2, reversed[0].l2);
        prop_assert_eq!(forward[0].r2, reversed[0].r2);
    }

    // Axis adds commute as long as no intermediate clamp fires; keep both
    // deflections small enough that the running sum stays in range.
    #[test]
    fn unsaturated_axis_merge_is_order_independent(
        frame_x in 96u8..=160,
        a_x in 112u8..=144,
        b_x in 112u8..=144,
    ) {
        let platform = MockPlatform::new();
        let frame = PadFrame { left_x: frame_x, ..PadFrame::NEUTRAL };
        let a = ControlState { left_x: a_x, ..ControlState::NEUTRAL };
        let b = ControlState { left_x: b_x, ..ControlState::NEUTRAL };

        let mut forward = [frame];
        let mut reversed = [frame];
        merge(1, &mut forward, &DeviceSnapshot::from_states(&[a, b]),
              CallVariant::PeekPositive, &platform);
        merge(1, &mut reversed, &DeviceSnapshot::from_states(&[b, a]),
              CallVariant::PeekPositive, &platform);
        prop_assert_eq!(forward[0].left_x, reversed[0].left_x);
    }

    #[test]
    fn negative_logic_never_sets_a_bit(
        frame in arb_frame(),
        state in arb_state(),
    ) {
        let platform = MockPlatform::new();
        let mut frames = [frame];
        merge(
            1,
            &mut frames,
            &DeviceSnapshot::from_states(&[state]),
            CallVariant::ReadNegative,
            &platform,
        );
        prop_assert_eq!(frames[0].buttons & !frame.buttons, 0);
        prop_assert_eq!(frames[0].buttons, frame.buttons & !state.buttons.bits());
    }

    #[test]
    fn positive_logic_never_clears_a_bit(
        frame in arb_frame(),
        state in arb_state(),
    ) {
        let platform = MockPlatform::new();
        let mut frames = [frame];
        merge(
            1,
            &mut frames,
            &DeviceSnapshot::from_states(&[state]),
            CallVariant::PeekPositive,
            &platform,
        );
        prop_assert_eq!(frame.buttons & !frames[0].buttons, 0);
    }

    #[test]
    fn analog_fields_stay_in_range_and_match_the_clamp_model(
        frame in arb_frame(),
        state in arb_state(),
    ) {
        let platform = MockPlatform::new();
        let mut frames = [frame];
        merge(
            1,
            &mut frames,
            &DeviceSnapshot::from_states(&[state]),
            CallVariant::PeekPositiveExt,
            &platform,
        );

        let axis = |a: u8, d: u8| {
            (i64::from(a) + i64::from(d) - i64::from(AXIS_NEUTRAL)).clamp(0, 255) as u8
        };
        prop_assert_eq!(frames[0].left_x, axis(frame.left_x, state.left_x));
        prop_assert_eq!(frames[0].left_y, axis(frame.left_y, state.left_y));
        prop_assert_eq!(frames[0].right_x, axis(frame.right_x, state.right_x));
        prop_assert_eq!(frames[0].right_y, axis(frame.right_y, state.right_y));

        let trigger = |t: u8, d: u8| (u16::from(t) + u16::from(d)).min(255) as u8;
        prop_assert_eq!(frames[0].l2, trigger(frame.l2, state.l2));
        prop_assert_eq!(frames[0].r2, trigger(frame.r2, state.r2));
    }

    #[test]
    fn ports_above_one_are_untouched(
        frame in arb_frame(),
        state in arb_state(),
        variant in arb_variant(),
        port in 2u32..8,
    ) {
        let platform = MockPlatform::new();
        let mut frames = [frame];
        merge(port, &mut frames, &DeviceSnapshot::from_states(&[state]), variant, &platform);
        prop_assert_eq!(frames[0], frame);
        prop_assert!(platform.emulation_calls().is_empty());
    }
}
