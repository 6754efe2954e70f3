//! Platform services
//!
//! The two side effects the engine needs from its host: injecting a
//! button-emulation mask into the controller service and kicking the
//! power/idle timer when a device shows activity.

/// Duration, in controller sampling ticks, a button-emulation mask stays
/// installed after each merge.
pub const BUTTON_EMULATION_TICKS: u32 = 16;

pub trait Platform: Send + Sync {
    /// Install `buttons` as an emulated press on `port` for `ticks`
    /// sampling ticks.
    fn set_button_emulation(&self, port: u32, buttons: u32, ticks: u32);

    /// Signal user activity so the host does not idle-sleep while input
    /// devices are in use.
    fn power_tick(&self);
}

pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EmulationCall {
        pub port: u32,
        pub buttons: u32,
        pub ticks: u32,
    }

    /// Records every platform call for inspection in tests.
    #[derive(Default)]
    pub struct MockPlatform {
        emulation_calls: Mutex<Vec<EmulationCall>>,
        power_ticks: Mutex<u32>,
    }

    impl MockPlatform {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn emulation_calls(&self) -> Vec<EmulationCall> {
            self.emulation_calls
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .clone()
        }

        pub fn power_ticks(&self) -> u32 {
            *self.power_ticks.lock().unwrap_or_else(|e| e.into_inner())
        }
    }

    impl Platform for MockPlatform {
        fn set_button_emulation(&self, port: u32, buttons: u32, ticks: u32) {
            self.emulation_calls
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(EmulationCall {
                    port,
                    buttons,
                    ticks,
                });
        }

        fn power_tick(&self) {
            *self.power_ticks.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        }
    }
}
