//! Symbolic name tables for configuration files
//!
//! Configuration keys name physical inputs (`KB_SPACE`, `MOUSE_LEFT`, ...)
//! and configuration values name [`VirtualAction`]s (`CROSS`, `DPAD_UP`, ...).
//! Resolution is lookup against fixed tables; names that resolve to nothing
//! are ignored by the loader, never an error.

use crate::table::{MouseInput, modifier};

/// Configuration key name → boot-keyboard usage code.
pub const KEYBOARD_KEY_NAMES: &[(&str, u8)] = &[
    ("KB_A", 0x04),
    ("KB_B", 0x05),
    ("KB_C", 0x06),
    ("KB_D", 0x07),
    ("KB_E", 0x08),
    ("KB_F", 0x09),
    ("KB_G", 0x0A),
    ("KB_H", 0x0B),
    ("KB_I", 0x0C),
    ("KB_J", 0x0D),
    ("KB_K", 0x0E),
    ("KB_L", 0x0F),
    ("KB_M", 0x10),
    ("KB_N", 0x11),
    ("KB_O", 0x12),
    ("KB_P", 0x13),
    ("KB_Q", 0x14),
    ("KB_R", 0x15),
    ("KB_S", 0x16),
    ("KB_T", 0x17),
    ("KB_U", 0x18),
    ("KB_V", 0x19),
    ("KB_W", 0x1A),
    ("KB_X", 0x1B),
    ("KB_Y", 0x1C),
    ("KB_Z", 0x1D),
    ("KB_1", 0x1E),
    ("KB_2", 0x1F),
    ("KB_3", 0x20),
    ("KB_4", 0x21),
    ("KB_5", 0x22),
    ("KB_6", 0x23),
    ("KB_7", 0x24),
    ("KB_8", 0x25),
    ("KB_9", 0x26),
    ("KB_0", 0x27),
    ("KB_ENTER", 0x28),
    ("KB_ESCAPE", 0x29),
    ("KB_BACKSPACE", 0x2A),
    ("KB_TAB", 0x2B),
    ("KB_SPACE", 0x2C),
    ("KB_MINUS", 0x2D),
    ("KB_EQUAL", 0x2E),
    ("KB_LEFT_BRACKET", 0x2F),
    ("KB_RIGHT_BRACKET", 0x30),
    ("KB_BACKSLASH", 0x31),
    ("KB_SEMICOLON", 0x33),
    ("KB_APOSTROPHE", 0x34),
    ("KB_GRAVE", 0x35),
    ("KB_COMMA", 0x36),
    ("KB_PERIOD", 0x37),
    ("KB_SLASH", 0x38),
    ("KB_CAPS_LOCK", 0x39),
    ("KB_F1", 0x3A),
    ("KB_F2", 0x3B),
    ("KB_F3", 0x3C),
    ("KB_F4", 0x3D),
    ("KB_F5", 0x3E),
    ("KB_F6", 0x3F),
    ("KB_F7", 0x40),
    ("KB_F8", 0x41),
    ("KB_F9", 0x42),
    ("KB_F10", 0x43),
    ("KB_F11", 0x44),
    ("KB_F12", 0x45),
    ("KB_PRINT_SCREEN", 0x46),
    ("KB_SCROLL_LOCK", 0x47),
    ("KB_PAUSE", 0x48),
    ("KB_INSERT", 0x49),
    ("KB_HOME", 0x4A),
    ("KB_PAGE_UP", 0x4B),
    ("KB_DELETE", 0x4C),
    ("KB_END", 0x4D),
    ("KB_PAGE_DOWN", 0x4E),
    ("KB_RIGHT_ARROW", 0x4F),
    ("KB_LEFT_ARROW", 0x50),
    ("KB_DOWN_ARROW", 0x51),
    ("KB_UP_ARROW", 0x52),
    ("KB_NUM_LOCK", 0x53),
    ("KB_KP_SLASH", 0x54),
    ("KB_KP_ASTERISK", 0x55),
    ("KB_KP_MINUS", 0x56),
    ("KB_KP_PLUS", 0x57),
    ("KB_KP_ENTER", 0x58),
    ("KB_KP_1", 0x59),
    ("KB_KP_2", 0x5A),
    ("KB_KP_3", 0x5B),
    ("KB_KP_4", 0x5C),
    ("KB_KP_5", 0x5D),
    ("KB_KP_6", 0x5E),
    ("KB_KP_7", 0x5F),
    ("KB_KP_8", 0x60),
    ("KB_KP_9", 0x61),
    ("KB_KP_0", 0x62),
    ("KB_KP_PERIOD", 0x63),
];

/// Configuration key name → modifier bit index.
pub const MODIFIER_NAMES: &[(&str, u8)] = &[
    ("KB_LEFT_CTRL", modifier::LEFT_CTRL),
    ("KB_LEFT_SHIFT", modifier::LEFT_SHIFT),
    ("KB_LEFT_ALT", modifier::LEFT_ALT),
    ("KB_LEFT_GUI", modifier::LEFT_GUI),
    ("KB_RIGHT_CTRL", modifier::RIGHT_CTRL),
    ("KB_RIGHT_SHIFT", modifier::RIGHT_SHIFT),
    ("KB_RIGHT_ALT", modifier::RIGHT_ALT),
    ("KB_RIGHT_GUI", modifier::RIGHT_GUI),
];

/// Configuration key name → mouse input slot.
pub const MOUSE_NAMES: &[(&str, MouseInput)] = &[
    ("MOUSE_1", MouseInput::Button1),
    ("MOUSE_2", MouseInput::Button2),
    ("MOUSE_3", MouseInput::Button3),
    ("MOUSE_LEFT", MouseInput::MotionLeft),
    ("MOUSE_RIGHT", MouseInput::MotionRight),
    ("MOUSE_UP", MouseInput::MotionUp),
    ("MOUSE_DOWN", MouseInput::MotionDown),
];

/// Sensitivity configuration keys.
pub const SENSITIVITY_X_KEY: &str = "MS_SENSITIVITY_X";
pub const SENSITIVITY_Y_KEY: &str = "MS_SENSITIVITY_Y";

pub fn keyboard_key_code(name: &str) -> Option<u8> {
    KEYBOARD_KEY_NAMES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, code)| *code)
}

pub fn modifier_bit(name: &str) -> Option<u8> {
    MODIFIER_NAMES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, bit)| *bit)
}

pub fn mouse_input(name: &str) -> Option<MouseInput> {
    MOUSE_NAMES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, input)| *input)
}
