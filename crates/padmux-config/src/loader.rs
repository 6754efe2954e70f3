//! Per-title binding-table loading
//!
//! Resolves the symbolic `key = value` entries of one title's section into
//! a fully-formed [`BindingTable`]. Unknown keys and unresolvable action
//! names are ignored, never an error: the translation surface is total.

use crate::ini::{parse_file, saturating_atoi};
use crate::{ConfigError, ConfigResult};
use padmux_bindings::{
    BindingTable, SENSITIVITY_X_KEY, SENSITIVITY_Y_KEY, VirtualAction, keyboard_key_code,
    modifier_bit, mouse_input,
};
use std::path::Path;
use tracing::debug;

/// Apply one configuration entry to a table. Returns `true` when the entry
/// changed the table.
///
/// Sensitivity values parse as saturating signed decimals and clamp into
/// the `u8` multiplier range; binding values resolve against the fixed
/// symbolic name tables.
pub fn apply_entry(table: &mut BindingTable, key: &str, value: &str) -> bool {
    if key == SENSITIVITY_X_KEY {
        table.sensitivity_x = saturating_atoi(value).clamp(0, i32::from(u8::MAX)) as u8;
        return true;
    }
    if key == SENSITIVITY_Y_KEY {
        table.sensitivity_y = saturating_atoi(value).clamp(0, i32::from(u8::MAX)) as u8;
        return true;
    }

    let Some(action) = VirtualAction::from_name(value) else {
        return false;
    };

    if let Some(code) = keyboard_key_code(key) {
        table.bind_key(code, action);
        return true;
    }
    if let Some(bit) = modifier_bit(key) {
        table.bind_modifier(bit, action);
        return true;
    }
    if let Some(input) = mouse_input(key) {
        table.bind_mouse(input, action);
        return true;
    }

    false
}

/// Load the binding table for one title section.
///
/// Returns `Ok(None)` when the file has no section for the title; the
/// caller keeps its previous table in that case.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read at all.
pub fn load_table(path: &Path, title: &str) -> ConfigResult<Option<BindingTable>> {
    let mut table = BindingTable::empty();
    let mut applied = 0usize;

    let found = parse_file(path, title, |key, value| {
        if apply_entry(&mut table, key, value) {
            applied += 1;
        }
    })?;

    if !found {
        return Ok(None);
    }

    debug!(title, applied, "loaded binding table");
    Ok(Some(table))
}

/// Like [`load_table`], but treats an unreadable file as "no section":
/// steady-state loads fall back rather than fail.
pub fn load_table_or_none(path: &Path, title: &str) -> Option<BindingTable> {
    match load_table(path, title) {
        Ok(table) => table,
        Err(ConfigError::Io(err)) => {
            debug!(%err, path = %path.display(), "binding configuration unavailable");
            None
        }
    }
}
