//! Configuration lifecycle
//!
//! Three binding tables live for the whole process: the shell/default
//! table, the table last loaded for a foreground title, and the single
//! active table the decoder consults. Process lifecycle events swap the
//! active table between them; every swap copies the whole table under one
//! short critical section so the decoder always reads a fully-formed
//! snapshot.

use crate::loader::load_table_or_none;
use padmux_bindings::BindingTable;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Title id the platform shell runs under; its table is loaded at startup,
/// not on process creation.
pub const SHELL_TITLE: &str = "shell";

/// Process-stop reason delivered when the foreground title is suspended.
pub const STOP_REASON_SUSPEND: u32 = 0x1000;

/// Process-start reason delivered when a suspended title resumes.
pub const START_REASON_RESUME: u32 = 0x10000;

/// Process identifier as delivered by the lifecycle notifications.
pub type Pid = u32;

struct StoreInner {
    active: BindingTable,
    shell: BindingTable,
    last: BindingTable,
    tracked_pid: Option<Pid>,
}

/// Owner of the three binding-table instances and the lifecycle state
/// machine that decides which one is active.
pub struct ConfigStore {
    path: PathBuf,
    inner: Mutex<StoreInner>,
}

impl ConfigStore {
    /// Create a store backed by `path` and load the shell table: the
    /// `[shell]` section if the file carries one, the built-in defaults
    /// otherwise. The active table starts as the shell table.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let shell = match load_table_or_none(&path, SHELL_TITLE) {
            Some(table) => {
                info!(path = %path.display(), "shell bindings loaded");
                table
            }
            None => {
                warn!(path = %path.display(), "no shell bindings, installing built-in defaults");
                BindingTable::shell_default()
            }
        };

        Self {
            path,
            inner: Mutex::new(StoreInner {
                active: shell,
                shell,
                last: shell,
                tracked_pid: None,
            }),
        }
    }

    /// Snapshot of the active table. The copy is wholesale; a concurrent
    /// swap is never observed half-written.
    pub fn active(&self) -> BindingTable {
        self.inner.lock().active
    }

    pub fn config_path(&self) -> &Path {
        &self.path
    }

    /// Foreground process created. Loads the title's section if present,
    /// making it active and remembering it (and the pid) for suspend/resume
    /// transitions. The shell title is skipped: it was handled at startup.
    pub fn on_create(&self, pid: Pid, title: &str) {
        if title == SHELL_TITLE {
            return;
        }

        let Some(table) = load_table_or_none(&self.path, title) else {
            debug!(title, "no bindings for title, keeping current table");
            return;
        };

        info!(title, pid, "bindings loaded for title");
        let mut inner = self.inner.lock();
        inner.active = table;
        inner.last = table;
        inner.tracked_pid = Some(pid);
    }

    /// Tracked foreground process suspended: fall back to shell bindings.
    pub fn on_stop(&self, pid: Pid, reason: u32) {
        if reason != STOP_REASON_SUSPEND {
            return;
        }
        let mut inner = self.inner.lock();
        if inner.tracked_pid == Some(pid) {
            debug!(pid, "foreground title suspended, shell bindings active");
            inner.active = inner.shell;
        }
    }

    /// Tracked foreground process resumed: restore its bindings.
    pub fn on_start(&self, pid: Pid, reason: u32) {
        if reason != START_REASON_RESUME {
            return;
        }
        let mut inner = self.inner.lock();
        if inner.tracked_pid == Some(pid) {
            debug!(pid, "foreground title resumed, restoring its bindings");
            inner.active = inner.last;
        }
    }

    /// Tracked foreground process exited: forget the pid so later stale
    /// stop/start events become no-ops. The active table is unchanged.
    pub fn on_exit(&self, pid: Pid) {
        let mut inner = self.inner.lock();
        if inner.tracked_pid == Some(pid) {
            inner.tracked_pid = None;
        }
    }

    /// Tracked foreground process killed; same consequences as an exit.
    pub fn on_kill(&self, pid: Pid) {
        self.on_exit(pid);
    }
}
