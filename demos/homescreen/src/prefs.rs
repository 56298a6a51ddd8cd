//! Persisted widget preference slots
//!
//! One file per widget instance, named `state_<id>`, holding exactly the
//! encoded preference string. A slot that exists but fails to decode is
//! reported, never silently replaced with defaults; the error names the
//! file so the user can inspect or delete it.

use std::fs;
use std::io;
use std::path::PathBuf;

use covid_widget_core::{DecodeError, WidgetState};

/// Where slot files live when `--state-dir` is not given.
pub fn default_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("covid-widget"))
}

/// Slot storage rooted at one directory.
#[derive(Debug, Clone)]
pub struct Prefs {
    dir: PathBuf,
}

/// Load/store errors, each naming the slot file involved
#[derive(Debug)]
pub enum PrefsError {
    Io { path: PathBuf, source: io::Error },
    Corrupt { path: PathBuf, source: DecodeError },
}

impl std::fmt::Display for PrefsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefsError::Io { path, source } => {
                write!(f, "Preference slot {} unreadable: {}", path.display(), source)
            }
            PrefsError::Corrupt { path, source } => {
                write!(f, "Preference slot {} corrupt: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for PrefsError {}

impl Prefs {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of one widget instance's slot file.
    pub fn slot_path(&self, widget_id: u32) -> PathBuf {
        self.dir.join(format!("state_{widget_id}"))
    }

    /// Read a slot. `Ok(None)` means the slot was never written (first
    /// placement).
    pub fn load(&self, widget_id: u32) -> Result<Option<WidgetState>, PrefsError> {
        let path = self.slot_path(widget_id);
        let encoded = match fs::read_to_string(&path) {
            Ok(encoded) => encoded,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PrefsError::Io { path, source: e }),
        };
        WidgetState::from_encoded(encoded.trim_end())
            .map(Some)
            .map_err(|e| PrefsError::Corrupt { path, source: e })
    }

    /// Write a slot, creating the directory on first use.
    pub fn store(&self, widget_id: u32, state: &WidgetState) -> Result<(), PrefsError> {
        fs::create_dir_all(&self.dir).map_err(|e| PrefsError::Io {
            path: self.dir.clone(),
            source: e,
        })?;
        let path = self.slot_path(widget_id);
        fs::write(&path, state.encode()).map_err(|e| PrefsError::Io { path, source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covid_widget_core::WidgetAction;
    use std::sync::atomic::{AtomicU32, Ordering};

    static NEXT: AtomicU32 = AtomicU32::new(0);

    fn scratch_dir() -> PathBuf {
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("covid-widget-prefs-{}-{n}", std::process::id()))
    }

    #[test]
    fn test_fresh_slot_reads_as_none() {
        let prefs = Prefs::new(scratch_dir());
        assert!(prefs.load(1).unwrap().is_none());
    }

    #[test]
    fn test_store_then_load_round_trips() {
        let dir = scratch_dir();
        let prefs = Prefs::new(&dir);
        let state = WidgetState::initial().reduce(WidgetAction::StatusCycle);

        prefs.store(7, &state).unwrap();
        assert_eq!(prefs.load(7).unwrap(), Some(state));
        // Slots are per widget id.
        assert!(prefs.load(8).unwrap().is_none());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_trailing_newline_is_tolerated() {
        let dir = scratch_dir();
        let prefs = Prefs::new(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            prefs.slot_path(2),
            format!("{}\n", WidgetState::initial().encode()),
        )
        .unwrap();

        assert_eq!(prefs.load(2).unwrap(), Some(WidgetState::initial()));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_corrupt_slot_is_a_loud_error() {
        let dir = scratch_dir();
        let prefs = Prefs::new(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(prefs.slot_path(3), "((1),(XX").unwrap();

        let err = prefs.load(3).unwrap_err();
        assert!(matches!(err, PrefsError::Corrupt { .. }));
        // The message points at the offending file.
        assert!(err.to_string().contains("state_3"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_slot_files_are_named_by_widget_id() {
        let prefs = Prefs::new("/tmp/slots");
        assert!(prefs.slot_path(42).ends_with("state_42"));
    }
}
