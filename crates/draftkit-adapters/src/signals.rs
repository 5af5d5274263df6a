//! Project signal probe.
//!
//! A signal is true when it was declared by the operator in configuration, or
//! when its marker file exists directly inside the probed directory.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, instrument};

use draftkit_core::{
    application::ports::SignalProbe,
    domain::{GO_MODULE_SIGNAL, ProjectSignals},
    error::DraftResult,
};

/// [`SignalProbe`] backed by marker files and declared flags.
#[derive(Debug, Clone)]
pub struct MarkerSignalProbe {
    /// signal name -> marker file name
    markers: BTreeMap<String, String>,
    declared: ProjectSignals,
}

impl MarkerSignalProbe {
    /// Probe with the built-in markers (`go.mod` sets `go-module`) and no
    /// declared signals.
    pub fn new() -> Self {
        Self::empty().with_marker(GO_MODULE_SIGNAL, "go.mod")
    }

    /// Probe with no markers and no declared signals.
    pub fn empty() -> Self {
        Self {
            markers: BTreeMap::new(),
            declared: ProjectSignals::new(),
        }
    }

    /// Set `signal` whenever `file_name` exists in the probed directory.
    pub fn with_marker(mut self, signal: impl Into<String>, file_name: impl Into<String>) -> Self {
        self.markers.insert(signal.into(), file_name.into());
        self
    }

    /// Signals that are always true, regardless of directory contents.
    pub fn with_declared<I, S>(mut self, signals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for signal in signals {
            self.declared.insert(signal);
        }
        self
    }
}

impl Default for MarkerSignalProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalProbe for MarkerSignalProbe {
    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn probe(&self, dir: &Path) -> DraftResult<ProjectSignals> {
        let mut signals = self.declared.clone();

        for (signal, file_name) in &self.markers {
            if dir.join(file_name).is_file() {
                debug!(signal = %signal, marker = %file_name, "marker found");
                signals.insert(signal.as_str());
            }
        }

        Ok(signals)
    }
}
