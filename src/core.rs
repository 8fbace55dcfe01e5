use std::path::PathBuf;
use thiserror::Error;

use crate::filters::FilterSpec;

/// Dialog operation kind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogMode {
    /// Pick one or more existing files
    OpenFile,
    /// Choose a path to save a file to
    SaveFile,
    /// Pick one or more directories
    OpenDirectory,
}

/// Selection result containing one or more absolute paths
#[derive(Clone, Debug, Default)]
pub struct Selection {
    /// Selected filesystem paths
    pub paths: Vec<PathBuf>,
}

impl Selection {
    /// First selected path, if any.
    ///
    /// Results can legally be empty; consumers must check instead of
    /// indexing.
    pub fn first(&self) -> Option<&PathBuf> {
        self.paths.first()
    }

    /// Number of selected paths
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no path was selected
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Errors returned by dialog operations
#[derive(Error, Debug)]
pub enum DialogError {
    /// User cancelled the dialog, or the driver produced no usable paths
    #[error("cancelled")]
    Cancelled,
    /// No native UI environment (parent window / host activity) is available
    #[error("native environment unavailable: {0}")]
    NoEnvironment(String),
    /// A required native method or handle could not be resolved
    #[error("native binding unresolved: {0}")]
    BindingUnresolved(String),
    /// No dialog driver exists for this platform
    #[error("unsupported platform")]
    Unsupported,
    /// The asynchronous host never delivered a result in time
    #[error("timed out waiting for dialog result")]
    Timeout,
    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builder describing a single dialog invocation.
///
/// Created per call by [`DialogService`](crate::DialogService) (or by hand
/// when driving a [`DialogDriver`](crate::DialogDriver) directly) and handed
/// to the active driver. Fields are public so that
/// [`NativePicker`](crate::NativePicker) and
/// [`NativeDispatch`](crate::NativeDispatch) implementations can read them.
#[derive(Clone, Debug)]
pub struct DialogRequest {
    /// Operation kind
    pub mode: DialogMode,
    /// Title to display on the dialog window
    pub title: String,
    /// Initial directory the dialog opens in
    pub default_path: Option<PathBuf>,
    /// Suggested file name (save dialogs)
    pub default_name: Option<String>,
    /// Whether multiple selections are allowed
    pub multi: bool,
    /// Parsed file-type filter specification
    pub filter: FilterSpec,
}

impl DialogRequest {
    /// Create a new request with the given mode
    pub fn new(mode: DialogMode) -> Self {
        Self {
            mode,
            title: String::new(),
            default_path: None,
            default_name: None,
            multi: false,
            filter: FilterSpec::default(),
        }
    }

    /// Set the dialog title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial directory
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.default_path = Some(dir.into());
        self
    }

    /// Set the suggested file name (for [`DialogMode::SaveFile`])
    pub fn default_file_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = Some(name.into());
        self
    }

    /// Allow multiple selections
    pub fn multi_select(mut self, yes: bool) -> Self {
        self.multi = yes;
        self
    }

    /// Parse and attach a filter specification in the pipe-delimited wire
    /// format, e.g. `"Images (*.png)|*.png|Audio (*.wav)|*.wav"`.
    pub fn filter_spec(mut self, spec: &str) -> Self {
        self.filter = FilterSpec::parse(spec);
        self
    }
}
