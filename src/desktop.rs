//! Synchronous-native variant for desktop-class platforms.
//!
//! The driver blocks the calling thread for the duration of the user
//! interaction and reads the selection straight off the native call. The
//! actual OS dialog sits behind [`NativePicker`] so hosts (and tests) can
//! substitute their own; the `native-rfd` feature provides [`RfdPicker`]
//! over the `rfd` crate.

use std::path::PathBuf;

use crate::core::{DialogError, DialogMode, DialogRequest, Selection};
use crate::driver::DialogDriver;

#[cfg(feature = "tracing")]
use tracing::trace;

/// Blocking native file-picker calls consumed by [`DesktopDriver`].
///
/// Implementations must verify their native environment (typically the
/// parent window handle) before opening a dialog and return
/// [`DialogError::NoEnvironment`] when it cannot be obtained, without
/// invoking the native dialog.
pub trait NativePicker: Send + Sync {
    /// Open-file dialog; multi-select per the request.
    fn pick_files(&self, request: &DialogRequest) -> Result<Vec<PathBuf>, DialogError>;
    /// Save-file dialog; at most one path.
    fn save_file(&self, request: &DialogRequest) -> Result<Vec<PathBuf>, DialogError>;
    /// Open-directory dialog; multi-select per the request.
    fn pick_folders(&self, request: &DialogRequest) -> Result<Vec<PathBuf>, DialogError>;
}

/// Driver for desktop-class platforms with blocking native dialogs.
pub struct DesktopDriver {
    picker: Box<dyn NativePicker>,
}

impl DesktopDriver {
    /// Create a driver over the given native picker.
    pub fn new(picker: Box<dyn NativePicker>) -> Self {
        Self { picker }
    }

    /// Create a driver over the `rfd` OS dialogs.
    #[cfg(feature = "native-rfd")]
    pub fn rfd() -> Self {
        Self::new(Box::new(RfdPicker))
    }
}

impl DialogDriver for DesktopDriver {
    fn show(&self, request: &DialogRequest) -> Result<Selection, DialogError> {
        #[cfg(feature = "tracing")]
        trace!(?request.mode, "desktop blocking dialog");
        let paths = match request.mode {
            DialogMode::OpenFile => self.picker.pick_files(request)?,
            DialogMode::SaveFile => self.picker.save_file(request)?,
            DialogMode::OpenDirectory => self.picker.pick_folders(request)?,
        };
        if paths.is_empty() {
            Err(DialogError::Cancelled)
        } else {
            Ok(Selection { paths })
        }
    }
}

/// [`NativePicker`] implementation over the OS dialogs of the `rfd` crate.
#[cfg(feature = "native-rfd")]
#[derive(Clone, Copy, Debug, Default)]
pub struct RfdPicker;

#[cfg(feature = "native-rfd")]
impl RfdPicker {
    fn to_rfd(request: &DialogRequest) -> rfd::FileDialog {
        let mut d = rfd::FileDialog::new().set_title(request.title.as_str());
        if let Some(dir) = &request.default_path {
            d = d.set_directory(dir);
        }
        if let Some(name) = &request.default_name {
            d = d.set_file_name(name.as_str());
        }
        for f in request.filter.entries() {
            if f.extension.is_empty() {
                continue;
            }
            d = d.add_filter(&f.label, &[f.extension.as_str()]);
        }
        d
    }
}

#[cfg(feature = "native-rfd")]
impl NativePicker for RfdPicker {
    fn pick_files(&self, request: &DialogRequest) -> Result<Vec<PathBuf>, DialogError> {
        let d = Self::to_rfd(request);
        let picked = if request.multi {
            d.pick_files().unwrap_or_default()
        } else {
            d.pick_file().into_iter().collect()
        };
        Ok(picked)
    }

    fn save_file(&self, request: &DialogRequest) -> Result<Vec<PathBuf>, DialogError> {
        Ok(Self::to_rfd(request).save_file().into_iter().collect())
    }

    fn pick_folders(&self, request: &DialogRequest) -> Result<Vec<PathBuf>, DialogError> {
        let d = Self::to_rfd(request);
        let picked = if request.multi {
            d.pick_folders().unwrap_or_default()
        } else {
            d.pick_folder().into_iter().collect()
        };
        Ok(picked)
    }
}
