//! Process-wide dialog facade.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use parking_lot::Mutex;

use crate::core::{DialogError, DialogMode, DialogRequest, Selection};
use crate::driver::DialogDriver;
#[cfg(not(all(
    feature = "native-rfd",
    any(target_os = "windows", target_os = "macos", target_os = "linux")
)))]
use crate::driver::UnsupportedDriver;

/// Facade owning the one live dialog driver for the process.
///
/// Construct once at startup and pass by reference to callers. Dialog
/// operations are serialized internally: at most one dialog is in flight
/// process-wide. On the desktop driver a call blocks the calling thread for
/// the duration of the user interaction.
pub struct DialogService {
    driver: Box<dyn DialogDriver>,
    in_flight: Mutex<()>,
}

impl DialogService {
    /// Select the driver for the current platform.
    ///
    /// Desktop targets get the blocking native driver when the `native-rfd`
    /// feature is enabled; everything else falls back to the unsupported
    /// driver, which warns once and fails every operation. Bridged hosts
    /// wire their dispatch explicitly through
    /// [`with_driver`](Self::with_driver).
    pub fn new() -> Self {
        #[cfg(all(
            feature = "native-rfd",
            any(target_os = "windows", target_os = "macos", target_os = "linux")
        ))]
        {
            Self::with_driver(Box::new(crate::desktop::DesktopDriver::rfd()))
        }
        #[cfg(not(all(
            feature = "native-rfd",
            any(target_os = "windows", target_os = "macos", target_os = "linux")
        )))]
        {
            Self::with_driver(Box::new(UnsupportedDriver))
        }
    }

    /// Build the facade over an explicit driver.
    pub fn with_driver(driver: Box<dyn DialogDriver>) -> Self {
        Self {
            driver,
            in_flight: Mutex::new(()),
        }
    }

    /// Open a dialog for selecting one or more existing files.
    ///
    /// `filter_spec` uses the pipe-delimited wire format, e.g.
    /// `"Images (*.png)|*.png|Audio (*.wav)|*.wav"`.
    pub fn open_file(
        &self,
        title: &str,
        default_path: Option<&Path>,
        filter_spec: &str,
        multi_select: bool,
    ) -> Result<Selection, DialogError> {
        let mut request = DialogRequest::new(DialogMode::OpenFile)
            .title(title)
            .filter_spec(filter_spec)
            .multi_select(multi_select);
        if let Some(dir) = default_path {
            request = request.directory(dir);
        }
        self.run(request)
    }

    /// Open a dialog for choosing a path to save a file to.
    ///
    /// Resolves to exactly one path.
    pub fn save_file(
        &self,
        title: &str,
        default_path: Option<&Path>,
        default_file: &str,
        filter_spec: &str,
    ) -> Result<Selection, DialogError> {
        let mut request = DialogRequest::new(DialogMode::SaveFile)
            .title(title)
            .default_file_name(default_file)
            .filter_spec(filter_spec);
        if let Some(dir) = default_path {
            request = request.directory(dir);
        }
        let selection = self.run(request)?;
        let first = selection
            .paths
            .into_iter()
            .next()
            .ok_or(DialogError::Cancelled)?;
        Ok(Selection { paths: vec![first] })
    }

    /// Open a dialog for selecting one or more directories.
    ///
    /// Every returned path ends in exactly one trailing separator; results
    /// can be fed back as `default_path` of a later call unchanged.
    pub fn open_directory(
        &self,
        title: &str,
        default_path: Option<&Path>,
        multi_select: bool,
    ) -> Result<Selection, DialogError> {
        let mut request = DialogRequest::new(DialogMode::OpenDirectory)
            .title(title)
            .multi_select(multi_select);
        if let Some(dir) = default_path {
            request = request.directory(dir);
        }
        let selection = self.run(request)?;
        Ok(Selection {
            paths: selection.paths.into_iter().map(normalize_dir_path).collect(),
        })
    }

    fn run(&self, request: DialogRequest) -> Result<Selection, DialogError> {
        let _guard = self.in_flight.lock();
        let selection = self.driver.show(&request)?;
        // A nominally successful call whose paths are all blank is a failure.
        let paths: Vec<PathBuf> = selection
            .paths
            .into_iter()
            .filter(|p| !p.to_string_lossy().trim().is_empty())
            .collect();
        if paths.is_empty() {
            return Err(DialogError::Cancelled);
        }
        Ok(Selection { paths })
    }
}

impl Default for DialogService {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a directory path to end in exactly one platform separator.
/// Idempotent.
fn normalize_dir_path(path: PathBuf) -> PathBuf {
    let mut s = path.into_os_string().to_string_lossy().into_owned();
    while s.ends_with(std::path::is_separator) {
        s.pop();
    }
    s.push(MAIN_SEPARATOR);
    PathBuf::from(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_appends_exactly_one_separator() {
        let sep = MAIN_SEPARATOR;
        let raw = PathBuf::from("/home/user/docs");
        let normalized = normalize_dir_path(raw);
        assert_eq!(normalized, PathBuf::from(format!("/home/user/docs{sep}")));
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_dir_path(PathBuf::from("/home/user/docs"));
        let twice = normalize_dir_path(once.clone());
        assert_eq!(once, twice);
    }

    #[cfg(not(windows))]
    #[test]
    fn normalize_keeps_non_separator_backslashes() {
        // On Unix a backslash is an ordinary file-name character.
        let normalized = normalize_dir_path(PathBuf::from("/home/user/odd\\name"));
        assert_eq!(
            normalized,
            PathBuf::from(format!("/home/user/odd\\name{MAIN_SEPARATOR}"))
        );
    }

    #[test]
    fn normalize_collapses_repeated_separators() {
        let sep = MAIN_SEPARATOR;
        let normalized = normalize_dir_path(PathBuf::from("/home/user/docs///"));
        assert_eq!(normalized, PathBuf::from(format!("/home/user/docs{sep}")));
    }
}
