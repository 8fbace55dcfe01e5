#![deny(missing_docs)]
//! Cross-platform native file dialogs with pluggable platform drivers.
//!
//! The crate is built around three pieces:
//! - [`DialogService`], a facade owning exactly one platform driver for the
//!   process, selected at startup.
//! - [`DialogDriver`], the capability trait the facade dispatches through.
//!   Two real variants exist: [`DesktopDriver`] for platforms with blocking
//!   OS dialogs (backed by `rfd` when the `native-rfd` feature is enabled),
//!   and [`BridgedDriver`] for mobile-class hosts where the picker runs in a
//!   foreign UI context and reports back through an out-of-band callback.
//! - [`FilterSpec`], the pipe-delimited file-type filter wire format
//!   (`"Images (*.png)|*.png|..."`), normalized into extension lists on
//!   desktop and MIME patterns on bridged hosts.
//!
//! File-system helpers (recursive copy/move, filtered listing, stat,
//! line-oriented text I/O) live in [`fs`] and [`fs_ops`] behind the
//! [`FileSystem`] trait.

mod bridged;
mod core;
mod desktop;
mod driver;
mod filters;
mod mime;
mod service;

pub mod fs;
pub mod fs_ops;

pub use crate::core::{DialogError, DialogMode, DialogRequest, Selection};
pub use bridged::{
    BridgedDriver, DEFAULT_CALLBACK_TIMEOUT, DispatchPayload, NativeDispatch, ResultBridge,
    ResultSink,
};
#[cfg(feature = "native-rfd")]
pub use desktop::RfdPicker;
pub use desktop::{DesktopDriver, NativePicker};
pub use driver::{DialogDriver, UnsupportedDriver};
pub use filters::{FileFilter, FilterSpec};
pub use fs::{DirEntryInfo, FileSystem, PathProperties, StdFileSystem};
pub use mime::{UNIVERSAL_WILDCARD, extension_to_mime};
pub use service::DialogService;
