use crate::core::{DialogError, DialogRequest, Selection};

/// Capability interface implemented by each platform dialog variant.
///
/// Exactly one driver is live per process, owned by
/// [`DialogService`](crate::DialogService). A driver receives the fully
/// built request and returns the selected paths, or an error for every
/// failure class including user cancellation. Drivers are never hot-swapped
/// at runtime.
pub trait DialogDriver: Send + Sync {
    /// Run one dialog interaction to completion.
    fn show(&self, request: &DialogRequest) -> Result<Selection, DialogError>;
}

/// Fallback driver for platforms without a native dialog implementation.
///
/// Logs a warning on first use; every operation fails with
/// [`DialogError::Unsupported`].
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedDriver;

impl DialogDriver for UnsupportedDriver {
    fn show(&self, _request: &DialogRequest) -> Result<Selection, DialogError> {
        static WARNED: std::sync::Once = std::sync::Once::new();
        WARNED.call_once(|| {
            #[cfg(feature = "tracing")]
            tracing::warn!("no dialog driver implemented for this platform; file dialogs will not work");
        });
        Err(DialogError::Unsupported)
    }
}
