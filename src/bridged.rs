//! Asynchronous-bridged variant for mobile-class hosts.
//!
//! On these hosts the picker runs in a foreign UI/activity context: the
//! dispatch call returns before the user has chosen anything, and the host
//! later delivers the selection through an out-of-band callback, on
//! whatever thread it likes. [`ResultBridge`] reconciles the two halves
//! with a one-shot, lock-protected slot: the dispatching side arms it and
//! waits with a timeout, the callback side fills it exactly once through a
//! [`ResultSink`].
//!
//! The timeout is deliberate: a host that never calls back resolves to
//! [`DialogError::Timeout`] instead of leaving the operation pending
//! forever.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::core::{DialogError, DialogMode, DialogRequest, Selection};
use crate::driver::DialogDriver;

#[cfg(feature = "tracing")]
use tracing::{error, trace};

/// Default time the driver waits for the host callback.
pub const DEFAULT_CALLBACK_TIMEOUT: Duration = Duration::from_secs(120);

/// Arguments handed to the host's native dispatch call.
///
/// Default-path pre-selection is deliberately absent: the wire format for a
/// host-native default location is host-defined, so the field is dropped
/// rather than guessed. Callers must not depend on the picker opening in
/// the requested directory on bridged hosts.
#[derive(Clone, Debug)]
pub struct DispatchPayload {
    /// Normalized MIME patterns from the request's filter specification
    pub mime_patterns: Vec<String>,
    /// Whether the picker should allow multiple selections
    pub multi_select: bool,
    /// Suggested file name (save dialogs only)
    pub default_file: Option<String>,
}

/// Host-side dispatch of the picker actions.
///
/// `dispatch` must return once the picker has been handed to the host UI,
/// not once the user has chosen; results arrive later through the
/// [`ResultSink`] the host glue was given. A host that cannot resolve the
/// method backing an action returns [`DialogError::BindingUnresolved`],
/// which the driver reports to the caller instead of aborting the process.
pub trait NativeDispatch: Send + Sync {
    /// Hand one picker action to the host UI.
    fn dispatch(&self, mode: DialogMode, payload: &DispatchPayload) -> Result<(), DialogError>;
}

#[derive(Default)]
struct Slot {
    paths: Vec<String>,
    received: bool,
}

struct Shared {
    slot: Mutex<Slot>,
    ready: Condvar,
}

/// One-shot reconciler between the dispatching thread and the host's
/// callback-delivery thread.
///
/// Cloning shares the same slot. Owned by the active [`BridgedDriver`];
/// hosts that register their callback glue before building the driver can
/// create the bridge first and pass it to
/// [`BridgedDriver::with_bridge`].
#[derive(Clone)]
pub struct ResultBridge {
    shared: Arc<Shared>,
}

impl ResultBridge {
    /// Create an empty bridge.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                slot: Mutex::new(Slot::default()),
                ready: Condvar::new(),
            }),
        }
    }

    /// Sink handle for the host's callback glue. Clonable, thread-safe.
    pub fn sink(&self) -> ResultSink {
        ResultSink {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Drop any unconsumed result from a previous interaction.
    pub fn reset(&self) {
        let mut slot = self.shared.slot.lock();
        slot.paths.clear();
        slot.received = false;
    }

    /// Consume the delivered result, if one is pending.
    ///
    /// Reads are destructive: a second call before a new delivery returns
    /// `None`.
    pub fn take(&self) -> Option<Vec<String>> {
        let mut slot = self.shared.slot.lock();
        if !slot.received {
            return None;
        }
        slot.received = false;
        Some(std::mem::take(&mut slot.paths))
    }

    /// Block until a result is delivered or `timeout` elapses, then consume
    /// it. `None` means the host never called back in time.
    pub fn wait(&self, timeout: Duration) -> Option<Vec<String>> {
        let deadline = Instant::now() + timeout;
        let mut slot = self.shared.slot.lock();
        while !slot.received {
            if self.shared.ready.wait_until(&mut slot, deadline).timed_out() {
                break;
            }
        }
        if !slot.received {
            return None;
        }
        slot.received = false;
        Some(std::mem::take(&mut slot.paths))
    }
}

impl Default for ResultBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Write half of a [`ResultBridge`], handed to the host's callback glue.
#[derive(Clone)]
pub struct ResultSink {
    shared: Arc<Shared>,
}

impl ResultSink {
    /// Deliver a single-path result (the host's single-selection callback).
    pub fn deliver(&self, path: impl Into<String>) {
        self.deliver_all(vec![path.into()]);
    }

    /// Deliver a multi-path result (the host's multi-selection callback).
    ///
    /// May run on any thread. Overwrites an unconsumed previous delivery;
    /// an empty `paths` still counts as a delivery (the picker was
    /// dismissed without a selection).
    pub fn deliver_all(&self, paths: Vec<String>) {
        #[cfg(feature = "tracing")]
        for path in &paths {
            trace!(path = %path, "dialog result delivered");
        }
        let mut slot = self.shared.slot.lock();
        slot.paths = paths;
        slot.received = true;
        self.shared.ready.notify_all();
    }
}

/// Driver for hosts whose picker lives in a foreign UI context.
pub struct BridgedDriver {
    dispatch: Box<dyn NativeDispatch>,
    bridge: ResultBridge,
    timeout: Duration,
}

impl BridgedDriver {
    /// Create a driver over the given host dispatch with a fresh bridge.
    pub fn new(dispatch: Box<dyn NativeDispatch>) -> Self {
        Self::with_bridge(dispatch, ResultBridge::new())
    }

    /// Create a driver over the given dispatch and an externally created
    /// reconciler (for hosts that wire their callback glue first).
    pub fn with_bridge(dispatch: Box<dyn NativeDispatch>, bridge: ResultBridge) -> Self {
        Self {
            dispatch,
            bridge,
            timeout: DEFAULT_CALLBACK_TIMEOUT,
        }
    }

    /// Override the callback timeout.
    pub fn callback_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sink for wiring the host's result callbacks to this driver.
    pub fn sink(&self) -> ResultSink {
        self.bridge.sink()
    }
}

impl DialogDriver for BridgedDriver {
    fn show(&self, request: &DialogRequest) -> Result<Selection, DialogError> {
        let payload = DispatchPayload {
            mime_patterns: request.filter.mime_patterns(),
            multi_select: request.multi,
            default_file: match request.mode {
                DialogMode::SaveFile => request.default_name.clone(),
                _ => None,
            },
        };

        self.bridge.reset();
        #[cfg(feature = "tracing")]
        trace!(
            ?request.mode,
            patterns = payload.mime_patterns.len(),
            "dispatching picker to host"
        );
        if let Err(err) = self.dispatch.dispatch(request.mode, &payload) {
            #[cfg(feature = "tracing")]
            error!(%err, "native dispatch failed");
            return Err(err);
        }

        let Some(delivered) = self.bridge.wait(self.timeout) else {
            return Err(DialogError::Timeout);
        };
        let paths: Vec<PathBuf> = delivered
            .into_iter()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .collect();
        if paths.is_empty() {
            Err(DialogError::Cancelled)
        } else {
            Ok(Selection { paths })
        }
    }
}
