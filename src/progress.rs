//! Progress reporting for long-running recognition passes.

/// Adapts the engine's progress hook to a caller-supplied callback.
///
/// The callback runs synchronously on the thread that invoked recognition, so
/// it must not block. Per retrieval call that requires (or skips an
/// already-complete) recognition pass, the observed percentages are
/// non-decreasing and end with exactly one terminal `100`; the session emits
/// that terminal value itself because the engine may never report it.
pub struct ProgressMonitor<'a> {
    callback: Option<&'a mut dyn FnMut(u32)>,
}

impl<'a> ProgressMonitor<'a> {
    pub fn new(callback: Option<&'a mut dyn FnMut(u32)>) -> Self {
        Self { callback }
    }

    /// A monitor that discards all notifications.
    pub fn sink() -> Self {
        Self { callback: None }
    }

    /// Report `percentage` to the callback, if one is attached.
    pub fn notify(&mut self, percentage: u32) {
        if let Some(callback) = self.callback.as_mut() {
            callback(percentage.min(100));
        }
    }
}
