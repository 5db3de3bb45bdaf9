use statusbar_core::SafeAreaInsets;
use tokio::sync::mpsc;

/// Disposable handle to a standing safe-area observer.
///
/// Yields one [`SafeAreaInsets`] per OS geometry change, in delivery order,
/// without coalescing. Dropping the handle ends the stream; the controller
/// prunes the dead channel on the next event.
#[derive(Debug)]
pub struct InsetsSubscription {
    rx: mpsc::UnboundedReceiver<SafeAreaInsets>,
}

impl InsetsSubscription {
    pub(crate) fn new(rx: mpsc::UnboundedReceiver<SafeAreaInsets>) -> Self {
        Self { rx }
    }

    /// Await the next geometry change. Returns `None` once the controller
    /// (and with it the UI-thread listener) has been torn down.
    pub async fn recv(&mut self) -> Option<SafeAreaInsets> {
        self.rx.recv().await
    }

    /// Non-blocking poll, for hosts draining on their own cadence.
    pub fn try_recv(&mut self) -> Option<SafeAreaInsets> {
        self.rx.try_recv().ok()
    }
}
