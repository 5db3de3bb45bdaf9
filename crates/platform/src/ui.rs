use crate::NativeWindow;
use statusbar_core::{Result, StatusBarError};
use tokio::sync::oneshot;
use tracing::error;

type UiJob = Box<dyn FnOnce(&mut dyn NativeWindow) + Send>;

/// Spawn the UI thread that owns `window` exclusively and returns a handle
/// for marshalling calls onto it.
///
/// System-bar APIs are main-thread-only on every supported platform, so the
/// window never leaves this thread. The thread exits when every [`UiHandle`]
/// clone has been dropped.
pub fn spawn_ui(window: impl NativeWindow + 'static) -> UiHandle {
    let (tx, rx) = std::sync::mpsc::channel::<UiJob>();

    let spawned = std::thread::Builder::new()
        .name("statusbar-ui".into())
        .spawn(move || {
            let mut window = window;
            while let Ok(job) = rx.recv() {
                job(&mut window);
            }
        });
    if let Err(e) = spawned {
        error!("Failed to spawn UI thread: {e}");
    }

    UiHandle { tx }
}

/// Cloneable handle that marshals closures onto the UI thread and returns
/// their result to the calling task.
#[derive(Clone)]
pub struct UiHandle {
    tx: std::sync::mpsc::Sender<UiJob>,
}

impl UiHandle {
    /// Run `f` on the UI thread and await its result.
    pub async fn run<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut dyn NativeWindow) -> R + Send + 'static,
        R: Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel();
        self.tx
            .send(Box::new(move |window: &mut dyn NativeWindow| {
                let _ = done_tx.send(f(window));
            }))
            .map_err(|_| StatusBarError::Ui("UI thread has shut down".into()))?;

        done_rx
            .await
            .map_err(|_| StatusBarError::Ui("UI thread dropped the call".into()))
    }

    /// Fire-and-forget post; used where no result can be awaited (Drop).
    pub fn post<F>(&self, f: F)
    where
        F: FnOnce(&mut dyn NativeWindow) + Send + 'static,
    {
        let _ = self.tx.send(Box::new(f));
    }
}
