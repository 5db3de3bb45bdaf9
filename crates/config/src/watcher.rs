use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// How long to let a burst of writes settle before notifying. Editors and
/// atomic-save tools emit several filesystem events per save.
const SETTLE: Duration = Duration::from_millis(150);

/// Watch the plugin config file and fire on every write burst, so the host
/// can re-apply the `[appearance]` section without restarting.
///
/// The watcher stops when the returned receiver is dropped.
pub fn watch(path: impl AsRef<Path>) -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel(1);
    let path = path.as_ref().to_path_buf();

    let spawned = std::thread::Builder::new()
        .name("statusbar-config-watch".into())
        .spawn(move || watch_thread(path, tx));
    if let Err(e) = spawned {
        error!("Failed to spawn config watcher thread: {e}");
    }

    rx
}

fn watch_thread(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

    let (raw_tx, raw_rx) = std::sync::mpsc::channel::<notify::Result<Event>>();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = raw_tx.send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", path.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    for event in &raw_rx {
        match event {
            Ok(e) if is_write(&e.kind) => {
                // Drain the rest of the burst, then notify once.
                std::thread::sleep(SETTLE);
                while raw_rx.try_recv().is_ok() {}
                if tx.blocking_send(()).is_err() {
                    return; // receiver dropped
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

fn is_write(kind: &notify::EventKind) -> bool {
    matches!(kind, notify::EventKind::Modify(_) | notify::EventKind::Create(_))
}
