//! statusbar — demo host for the status bar controller.
//!
//! Drives the controller against the simulated window the way a plugin host
//! would: attach, apply the configured appearance, then react to safe-area
//! changes and config reloads until Ctrl-C.
//!
//! Run with:  `RUST_LOG=debug statusbar`

use anyhow::Result;
use statusbar_color::Appearance;
use statusbar_config as config;
use statusbar_controller::StatusBar;
use statusbar_core::{Message, SafeAreaInsets};
use statusbar_platform::{spawn_ui, SimulatedWindow};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("statusbar v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = config::default_path();
    let cfg = config::load(&config_path)?;

    let window = SimulatedWindow::new();
    let device = window.device();
    let bar = StatusBar::new(spawn_ui(window));

    let state = bar.ready().await?;
    info!(visible = state.visible, style = %state.style, "attached to active window");
    bar.apply(&Appearance::from_config(&cfg.appearance)).await?;

    // A host speaking the wire protocol routes through the bridge instead of
    // the typed surface; exercise one such call.
    let args = [serde_json::json!("#1e1e2e")];
    if let Err(e) = statusbar_bridge::dispatch(&bar, "backgroundColorByHexString", &args).await {
        warn!(payload = %statusbar_bridge::failure_payload(&e), "bridge dispatch failed");
    }

    let (tx, mut rx) = mpsc::channel::<Message>(16);

    // Safe-area subscription → event bus.
    let mut insets = bar.subscribe_safe_area_insets().await?;
    let insets_tx = tx.clone();
    tokio::spawn(async move {
        while let Some(update) = insets.recv().await {
            if insets_tx.send(Message::InsetsChanged(update)).await.is_err() {
                break;
            }
        }
    });

    // Config watcher → event bus.
    let mut reloads = config::watch(&config_path);
    let reload_tx = tx.clone();
    tokio::spawn(async move {
        while reloads.recv().await.is_some() {
            if reload_tx.send(Message::ConfigReloaded).await.is_err() {
                break;
            }
        }
    });

    // Ctrl-C → graceful shutdown.
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(Message::Shutdown).await;
        }
    });

    // Demo stimulus: rotate the simulated device to landscape after a beat.
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(2)).await;
        device.rotate(SafeAreaInsets::new(0.0, 47.0, 21.0, 47.0));
    });

    while let Some(message) = rx.recv().await {
        match message {
            Message::InsetsChanged(insets) => {
                info!(
                    top = insets.top,
                    left = insets.left,
                    bottom = insets.bottom,
                    right = insets.right,
                    "safe area changed"
                );
            }
            Message::ConfigReloaded => {
                let cfg = config::load(&config_path)?;
                bar.apply(&Appearance::from_config(&cfg.appearance)).await?;
                info!("appearance re-applied from config");
            }
            Message::Shutdown => break,
        }
    }

    info!("statusbar shutting down");
    Ok(())
}
