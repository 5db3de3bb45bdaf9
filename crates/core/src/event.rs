use crate::state::SafeAreaInsets;

/// All messages (events) that can flow through the host event bus.
///
/// Sources:
/// - Safe-area subscription  → `InsetsChanged`
/// - Config watcher task     → `ConfigReloaded`
/// - Host shutdown signal    → `Shutdown`
#[derive(Debug, Clone)]
pub enum Message {
    /// The OS reported new safe-area geometry (rotation, cutout change).
    InsetsChanged(SafeAreaInsets),
    /// Config file changed on disk — triggers a live appearance reload.
    ConfigReloaded,
    /// Graceful shutdown requested.
    Shutdown,
}
