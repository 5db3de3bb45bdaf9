pub mod simulated;
pub mod ui;

pub use simulated::{DeviceState, SimulatedDevice, SimulatedWindow};
pub use ui::{spawn_ui, UiHandle};

use statusbar_color::Color;
use statusbar_core::{Result, SafeAreaInsets, Style};

/// Callback invoked on the UI thread whenever the OS reports new safe-area
/// geometry (rotation, cutout or keyboard changes).
pub type InsetsListener = Box<dyn FnMut(SafeAreaInsets) + Send>;

/// The host window's system-bar surfaces, as one platform adapter per target.
///
/// Every method must be invoked on the UI thread; [`UiHandle`] is the only
/// sanctioned way to reach an implementation. The trait is deliberately
/// state-thin: implementations proxy OS-owned state and cache nothing.
pub trait NativeWindow: Send {
    /// Fill the status bar background. A window in overlay mode keeps the
    /// requested color and re-applies it when overlay mode ends.
    fn set_status_bar_color(&mut self, color: Color);

    /// Fill the navigation bar background, where the platform has one.
    fn set_navigation_bar_color(&mut self, color: Color) -> Result<()>;

    /// Set the foreground content style. Platforms without the requested
    /// style treat this as a no-op.
    fn set_style(&mut self, style: Style);

    /// Show or hide the status bar. Idempotent.
    fn set_visible(&mut self, visible: bool);

    /// Enable or disable edge-to-edge overlay mode: when overlaying, content
    /// extends under system UI and the status bar background is transparent.
    fn set_overlays_content(&mut self, overlays: bool);

    /// Currently drawn status bar background.
    fn status_bar_color(&self) -> Color;

    fn style(&self) -> Style;

    fn is_visible(&self) -> bool;

    fn overlays_content(&self) -> bool;

    /// Current safe-area geometry for the active window.
    fn safe_area_insets(&self) -> SafeAreaInsets;

    /// Install (or with `None`, remove) the single geometry-change listener.
    fn set_insets_listener(&mut self, listener: Option<InsetsListener>);
}
