use crate::{InsetsListener, NativeWindow};
use statusbar_color::Color;
use statusbar_core::{Result, SafeAreaInsets, StatusBarError, Style};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Observable snapshot of the simulated device's system-bar state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceState {
    /// Background actually drawn behind the status bar (transparent while
    /// overlay mode is on).
    pub status_bar_color: Color,
    pub navigation_bar_color: Color,
    pub style: Style,
    pub visible: bool,
    pub overlays_content: bool,
    pub insets: SafeAreaInsets,
}

struct Inner {
    color: Color,
    navigation_color: Color,
    style: Style,
    visible: bool,
    overlays: bool,
    insets: SafeAreaInsets,
    has_navigation_bar: bool,
    listener: Option<InsetsListener>,
}

/// In-memory [`NativeWindow`] used by tests and the demo host.
///
/// Models a notched phone in portrait: 47pt status/cutout inset on top,
/// 34pt home-indicator inset on the bottom.
pub struct SimulatedWindow {
    inner: Arc<Mutex<Inner>>,
}

impl SimulatedWindow {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                color: Color::WHITE,
                navigation_color: Color::WHITE,
                style: Style::Default,
                visible: true,
                overlays: false,
                insets: SafeAreaInsets::new(47.0, 0.0, 34.0, 0.0),
                has_navigation_bar: true,
                listener: None,
            })),
        }
    }

    /// Simulate a platform whose window has no navigation bar surface.
    #[must_use]
    pub fn without_navigation_bar(self) -> Self {
        lock(&self.inner).has_navigation_bar = false;
        self
    }

    #[must_use]
    pub fn with_insets(self, insets: SafeAreaInsets) -> Self {
        lock(&self.inner).insets = insets;
        self
    }

    /// Out-of-band handle for driving the device from a test or demo while
    /// the window itself lives on the UI thread.
    #[must_use]
    pub fn device(&self) -> SimulatedDevice {
        SimulatedDevice {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SimulatedWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeWindow for SimulatedWindow {
    fn set_status_bar_color(&mut self, color: Color) {
        debug!("status bar color ← {}", color.to_hex());
        lock(&self.inner).color = color;
    }

    fn set_navigation_bar_color(&mut self, color: Color) -> Result<()> {
        let mut inner = lock(&self.inner);
        if !inner.has_navigation_bar {
            return Err(StatusBarError::Unsupported(
                "window has no navigation bar surface".into(),
            ));
        }
        debug!("navigation bar color ← {}", color.to_hex());
        inner.navigation_color = color;
        Ok(())
    }

    fn set_style(&mut self, style: Style) {
        lock(&self.inner).style = style;
    }

    fn set_visible(&mut self, visible: bool) {
        lock(&self.inner).visible = visible;
    }

    fn set_overlays_content(&mut self, overlays: bool) {
        lock(&self.inner).overlays = overlays;
    }

    fn status_bar_color(&self) -> Color {
        let inner = lock(&self.inner);
        if inner.overlays {
            Color::TRANSPARENT
        } else {
            inner.color
        }
    }

    fn style(&self) -> Style {
        lock(&self.inner).style
    }

    fn is_visible(&self) -> bool {
        lock(&self.inner).visible
    }

    fn overlays_content(&self) -> bool {
        lock(&self.inner).overlays
    }

    fn safe_area_insets(&self) -> SafeAreaInsets {
        lock(&self.inner).insets
    }

    fn set_insets_listener(&mut self, listener: Option<InsetsListener>) {
        lock(&self.inner).listener = listener;
    }
}

/// Cloneable driver for a [`SimulatedWindow`], usable from any thread.
#[derive(Clone)]
pub struct SimulatedDevice {
    inner: Arc<Mutex<Inner>>,
}

impl SimulatedDevice {
    /// Simulate a geometry change (rotation, cutout move): record the new
    /// insets and fire the registered listener, as the OS would.
    pub fn rotate(&self, insets: SafeAreaInsets) {
        let mut listener = {
            let mut inner = lock(&self.inner);
            inner.insets = insets;
            inner.listener.take()
        };

        // Invoke outside the lock so a listener may touch the window.
        if let Some(l) = listener.as_mut() {
            l(insets);
        }

        if let Some(l) = listener {
            let mut inner = lock(&self.inner);
            // A listener swapped in during the callback wins.
            if inner.listener.is_none() {
                inner.listener = Some(l);
            }
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> DeviceState {
        let inner = lock(&self.inner);
        DeviceState {
            status_bar_color: if inner.overlays {
                Color::TRANSPARENT
            } else {
                inner.color
            },
            navigation_bar_color: inner.navigation_color,
            style: inner.style,
            visible: inner.visible,
            overlays_content: inner.overlays,
            insets: inner.insets,
        }
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
