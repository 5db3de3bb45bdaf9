pub mod subscription;

pub use subscription::InsetsSubscription;

use statusbar_color::{Appearance, Color, NamedColor};
use statusbar_core::{BarState, Result, SafeAreaInsets, StatusBarError, Style};
use statusbar_platform::UiHandle;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

type Subscribers = Arc<Mutex<Vec<mpsc::UnboundedSender<SafeAreaInsets>>>>;

/// The status bar controller: one method per operation, each a single native
/// window call marshalled onto the UI thread.
///
/// The controller caches nothing — the OS window owns all status-bar state.
/// The only pieces of component-owned state are the attach flag behind
/// [`ready`](Self::ready) and the safe-area subscriber list.
#[derive(Clone)]
pub struct StatusBar {
    ui: UiHandle,
    attached: Arc<AtomicBool>,
    listener_installed: Arc<AtomicBool>,
    subscribers: Subscribers,
}

impl StatusBar {
    pub fn new(ui: UiHandle) -> Self {
        Self {
            ui,
            attached: Arc::new(AtomicBool::new(false)),
            listener_installed: Arc::new(AtomicBool::new(false)),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Attach to the active window and report its current visibility/style.
    ///
    /// Must be called once before any other operation; until then every
    /// operation fails with [`StatusBarError::NotReady`].
    pub async fn ready(&self) -> Result<BarState> {
        let state = self
            .ui
            .run(|w| BarState {
                visible: w.is_visible(),
                style: w.style(),
            })
            .await?;
        self.attached.store(true, Ordering::SeqCst);
        info!(visible = state.visible, style = %state.style, "status bar controller ready");
        Ok(state)
    }

    /// Set the foreground content style.
    pub async fn set_style(&self, style: Style) -> Result<()> {
        self.ensure_ready()?;
        self.ui.run(move |w| w.set_style(style)).await
    }

    pub async fn style_default(&self) -> Result<()> {
        self.set_style(Style::Default).await
    }

    pub async fn style_light_content(&self) -> Result<()> {
        self.set_style(Style::LightContent).await
    }

    /// Fill the status bar background with a named platform color.
    pub async fn background_color_by_name(&self, name: &str) -> Result<()> {
        self.ensure_ready()?;
        let color = NamedColor::resolve(name)?.color();
        self.apply_background(color).await
    }

    /// Parse `hex` and fill the status bar background with it. A malformed
    /// string fails before the window is touched, so the current background
    /// is never disturbed.
    pub async fn background_color_by_hex(&self, hex: &str) -> Result<()> {
        self.ensure_ready()?;
        let color = Color::from_hex(hex)?;
        self.apply_background(color).await
    }

    async fn apply_background(&self, color: Color) -> Result<()> {
        // Foreground follows background luminance so bar content stays
        // legible, whatever color the caller picked.
        let style = if color.prefers_light_content() {
            Style::LightContent
        } else {
            Style::Default
        };
        debug!(color = %color.to_hex(), style = %style, "applying status bar background");
        self.ui
            .run(move |w| {
                w.set_status_bar_color(color);
                w.set_style(style);
            })
            .await
    }

    /// Fill the navigation bar background, where the platform has one.
    pub async fn navigation_background_color_by_hex(&self, hex: &str) -> Result<()> {
        self.ensure_ready()?;
        let color = Color::from_hex(hex)?;
        self.ui
            .run(move |w| w.set_navigation_bar_color(color))
            .await?
    }

    /// Enable or disable edge-to-edge overlay mode.
    pub async fn overlays_content(&self, overlays: bool) -> Result<()> {
        self.ensure_ready()?;
        self.ui.run(move |w| w.set_overlays_content(overlays)).await
    }

    /// Hide the status bar. Idempotent: hiding a hidden bar succeeds.
    pub async fn hide(&self) -> Result<()> {
        self.set_visible(false).await
    }

    /// Show the status bar. Idempotent.
    pub async fn show(&self) -> Result<()> {
        self.set_visible(true).await
    }

    async fn set_visible(&self, visible: bool) -> Result<()> {
        self.ensure_ready()?;
        self.ui.run(move |w| w.set_visible(visible)).await
    }

    /// Read the current safe-area insets for the active window.
    pub async fn safe_area_insets(&self) -> Result<SafeAreaInsets> {
        self.ensure_ready()?;
        self.ui.run(|w| w.safe_area_insets()).await
    }

    /// Register a standing safe-area observer.
    ///
    /// The window carries a single geometry-change listener; the controller
    /// installs it on first use and fans events out to every live
    /// subscription, preserving OS delivery order and never coalescing.
    pub async fn subscribe_safe_area_insets(&self) -> Result<InsetsSubscription> {
        self.ensure_ready()?;

        if !self.listener_installed.swap(true, Ordering::SeqCst) {
            let subscribers = Arc::clone(&self.subscribers);
            let installed = self
                .ui
                .run(move |w| {
                    w.set_insets_listener(Some(Box::new(move |insets| {
                        lock(&subscribers).retain(|tx| tx.send(insets).is_ok());
                    })));
                })
                .await;
            if let Err(e) = installed {
                // Un-record the install so a later subscriber retries it
                // instead of receiving a channel that can never fire.
                self.listener_installed.store(false, Ordering::SeqCst);
                return Err(e);
            }
        }

        let (tx, rx) = mpsc::unbounded_channel();
        lock(&self.subscribers).push(tx);
        Ok(InsetsSubscription::new(rx))
    }

    /// Apply a whole appearance in one UI-thread pass, as done on attach and
    /// on config reload. A missing navigation bar is logged, not fatal:
    /// config-driven appearance is best-effort per surface.
    pub async fn apply(&self, appearance: &Appearance) -> Result<()> {
        self.ensure_ready()?;
        let a = *appearance;
        self.ui
            .run(move |w| {
                w.set_status_bar_color(a.background);
                if let Err(e) = w.set_navigation_bar_color(a.navigation_background) {
                    warn!("navigation bar color not applied: {e}");
                }
                w.set_style(a.style);
                w.set_overlays_content(a.overlays_content);
                w.set_visible(a.visible);
            })
            .await
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.attached.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StatusBarError::NotReady)
        }
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use statusbar_platform::{spawn_ui, SimulatedDevice, SimulatedWindow};

    fn attachable() -> (StatusBar, SimulatedDevice) {
        let window = SimulatedWindow::new();
        let device = window.device();
        (StatusBar::new(spawn_ui(window)), device)
    }

    async fn ready_bar() -> (StatusBar, SimulatedDevice) {
        let (bar, device) = attachable();
        bar.ready().await.unwrap();
        (bar, device)
    }

    #[tokio::test]
    async fn operations_fail_before_ready() {
        let (bar, _device) = attachable();
        for err in [
            bar.hide().await.unwrap_err(),
            bar.style_default().await.unwrap_err(),
            bar.background_color_by_hex("#ffffff").await.unwrap_err(),
            bar.safe_area_insets().await.unwrap_err(),
        ] {
            assert_eq!(err.kind(), "not-ready");
        }
    }

    #[tokio::test]
    async fn ready_reports_current_state() {
        let (bar, _device) = attachable();
        let state = bar.ready().await.unwrap();
        assert!(state.visible);
        assert_eq!(state.style, Style::Default);
    }

    #[tokio::test]
    async fn hide_is_idempotent_and_visible_through_ready() {
        let (bar, device) = ready_bar().await;

        bar.hide().await.unwrap();
        bar.hide().await.unwrap();
        assert!(!device.snapshot().visible);
        assert!(!bar.ready().await.unwrap().visible);

        bar.show().await.unwrap();
        bar.show().await.unwrap();
        assert!(device.snapshot().visible);
        assert!(bar.ready().await.unwrap().visible);
    }

    #[tokio::test]
    async fn hex_background_sets_pure_red_and_light_content() {
        let (bar, device) = ready_bar().await;
        bar.background_color_by_hex("#ff0000").await.unwrap();

        let state = device.snapshot();
        assert_eq!(state.status_bar_color, Color::RED);
        // Red is dark enough that the foreground flips to light content.
        assert_eq!(state.style, Style::LightContent);
    }

    #[tokio::test]
    async fn malformed_hex_fails_without_touching_the_background() {
        let (bar, device) = ready_bar().await;
        bar.background_color_by_hex("#1e1e2e").await.unwrap();

        let err = bar.background_color_by_hex("zzz").await.unwrap_err();
        assert_eq!(err.kind(), "invalid-color-string");
        assert_eq!(
            device.snapshot().status_bar_color,
            Color::from_hex("#1e1e2e").unwrap()
        );
    }

    #[tokio::test]
    async fn named_background_resolves_platform_colors() {
        let (bar, device) = ready_bar().await;
        bar.background_color_by_name("blue").await.unwrap();
        assert_eq!(device.snapshot().status_bar_color.to_hex(), "#0000ff");

        let err = bar.background_color_by_name("chartreuse").await.unwrap_err();
        assert_eq!(err.kind(), "invalid-color-string");
    }

    #[tokio::test]
    async fn insets_are_non_negative() {
        let (bar, _device) = ready_bar().await;
        let insets = bar.safe_area_insets().await.unwrap();
        for edge in [insets.top, insets.left, insets.bottom, insets.right] {
            assert!(edge >= 0.0);
        }
    }

    #[tokio::test]
    async fn two_geometry_changes_yield_two_notifications_in_order() {
        let (bar, device) = ready_bar().await;
        let mut sub = bar.subscribe_safe_area_insets().await.unwrap();

        let landscape = SafeAreaInsets::new(0.0, 47.0, 21.0, 47.0);
        let portrait = SafeAreaInsets::new(47.0, 0.0, 34.0, 0.0);
        device.rotate(landscape);
        device.rotate(portrait);

        assert_eq!(sub.recv().await, Some(landscape));
        assert_eq!(sub.recv().await, Some(portrait));
        assert_eq!(sub.try_recv(), None);
    }

    #[tokio::test]
    async fn dropped_subscription_does_not_starve_the_rest() {
        let (bar, device) = ready_bar().await;
        let dropped = bar.subscribe_safe_area_insets().await.unwrap();
        let mut kept = bar.subscribe_safe_area_insets().await.unwrap();
        drop(dropped);

        let landscape = SafeAreaInsets::new(0.0, 47.0, 21.0, 47.0);
        device.rotate(landscape);
        assert_eq!(kept.recv().await, Some(landscape));
    }

    #[tokio::test]
    async fn failed_listener_install_is_not_recorded_as_installed() {
        let window = SimulatedWindow::new();
        let ui = spawn_ui(window);
        let bar = StatusBar::new(ui.clone());
        bar.ready().await.unwrap();

        // Tear the UI thread down underneath the controller.
        ui.post(|_| panic!("window torn down"));

        let err = bar.subscribe_safe_area_insets().await.unwrap_err();
        assert_eq!(err.kind(), "ui-thread");

        // A retry must surface the error again rather than hand out a
        // subscription whose listener was never installed.
        let err = bar.subscribe_safe_area_insets().await.unwrap_err();
        assert_eq!(err.kind(), "ui-thread");
    }

    #[tokio::test]
    async fn navigation_color_unsupported_without_a_navigation_bar() {
        let window = SimulatedWindow::new().without_navigation_bar();
        let bar = StatusBar::new(spawn_ui(window));
        bar.ready().await.unwrap();

        let err = bar
            .navigation_background_color_by_hex("#000000")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "unsupported-operation");
    }

    #[tokio::test]
    async fn apply_sets_the_whole_appearance() {
        use statusbar_config::AppearanceConfig;

        let (bar, device) = ready_bar().await;
        let appearance = Appearance::from_config(&AppearanceConfig {
            style: "lightcontent".into(),
            background: "#1e1e2e".into(),
            navigation_background: "#000000".into(),
            overlays_content: false,
            visible: false,
        });
        bar.apply(&appearance).await.unwrap();

        let state = device.snapshot();
        assert_eq!(state.status_bar_color.to_hex(), "#1e1e2e");
        assert_eq!(state.navigation_bar_color, Color::BLACK);
        assert_eq!(state.style, Style::LightContent);
        assert!(!state.visible);
    }
}
