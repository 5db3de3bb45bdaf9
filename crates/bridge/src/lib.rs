pub mod actions;

pub use actions::Action;

use serde_json::{json, Value};
use statusbar_controller::{InsetsSubscription, StatusBar};
use statusbar_core::{Result, StatusBarError};
use tracing::debug;

/// Outcome of a dispatched action.
#[derive(Debug)]
pub enum Response {
    /// Success with no payload.
    Empty,
    /// Success with a single JSON payload.
    Payload(Value),
    /// `subscribeSafeAreaInsets`: inset updates keep flowing until the
    /// subscription is dropped.
    Updates(InsetsSubscription),
}

/// Route a wire request (action name + ordered JSON arguments) onto the
/// typed controller surface.
///
/// Hosts that call the controller directly never need this; it exists for
/// runtimes that still speak the generic dispatch protocol.
pub async fn dispatch(bar: &StatusBar, action: &str, args: &[Value]) -> Result<Response> {
    let Some(action) = Action::parse(action) else {
        return Err(StatusBarError::Unsupported(format!(
            "unknown action '{action}'"
        )));
    };
    debug!(action = action.name(), "dispatching bridge action");

    match action {
        Action::StyleDefault => {
            bar.style_default().await?;
            Ok(Response::Empty)
        }
        Action::StyleLightContent => {
            bar.style_light_content().await?;
            Ok(Response::Empty)
        }
        Action::BackgroundColorByName => {
            bar.background_color_by_name(str_arg(args, 0, "color name")?)
                .await?;
            Ok(Response::Empty)
        }
        Action::BackgroundColorByHexString => {
            bar.background_color_by_hex(str_arg(args, 0, "hex string")?)
                .await?;
            Ok(Response::Empty)
        }
        Action::NavigationBackgroundColorByHexString => {
            bar.navigation_background_color_by_hex(str_arg(args, 0, "hex string")?)
                .await?;
            Ok(Response::Empty)
        }
        Action::OverlaysWebView => {
            bar.overlays_content(bool_arg(args, 0, "overlay flag")?)
                .await?;
            Ok(Response::Empty)
        }
        Action::Hide => {
            bar.hide().await?;
            Ok(Response::Empty)
        }
        Action::Show => {
            bar.show().await?;
            Ok(Response::Empty)
        }
        Action::Ready => {
            let state = bar.ready().await?;
            Ok(Response::Payload(encode(&state)?))
        }
        Action::GetSafeAreaInsets => {
            let insets = bar.safe_area_insets().await?;
            Ok(Response::Payload(encode(&insets)?))
        }
        Action::SubscribeSafeAreaInsets => {
            Ok(Response::Updates(bar.subscribe_safe_area_insets().await?))
        }
    }
}

/// Failure payload mirrored back over the bridge: `{kind, message}` where
/// `kind` is the stable error-taxonomy string.
#[must_use]
pub fn failure_payload(err: &StatusBarError) -> Value {
    json!({ "kind": err.kind(), "message": err.to_string() })
}

/// Encode an inset update for a standing subscription.
pub fn insets_payload(insets: &statusbar_core::SafeAreaInsets) -> Result<Value> {
    encode(insets)
}

fn encode<T: serde::Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| StatusBarError::Bridge(format!("encode payload: {e}")))
}

fn str_arg<'a>(args: &'a [Value], index: usize, what: &str) -> Result<&'a str> {
    args.get(index).and_then(Value::as_str).ok_or_else(|| {
        StatusBarError::InvalidArgument(format!("argument {index} ({what}) must be a string"))
    })
}

fn bool_arg(args: &[Value], index: usize, what: &str) -> Result<bool> {
    args.get(index).and_then(Value::as_bool).ok_or_else(|| {
        StatusBarError::InvalidArgument(format!("argument {index} ({what}) must be a boolean"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use statusbar_core::SafeAreaInsets;
    use statusbar_platform::{spawn_ui, SimulatedDevice, SimulatedWindow};

    async fn ready_bar() -> (StatusBar, SimulatedDevice) {
        let window = SimulatedWindow::new();
        let device = window.device();
        let bar = StatusBar::new(spawn_ui(window));
        bar.ready().await.unwrap();
        (bar, device)
    }

    #[tokio::test]
    async fn unknown_action_is_unsupported() {
        let (bar, _device) = ready_bar().await;
        let err = dispatch(&bar, "explode", &[]).await.unwrap_err();
        assert_eq!(err.kind(), "unsupported-operation");
    }

    #[tokio::test]
    async fn ready_action_returns_visibility_and_style() {
        let (bar, _device) = ready_bar().await;
        dispatch(&bar, "hide", &[]).await.unwrap();

        let Response::Payload(payload) = dispatch(&bar, "_ready", &[]).await.unwrap() else {
            panic!("expected a payload");
        };
        assert_eq!(payload, json!({"visible": false, "style": "default"}));
    }

    #[tokio::test]
    async fn hex_background_action_succeeds_with_no_payload() {
        let (bar, device) = ready_bar().await;
        let response = dispatch(&bar, "backgroundColorByHexString", &[json!("#ff0000")])
            .await
            .unwrap();
        assert!(matches!(response, Response::Empty));
        assert_eq!(device.snapshot().status_bar_color.to_hex(), "#ff0000");
    }

    #[tokio::test]
    async fn malformed_hex_fails_with_the_taxonomy_kind() {
        let (bar, _device) = ready_bar().await;
        let err = dispatch(&bar, "backgroundColorByHexString", &[json!("zzz")])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid-color-string");

        let payload = failure_payload(&err);
        assert_eq!(payload["kind"], "invalid-color-string");
        assert!(payload["message"].as_str().unwrap().contains("zzz"));
    }

    #[tokio::test]
    async fn missing_or_mistyped_arguments_are_rejected() {
        let (bar, _device) = ready_bar().await;

        let err = dispatch(&bar, "backgroundColorByHexString", &[])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid-argument");

        let err = dispatch(&bar, "overlaysWebView", &[json!("yes")])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "invalid-argument");
    }

    #[tokio::test]
    async fn get_safe_area_insets_returns_four_non_negative_numbers() {
        let (bar, _device) = ready_bar().await;
        let Response::Payload(payload) = dispatch(&bar, "getSafeAreaInsets", &[]).await.unwrap()
        else {
            panic!("expected a payload");
        };
        for edge in ["top", "left", "bottom", "right"] {
            assert!(payload[edge].as_f64().unwrap() >= 0.0);
        }
    }

    #[tokio::test]
    async fn subscribe_action_streams_updates_until_dropped() {
        let (bar, device) = ready_bar().await;
        let Response::Updates(mut sub) =
            dispatch(&bar, "subscribeSafeAreaInsets", &[]).await.unwrap()
        else {
            panic!("expected a subscription");
        };

        let landscape = SafeAreaInsets::new(0.0, 47.0, 21.0, 47.0);
        device.rotate(landscape);
        let update = sub.recv().await.unwrap();
        assert_eq!(
            insets_payload(&update).unwrap(),
            json!({"top": 0.0, "left": 47.0, "bottom": 21.0, "right": 47.0})
        );
    }
}
