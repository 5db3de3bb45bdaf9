/// Wire action names spoken by hosts that still use the dispatch protocol.
///
/// Names match the historical plugin verbatim, including the `_ready`
/// underscore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StyleDefault,
    StyleLightContent,
    BackgroundColorByName,
    BackgroundColorByHexString,
    NavigationBackgroundColorByHexString,
    OverlaysWebView,
    Hide,
    Show,
    Ready,
    GetSafeAreaInsets,
    SubscribeSafeAreaInsets,
}

impl Action {
    /// Parse a wire action name. Names are case-sensitive, as on the wire.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "styleDefault" => Some(Self::StyleDefault),
            "styleLightContent" => Some(Self::StyleLightContent),
            "backgroundColorByName" => Some(Self::BackgroundColorByName),
            "backgroundColorByHexString" => Some(Self::BackgroundColorByHexString),
            "navigationBackgroundColorByHexString" => {
                Some(Self::NavigationBackgroundColorByHexString)
            }
            "overlaysWebView" => Some(Self::OverlaysWebView),
            "hide" => Some(Self::Hide),
            "show" => Some(Self::Show),
            "_ready" => Some(Self::Ready),
            "getSafeAreaInsets" => Some(Self::GetSafeAreaInsets),
            "subscribeSafeAreaInsets" => Some(Self::SubscribeSafeAreaInsets),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::StyleDefault => "styleDefault",
            Self::StyleLightContent => "styleLightContent",
            Self::BackgroundColorByName => "backgroundColorByName",
            Self::BackgroundColorByHexString => "backgroundColorByHexString",
            Self::NavigationBackgroundColorByHexString => "navigationBackgroundColorByHexString",
            Self::OverlaysWebView => "overlaysWebView",
            Self::Hide => "hide",
            Self::Show => "show",
            Self::Ready => "_ready",
            Self::GetSafeAreaInsets => "getSafeAreaInsets",
            Self::SubscribeSafeAreaInsets => "subscribeSafeAreaInsets",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_round_trips_through_its_name() {
        for action in [
            Action::StyleDefault,
            Action::StyleLightContent,
            Action::BackgroundColorByName,
            Action::BackgroundColorByHexString,
            Action::NavigationBackgroundColorByHexString,
            Action::OverlaysWebView,
            Action::Hide,
            Action::Show,
            Action::Ready,
            Action::GetSafeAreaInsets,
            Action::SubscribeSafeAreaInsets,
        ] {
            assert_eq!(Action::parse(action.name()), Some(action));
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!(Action::parse("Hide"), None);
        assert_eq!(Action::parse("ready"), None);
    }
}
