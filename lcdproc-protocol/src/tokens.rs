//! Fixed wire tokens: widget kinds, icon names and scroll directions

use core::fmt;

/// Error for a token that is not part of the protocol vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TokenError {
    /// Not one of the eight widget kind tokens
    UnknownKind,
    /// Not one of the daemon's icon names
    UnknownIcon,
    /// Not `h` or `v`
    UnknownDirection,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::UnknownKind => f.write_str("unknown widget kind"),
            TokenError::UnknownIcon => f.write_str("unknown icon name"),
            TokenError::UnknownDirection => f.write_str("unknown direction (expected h or v)"),
        }
    }
}

impl core::error::Error for TokenError {}

/// Widget kinds understood by `widget_add`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WidgetKind {
    /// Text at a position (`string`)
    Text,
    /// Screen title bar
    Title,
    /// Horizontal bar graph
    HBar,
    /// Vertical bar graph
    VBar,
    /// Single icon glyph
    Icon,
    /// Scrolling text region
    Scroller,
    /// Container region for other widgets
    Frame,
    /// Big numeric digit (`num`)
    Number,
}

impl WidgetKind {
    /// All kinds, in protocol documentation order
    pub const ALL: [WidgetKind; 8] = [
        WidgetKind::Text,
        WidgetKind::Title,
        WidgetKind::HBar,
        WidgetKind::VBar,
        WidgetKind::Icon,
        WidgetKind::Scroller,
        WidgetKind::Frame,
        WidgetKind::Number,
    ];

    /// Wire token used in `widget_add`
    pub const fn as_token(self) -> &'static str {
        match self {
            WidgetKind::Text => "string",
            WidgetKind::Title => "title",
            WidgetKind::HBar => "hbar",
            WidgetKind::VBar => "vbar",
            WidgetKind::Icon => "icon",
            WidgetKind::Scroller => "scroller",
            WidgetKind::Frame => "frame",
            WidgetKind::Number => "num",
        }
    }

    /// Parse a kind from its wire token
    pub fn from_token(token: &str) -> Result<Self, TokenError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_token() == token)
            .ok_or(TokenError::UnknownKind)
    }

    /// Whether a widget of this kind may be placed inside a frame with `-in`
    ///
    /// Frames cannot nest through `-in`.
    pub const fn accepts_frame(self) -> bool {
        !matches!(self, WidgetKind::Frame)
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Scroll direction for scrollers and frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// `h`
    #[default]
    Horizontal,
    /// `v`
    Vertical,
}

impl Direction {
    /// Wire token (`h` or `v`)
    pub const fn as_token(self) -> &'static str {
        match self {
            Direction::Horizontal => "h",
            Direction::Vertical => "v",
        }
    }

    /// Parse a direction from its wire token
    pub fn from_token(token: &str) -> Result<Self, TokenError> {
        match token {
            "h" => Ok(Direction::Horizontal),
            "v" => Ok(Direction::Vertical),
            _ => Err(TokenError::UnknownDirection),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Icon names accepted by the `icon` widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IconName {
    BlockFilled,
    HeartOpen,
    HeartFilled,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    CheckboxOff,
    CheckboxOn,
    CheckboxGray,
    SelectorAtLeft,
    SelectorAtRight,
    Ellipsis,
    Stop,
    Pause,
    Play,
    /// Play in reverse
    PlayR,
    /// Fast forward
    Ff,
    /// Fast rewind
    Fr,
    Next,
    Prev,
    /// Record
    Rec,
}

impl IconName {
    /// Every icon the daemon knows about
    pub const ALL: [IconName; 22] = [
        IconName::BlockFilled,
        IconName::HeartOpen,
        IconName::HeartFilled,
        IconName::ArrowUp,
        IconName::ArrowDown,
        IconName::ArrowLeft,
        IconName::ArrowRight,
        IconName::CheckboxOff,
        IconName::CheckboxOn,
        IconName::CheckboxGray,
        IconName::SelectorAtLeft,
        IconName::SelectorAtRight,
        IconName::Ellipsis,
        IconName::Stop,
        IconName::Pause,
        IconName::Play,
        IconName::PlayR,
        IconName::Ff,
        IconName::Fr,
        IconName::Next,
        IconName::Prev,
        IconName::Rec,
    ];

    /// Wire token, e.g. `HEART_FILLED`
    pub const fn as_token(self) -> &'static str {
        match self {
            IconName::BlockFilled => "BLOCK_FILLED",
            IconName::HeartOpen => "HEART_OPEN",
            IconName::HeartFilled => "HEART_FILLED",
            IconName::ArrowUp => "ARROW_UP",
            IconName::ArrowDown => "ARROW_DOWN",
            IconName::ArrowLeft => "ARROW_LEFT",
            IconName::ArrowRight => "ARROW_RIGHT",
            IconName::CheckboxOff => "CHECKBOX_OFF",
            IconName::CheckboxOn => "CHECKBOX_ON",
            IconName::CheckboxGray => "CHECKBOX_GRAY",
            IconName::SelectorAtLeft => "SELECTOR_AT_LEFT",
            IconName::SelectorAtRight => "SELECTOR_AT_RIGHT",
            IconName::Ellipsis => "ELLIPSIS",
            IconName::Stop => "STOP",
            IconName::Pause => "PAUSE",
            IconName::Play => "PLAY",
            IconName::PlayR => "PLAYR",
            IconName::Ff => "FF",
            IconName::Fr => "FR",
            IconName::Next => "NEXT",
            IconName::Prev => "PREV",
            IconName::Rec => "REC",
        }
    }

    /// Parse an icon from its wire token (case-sensitive)
    pub fn from_token(token: &str) -> Result<Self, TokenError> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_token() == token)
            .ok_or(TokenError::UnknownIcon)
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tokens() {
        assert_eq!(WidgetKind::Text.as_token(), "string");
        assert_eq!(WidgetKind::Number.as_token(), "num");
        assert_eq!(WidgetKind::from_token("hbar"), Ok(WidgetKind::HBar));
        assert_eq!(WidgetKind::from_token("text"), Err(TokenError::UnknownKind));
    }

    #[test]
    fn test_only_frame_rejects_containment() {
        for kind in WidgetKind::ALL {
            assert_eq!(kind.accepts_frame(), kind != WidgetKind::Frame);
        }
    }

    #[test]
    fn test_direction_tokens() {
        assert_eq!(Direction::from_token("h"), Ok(Direction::Horizontal));
        assert_eq!(Direction::from_token("v"), Ok(Direction::Vertical));
        assert_eq!(Direction::from_token("H"), Err(TokenError::UnknownDirection));
        assert_eq!(Direction::default(), Direction::Horizontal);
    }

    #[test]
    fn test_icon_tokens_are_distinct() {
        for (i, a) in IconName::ALL.iter().enumerate() {
            for b in &IconName::ALL[i + 1..] {
                assert_ne!(a.as_token(), b.as_token());
            }
            assert_eq!(IconName::from_token(a.as_token()), Ok(*a));
        }
    }

    #[test]
    fn test_unknown_icon() {
        assert_eq!(IconName::from_token("heart_filled"), Err(TokenError::UnknownIcon));
        assert_eq!(IconName::from_token(""), Err(TokenError::UnknownIcon));
    }
}
