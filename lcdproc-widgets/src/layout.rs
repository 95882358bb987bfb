//! Declarative widget layouts
//!
//! A layout describes the frames and widgets of one screen in TOML:
//!
//! ```toml
//! [[frame]]
//! ref = "F1"
//! left = 1
//! top = 2
//! right = 20
//! bottom = 4
//! width = 20
//! height = 8
//! direction = "v"
//! speed = 2
//!
//! [[widget]]
//! kind = "string"
//! ref = "W1"
//! frame = "F1"
//! x = 1
//! y = 1
//! text = "Hello"
//! ```
//!
//! Widget entries use the wire kind token as their `kind` tag and the wire
//! tokens for directions and icons. Frames are built first, in document
//! order, then widgets. Nothing is sent unless the whole layout validates.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use lcdproc_protocol::{Direction, IconName, TokenError};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::error::LayoutError;
use crate::screen::Screen;
use crate::widget::{
    AnyWidget, BarWidget, FrameRef, FrameWidget, IconWidget, NumberWidget, ScrollRegion,
    ScrollerWidget, TextWidget, TitleWidget,
};

fn default_direction() -> String {
    Direction::default().as_token().to_owned()
}

/// Layout of one screen
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    /// `[[frame]]` entries
    #[serde(default, rename = "frame")]
    pub frames: Vec<FrameEntry>,
    /// `[[widget]]` entries
    #[serde(default, rename = "widget")]
    pub widgets: Vec<WidgetEntry>,
}

/// A `[[frame]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameEntry {
    #[serde(rename = "ref")]
    pub widget_ref: String,
    pub left: u16,
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub width: u16,
    pub height: u16,
    /// `h` or `v`, defaults to `h`
    #[serde(default = "default_direction")]
    pub direction: String,
    pub speed: u16,
}

/// A `[[widget]]` entry
///
/// `ref` and `frame` are common to every kind; the remaining keys must all
/// belong to the kind named by `kind`.
#[derive(Debug, Clone)]
pub struct WidgetEntry {
    pub widget_ref: String,
    /// Ref of a `[[frame]]` entry to place the widget in
    pub frame: Option<String>,
    pub body: WidgetBody,
}

impl<'de> Deserialize<'de> for WidgetEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut table = toml::Table::deserialize(deserializer)?;

        let widget_ref = table
            .remove("ref")
            .ok_or_else(|| D::Error::missing_field("ref"))?
            .try_into::<String>()
            .map_err(D::Error::custom)?;
        let frame = table
            .remove("frame")
            .map(|value| value.try_into::<String>())
            .transpose()
            .map_err(D::Error::custom)?;
        let body = toml::Value::Table(table)
            .try_into::<WidgetBody>()
            .map_err(D::Error::custom)?;

        Ok(Self {
            widget_ref,
            frame,
            body,
        })
    }
}

/// Kind-specific fields of a `[[widget]]` entry, tagged by `kind`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", deny_unknown_fields)]
pub enum WidgetBody {
    #[serde(rename = "string")]
    Text { x: u16, y: u16, text: String },
    #[serde(rename = "title")]
    Title { text: String },
    #[serde(rename = "hbar")]
    HBar { x: u16, y: u16, length: u16 },
    #[serde(rename = "vbar")]
    VBar { x: u16, y: u16, length: u16 },
    #[serde(rename = "icon")]
    Icon { x: u16, y: u16, icon: String },
    #[serde(rename = "scroller")]
    Scroller {
        left: u16,
        top: u16,
        right: u16,
        bottom: u16,
        #[serde(default = "default_direction")]
        direction: String,
        speed: u16,
        text: String,
    },
    #[serde(rename = "num")]
    Number { x: u16, value: i32 },
}

/// Attach the offending widget ref to a token error
fn token<T>(widget: &str, parsed: Result<T, TokenError>) -> Result<T, LayoutError> {
    parsed.map_err(|source| LayoutError::InvalidEnum {
        widget: widget.to_owned(),
        source,
    })
}

impl FrameEntry {
    fn direction(&self) -> Result<Direction, LayoutError> {
        token(&self.widget_ref, Direction::from_token(&self.direction))
    }

    fn build(&self, screen: &Screen) -> Result<FrameWidget, LayoutError> {
        Ok(FrameWidget::new(
            screen,
            &self.widget_ref,
            self.left,
            self.top,
            self.right,
            self.bottom,
            self.width,
            self.height,
            self.direction()?,
            self.speed,
        ))
    }
}

impl WidgetEntry {
    /// Parse every token field without building anything
    fn check_tokens(&self) -> Result<(), LayoutError> {
        match &self.body {
            WidgetBody::Icon { icon, .. } => {
                token(&self.widget_ref, IconName::from_token(icon))?;
            }
            WidgetBody::Scroller { direction, .. } => {
                token(&self.widget_ref, Direction::from_token(direction))?;
            }
            _ => {}
        }
        Ok(())
    }

    fn build(&self, screen: &Screen, frame: Option<&FrameRef>) -> Result<AnyWidget, LayoutError> {
        let r = &self.widget_ref;
        let widget = match &self.body {
            WidgetBody::Text { x, y, text } => AnyWidget::from(match frame {
                Some(f) => TextWidget::new_in(screen, r, *x, *y, text, f)?,
                None => TextWidget::new(screen, r, *x, *y, text),
            }),
            WidgetBody::Title { text } => AnyWidget::from(match frame {
                Some(f) => TitleWidget::new_in(screen, r, text, f)?,
                None => TitleWidget::new(screen, r, text),
            }),
            WidgetBody::HBar { x, y, length } => AnyWidget::from(match frame {
                Some(f) => BarWidget::hbar_in(screen, r, *x, *y, *length, f)?,
                None => BarWidget::hbar(screen, r, *x, *y, *length),
            }),
            WidgetBody::VBar { x, y, length } => AnyWidget::from(match frame {
                Some(f) => BarWidget::vbar_in(screen, r, *x, *y, *length, f)?,
                None => BarWidget::vbar(screen, r, *x, *y, *length),
            }),
            WidgetBody::Icon { x, y, icon } => {
                let icon = token(r, IconName::from_token(icon))?;
                AnyWidget::from(match frame {
                    Some(f) => IconWidget::new_in(screen, r, *x, *y, icon, f)?,
                    None => IconWidget::new(screen, r, *x, *y, icon),
                })
            }
            WidgetBody::Scroller {
                left,
                top,
                right,
                bottom,
                direction,
                speed,
                text,
            } => {
                let region = ScrollRegion {
                    left: *left,
                    top: *top,
                    right: *right,
                    bottom: *bottom,
                    direction: token(r, Direction::from_token(direction))?,
                    speed: *speed,
                };
                AnyWidget::from(match frame {
                    Some(f) => ScrollerWidget::new_in(screen, r, region, text, f)?,
                    None => ScrollerWidget::new(screen, r, region, text),
                })
            }
            WidgetBody::Number { x, value } => AnyWidget::from(match frame {
                Some(f) => NumberWidget::new_in(screen, r, *x, *value, f)?,
                None => NumberWidget::new(screen, r, *x, *value),
            }),
        };
        Ok(widget)
    }
}

impl Layout {
    /// Parse a layout from TOML text
    pub fn from_toml(input: &str) -> Result<Self, LayoutError> {
        Ok(toml::from_str(input)?)
    }

    /// Read and parse a layout file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading layout");
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Check refs, frame references and tokens
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = HashSet::new();
        let refs = self
            .frames
            .iter()
            .map(|f| &f.widget_ref)
            .chain(self.widgets.iter().map(|w| &w.widget_ref));
        for widget_ref in refs {
            if !seen.insert(widget_ref.as_str()) {
                return Err(LayoutError::DuplicateRef(widget_ref.clone()));
            }
        }

        for frame in &self.frames {
            frame.direction()?;
        }

        for widget in &self.widgets {
            if let Some(frame) = &widget.frame {
                if !self.frames.iter().any(|f| &f.widget_ref == frame) {
                    return Err(LayoutError::InvalidReference {
                        widget: widget.widget_ref.clone(),
                        frame: frame.clone(),
                    });
                }
            }
            widget.check_tokens()?;
        }
        Ok(())
    }

    /// Validate, then create every frame and widget on `screen`
    ///
    /// Returns the widgets in creation order: frames first, then the
    /// `[[widget]]` entries.
    pub fn build(&self, screen: &Screen) -> Result<Vec<AnyWidget>, LayoutError> {
        self.validate()?;

        let mut built = Vec::with_capacity(self.frames.len() + self.widgets.len());
        let mut handles: HashMap<&str, FrameRef> = HashMap::new();

        for entry in &self.frames {
            let frame = entry.build(screen)?;
            handles.insert(entry.widget_ref.as_str(), frame.handle());
            built.push(AnyWidget::Frame(frame));
        }

        for entry in &self.widgets {
            let frame = match &entry.frame {
                Some(name) => Some(handles.get(name.as_str()).ok_or_else(|| {
                    LayoutError::InvalidReference {
                        widget: entry.widget_ref.clone(),
                        frame: name.clone(),
                    }
                })?),
                None => None,
            };
            built.push(entry.build(screen, frame)?);
        }

        tracing::info!(
            screen = screen.id(),
            frames = self.frames.len(),
            widgets = self.widgets.len(),
            "layout built"
        );
        Ok(built)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::test_util::recording_screen;
    use crate::widget::Widget;
    use lcdproc_protocol::WidgetKind;

    const PLAYER: &str = r#"
[[frame]]
ref = "F1"
left = 1
top = 2
right = 20
bottom = 4
width = 20
height = 8
direction = "v"
speed = 2

[[widget]]
kind = "title"
ref = "T"
text = "Player"

[[widget]]
kind = "string"
ref = "W1"
frame = "F1"
x = 1
y = 1
text = "Artist"

[[widget]]
kind = "icon"
ref = "I1"
x = 20
y = 1
icon = "PLAY"

[[widget]]
kind = "scroller"
ref = "SC"
left = 1
top = 4
right = 20
bottom = 4
speed = 8
text = "A very long song title"

[[widget]]
kind = "hbar"
ref = "B"
frame = "F1"
x = 1
y = 2
length = 40

[[widget]]
kind = "num"
ref = "N"
x = 3
value = -1
"#;

    #[test]
    fn test_build_player_layout() {
        let (screen, conn) = recording_screen();
        let layout = Layout::from_toml(PLAYER).unwrap();
        let widgets = layout.build(&screen).unwrap();

        assert_eq!(widgets.len(), 7);
        assert_eq!(widgets[0].kind(), WidgetKind::Frame);
        assert!(widgets[0].as_frame().is_some());
        assert_eq!(
            conn.take(),
            vec![
                "widget_add S F1 frame",
                "widget_set S F1 1 2 20 4 20 8 v 2",
                "widget_add S T title",
                "widget_set S T \"Player\"",
                "widget_add S W1 string -in F1",
                "widget_set S W1 1 1 \"Artist\"",
                "widget_add S I1 icon",
                "widget_set S I1 20 1 PLAY",
                "widget_add S SC scroller",
                "widget_set S SC 1 4 20 4 h 8 \"A very long song title\"",
                "widget_add S B hbar -in F1",
                "widget_set S B 1 2 40",
                "widget_add S N num",
                "widget_set S N 3 -1",
            ]
        );
    }

    #[test]
    fn test_duplicate_ref() {
        let layout = Layout::from_toml(
            r#"
[[frame]]
ref = "X"
left = 0
top = 0
right = 1
bottom = 1
width = 1
height = 1
speed = 1

[[widget]]
kind = "title"
ref = "X"
text = "t"
"#,
        )
        .unwrap();
        assert!(matches!(layout.validate(), Err(LayoutError::DuplicateRef(r)) if r == "X"));
    }

    #[test]
    fn test_dangling_frame_sends_nothing() {
        let (screen, conn) = recording_screen();
        let layout = Layout::from_toml(
            r#"
[[widget]]
kind = "title"
ref = "T"
text = "ok"

[[widget]]
kind = "num"
ref = "N"
frame = "missing"
x = 1
value = 2
"#,
        )
        .unwrap();
        let err = layout.build(&screen).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidReference { ref widget, ref frame } if widget == "N" && frame == "missing"
        ));
        assert!(conn.is_empty());
    }

    #[test]
    fn test_unknown_icon() {
        let layout = Layout::from_toml(
            r#"
[[widget]]
kind = "icon"
ref = "I"
x = 1
y = 1
icon = "SMILEY"
"#,
        )
        .unwrap();
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::InvalidEnum { source: TokenError::UnknownIcon, .. })
        ));
    }

    #[test]
    fn test_unknown_frame_direction() {
        let layout = Layout::from_toml(
            r#"
[[frame]]
ref = "F"
left = 0
top = 0
right = 1
bottom = 1
width = 1
height = 1
direction = "diagonal"
speed = 1
"#,
        )
        .unwrap();
        let err = layout.validate().unwrap_err();
        assert_eq!(err.to_string(), "widget `F`: unknown direction (expected h or v)");
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let result = Layout::from_toml(
            r#"
[[widget]]
kind = "clock"
ref = "C"
"#,
        );
        assert!(matches!(result, Err(LayoutError::Parse(_))));
    }

    #[test]
    fn test_empty_layout() {
        let (screen, conn) = recording_screen();
        let layout = Layout::from_toml("").unwrap();
        assert!(layout.build(&screen).unwrap().is_empty());
        assert!(conn.is_empty());
    }

    #[test]
    fn test_misspelled_key_is_parse_error() {
        let result = Layout::from_toml(
            r#"
[[frame]]
ref = "F1"
left = 0
top = 0
right = 20
bottom = 4
width = 20
height = 4
speed = 8

[[widget]]
kind = "num"
ref = "N"
frme = "F1"
x = 1
value = 2
"#,
        );
        let err = result.unwrap_err();
        assert!(matches!(err, LayoutError::Parse(_)));
        assert!(err.to_string().contains("frme"));
    }

    #[test]
    fn test_key_from_other_kind_is_parse_error() {
        let result = Layout::from_toml(
            r#"
[[widget]]
kind = "title"
ref = "T"
text = "x"
length = 3
"#,
        );
        assert!(matches!(result, Err(LayoutError::Parse(_))));
    }

    #[test]
    fn test_missing_ref_is_parse_error() {
        let result = Layout::from_toml(
            r#"
[[widget]]
kind = "title"
text = "x"
"#,
        );
        assert!(matches!(result, Err(LayoutError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player.toml");
        std::fs::write(&path, PLAYER).unwrap();

        let layout = Layout::load(&path).unwrap();
        assert_eq!(layout.frames.len(), 1);
        assert_eq!(layout.widgets.len(), 6);
        assert_eq!(layout.widgets[1].frame.as_deref(), Some("F1"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Layout::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(LayoutError::Io(_))));
    }
}
