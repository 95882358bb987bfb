//! Widget variants
//!
//! Every variant follows the same contract:
//! - construction sends `widget_add` once, then a full `widget_set`
//! - each setter stores one field, then sends a full `widget_set`
//!
//! Updates are never diffed or suppressed. Setting a field to the value it
//! already has still produces a command.

mod bar;
mod frame;
mod icon;
mod number;
mod scroller;
mod text;
mod title;

pub use bar::BarWidget;
pub use frame::{FrameRef, FrameWidget};
pub use icon::IconWidget;
pub use number::NumberWidget;
pub use scroller::{ScrollRegion, ScrollerWidget};
pub use text::TextWidget;
pub use title::TitleWidget;

use lcdproc_protocol::{ArgList, Command, WidgetKind};

use crate::error::WidgetError;
use crate::screen::Screen;

/// Identity of a registered widget: screen, ref and containing frame
///
/// Fixed at construction.
#[derive(Debug, Clone)]
pub struct WidgetIdentity {
    screen: Screen,
    widget_ref: String,
    frame: Option<String>,
}

impl WidgetIdentity {
    /// Identity for a widget placed directly on the screen
    pub(crate) fn top_level(screen: &Screen, widget_ref: impl Into<String>) -> Self {
        Self {
            screen: screen.clone(),
            widget_ref: widget_ref.into(),
            frame: None,
        }
    }

    /// Identity for a widget placed inside `frame`
    ///
    /// The frame must live on the same screen, reached through the same
    /// connection.
    pub(crate) fn contained(
        screen: &Screen,
        widget_ref: impl Into<String>,
        frame: &FrameRef,
    ) -> Result<Self, WidgetError> {
        if frame.screen_id() != screen.id() {
            return Err(WidgetError::InvalidReference {
                frame: frame.widget_ref().to_owned(),
                frame_screen: frame.screen_id().to_owned(),
                screen: screen.id().to_owned(),
            });
        }
        if !frame.screen().is_same(screen) {
            return Err(WidgetError::ForeignConnection {
                frame: frame.widget_ref().to_owned(),
                screen: screen.id().to_owned(),
            });
        }
        Ok(Self {
            screen: screen.clone(),
            widget_ref: widget_ref.into(),
            frame: Some(frame.widget_ref().to_owned()),
        })
    }

    /// Screen the widget belongs to
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Widget ref, unique within the screen
    pub fn widget_ref(&self) -> &str {
        &self.widget_ref
    }

    /// Ref of the containing frame, if any
    pub fn frame(&self) -> Option<&str> {
        self.frame.as_deref()
    }
}

/// Common capability of all widget variants
pub trait Widget {
    /// Kind sent in `widget_add`
    fn kind(&self) -> WidgetKind;

    /// Screen, ref and containing frame
    fn identity(&self) -> &WidgetIdentity;

    /// Complete current state, in the kind's `widget_set` order
    fn update_args(&self) -> ArgList<'_>;

    /// Widget ref
    fn widget_ref(&self) -> &str {
        self.identity().widget_ref()
    }

    /// Screen the widget belongs to
    fn screen(&self) -> &Screen {
        self.identity().screen()
    }

    /// Ref of the containing frame, if any
    fn frame(&self) -> Option<&str> {
        self.identity().frame()
    }

    /// The `widget_add` command that registers this widget
    fn add_command(&self) -> Command<'_> {
        Command::WidgetAdd {
            screen: self.screen().id(),
            widget: self.widget_ref(),
            kind: self.kind(),
            frame: self.frame(),
        }
    }

    /// The `widget_set` command carrying the current state
    fn update_command(&self) -> Command<'_> {
        Command::WidgetSet {
            screen: self.screen().id(),
            widget: self.widget_ref(),
            args: self.update_args(),
        }
    }

    /// Send the current state again
    fn update(&self) {
        self.screen().submit(&self.update_command());
    }
}

/// Register a freshly built widget: `widget_add`, then initial `widget_set`
pub(crate) fn register<W: Widget>(widget: W) -> W {
    tracing::debug!(
        screen = widget.screen().id(),
        widget = widget.widget_ref(),
        kind = %widget.kind(),
        frame = widget.frame(),
        "registering widget"
    );
    widget.screen().submit(&widget.add_command());
    widget.update();
    widget
}

/// Any widget variant
///
/// Returned by the layout loader, where the kind is only known at runtime.
#[derive(Debug)]
pub enum AnyWidget {
    Text(TextWidget),
    Title(TitleWidget),
    /// Horizontal or vertical bar
    Bar(BarWidget),
    Icon(IconWidget),
    Scroller(ScrollerWidget),
    Frame(FrameWidget),
    Number(NumberWidget),
}

impl AnyWidget {
    fn inner(&self) -> &dyn Widget {
        match self {
            AnyWidget::Text(w) => w,
            AnyWidget::Title(w) => w,
            AnyWidget::Bar(w) => w,
            AnyWidget::Icon(w) => w,
            AnyWidget::Scroller(w) => w,
            AnyWidget::Frame(w) => w,
            AnyWidget::Number(w) => w,
        }
    }

    /// Borrow as a frame, if this is one
    pub fn as_frame(&self) -> Option<&FrameWidget> {
        match self {
            AnyWidget::Frame(frame) => Some(frame),
            _ => None,
        }
    }
}

impl Widget for AnyWidget {
    fn kind(&self) -> WidgetKind {
        self.inner().kind()
    }

    fn identity(&self) -> &WidgetIdentity {
        self.inner().identity()
    }

    fn update_args(&self) -> ArgList<'_> {
        self.inner().update_args()
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AnyWidget {
                fn from(widget: $ty) -> Self {
                    AnyWidget::$variant(widget)
                }
            }
        )*
    };
}

impl_from_variant! {
    Text => TextWidget,
    Title => TitleWidget,
    Bar => BarWidget,
    Icon => IconWidget,
    Scroller => ScrollerWidget,
    Frame => FrameWidget,
    Number => NumberWidget,
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lcdproc_protocol::Direction;

    use super::test_util::recording_screen;
    use super::*;
    use crate::connection::MemoryConnection;

    #[test]
    fn test_any_widget_delegates() {
        let (screen, conn) = recording_screen();
        let widget = AnyWidget::from(TextWidget::new(&screen, "W1", 1, 2, "Hi"));
        assert_eq!(widget.kind(), WidgetKind::Text);
        assert_eq!(widget.widget_ref(), "W1");
        assert!(widget.as_frame().is_none());
        conn.take();

        widget.update();
        assert_eq!(conn.take(), vec!["widget_set S W1 1 2 \"Hi\""]);
    }

    #[test]
    fn test_add_command_never_resent() {
        let (screen, conn) = recording_screen();
        let mut widget = NumberWidget::new(&screen, "N1", 0, 0);
        for value in 1..=5 {
            widget.set_value(value);
        }
        let lines = conn.lines();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines.iter().filter(|l| l.starts_with("widget_add")).count(), 1);
        assert_eq!(lines[6], "widget_set S N1 0 5");
    }

    #[test]
    fn test_frame_on_other_screen_rejected() {
        let (screen, conn) = recording_screen();
        let other = Screen::new("OTHER", Arc::clone(&conn));
        let frame = FrameWidget::new(&other, "F1", 0, 0, 20, 4, 20, 8, Direction::Vertical, 2);
        conn.take();

        let err = TextWidget::new_in(&screen, "W1", 1, 1, "x", &frame.handle()).unwrap_err();
        assert_eq!(
            err,
            WidgetError::InvalidReference {
                frame: "F1".into(),
                frame_screen: "OTHER".into(),
                screen: "S".into(),
            }
        );
        // Nothing was sent for the rejected widget
        assert!(conn.is_empty());
    }

    #[test]
    fn test_frame_on_other_connection_rejected() {
        let (screen, conn) = recording_screen();
        let other_conn = Arc::new(MemoryConnection::new());
        let twin = Screen::new("S", Arc::clone(&other_conn));
        let frame = FrameWidget::new(&twin, "F1", 0, 0, 20, 4, 20, 4, Direction::Horizontal, 8);

        let err = NumberWidget::new_in(&screen, "N1", 1, 2, &frame.handle()).unwrap_err();
        assert_eq!(
            err,
            WidgetError::ForeignConnection {
                frame: "F1".into(),
                screen: "S".into(),
            }
        );
        assert!(conn.is_empty());
        assert_eq!(other_conn.len(), 2);
    }
}
