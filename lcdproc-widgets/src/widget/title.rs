//! Title widget

use lcdproc_protocol::{arg_list, Arg, ArgList, WidgetKind};

use super::{register, FrameRef, Widget, WidgetIdentity};
use crate::error::WidgetError;
use crate::screen::Screen;

/// Title bar across the top of a screen or frame
///
/// Use at most one per screen or frame.
///
/// Update arguments: `"text"`
#[derive(Debug)]
pub struct TitleWidget {
    identity: WidgetIdentity,
    text: String,
}

impl TitleWidget {
    pub fn new(screen: &Screen, widget_ref: impl Into<String>, text: impl Into<String>) -> Self {
        register(Self {
            identity: WidgetIdentity::top_level(screen, widget_ref),
            text: text.into(),
        })
    }

    pub fn new_in(
        screen: &Screen,
        widget_ref: impl Into<String>,
        text: impl Into<String>,
        frame: &FrameRef,
    ) -> Result<Self, WidgetError> {
        Ok(register(Self {
            identity: WidgetIdentity::contained(screen, widget_ref, frame)?,
            text: text.into(),
        }))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.update();
    }
}

impl Widget for TitleWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Title
    }

    fn identity(&self) -> &WidgetIdentity {
        &self.identity
    }

    fn update_args(&self) -> ArgList<'_> {
        arg_list([Arg::Quoted(&self.text)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::test_util::recording_screen;

    #[test]
    fn test_title() {
        let (screen, conn) = recording_screen();
        let mut title = TitleWidget::new(&screen, "T1", "Now Playing");
        title.set_text("Paused");
        assert_eq!(
            conn.take(),
            vec![
                "widget_add S T1 title",
                "widget_set S T1 \"Now Playing\"",
                "widget_set S T1 \"Paused\"",
            ]
        );
        assert_eq!(title.frame(), None);
    }

    #[test]
    fn test_same_text_twice_is_not_suppressed() {
        let (screen, conn) = recording_screen();
        let mut title = TitleWidget::new(&screen, "T1", "A");
        conn.take();
        title.set_text("B");
        title.set_text("B");
        assert_eq!(
            conn.take(),
            vec!["widget_set S T1 \"B\"", "widget_set S T1 \"B\""]
        );
    }
}
