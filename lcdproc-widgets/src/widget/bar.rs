//! Horizontal and vertical bar widgets (`hbar`, `vbar`)

use lcdproc_protocol::{arg_list, ArgList, WidgetKind};

use super::{register, FrameRef, Widget, WidgetIdentity};
use crate::error::WidgetError;
use crate::screen::Screen;

/// Bar graph starting at `x, y` and extending `length` pixels
///
/// The kind (`hbar` or `vbar`) is chosen by the constructor and never
/// changes. Both kinds share the same update arguments: `x y length`.
#[derive(Debug)]
pub struct BarWidget {
    identity: WidgetIdentity,
    kind: WidgetKind,
    x: u16,
    y: u16,
    length: u16,
}

impl BarWidget {
    fn build(identity: WidgetIdentity, kind: WidgetKind, x: u16, y: u16, length: u16) -> Self {
        register(Self {
            identity,
            kind,
            x,
            y,
            length,
        })
    }

    /// Horizontal bar on the screen
    pub fn hbar(screen: &Screen, widget_ref: impl Into<String>, x: u16, y: u16, length: u16) -> Self {
        let identity = WidgetIdentity::top_level(screen, widget_ref);
        Self::build(identity, WidgetKind::HBar, x, y, length)
    }

    /// Horizontal bar inside a frame
    pub fn hbar_in(
        screen: &Screen,
        widget_ref: impl Into<String>,
        x: u16,
        y: u16,
        length: u16,
        frame: &FrameRef,
    ) -> Result<Self, WidgetError> {
        let identity = WidgetIdentity::contained(screen, widget_ref, frame)?;
        Ok(Self::build(identity, WidgetKind::HBar, x, y, length))
    }

    /// Vertical bar on the screen
    pub fn vbar(screen: &Screen, widget_ref: impl Into<String>, x: u16, y: u16, length: u16) -> Self {
        let identity = WidgetIdentity::top_level(screen, widget_ref);
        Self::build(identity, WidgetKind::VBar, x, y, length)
    }

    /// Vertical bar inside a frame
    pub fn vbar_in(
        screen: &Screen,
        widget_ref: impl Into<String>,
        x: u16,
        y: u16,
        length: u16,
        frame: &FrameRef,
    ) -> Result<Self, WidgetError> {
        let identity = WidgetIdentity::contained(screen, widget_ref, frame)?;
        Ok(Self::build(identity, WidgetKind::VBar, x, y, length))
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn y(&self) -> u16 {
        self.y
    }

    /// Bar length in pixels
    pub fn length(&self) -> u16 {
        self.length
    }

    pub fn set_x(&mut self, x: u16) {
        self.x = x;
        self.update();
    }

    pub fn set_y(&mut self, y: u16) {
        self.y = y;
        self.update();
    }

    pub fn set_length(&mut self, length: u16) {
        self.length = length;
        self.update();
    }
}

impl Widget for BarWidget {
    fn kind(&self) -> WidgetKind {
        self.kind
    }

    fn identity(&self) -> &WidgetIdentity {
        &self.identity
    }

    fn update_args(&self) -> ArgList<'_> {
        arg_list([self.x.into(), self.y.into(), self.length.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::test_util::recording_screen;
    use crate::widget::FrameWidget;
    use lcdproc_protocol::Direction;

    #[test]
    fn test_hbar() {
        let (screen, conn) = recording_screen();
        let mut bar = BarWidget::hbar(&screen, "B1", 1, 4, 30);
        bar.set_length(45);
        assert_eq!(
            conn.take(),
            vec![
                "widget_add S B1 hbar",
                "widget_set S B1 1 4 30",
                "widget_set S B1 1 4 45",
            ]
        );
        assert_eq!(bar.kind(), WidgetKind::HBar);
    }

    #[test]
    fn test_vbar_setters() {
        let (screen, conn) = recording_screen();
        let mut bar = BarWidget::vbar(&screen, "V1", 10, 4, 8);
        conn.take();
        bar.set_x(11);
        bar.set_y(3);
        assert_eq!(
            conn.take(),
            vec!["widget_set S V1 11 4 8", "widget_set S V1 11 3 8"]
        );
        assert_eq!((bar.x(), bar.y(), bar.length()), (11, 3, 8));
    }

    #[test]
    fn test_bars_in_frame() {
        let (screen, conn) = recording_screen();
        let frame = FrameWidget::new(&screen, "F1", 1, 1, 20, 4, 20, 4, Direction::Horizontal, 8);
        let handle = frame.handle();
        conn.take();

        BarWidget::hbar_in(&screen, "H", 1, 1, 5, &handle).unwrap();
        BarWidget::vbar_in(&screen, "V", 2, 4, 3, &handle).unwrap();
        assert_eq!(
            conn.take(),
            vec![
                "widget_add S H hbar -in F1",
                "widget_set S H 1 1 5",
                "widget_add S V vbar -in F1",
                "widget_set S V 2 4 3",
            ]
        );
    }
}
