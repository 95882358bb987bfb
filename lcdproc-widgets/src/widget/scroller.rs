//! Scroller widget

use lcdproc_protocol::{arg_list, Arg, ArgList, Direction, WidgetKind};

use super::{register, FrameRef, Widget, WidgetIdentity};
use crate::error::WidgetError;
use crate::screen::Screen;

/// Text that scrolls inside the rectangle `left, top, right, bottom`
///
/// `speed` is the number of movements per rendering stroke (8 strokes per
/// second). Vertical scrolling is not supported by every display.
///
/// Update arguments: `left top right bottom direction speed "text"`
#[derive(Debug)]
pub struct ScrollerWidget {
    identity: WidgetIdentity,
    left: u16,
    top: u16,
    right: u16,
    bottom: u16,
    direction: Direction,
    speed: u16,
    text: String,
}

/// Scroller geometry and behavior, in `widget_set` order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRegion {
    pub left: u16,
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub direction: Direction,
    pub speed: u16,
}

impl ScrollerWidget {
    fn build(identity: WidgetIdentity, region: ScrollRegion, text: String) -> Self {
        register(Self {
            identity,
            left: region.left,
            top: region.top,
            right: region.right,
            bottom: region.bottom,
            direction: region.direction,
            speed: region.speed,
            text,
        })
    }

    pub fn new(
        screen: &Screen,
        widget_ref: impl Into<String>,
        region: ScrollRegion,
        text: impl Into<String>,
    ) -> Self {
        Self::build(
            WidgetIdentity::top_level(screen, widget_ref),
            region,
            text.into(),
        )
    }

    pub fn new_in(
        screen: &Screen,
        widget_ref: impl Into<String>,
        region: ScrollRegion,
        text: impl Into<String>,
        frame: &FrameRef,
    ) -> Result<Self, WidgetError> {
        let identity = WidgetIdentity::contained(screen, widget_ref, frame)?;
        Ok(Self::build(identity, region, text.into()))
    }

    /// Current geometry and behavior
    pub fn region(&self) -> ScrollRegion {
        ScrollRegion {
            left: self.left,
            top: self.top,
            right: self.right,
            bottom: self.bottom,
            direction: self.direction,
            speed: self.speed,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_left(&mut self, left: u16) {
        self.left = left;
        self.update();
    }

    pub fn set_top(&mut self, top: u16) {
        self.top = top;
        self.update();
    }

    pub fn set_right(&mut self, right: u16) {
        self.right = right;
        self.update();
    }

    pub fn set_bottom(&mut self, bottom: u16) {
        self.bottom = bottom;
        self.update();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.update();
    }

    pub fn set_speed(&mut self, speed: u16) {
        self.speed = speed;
        self.update();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.update();
    }
}

impl Widget for ScrollerWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Scroller
    }

    fn identity(&self) -> &WidgetIdentity {
        &self.identity
    }

    fn update_args(&self) -> ArgList<'_> {
        arg_list([
            self.left.into(),
            self.top.into(),
            self.right.into(),
            self.bottom.into(),
            self.direction.into(),
            self.speed.into(),
            Arg::Quoted(&self.text),
        ])
    }
}
