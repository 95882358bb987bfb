//! Frame widget and frame handles
//!
//! A frame is a container region. Other widgets are placed in it by passing
//! the frame's [`FrameRef`] to their `new_in` constructor, which adds
//! `-in <frame>` to their `widget_add`. The frame can be larger than its
//! visible rectangle and scrolls in `direction` at `speed`.
//!
//! The frame does not manage its children. If it is resized, children that
//! no longer fit must be removed by the owner.

use lcdproc_protocol::{arg_list, ArgList, Direction, WidgetKind};

use super::{register, Widget, WidgetIdentity};
use crate::screen::Screen;

/// Handle to a registered frame
///
/// Only obtainable from a constructed [`FrameWidget`], so holding one
/// proves the frame's `widget_add` has already been sent.
#[derive(Debug, Clone)]
pub struct FrameRef {
    screen: Screen,
    widget_ref: String,
}

impl FrameRef {
    /// Screen the frame lives on
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Id of the screen the frame lives on
    pub fn screen_id(&self) -> &str {
        self.screen.id()
    }

    /// Ref of the frame widget
    pub fn widget_ref(&self) -> &str {
        &self.widget_ref
    }
}

impl PartialEq for FrameRef {
    fn eq(&self, other: &Self) -> bool {
        self.widget_ref == other.widget_ref && self.screen.is_same(&other.screen)
    }
}

impl Eq for FrameRef {}

/// Container region for other widgets
///
/// Frames are always top-level: they cannot be nested with `-in`.
///
/// Update arguments: `left top right bottom width height direction speed`
#[derive(Debug)]
pub struct FrameWidget {
    identity: WidgetIdentity,
    left: u16,
    top: u16,
    right: u16,
    bottom: u16,
    width: u16,
    height: u16,
    direction: Direction,
    speed: u16,
}

impl FrameWidget {
    /// Create a frame
    ///
    /// - `left, top, right, bottom`: visible rectangle on the screen
    /// - `width, height`: size of the frame's virtual area
    /// - `direction, speed`: scrolling of the virtual area
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        screen: &Screen,
        widget_ref: impl Into<String>,
        left: u16,
        top: u16,
        right: u16,
        bottom: u16,
        width: u16,
        height: u16,
        direction: Direction,
        speed: u16,
    ) -> Self {
        register(Self {
            identity: WidgetIdentity::top_level(screen, widget_ref),
            left,
            top,
            right,
            bottom,
            width,
            height,
            direction,
            speed,
        })
    }

    /// Handle for placing widgets inside this frame
    pub fn handle(&self) -> FrameRef {
        FrameRef {
            screen: self.identity.screen().clone(),
            widget_ref: self.identity.widget_ref().to_owned(),
        }
    }

    pub fn left(&self) -> u16 {
        self.left
    }

    pub fn top(&self) -> u16 {
        self.top
    }

    pub fn right(&self) -> u16 {
        self.right
    }

    pub fn bottom(&self) -> u16 {
        self.bottom
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> u16 {
        self.speed
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

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
        self.update();
    }

    pub fn set_height(&mut self, height: u16) {
        self.height = height;
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
}

impl Widget for FrameWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Frame
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
            self.width.into(),
            self.height.into(),
            self.direction.into(),
            self.speed.into(),
        ])
    }
}
