//! Text widget (`string`)

use lcdproc_protocol::{arg_list, Arg, ArgList, WidgetKind};

use super::{register, FrameRef, Widget, WidgetIdentity};
use crate::error::WidgetError;
use crate::screen::Screen;

/// A line of text at a fixed position
///
/// Length doesn't need to be given; the daemon clips at the display edge.
///
/// Update arguments: `x y "text"`
#[derive(Debug)]
pub struct TextWidget {
    identity: WidgetIdentity,
    x: u16,
    y: u16,
    text: String,
}

impl TextWidget {
    /// Create a text widget on the screen
    pub fn new(
        screen: &Screen,
        widget_ref: impl Into<String>,
        x: u16,
        y: u16,
        text: impl Into<String>,
    ) -> Self {
        register(Self {
            identity: WidgetIdentity::top_level(screen, widget_ref),
            x,
            y,
            text: text.into(),
        })
    }

    /// Create a text widget inside a frame
    pub fn new_in(
        screen: &Screen,
        widget_ref: impl Into<String>,
        x: u16,
        y: u16,
        text: impl Into<String>,
        frame: &FrameRef,
    ) -> Result<Self, WidgetError> {
        Ok(register(Self {
            identity: WidgetIdentity::contained(screen, widget_ref, frame)?,
            x,
            y,
            text: text.into(),
        }))
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn y(&self) -> u16 {
        self.y
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the column
    pub fn set_x(&mut self, x: u16) {
        self.x = x;
        self.update();
    }

    /// Set the row
    pub fn set_y(&mut self, y: u16) {
        self.y = y;
        self.update();
    }

    /// Replace the text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.update();
    }
}

impl Widget for TextWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Text
    }

    fn identity(&self) -> &WidgetIdentity {
        &self.identity
    }

    fn update_args(&self) -> ArgList<'_> {
        arg_list([self.x.into(), self.y.into(), Arg::Quoted(&self.text)])
    }
}
