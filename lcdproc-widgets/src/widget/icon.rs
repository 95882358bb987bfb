//! Icon widget

use lcdproc_protocol::{arg_list, ArgList, IconName, WidgetKind};

use super::{register, FrameRef, Widget, WidgetIdentity};
use crate::error::WidgetError;
use crate::screen::Screen;

/// A single icon glyph at `x, y`
///
/// Update arguments: `x y ICON_NAME`
#[derive(Debug)]
pub struct IconWidget {
    identity: WidgetIdentity,
    x: u16,
    y: u16,
    icon: IconName,
}

impl IconWidget {
    pub fn new(
        screen: &Screen,
        widget_ref: impl Into<String>,
        x: u16,
        y: u16,
        icon: IconName,
    ) -> Self {
        register(Self {
            identity: WidgetIdentity::top_level(screen, widget_ref),
            x,
            y,
            icon,
        })
    }

    pub fn new_in(
        screen: &Screen,
        widget_ref: impl Into<String>,
        x: u16,
        y: u16,
        icon: IconName,
        frame: &FrameRef,
    ) -> Result<Self, WidgetError> {
        Ok(register(Self {
            identity: WidgetIdentity::contained(screen, widget_ref, frame)?,
            x,
            y,
            icon,
        }))
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn y(&self) -> u16 {
        self.y
    }

    pub fn icon(&self) -> IconName {
        self.icon
    }

    pub fn set_x(&mut self, x: u16) {
        self.x = x;
        self.update();
    }

    pub fn set_y(&mut self, y: u16) {
        self.y = y;
        self.update();
    }

    /// Swap the displayed icon
    pub fn set_icon(&mut self, icon: IconName) {
        self.icon = icon;
        self.update();
    }
}

impl Widget for IconWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Icon
    }

    fn identity(&self) -> &WidgetIdentity {
        &self.identity
    }

    fn update_args(&self) -> ArgList<'_> {
        arg_list([self.x.into(), self.y.into(), self.icon.into()])
    }
}
