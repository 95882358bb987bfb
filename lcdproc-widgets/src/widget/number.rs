//! Big number widget (`num`)

use lcdproc_protocol::{arg_list, ArgList, WidgetKind};

use super::{register, FrameRef, Widget, WidgetIdentity};
use crate::error::WidgetError;
use crate::screen::Screen;

/// Big digit at column `x`
///
/// Update arguments: `x value`
#[derive(Debug)]
pub struct NumberWidget {
    identity: WidgetIdentity,
    x: u16,
    value: i32,
}

impl NumberWidget {
    pub fn new(screen: &Screen, widget_ref: impl Into<String>, x: u16, value: i32) -> Self {
        register(Self {
            identity: WidgetIdentity::top_level(screen, widget_ref),
            x,
            value,
        })
    }

    pub fn new_in(
        screen: &Screen,
        widget_ref: impl Into<String>,
        x: u16,
        value: i32,
        frame: &FrameRef,
    ) -> Result<Self, WidgetError> {
        Ok(register(Self {
            identity: WidgetIdentity::contained(screen, widget_ref, frame)?,
            x,
            value,
        }))
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_x(&mut self, x: u16) {
        self.x = x;
        self.update();
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value;
        self.update();
    }
}

impl Widget for NumberWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Number
    }

    fn identity(&self) -> &WidgetIdentity {
        &self.identity
    }

    fn update_args(&self) -> ArgList<'_> {
        arg_list([self.x.into(), self.value.into()])
    }
}
