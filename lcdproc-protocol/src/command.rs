//! Widget command encoding
//!
//! Two commands are needed to drive a widget:
//! - `widget_add`: registers the widget on a screen, once
//! - `widget_set`: sends the widget's complete current state
//!
//! `widget_set` always carries every field of the widget in the fixed order
//! for its kind; the daemon treats it as a full overwrite.

use alloc::string::{String, ToString};
use core::fmt;

use heapless::Vec;

use crate::tokens::{Direction, IconName, WidgetKind};

/// Longest `widget_set` argument list of any kind (frame)
pub const MAX_ARGS: usize = 8;

/// Clause that places a widget inside a frame
const IN_FRAME: &str = "-in";

/// Errors that can occur while encoding a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// A `frame` widget was given a containing frame
    FrameNotAllowed,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::FrameNotAllowed => f.write_str("frame widgets cannot be placed in a frame"),
        }
    }
}

impl core::error::Error for EncodeError {}

/// One `widget_set` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arg<'a> {
    /// Integer, written in decimal
    Int(i64),
    /// Bare protocol token (direction, icon name)
    Token(&'static str),
    /// Text, wrapped in double quotes
    ///
    /// Embedded quotes and control characters are passed through as-is;
    /// the daemon sees exactly what the caller supplied.
    Quoted(&'a str),
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int(value) => write!(f, "{}", value),
            Arg::Token(token) => f.write_str(token),
            Arg::Quoted(text) => write!(f, "\"{}\"", text),
        }
    }
}

impl From<u16> for Arg<'_> {
    fn from(value: u16) -> Self {
        Arg::Int(value.into())
    }
}

impl From<i32> for Arg<'_> {
    fn from(value: i32) -> Self {
        Arg::Int(value.into())
    }
}

impl From<Direction> for Arg<'_> {
    fn from(direction: Direction) -> Self {
        Arg::Token(direction.as_token())
    }
}

impl From<IconName> for Arg<'_> {
    fn from(icon: IconName) -> Self {
        Arg::Token(icon.as_token())
    }
}

/// Ordered `widget_set` arguments
pub type ArgList<'a> = Vec<Arg<'a>, MAX_ARGS>;

/// Build an argument list from a fixed-size array
///
/// The length is checked at compile time against [`MAX_ARGS`].
pub fn arg_list<'a, const N: usize>(args: [Arg<'a>; N]) -> ArgList<'a> {
    const { assert!(N <= MAX_ARGS, "too many widget_set arguments") };
    args.into_iter().collect()
}

/// A widget command addressed to one screen
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// `widget_add <screen> <widget> <kind> [-in <frame>]`
    WidgetAdd {
        screen: &'a str,
        widget: &'a str,
        kind: WidgetKind,
        frame: Option<&'a str>,
    },
    /// `widget_set <screen> <widget> <args...>`
    WidgetSet {
        screen: &'a str,
        widget: &'a str,
        args: ArgList<'a>,
    },
}

impl<'a> Command<'a> {
    /// Command keyword
    pub const fn name(&self) -> &'static str {
        match self {
            Command::WidgetAdd { .. } => "widget_add",
            Command::WidgetSet { .. } => "widget_set",
        }
    }

    /// Check the command against protocol rules
    pub fn validate(&self) -> Result<(), EncodeError> {
        match self {
            Command::WidgetAdd {
                kind,
                frame: Some(_),
                ..
            } if !kind.accepts_frame() => Err(EncodeError::FrameNotAllowed),
            _ => Ok(()),
        }
    }

    /// Encode this command into a single wire line, without terminator
    pub fn encode(&self) -> Result<String, EncodeError> {
        self.validate()?;
        Ok(self.to_string())
    }
}

impl fmt::Display for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::WidgetAdd {
                screen,
                widget,
                kind,
                frame,
            } => {
                write!(f, "{} {} {} {}", self.name(), screen, widget, kind)?;
                if let Some(frame) = frame {
                    write!(f, " {} {}", IN_FRAME, frame)?;
                }
                Ok(())
            }
            Command::WidgetSet {
                screen,
                widget,
                args,
            } => {
                write!(f, "{} {} {}", self.name(), screen, widget)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                Ok(())
            }
        }
    }
}
