//! LCDd widget command protocol
//!
//! This crate defines the text commands the client sends to the LCDd display
//! daemon to create and update widgets. Commands are plain text, one per
//! line, with space-separated arguments:
//!
//! ```text
//! widget_add <screen-ref> <widget-ref> <kind> [-in <frame-ref>]
//! widget_set <screen-ref> <widget-ref> <arg>...
//! ```
//!
//! Text arguments are wrapped in double quotes; numbers and enum tokens are
//! written bare. The line terminator is left to the connection that
//! transmits the command.
//!
//! The daemon does not answer widget commands with anything this crate
//! cares about, so there is no response parser here.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod command;
pub mod tokens;

pub use command::{arg_list, Arg, ArgList, Command, EncodeError, MAX_ARGS};
pub use tokens::{Direction, IconName, TokenError, WidgetKind};
