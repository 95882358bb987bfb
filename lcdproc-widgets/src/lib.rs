//! Client-side LCDd widgets
//!
//! Each widget mirrors one server-side widget. Constructing it registers the
//! widget with `widget_add` and pushes its initial state; every setter
//! stores one field and pushes the complete state again with `widget_set`.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  Application / layout file                 │
//! └────────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌────────────────────────────────────────────┐
//! │  widgets (this crate)                      │
//! │  TextWidget, FrameWidget, ... → Command    │
//! └────────────────────────────────────────────┘
//!                     │ encode (lcdproc-protocol)
//!                     ▼
//! ┌────────────────────────────────────────────┐
//! │  Screen → Arc<dyn Connection>::submit      │
//! └────────────────────────────────────────────┘
//! ```
//!
//! The connection is shared by every widget on a screen. Implementations of
//! [`Connection`] must serialize submissions and keep them in call order;
//! the daemon relies on a frame being added before its children.

pub mod connection;
pub mod error;
pub mod layout;
pub mod screen;
pub mod widget;

// Re-export key types
pub use connection::{Connection, LineWriter, MemoryConnection};
pub use error::{LayoutError, WidgetError};
pub use layout::Layout;
pub use screen::Screen;
pub use widget::{
    AnyWidget, BarWidget, FrameRef, FrameWidget, IconWidget, NumberWidget, ScrollRegion,
    ScrollerWidget, TextWidget, TitleWidget, Widget, WidgetIdentity,
};

pub use lcdproc_protocol::{Direction, IconName, WidgetKind};
