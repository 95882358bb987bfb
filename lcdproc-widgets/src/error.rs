//! Error types for widget construction and layout loading

use lcdproc_protocol::TokenError;
use thiserror::Error;

/// Errors raised when constructing a widget
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// The frame handle belongs to another screen
    #[error("frame `{frame}` is on screen `{frame_screen}`, not `{screen}`")]
    InvalidReference {
        frame: String,
        frame_screen: String,
        screen: String,
    },

    /// The frame handle belongs to a screen with the same id on another
    /// connection
    #[error("frame `{frame}` belongs to screen `{screen}` on another connection")]
    ForeignConnection { frame: String, screen: String },
}

/// Errors raised when loading or building a layout
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Layout file could not be read
    #[error("failed to read layout: {0}")]
    Io(#[from] std::io::Error),

    /// Layout is not valid TOML or does not match the layout schema
    #[error("failed to parse layout: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two entries share a widget ref
    #[error("widget ref `{0}` is declared more than once")]
    DuplicateRef(String),

    /// A widget names a frame that the layout does not declare
    #[error("widget `{widget}` refers to undeclared frame `{frame}`")]
    InvalidReference { widget: String, frame: String },

    /// A direction or icon token is not part of the protocol
    #[error("widget `{widget}`: {source}")]
    InvalidEnum {
        widget: String,
        #[source]
        source: TokenError,
    },

    /// Widget construction failed
    #[error(transparent)]
    Widget(#[from] WidgetError),
}
