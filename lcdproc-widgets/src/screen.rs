//! Screen handle shared by widgets

use std::fmt;
use std::sync::Arc;

use lcdproc_protocol::Command;

use crate::connection::Connection;

/// A screen on the daemon, as seen by its widgets
///
/// Holds the screen id and the connection the screen's widgets submit
/// through. Creating and removing the screen on the daemon (`screen_add`,
/// `screen_del`) is up to the owner; widgets only need the id.
#[derive(Clone)]
pub struct Screen {
    id: String,
    connection: Arc<dyn Connection>,
}

impl Screen {
    /// Create a screen handle
    pub fn new<C: Connection + 'static>(id: impl Into<String>, connection: Arc<C>) -> Self {
        Self {
            id: id.into(),
            connection,
        }
    }

    /// Create a screen handle from an already type-erased connection
    pub fn with_connection(id: impl Into<String>, connection: Arc<dyn Connection>) -> Self {
        Self {
            id: id.into(),
            connection,
        }
    }

    /// Screen id used as the first argument of every widget command
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Check if `other` is the same screen on the same connection
    pub fn is_same(&self, other: &Screen) -> bool {
        self.id == other.id
            && std::ptr::addr_eq(Arc::as_ptr(&self.connection), Arc::as_ptr(&other.connection))
    }

    /// Encode a command and submit it
    ///
    /// A command that breaks protocol rules is logged and dropped; the
    /// widgets in this crate never build one.
    pub fn submit(&self, command: &Command<'_>) {
        match command.encode() {
            Ok(line) => {
                tracing::trace!(screen = %self.id, %line, "submit");
                self.connection.submit(&line);
            }
            Err(e) => {
                tracing::warn!(screen = %self.id, error = %e, "dropping invalid command");
            }
        }
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen").field("id", &self.id).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::MemoryConnection;
    use lcdproc_protocol::WidgetKind;

    #[test]
    fn test_submit_encodes_line() {
        let conn = Arc::new(MemoryConnection::new());
        let screen = Screen::new("S", Arc::clone(&conn));
        screen.submit(&Command::WidgetAdd {
            screen: screen.id(),
            widget: "W1",
            kind: WidgetKind::Text,
            frame: None,
        });
        assert_eq!(conn.lines(), vec!["widget_add S W1 string"]);
    }

    #[test]
    fn test_submit_drops_invalid_command() {
        let conn = Arc::new(MemoryConnection::new());
        let screen = Screen::new("S", Arc::clone(&conn));
        screen.submit(&Command::WidgetAdd {
            screen: "S",
            widget: "FR2",
            kind: WidgetKind::Frame,
            frame: Some("FR1"),
        });
        assert!(conn.is_empty());
    }

    #[test]
    fn test_clones_share_connection() {
        let conn = Arc::new(MemoryConnection::new());
        let screen = Screen::new("S", Arc::clone(&conn));
        let other = screen.clone();
        other.submit(&Command::WidgetAdd {
            screen: other.id(),
            widget: "T",
            kind: WidgetKind::Title,
            frame: None,
        });
        assert_eq!(conn.len(), 1);
        assert_eq!(format!("{:?}", screen), "Screen { id: \"S\", .. }");
    }

    #[test]
    fn test_is_same_needs_id_and_connection() {
        let conn = Arc::new(MemoryConnection::new());
        let screen = Screen::new("S", Arc::clone(&conn));

        assert!(screen.is_same(&screen.clone()));
        assert!(screen.is_same(&Screen::new("S", Arc::clone(&conn))));
        assert!(!screen.is_same(&Screen::new("T", Arc::clone(&conn))));
        assert!(!screen.is_same(&Screen::new("S", Arc::new(MemoryConnection::new()))));
    }
}
