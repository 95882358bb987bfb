//! Command submission
//!
//! The widget layer hands every encoded command line to a [`Connection`].
//! It never reads a reply and never retries: what happens to the line after
//! `submit` is the connection's business.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Sink for encoded command lines
///
/// Widgets on the same screen share one connection, possibly across
/// threads. Implementations must:
/// - serialize concurrent submissions (no interleaving within a line)
/// - preserve call order (FIFO)
/// - append the line terminator
pub trait Connection: Send + Sync {
    /// Submit one command line (without terminator) for transmission
    fn submit(&self, line: &str);
}

/// Lock a mutex, recovering the data if another submitter panicked
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Connection over any byte stream (TCP socket, pipe, buffer)
///
/// Each submission writes the line plus `\n` as one buffer and flushes while
/// holding the lock. Write failures are logged and the line is dropped. If a
/// failure leaves part of a line in the stream, the next submission starts
/// with `\n` so the fragment is never joined to a later command.
#[derive(Debug)]
pub struct LineWriter<W> {
    stream: Mutex<Stream<W>>,
}

#[derive(Debug)]
struct Stream<W> {
    writer: W,
    /// An unterminated fragment is in the stream
    torn: bool,
}

impl<W: Write> Stream<W> {
    /// Write all of `buf`, returning how many bytes made it on failure
    fn send(&mut self, buf: &[u8]) -> Result<(), (usize, io::Error)> {
        let mut written = 0;
        while written < buf.len() {
            match self.writer.write(&buf[written..]) {
                Ok(0) => return Err((written, io::ErrorKind::WriteZero.into())),
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err((written, e)),
            }
        }
        self.writer.flush().map_err(|e| (written, e))
    }
}

impl<W: Write + Send> LineWriter<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self {
            stream: Mutex::new(Stream {
                writer,
                torn: false,
            }),
        }
    }

    /// Consume the connection and return the underlying writer
    pub fn into_inner(self) -> W {
        self.stream
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }
}

impl<W: Write + Send> Connection for LineWriter<W> {
    fn submit(&self, line: &str) {
        let mut stream = lock(&self.stream);

        let mut buf = String::with_capacity(line.len() + 2);
        if stream.torn {
            buf.push('\n');
        }
        buf.push_str(line);
        buf.push('\n');

        match stream.send(buf.as_bytes()) {
            Ok(()) => stream.torn = false,
            Err((written, e)) => {
                // Nothing written leaves the stream as it was
                if written > 0 {
                    stream.torn = written < buf.len();
                }
                tracing::warn!(error = %e, line, "failed to write command line");
            }
        }
    }
}

/// Connection that records submitted lines in memory
///
/// Useful for tests and for rendering a layout to text without a daemon.
#[derive(Debug, Default)]
pub struct MemoryConnection {
    lines: Mutex<Vec<String>>,
}

impl MemoryConnection {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line submitted so far, in order
    pub fn lines(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }

    /// Remove and return every recorded line
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *lock(&self.lines))
    }

    /// Number of recorded lines
    pub fn len(&self) -> usize {
        lock(&self.lines).len()
    }

    /// Check if nothing has been submitted
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Connection for MemoryConnection {
    fn submit(&self, line: &str) {
        lock(&self.lines).push(line.to_owned());
    }
}
