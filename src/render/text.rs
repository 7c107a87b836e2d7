//! Text and JSON dumps of an event stream.
//!
//! `TextWriter` writes each event the moment it is drawn, so a large
//! repeat never has to fit in memory. The JSON dump needs the whole
//! array and works on collected events.

use std::io::{self, Write};

use crate::error::{BlocksError, Result};
use crate::exec::{DrawEvent, Renderer};
use crate::types::Colour;

/// Renderer that writes one text line per event to `out`.
///
/// The first write error is kept and every later event is dropped;
/// [`TextWriter::finish`] reports it.
#[derive(Debug)]
pub struct TextWriter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and hand back the writer, or the first error hit.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, event: &DrawEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", event) {
            self.error = Some(e);
        }
    }
}

impl<W: Write> Renderer for TextWriter<W> {
    fn draw_block(&mut self, size: f64, colour: Colour) {
        self.emit(&DrawEvent::DrawBlock { size, colour });
    }

    fn draw_space(&mut self, size: f64) {
        self.emit(&DrawEvent::DrawSpace { size });
    }

    fn line_break(&mut self) {
        self.emit(&DrawEvent::LineBreak);
    }

    fn display_error(&mut self, message: &str) {
        self.emit(&DrawEvent::DisplayError {
            message: message.to_string(),
        });
    }
}

/// One event per line, e.g. `block 2 #FF0000`.
pub fn events_to_text(events: &[DrawEvent]) -> String {
    let mut out = String::new();
    for event in events {
        out.push_str(&event.to_string());
        out.push('\n');
    }
    out
}

/// Events as a pretty-printed JSON array.
pub fn events_to_json(events: &[DrawEvent]) -> Result<String> {
    serde_json::to_string_pretty(events).map_err(|e| BlocksError::Parse {
        message: format!("Failed to serialise events: {}", e),
        help: None,
    })
}
