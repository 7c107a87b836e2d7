//! Command execution.
//!
//! The executor walks parsed commands once and expands them into draw
//! events, in order, for a [`Renderer`]. It keeps no state between runs;
//! whatever is displayed lives in the renderer.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::parser::parse_script;
use crate::types::{Colour, Command};

/// Receives draw events in emission order.
pub trait Renderer {
    fn draw_block(&mut self, size: f64, colour: Colour);
    fn draw_space(&mut self, size: f64);
    fn line_break(&mut self);
    fn display_error(&mut self, message: &str);
}

/// A single draw event, as delivered to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DrawEvent {
    DrawBlock { size: f64, colour: Colour },
    DrawSpace { size: f64 },
    LineBreak,
    DisplayError { message: String },
}

impl DrawEvent {
    /// Deliver this event to a renderer.
    pub fn replay<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        match self {
            DrawEvent::DrawBlock { size, colour } => renderer.draw_block(*size, *colour),
            DrawEvent::DrawSpace { size } => renderer.draw_space(*size),
            DrawEvent::LineBreak => renderer.line_break(),
            DrawEvent::DisplayError { message } => renderer.display_error(message),
        }
    }
}

impl fmt::Display for DrawEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawEvent::DrawBlock { size, colour } => write!(f, "block {} {}", size, colour),
            DrawEvent::DrawSpace { size } => write!(f, "space {}", size),
            DrawEvent::LineBreak => write!(f, "end"),
            DrawEvent::DisplayError { message } => write!(f, "error: {}", message),
        }
    }
}

/// Execute commands against a renderer.
///
/// A block with `repeat = n` produces `n` identical block events. Parse
/// errors are shown, never skipped, and never stop the run.
pub fn execute<R: Renderer + ?Sized>(commands: &[Command], renderer: &mut R) {
    for command in commands {
        match command {
            Command::Block(spec) => {
                for _ in 0..spec.repeat {
                    renderer.draw_block(spec.size, spec.colour);
                }
            }
            Command::Space { size } => renderer.draw_space(*size),
            Command::Newline => renderer.line_break(),
            Command::ParseError { message } => renderer.display_error(message),
        }
    }
}

/// Parse and execute a script in one pass.
pub fn run_script<R: Renderer + ?Sized>(source: &str, renderer: &mut R) {
    let commands = parse_script(source);
    debug!("executing {} command(s)", commands.len());
    execute(&commands, renderer);
}

/// Parse and execute a script, collecting its events.
pub fn script_events(source: &str) -> Vec<DrawEvent> {
    let mut log = EventLog::new();
    run_script(source, &mut log);
    log.into_events()
}

/// A renderer that records every event it receives.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<DrawEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DrawEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<DrawEvent> {
        self.events
    }
}

impl Renderer for EventLog {
    fn draw_block(&mut self, size: f64, colour: Colour) {
        self.events.push(DrawEvent::DrawBlock { size, colour });
    }

    fn draw_space(&mut self, size: f64) {
        self.events.push(DrawEvent::DrawSpace { size });
    }

    fn line_break(&mut self) {
        self.events.push(DrawEvent::LineBreak);
    }

    fn display_error(&mut self, message: &str) {
        self.events.push(DrawEvent::DisplayError {
            message: message.to_string(),
        });
    }
}
