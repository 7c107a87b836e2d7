//! blocks - Line-based block scripts to draw events
//!
//! A library for parsing a tiny script language of blocks, spacers and
//! line breaks, and turning each script into an ordered stream of draw
//! events for a renderer.
//!
//! ```
//! use blocks::{script_events, DrawEvent};
//!
//! let events = script_events("block.repeat-2 end");
//! assert_eq!(events.len(), 3);
//! assert_eq!(events[2], DrawEvent::LineBreak);
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exec;
pub mod logging;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use config::Manifest;
pub use error::{BlocksError, Result};
pub use exec::{execute, run_script, script_events, DrawEvent, EventLog, Renderer};
pub use parser::{parse_property, parse_script, parse_script_spanned, parse_token, ParseError};
pub use render::{write_png, Canvas, RenderedScript};
pub use types::{resolve_colour, BlockSpec, Colour, Command, DEFAULT_COLOUR};
