//! Rendering module for blocks.
//!
//! Renderers consume the executor's draw events. `Canvas` lays them out
//! and rasterises to pixels; `TextWriter` streams the raw events as text
//! and the dump helpers format collected events.

mod canvas;
mod png;
mod text;

pub use canvas::{Canvas, RenderedScript};
pub use png::write_png;
pub use text::{events_to_json, events_to_text, TextWriter};
