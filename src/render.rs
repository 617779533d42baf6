use std::io::{self, Write};

use serde_json::json;
use tracing::warn;

use crate::controller::RequestState;
use crate::presenter::{normalize, NormalizedView};

/// Display capability. The controller and presenter know nothing about
/// presentation; anything that can draw a lifecycle state can be plugged in.
pub trait Renderer {
    fn render(&mut self, state: &RequestState);
}

/// Plain-text renderer for terminals.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        TextRenderer::new(io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer { out }
    }

    fn draw_view(&mut self, view: &NormalizedView) -> io::Result<()> {
        writeln!(self.out, "Query: {}", view.query)?;
        writeln!(self.out, "Found {} search hits", view.hits_found)?;
        writeln!(self.out)?;

        writeln!(self.out, "Sources ({} analyzed)", view.sources.len())?;
        for (idx, source) in view.sources.iter().enumerate() {
            writeln!(self.out)?;
            writeln!(self.out, "  {}. {}", idx + 1, source.title)?;
            writeln!(self.out, "     {}", source.url)?;
            for bullet in &source.summary {
                writeln!(self.out, "       • {}", bullet)?;
            }
        }

        writeln!(self.out)?;
        writeln!(self.out, "Report")?;
        writeln!(self.out, "------")?;
        writeln!(self.out, "{}", view.report)?;
        Ok(())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, state: &RequestState) {
        let drawn = match state {
            RequestState::Idle => Ok(()),
            RequestState::Pending => writeln!(self.out, "Researching..."),
            RequestState::Succeeded(result) => self.draw_view(&normalize(result)),
            RequestState::Failed(error) => writeln!(self.out, "Error: {}", error),
        };
        if let Err(e) = drawn {
            warn!("could not write output: {}", e);
        }
    }
}

/// Emits one JSON document per resolved request; idle and pending states
/// draw nothing.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl JsonRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        JsonRenderer::new(io::stdout())
    }
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        JsonRenderer { out }
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, state: &RequestState) {
        let doc = match state {
            RequestState::Succeeded(result) => {
                match serde_json::to_string_pretty(&normalize(result)) {
                    Ok(doc) => doc,
                    Err(e) => {
                        warn!("could not encode view: {}", e);
                        return;
                    }
                }
            }
            RequestState::Failed(error) => json!({ "error": error.to_string() }).to_string(),
            RequestState::Idle | RequestState::Pending => return,
        };
        if let Err(e) = writeln!(self.out, "{}", doc) {
            warn!("could not write output: {}", e);
        }
    }
}
