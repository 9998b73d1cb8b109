use std::io::Write;

use crate::{HighlightSet, Value};

/// Visual display collaborator. Invoked at every instrumentation event, so
/// implementations must be cheap. Snapshots are borrowed read-only.
pub trait RenderAdapter {
    fn render(&mut self, snapshot: &[Value], highlight: HighlightSet);

    /// Drops whatever the adapter accumulated for the previous run.
    fn reset(&mut self) {}
}

/// Discards every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl RenderAdapter for NullRenderer {
    fn render(&mut self, _snapshot: &[Value], _highlight: HighlightSet) {}
}

/// One captured render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub values: Vec<Value>,
    pub highlight: HighlightSet,
}

/// Keeps a copy of every rendered frame in call order.
#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    frames: Vec<Frame>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

impl RenderAdapter for FrameRecorder {
    fn render(&mut self, snapshot: &[Value], highlight: HighlightSet) {
        self.frames.push(Frame {
            values: snapshot.to_vec(),
            highlight,
        });
    }

    fn reset(&mut self) {
        self.frames.clear();
    }
}

const BAR_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const HIGHLIGHT_START: &str = "\x1b[31m";
const HIGHLIGHT_END: &str = "\x1b[0m";

/// Draws the sequence as a single line of block glyphs, redrawn in place.
/// Highlighted positions are coloured.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    line: String,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: String::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, snapshot: &[Value], highlight: HighlightSet) -> std::io::Result<()> {
        let max = snapshot.iter().copied().max().unwrap_or(0).max(1);

        self.line.clear();
        self.line.push('\r');
        for (index, value) in snapshot.iter().enumerate() {
            let glyph = bar_glyph(*value, max);
            if highlight.contains(index) {
                self.line.push_str(HIGHLIGHT_START);
                self.line.push(glyph);
                self.line.push_str(HIGHLIGHT_END);
            } else {
                self.line.push(glyph);
            }
        }

        self.out.write_all(self.line.as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> RenderAdapter for TerminalRenderer<W> {
    fn render(&mut self, snapshot: &[Value], highlight: HighlightSet) {
        if let Err(err) = self.draw(snapshot, highlight) {
            tracing::warn!(%err, "failed to draw frame");
        }
    }
}

fn bar_glyph(value: Value, max: Value) -> char {
    let clamped = i128::from(value.clamp(0, max));
    let max = i128::from(max);
    let last = (BAR_GLYPHS.len() - 1) as i128;
    let index = (clamped * last + max / 2) / max;
    BAR_GLYPHS[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_frames_in_order() {
        let mut recorder = FrameRecorder::new();
        recorder.render(&[3, 1], HighlightSet::pair(0, 1));
        recorder.render(&[1, 3], HighlightSet::none());

        assert_eq!(recorder.frames().len(), 2);
        assert_eq!(recorder.frames()[0].values, vec![3, 1]);
        assert_eq!(recorder.frames()[1].highlight, HighlightSet::none());

        recorder.reset();
        assert!(recorder.frames().is_empty());
    }

    #[test]
    fn terminal_renderer_scales_and_highlights() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&[0, 50, 100], HighlightSet::single(2));

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(output.starts_with('\r'));
        assert!(output.contains('▁'));
        assert!(output.contains(&format!("{HIGHLIGHT_START}█{HIGHLIGHT_END}")));
    }

    #[test]
    fn bar_glyph_handles_extremes() {
        assert_eq!(bar_glyph(0, 10), '▁');
        assert_eq!(bar_glyph(10, 10), '█');
        assert_eq!(bar_glyph(-5, 10), '▁');
    }
}
