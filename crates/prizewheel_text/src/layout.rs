//! Label layout
//!
//! Greedy word wrapping against a pixel budget, then vertical centering of the
//! resulting block around an anchor. Layout is pure: measurement comes from a
//! [`TextMeasure`] implementation and drawing is left to the caller.

use crate::font::FontFace;
use crate::shaper::TextShaper;

/// Anything that can report the rendered width of a string in pixels
pub trait TextMeasure {
    fn measure(&self, text: &str) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f32,
{
    fn measure(&self, text: &str) -> f32 {
        self(text)
    }
}

/// A font face at a fixed pixel size
#[derive(Debug, Clone, Copy)]
pub struct SizedFace<'a> {
    pub face: &'a FontFace,
    pub size: f32,
}

impl TextMeasure for SizedFace<'_> {
    fn measure(&self, text: &str) -> f32 {
        TextShaper::new().measure(text, self.face, self.size)
    }
}

/// Layout parameters for a wrapped block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Widest a line may be unless it holds a single word
    pub max_width: f32,
    /// Baseline-to-baseline distance
    pub line_height: f32,
}

/// One laid-out line, centered on the block's x anchor
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLine {
    pub text: String,
    pub width: f32,
    /// Baseline y
    pub baseline: f32,
}

impl LayoutLine {
    /// Left edge when the line is centered on `x`
    pub fn left(&self, x: f32) -> f32 {
        x - self.width / 2.0
    }
}

/// A wrapped, vertically centered block of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<LayoutLine>,
}

impl TextLayout {
    /// Wrap `text` and center the block vertically on `y`
    pub fn new<M: TextMeasure + ?Sized>(
        text: &str,
        y: f32,
        options: LayoutOptions,
        measure: &M,
    ) -> Self {
        let wrapped = wrap_lines(text, options.max_width, measure);
        let baselines = line_offsets(wrapped.len(), y, options.line_height);

        let lines = wrapped
            .into_iter()
            .zip(baselines)
            .map(|(text, baseline)| LayoutLine {
                width: measure.measure(&text),
                text,
                baseline,
            })
            .collect();

        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines that contain something to draw
    pub fn visible_lines(&self) -> impl Iterator<Item = &LayoutLine> {
        self.lines.iter().filter(|line| !line.text.is_empty())
    }
}

/// Greedy word wrap.
///
/// Words are separated by single spaces. A word joins the current line while
/// the joined line measures no wider than `max_width`; otherwise the line is
/// committed and the word starts the next one. A line always holds at least
/// one word, so a word wider than `max_width` sits alone, unbroken.
///
/// Empty input yields one empty line.
pub fn wrap_lines<M: TextMeasure + ?Sized>(text: &str, max_width: f32, measure: &M) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut words_in_line = 0usize;

    for word in text.split(' ') {
        if words_in_line == 0 {
            line.push_str(word);
            words_in_line = 1;
            continue;
        }

        let candidate = format!("{line} {word}");
        if measure.measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
            words_in_line = 1;
        } else {
            line = candidate;
            words_in_line += 1;
        }
    }
    lines.push(line);

    lines
}

/// Baselines for `count` lines centered on `y`.
///
/// The first baseline is `y - count*line_height/2 + line_height/2`, each
/// following one is `line_height` lower.
pub fn line_offsets(count: usize, y: f32, line_height: f32) -> Vec<f32> {
    let total_height = count as f32 * line_height;
    let start = y - total_height / 2.0 + line_height / 2.0;
    (0..count).map(|i| start + i as f32 * line_height).collect()
}
