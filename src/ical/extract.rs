use lazy_static::lazy_static;
use regex::{CaptureMatches, Regex};

pub const BEGIN_MARKER: &str = "BEGIN:VEVENT";
pub const END_MARKER: &str = "END:VEVENT";

lazy_static! {
    // A single-quoted run holding a whole VEVENT, no quotes inside
    static ref QUOTED_VEVENT: Regex =
        Regex::new(r"'([^']*BEGIN:VEVENT[^']*END:VEVENT[^']*)'").expect("valid VEVENT regex");
}

/// Lazy scan over the VEVENT blocks of a text blob.
///
/// Quoted payloads (as printed by `gdbus`) are preferred. Only when no quoted
/// block exists does the scan fall back to bare `BEGIN:VEVENT`..`END:VEVENT`
/// runs. Yielded blocks are already unescaped. The iterator is single pass.
pub struct BlockExtractor<'a> {
    source: Source<'a>,
}

enum Source<'a> {
    Quoted(CaptureMatches<'static, 'a>),
    Bare { input: &'a str, cursor: usize },
}

impl<'a> BlockExtractor<'a> {
    pub fn new(input: &'a str) -> Self {
        let source = if QUOTED_VEVENT.is_match(input) {
            Source::Quoted(QUOTED_VEVENT.captures_iter(input))
        } else {
            Source::Bare { input, cursor: 0 }
        };
        Self { source }
    }

    /// True when the quoted strategy was selected
    pub fn is_quoted(&self) -> bool {
        matches!(self.source, Source::Quoted(_))
    }

    fn next_raw(&mut self) -> Option<&'a str> {
        match &mut self.source {
            Source::Quoted(captures) => captures
                .next()
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str()),
            Source::Bare { input, cursor } => {
                let input: &'a str = *input;
                let rest = &input[*cursor..];
                let begin = rest.find(BEGIN_MARKER)?;
                let after_begin = begin + BEGIN_MARKER.len();
                let end = rest[after_begin..].find(END_MARKER)? + after_begin + END_MARKER.len();
                *cursor += end;
                Some(&rest[begin..end])
            }
        }
    }
}

impl Iterator for BlockExtractor<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = self.next_raw()?;
            let block = unescape_block(raw);
            if block.contains(BEGIN_MARKER) {
                return Some(block);
            }
        }
    }
}

/// Turn the two-character escapes `\r\n` and `\n` into real line breaks
pub fn unescape_block(raw: &str) -> String {
    raw.replace("\\r\\n", "\n").replace("\\n", "\n")
}

/// Collect every block in `input`
pub fn extract_blocks(input: &str) -> Vec<String> {
    BlockExtractor::new(input).collect()
}
