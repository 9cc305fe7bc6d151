//! Caret and selection arithmetic for plain-value fields.

/// Result of splicing text into a field value: the new value and the
/// collapsed caret offset immediately after the inserted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// The field value after the splice.
    pub value: String,
    /// Caret offset (character offset, collapsed selection).
    pub caret: usize,
}

/// Splice `insert` into `value` over the selection `[start, end]`.
///
/// New value = `value[..start] + insert + value[end..]`; new caret =
/// `start + insert-length`, collapsed. Holds when `start == end` (a plain
/// caret) and when the selection spans the whole content.
///
/// Offsets are character offsets, not byte offsets, so multi-byte content
/// splits on character boundaries. Out-of-range offsets from the host are
/// clamped (`start <= end <= length`) rather than treated as errors.
pub fn splice_at_selection(value: &str, start: usize, end: usize, insert: &str) -> Splice {
    let chars: Vec<char> = value.chars().collect();
    let start = start.min(chars.len());
    let end = end.clamp(start, chars.len());

    let mut spliced = String::with_capacity(value.len() + insert.len());
    spliced.extend(&chars[..start]);
    spliced.push_str(insert);
    spliced.extend(&chars[end..]);

    Splice {
        value: spliced,
        caret: start + insert.chars().count(),
    }
}
