//! Markup-preserving clean: scrubs Word formatting artifacts.

use regex::Regex;
use std::sync::LazyLock;

/// Substitution rules applied in order by [`clean_markup_noise`].
///
/// Order matters and is kept as-is: the generic `class`/`style` attribute
/// removal runs before the `<p>` normalization, so a `<p class=.. style=..>`
/// is attribute-stripped by rules 3-4 and then normalized by rule 7.
static NOISE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // Word's proprietary paragraph marker
        (r"<o:p>.*?</o:p>", ""),
        // HTML comments (Word conditional blocks land here too)
        (r"<!--.*?-->", ""),
        // Inline class/style attributes, on any tag
        (r#"class="[^"]*""#, ""),
        (r#"style="[^"]*""#, ""),
        // span/font wrappers, attributes included
        (r"<span[^>]*>", ""),
        (r"</span>", ""),
        (r"<font[^>]*>", ""),
        (r"</font>", ""),
        // Paragraph tags keep their structure but lose attribute bloat
        (r"<p[^>]*>", "<p>"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("noise rule is a valid static regex pattern"),
            replacement,
        )
    })
    .collect()
});

/// Remove markup noise from a pasted markup string while keeping
/// structural tags.
///
/// Strips, in order: `<o:p>` elements, HTML comments, `class="..."` and
/// `style="..."` attributes, `<span>`/`<font>` wrapper tags, and the
/// attributes of `<p>` tags. Every rule is a global replace; output length
/// never exceeds input length. Never panics; unmatched or malformed
/// markup is left untouched.
pub fn clean_markup_noise(input: &str) -> String {
    let mut content = input.to_string();
    for (rule, replacement) in NOISE_RULES.iter() {
        if rule.is_match(&content) {
            content = rule.replace_all(&content, *replacement).into_owned();
        }
    }
    content
}
