//! Example-marker stripping for source text.
//!
//! Recognised markers:
//!
//! ```text
//! /* EXAMPLE START */ ... /* EXAMPLE END */      block comment pair
//! <!-- EXAMPLE START --> ... <!-- EXAMPLE END --> HTML comment pair
//! // EXAMPLE: ...                                  single line
//! ```
//!
//! After the markers are gone, blank lines are removed as well.

use std::sync::LazyLock;

use regex::Regex;

static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\*\s*EXAMPLE\s*START[\s\S]*?EXAMPLE\s*END\s*\*/").expect("valid block pattern")
});

static HTML_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s*EXAMPLE\s*START[\s\S]*?EXAMPLE\s*END\s*-->").expect("valid html pattern")
});

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//\s*EXAMPLE:.*$").expect("valid line pattern"));

static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[\r\n]").expect("valid blank-line pattern"));

/// Remove example regions and blank lines from `content`.
pub fn strip_example_content(content: &str) -> String {
    let text = BLOCK_COMMENT.replace_all(content, "");
    let text = HTML_COMMENT.replace_all(&text, "");
    let text = LINE_COMMENT.replace_all(&text, "");
    BLANK_LINE.replace_all(&text, "").into_owned()
}

/// `true` if `content` carries at least one example marker.
pub fn has_example_markers(content: &str) -> bool {
    BLOCK_COMMENT.is_match(content) || HTML_COMMENT.is_match(content) || LINE_COMMENT.is_match(content)
}
