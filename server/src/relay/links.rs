//! Link Extraction
//!
//! Heuristic URL matching over free-form message text. Not RFC 3986: it
//! accepts bare hostnames like `example.com` and can false-positive on
//! dotted words such as `file.name`.

use std::sync::LazyLock;

use regex::Regex;

/// Optional scheme, a host-ish run, a dot plus a 2-6 letter suffix, then an
/// optional path/query continuation. The boundary after the suffix is ASCII so
/// a link running straight into non-ASCII text still matches.
const LINK_PATTERN: &str =
    r"(?:https?://)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}(?-u:\b)[-a-zA-Z0-9@:%_+.~#?&/=]*";

static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINK_PATTERN).expect("valid link regex"));

/// Return every link in `text`, left to right, non-overlapping.
pub fn extract_links(text: &str) -> Vec<&str> {
    LINK_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}
