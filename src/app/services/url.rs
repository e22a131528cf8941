use crate::app::domain::{ActiveDocument, PluginSettings};

/// Length of the `.md` suffix removed before an extension rewrite
const MARKDOWN_SUFFIX_LEN: usize = 3;

/// Derive the shareable URL for `active`.
///
/// Returns `None` when no document is open. The prefix and path are
/// concatenated verbatim; only markdown notes get their `.md` suffix
/// rewritten to the configured extension.
pub fn derive_url(active: Option<&ActiveDocument>, settings: &PluginSettings) -> Option<String> {
    let doc = active?;
    let raw = format!("{}{}", settings.prefix, doc.path);

    // Other file types keep their own extension
    if !doc.is_markdown() {
        return Some(raw);
    }

    match settings.extension.as_str() {
        "md" => Some(raw),
        "" => Some(drop_last_chars(&raw, MARKDOWN_SUFFIX_LEN).to_string()),
        ext => Some(format!("{}.{}", drop_last_chars(&raw, MARKDOWN_SUFFIX_LEN), ext)),
    }
}

/// Remove the last `n` characters of `text`.
/// Strings with fewer than `n` characters become empty.
fn drop_last_chars(text: &str, n: usize) -> &str {
    if n == 0 {
        return text;
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[..idx],
        None => "",
    }
}
