//! Readability passes over the ASCII text left after rule rewriting.
//!
//! Pass order matters: word breaks are inserted first, then model-number
//! idioms that the breaks over-split are joined back together.

/// Canonical casing for tokens that appear glued to other words.
pub(crate) fn normalize_tokens(text: &str) -> String {
    let text = regex!(r"(?i)usb").replace_all(text, "USB");
    regex!(r"(?i)sample")
        .replace_all(&text, "Sample")
        .into_owned()
}

/// Split concatenated words, numbers and version markers.
pub(crate) fn insert_word_breaks(text: &str) -> String {
    // EHardware -> E Hardware
    let text = regex!(r"([A-Za-z])([A-Z][a-z])").replace_all(text, "${1} ${2}");
    // EnableUSB -> Enable USB
    let text = regex!(r"([a-z])([A-Z])").replace_all(&text, "${1} ${2}");
    // USBhost -> USB host
    let text = regex!(r"([A-Z]{2,})([a-z])").replace_all(&text, "${1} ${2}");
    // SA62Series -> SA62 Series
    let text = regex!(r"(\d)([A-Za-z])").replace_all(&text, "${1} ${2}");
    // Guidev1.2 -> Guide v1.2
    regex!(r"(?i)(\w)(v)(\d)")
        .replace_all(&text, "${1} ${2}${3}")
        .into_owned()
}

/// Re-join chip models (`SA62105 X2`) and numeric models (`6920 E2`).
pub(crate) fn rejoin_model_numbers(text: &str) -> String {
    let text = regex!(r"\b(SA\d{4,6})\s+([A-Z]\d?)\b").replace_all(text, "${1}${2}");
    regex!(r"(\d+)\s+([A-Z]\d+)\b")
        .replace_all(&text, "${1}${2}")
        .into_owned()
}

pub(crate) fn normalize_idioms(text: &str) -> String {
    regex!(r"\bUSB\s+[Hh]ost\b")
        .replace_all(text, "USB host")
        .into_owned()
}

/// Collapse whitespace and replace characters unsafe in file names.
pub(crate) fn sanitize(text: &str) -> String {
    let text = collapse_whitespace(text);
    let text = collapse_whitespace(&text.replace('_', " "));
    let text = text.replace('/', "-");
    regex!(r#"[\\:*?"<>|]"#)
        .replace_all(&text, "-")
        .into_owned()
}

fn collapse_whitespace(text: &str) -> String {
    regex!(r"\s+").replace_all(text, " ").trim().to_string()
}
