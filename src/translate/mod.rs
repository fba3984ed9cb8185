//! Per-component name translation.
//!
//! `Translator::translate` turns one file or directory name into an
//! ASCII English name. It is pure: the same table and romanizer always give
//! the same output, and the output is never empty.
mod romanize;
mod rules;
mod spacing;

pub use romanize::{select_romanizer, Romanizer};
pub use rules::{apply_punctuation, KnownExtensions, PhraseRule, RuleTable};

/// Name used when nothing printable survives translation.
pub const FALLBACK_NAME: &str = "item";

pub struct Translator {
    rules: RuleTable,
    extensions: KnownExtensions,
    romanizer: Box<dyn Romanizer>,
}

impl Translator {
    pub fn new(
        rules: RuleTable,
        extensions: KnownExtensions,
        romanizer: Box<dyn Romanizer>,
    ) -> Self {
        Self {
            rules,
            extensions,
            romanizer,
        }
    }

    pub fn extensions(&self) -> &KnownExtensions {
        &self.extensions
    }

    pub fn romanizer_name(&self) -> &'static str {
        self.romanizer.name()
    }

    pub fn translate(&self, name: &str) -> String {
        let (stem, ext) = self.extensions.split(name);
        let text = apply_punctuation(stem);
        let text = self.rules.apply(&text);
        let text = romanize_remaining(&text, self.romanizer.as_ref());
        let text = spacing::normalize_tokens(&text);
        let text = spacing::insert_word_breaks(&text);
        let text = spacing::rejoin_model_numbers(&text);
        let text = spacing::normalize_idioms(&text);
        let mut text = spacing::sanitize(&text);
        if text.is_empty() {
            text.push_str(FALLBACK_NAME);
        }
        text.push_str(ext);
        text
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("rules", &self.rules.rules().len())
            .field("extensions", &self.extensions)
            .field("romanizer", &self.romanizer.name())
            .finish()
    }
}

/// Replace whatever is still outside printable ASCII.
///
/// Non-ASCII whitespace becomes a space. Other non-ASCII characters take the
/// romanizer's reading or are dropped, and so are ASCII control characters.
fn romanize_remaining(text: &str, romanizer: &dyn Romanizer) -> String {
    if text.chars().all(is_printable_ascii) {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if is_printable_ascii(ch) {
            out.push(ch);
        } else if ch.is_whitespace() {
            out.push(' ');
        } else if ch.is_ascii() {
            continue;
        } else if let Some(reading) = romanizer.romanize(ch) {
            out.extend(reading.chars().filter(|&ch| is_printable_ascii(ch)));
        }
    }
    out
}

fn is_printable_ascii(ch: char) -> bool {
    ch == ' ' || ch.is_ascii_graphic()
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
