//! Phonetic fallback for characters the phrase rules did not cover.
//!
//! The strategy is picked once at startup: the pinyin backend when the crate
//! was built with the `pinyin` feature, otherwise a strategy that drops the
//! character.
use std::borrow::Cow;

/// Romanize a single character, or `None` to drop it.
///
/// Readings must be printable ASCII; the translator drops anything else.
pub trait Romanizer {
    fn name(&self) -> &'static str;
    fn romanize(&self, ch: char) -> Option<Cow<'static, str>>;
}

/// Drops every character; the degraded mode when no backend is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropRomanizer;

impl Romanizer for DropRomanizer {
    fn name(&self) -> &'static str {
        "drop"
    }

    fn romanize(&self, _ch: char) -> Option<Cow<'static, str>> {
        None
    }
}

/// First plain (toneless) Mandarin reading of a Han character, with `ü`
/// spelled `v` as in `lvse`.
#[cfg(feature = "pinyin")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinRomanizer;

#[cfg(feature = "pinyin")]
impl Romanizer for PinyinRomanizer {
    fn name(&self) -> &'static str {
        "pinyin"
    }

    fn romanize(&self, ch: char) -> Option<Cow<'static, str>> {
        use pinyin::ToPinyin;
        let reading = ch.to_pinyin()?.plain();
        if reading.is_ascii() {
            return Some(Cow::Borrowed(reading));
        }
        let spelled: String = reading
            .chars()
            .filter_map(|ch| match ch {
                'ü' => Some('v'),
                'Ü' => Some('V'),
                ch if ch.is_ascii_alphabetic() => Some(ch),
                _ => None,
            })
            .collect();
        (!spelled.is_empty()).then_some(Cow::Owned(spelled))
    }
}

/// Pick the best available strategy; `enabled = false` forces dropping.
pub fn select_romanizer(enabled: bool) -> Box<dyn Romanizer> {
    if !enabled {
        return Box::new(DropRomanizer);
    }
    #[cfg(feature = "pinyin")]
    {
        Box::new(PinyinRomanizer)
    }
    #[cfg(not(feature = "pinyin"))]
    {
        tracing::debug!("built without the pinyin feature; non-ASCII characters will be dropped");
        Box::new(DropRomanizer)
    }
}
