//! A fast kana to Hepburn romaji converter.
//!
//! ## Usage
//! ```rust
//! use hebon::HepburnRomanizer;
//!
//! assert_eq!(hebon::romanize("キーボード"), "kiiboodo");
//! assert_eq!(hebon::romanize("クァルテット"), "kwarutetto");
//! assert_eq!(hebon::romanize("あい123"), "ai123");
//!
//! let romanizer = HepburnRomanizer::builder().apostrophe(true).tch(true).build();
//! assert_eq!(romanizer.romanize("こんやはまっちゃ"), "kon'yahamatcha");
//! ```
//!
//! ## Rules
//! The input is scanned once from left to right. At each kana:
//! 1. A two-kana digraph (yōon `きゃ`, or loanword `ヴァ` `シェ` `トゥ` …) wins over
//!    romanizing the two kana separately.
//! 2. A sokuon `っ`/`ッ` doubles the first letter of the next kana's romaji:
//!    `った` → `tta`, `っし` → `sshi`. A trailing one is dropped.
//! 3. A long vowel mark `ー` repeats the last emitted char: `キー` → `kii`.
//!    A leading one is dropped.
//! 4. Otherwise the kana is looked up in [`data::kana::single_romaji()`].
//!
//! Katakana are normalized to hiragana before lookup, and anything that is not
//! a known kana is passed through unchanged. Romanization never fails.
//!
//! ## Features
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]
use bon::bon;
use tracing::trace;

use hebon_unicode::kana::{CharKanaExt, find_kana_lead_byte};

pub mod data;
mod input;
mod output;

pub use input::Input;
pub use output::RomajiOutput;

use data::kana::{CHOONPU, HATSUON, SOKUON};

/// [Hepburn romanization](https://en.wikipedia.org/wiki/Hepburn_romanization) of kana.
///
/// Holds only options, so it is cheap to create and can be shared freely across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HepburnRomanizer {
    apostrophe: bool,
    tch: bool,
}

#[bon]
impl HepburnRomanizer {
    /// [`HepburnRomanizer::default()`]
    #[builder(builder_type = HepburnRomanizerBuilder)]
    pub fn new(
        /// Insert `'` after `ん` if the next kana starts with a vowel or `y`,
        /// e.g. `きんえん` → `kin'en` instead of `kinen`.
        #[builder(default = false)]
        apostrophe: bool,
        /// Geminate `ch` with `t` instead of `c`, e.g. `まっちゃ` → `matcha` instead of `maccha`.
        #[builder(default = false)]
        tch: bool,
    ) -> Self {
        Self { apostrophe, tch }
    }

    /// Romanize the first kana (or digraph) in the string, and return the length of the kana and the romaji.
    ///
    /// `っ`, `ー` and non-kana chars cannot be romanized on their own and return `None`.
    ///
    /// ## Example
    /// ```
    /// use hebon::HepburnRomanizer;
    ///
    /// assert_eq!(HepburnRomanizer::romanize_kana("あ"), Some((3, "a")));
    /// assert_eq!(HepburnRomanizer::romanize_kana("ジョジョ"), Some((6, "jo")));
    /// assert_eq!(HepburnRomanizer::romanize_kana("って"), None);
    /// ```
    pub fn romanize_kana<S: ?Sized + AsRef<str>>(s: &S) -> Option<(usize, &'static str)> {
        let mut chars = s.as_ref().chars();
        let first = chars.next()?;
        if let Some(second) = chars.next() {
            if let Some(romaji) =
                data::kana::digraph_romaji(first.to_hiragana(), second.to_hiragana())
            {
                return Some((first.len_utf8() + second.len_utf8(), romaji));
            }
        }
        data::kana::single_romaji(first.to_hiragana()).map(|romaji| (first.len_utf8(), romaji))
    }

    /// Romanize the text and return the romaji.
    ///
    /// `None` is treated as an empty text.
    ///
    /// ## Example
    /// ```
    /// use hebon::HepburnRomanizer;
    ///
    /// let romanizer = HepburnRomanizer::default();
    /// assert_eq!(romanizer.romanize("シェフ"), "shefu");
    /// assert_eq!(romanizer.romanize(None::<&str>), "");
    /// ```
    pub fn romanize<'h, S: Into<Input<'h>>>(&self, input: S) -> String {
        let input = input.into();
        let mut out = String::with_capacity(input.as_ref().len());
        self.romanize_to(input, &mut out);
        out
    }

    /// Romanize the text and append the romaji to `out`.
    ///
    /// `ー` at the start of the text repeats the last char already in `out`.
    pub fn romanize_to<'h, S: Into<Input<'h>>, O: ?Sized + RomajiOutput>(
        &self,
        input: S,
        out: &mut O,
    ) {
        let input = input.into();
        let s = input.as_ref();

        // The last romanized kana, for apostrophes
        let mut last_romaji: Option<&'static str> = None;
        let mut i = 0;
        while i < s.len() {
            let rest = &s[i..];

            // Non-kana are passed through as a whole
            let non_kana_len = find_kana_lead_byte(rest.as_bytes()).unwrap_or(rest.len());
            if non_kana_len != 0 {
                out.push_romaji(&rest[..non_kana_len]);
                last_romaji = None;
                i += non_kana_len;
                continue;
            }

            if let Some((len, romaji)) = Self::romanize_kana(rest) {
                if self.apostrophe
                    && last_romaji == data::kana::single_romaji(HATSUON)
                    && Self::need_apostrophe(romaji)
                {
                    out.push_char(Self::APOSTROPHE);
                }
                out.push_romaji(romaji);
                last_romaji = Some(romaji);
                i += len;
                continue;
            }

            let mut chars = rest.chars();
            let Some(c) = chars.next() else { break };
            match c.to_hiragana() {
                SOKUON => match chars.next() {
                    Some(next) => out.push_char(self.geminate(next)),
                    None => trace!(offset = input.start() + i, "dropped trailing sokuon"),
                },
                CHOONPU => match out.last_char() {
                    Some(last) => out.push_char(last),
                    None => trace!(offset = input.start() + i, "dropped leading long vowel mark"),
                },
                _ => out.push_char(c),
            }
            last_romaji = None;
            i += c.len_utf8();
        }
    }

    /// The char a sokuon before `next` romanizes to.
    fn geminate(&self, next: char) -> char {
        match data::kana::single_romaji(next.to_hiragana()) {
            Some(romaji) if self.tch && romaji.starts_with("ch") => 't',
            Some(romaji) => romaji.chars().next().unwrap_or(next),
            None => next,
        }
    }

    /// Check if the text consists only of kana that can be romanized, i.e. nothing would be passed through.
    ///
    /// ## Example
    /// ```
    /// use hebon::HepburnRomanizer;
    ///
    /// assert!(HepburnRomanizer::is_romanizable("ひらがなとカタカナー"));
    /// assert!(HepburnRomanizer::is_romanizable(""));
    /// assert!(!HepburnRomanizer::is_romanizable("日本"));
    /// assert!(!HepburnRomanizer::is_romanizable("かな!"));
    /// ```
    pub fn is_romanizable<'h, S: Into<Input<'h>>>(input: S) -> bool {
        input.into().as_ref().chars().all(|c| {
            let c = c.to_hiragana();
            matches!(c, SOKUON | CHOONPU) || data::kana::single_romaji(c).is_some()
        })
    }
}

impl HepburnRomanizer {
    pub const APOSTROPHE: char = '\'';

    /// Whether `ん` followed by `romaji` needs an apostrophe to be read unambiguously.
    #[inline]
    pub fn need_apostrophe(romaji: &str) -> bool {
        matches!(
            romaji.as_bytes().first(),
            Some(b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
        )
    }
}

/// Romanize the text with the default [`HepburnRomanizer`].
///
/// `None` is treated as an empty text.
///
/// ## Example
/// ```
/// assert_eq!(hebon::romanize("きゃ"), "kya");
/// assert_eq!(hebon::romanize(Some("ゐ")), "i");
/// assert_eq!(hebon::romanize(None::<&str>), "");
/// ```
pub fn romanize<'h, S: Into<Input<'h>>>(input: S) -> String {
    HepburnRomanizer::default().romanize(input)
}
