/*!
## Normalization
Katakana `ァ`(U+30A1) to `ヶ`(U+30F6) sit exactly 0x60 code points after their
hiragana counterparts `ぁ`(U+3041) to `ゖ`(U+3096), including the small vowels
and `ヴ`/`ゔ`, so normalization is a single subtraction.

`ヷ ヸ ヹ ヺ` (U+30F7..=U+30FA) are left as is: the same offset would land on
U+3097..=U+309A, which are unassigned or the combining (semi-)voiced sound
marks, not kana.

The prolonged sound mark `ー`(U+30FC) and the middle dot `・` are shared by both
scripts and are never converted.
*/
use std::borrow::Cow;

use crate::Sealed;

pub const HIRAGANA_KATAKANA_OFFSET: u32 = 0x60;

/// `ぁ`
pub const HIRAGANA_FIRST: char = '\u{3041}';
/// `ゟ`
pub const HIRAGANA_LAST: char = '\u{309F}';
/// `゠`
pub const KATAKANA_FIRST: char = '\u{30A0}';
/// `ヿ`
pub const KATAKANA_LAST: char = '\u{30FF}';

/// `ァ`, the first katakana with a hiragana counterpart.
pub const KATAKANA_CONVERTIBLE_FIRST: char = '\u{30A1}';
/// `ヶ`, the last katakana with a hiragana counterpart.
pub const KATAKANA_CONVERTIBLE_LAST: char = '\u{30F6}';

/// The UTF-8 lead byte of every char in U+3000..=U+3FFF, which covers both kana blocks.
pub const KANA_LEAD_BYTE: u8 = 0xE3;

pub trait CharKanaExt: Sealed {
    /// Convert a katakana to its hiragana counterpart. Other chars are returned unchanged.
    ///
    /// ```
    /// use hebon_unicode::kana::CharKanaExt;
    ///
    /// assert_eq!('カ'.to_hiragana(), 'か');
    /// assert_eq!('ヴ'.to_hiragana(), 'ゔ');
    /// assert_eq!('ー'.to_hiragana(), 'ー');
    /// assert_eq!('a'.to_hiragana(), 'a');
    /// ```
    fn to_hiragana(self) -> char;

    /// Convert a hiragana to its katakana counterpart. Other chars are returned unchanged.
    fn to_katakana(self) -> char;

    fn is_hiragana(self) -> bool;

    fn is_katakana(self) -> bool;

    /// Either [`is_hiragana()`](CharKanaExt::is_hiragana) or [`is_katakana()`](CharKanaExt::is_katakana).
    fn is_kana(self) -> bool;
}

impl CharKanaExt for char {
    #[inline]
    fn to_hiragana(self) -> char {
        if matches!(self, KATAKANA_CONVERTIBLE_FIRST..=KATAKANA_CONVERTIBLE_LAST) {
            // Always in U+3041..=U+3096
            char::from_u32(self as u32 - HIRAGANA_KATAKANA_OFFSET).unwrap_or(self)
        } else {
            self
        }
    }

    #[inline]
    fn to_katakana(self) -> char {
        if matches!(self, '\u{3041}'..='\u{3096}') {
            char::from_u32(self as u32 + HIRAGANA_KATAKANA_OFFSET).unwrap_or(self)
        } else {
            self
        }
    }

    #[inline]
    fn is_hiragana(self) -> bool {
        matches!(self, HIRAGANA_FIRST..=HIRAGANA_LAST)
    }

    #[inline]
    fn is_katakana(self) -> bool {
        matches!(self, KATAKANA_FIRST..=KATAKANA_LAST)
    }

    #[inline]
    fn is_kana(self) -> bool {
        self.is_hiragana() || self.is_katakana()
    }
}

pub trait StrKanaExt: Sealed {
    /// Convert all katakanas to hiragana. Borrows `self` if there is nothing to convert.
    ///
    /// ```
    /// use hebon_unicode::kana::StrKanaExt;
    ///
    /// assert_eq!("キーボード".to_hiragana(), "きーぼーど");
    /// assert!(matches!("ひらがな".to_hiragana(), std::borrow::Cow::Borrowed(_)));
    /// ```
    fn to_hiragana(&self) -> Cow<'_, str>;

    /// Convert all hiraganas to katakana. Borrows `self` if there is nothing to convert.
    fn to_katakana(&self) -> Cow<'_, str>;
}

impl StrKanaExt for str {
    fn to_hiragana(&self) -> Cow<'_, str> {
        map_chars(self, |c| c.to_hiragana())
    }

    fn to_katakana(&self) -> Cow<'_, str> {
        map_chars(self, |c| c.to_katakana())
    }
}

fn map_chars(s: &str, f: impl Fn(char) -> char) -> Cow<'_, str> {
    match s.char_indices().find(|&(_, c)| f(c) != c) {
        Some((i, _)) => {
            let mut buf = String::with_capacity(s.len());
            buf.push_str(&s[..i]);
            buf.extend(s[i..].chars().map(f));
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(s),
    }
}

/// Returns the index of the first byte that may start a kana, i.e. the first
/// [`KANA_LEAD_BYTE`]. Everything before the index is guaranteed to be non-kana.
///
/// ```
/// use hebon_unicode::kana::find_kana_lead_byte;
///
/// assert_eq!(find_kana_lead_byte("abc かな".as_bytes()), Some(4));
/// assert_eq!(find_kana_lead_byte(b"abc"), None);
/// assert_eq!(find_kana_lead_byte("日本".as_bytes()), None);
/// ```
#[cfg_attr(feature = "perf-find", inline)]
pub fn find_kana_lead_byte(haystack: &[u8]) -> Option<usize> {
    #[cfg(not(feature = "perf-find"))]
    return haystack.iter().position(|&b| b == KANA_LEAD_BYTE);
    #[cfg(feature = "perf-find")]
    // sse2/avx2 on x86_64
    memchr::memchr(KANA_LEAD_BYTE, haystack)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_hiragana() {
        for (k, h) in [
            ('ア', 'あ'),
            ('ァ', 'ぁ'),
            ('ッ', 'っ'),
            ('ン', 'ん'),
            ('ヰ', 'ゐ'),
            ('ヱ', 'ゑ'),
            ('ヴ', 'ゔ'),
            ('ヵ', 'ゕ'),
            ('ヶ', 'ゖ'),
        ] {
            assert_eq!(k.to_hiragana(), h, "{k}");
            assert_eq!(h.to_katakana(), k, "{h}");
        }

        for c in ['ヷ', 'ヺ', 'ー', '・', 'あ', 'a', '1', '日', '\u{3099}'] {
            assert_eq!(c.to_hiragana(), c, "{c}");
        }
        for c in ['ゝ', 'ゟ', 'カ', 'a'] {
            assert_eq!(c.to_katakana(), c, "{c}");
        }
    }

    #[test]
    fn convertible_range() {
        for k in KATAKANA_CONVERTIBLE_FIRST..=KATAKANA_CONVERTIBLE_LAST {
            let h = k.to_hiragana();
            assert!(h.is_hiragana(), "{k} -> {h}");
            assert_eq!(h.to_katakana(), k);
        }
    }

    #[test]
    fn classify() {
        assert!('あ'.is_hiragana());
        assert!(!'ア'.is_hiragana());
        assert!('ア'.is_katakana());
        assert!('ー'.is_katakana());
        assert!('ー'.is_kana());
        assert!(!'日'.is_kana());
        assert!(!'a'.is_kana());
    }

    #[test]
    fn str_to_hiragana() {
        assert_eq!("シェフ".to_hiragana(), "しぇふ");
        assert_eq!("abcアいウ".to_hiragana(), "abcあいう");
        assert!(matches!("abc".to_hiragana(), Cow::Borrowed("abc")));
        assert!(matches!("".to_hiragana(), Cow::Borrowed("")));
        assert_eq!("ひらがな".to_katakana(), "ヒラガナ");
    }

    #[test]
    fn kana_lead_byte() {
        for c in [HIRAGANA_FIRST, HIRAGANA_LAST, KATAKANA_FIRST, KATAKANA_LAST] {
            let mut buf = [0; 4];
            assert_eq!(c.encode_utf8(&mut buf).as_bytes()[0], KANA_LEAD_BYTE);
        }
        assert_eq!(find_kana_lead_byte(b""), None);
        assert_eq!(find_kana_lead_byte("ア".as_bytes()), Some(0));
        assert_eq!(find_kana_lead_byte("1、".as_bytes()), Some(1));
    }
}
