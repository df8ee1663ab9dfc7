/*!
Kana to Hepburn romaji tables.

Both tables are keyed by hiragana; katakana are [normalized](hebon_unicode::kana)
before lookup. The only exceptions are `ヷ ヸ ヹ ヺ`, which have no hiragana
counterpart and are keyed as is.
*/

/// `っ`
pub const SOKUON: char = 'っ';
/// `ー`
pub const CHOONPU: char = 'ー';
/// `ん`
pub const HATSUON: char = 'ん';

/// The longest romaji in [`single_romaji()`] and [`digraph_romaji()`].
pub const KANA_ROMAJI_MAX_LEN: usize = 3;

/// Romanize a single kana.
///
/// Returns `None` for `っ`, `ー` and every non-kana, which the caller handles by context
/// or passes through.
#[rustfmt::skip]
pub const fn single_romaji(kana: char) -> Option<&'static str> {
    Some(match kana {
        'あ' => "a", 'い' => "i", 'う' => "u", 'え' => "e", 'お' => "o",
        'か' => "ka", 'き' => "ki", 'く' => "ku", 'け' => "ke", 'こ' => "ko",
        'さ' => "sa", 'し' => "shi", 'す' => "su", 'せ' => "se", 'そ' => "so",
        'た' => "ta", 'ち' => "chi", 'つ' => "tsu", 'て' => "te", 'と' => "to",
        'な' => "na", 'に' => "ni", 'ぬ' => "nu", 'ね' => "ne", 'の' => "no",
        'は' => "ha", 'ひ' => "hi", 'ふ' => "fu", 'へ' => "he", 'ほ' => "ho",
        'ま' => "ma", 'み' => "mi", 'む' => "mu", 'め' => "me", 'も' => "mo",
        'や' => "ya", 'ゆ' => "yu", 'よ' => "yo",
        'ら' => "ra", 'り' => "ri", 'る' => "ru", 'れ' => "re", 'ろ' => "ro",
        'わ' => "wa", 'を' => "wo", 'ん' => "n",
        // Historical
        'ゐ' => "i", 'ゑ' => "e",

        'が' => "ga", 'ぎ' => "gi", 'ぐ' => "gu", 'げ' => "ge", 'ご' => "go",
        'ざ' => "za", 'じ' => "ji", 'ず' => "zu", 'ぜ' => "ze", 'ぞ' => "zo",
        'だ' => "da", 'ぢ' => "ji", 'づ' => "zu", 'で' => "de", 'ど' => "do",
        'ば' => "ba", 'び' => "bi", 'ぶ' => "bu", 'べ' => "be", 'ぼ' => "bo",
        'ぱ' => "pa", 'ぴ' => "pi", 'ぷ' => "pu", 'ぺ' => "pe", 'ぽ' => "po",
        'ゔ' => "vu",
        // ヷヸヹヺ
        '\u{30F7}' => "va", '\u{30F8}' => "vi", '\u{30F9}' => "ve", '\u{30FA}' => "vo",

        // Standalone small kana
        'ぁ' => "a", 'ぃ' => "i", 'ぅ' => "u", 'ぇ' => "e", 'ぉ' => "o",
        'ゃ' => "ya", 'ゅ' => "yu", 'ょ' => "yo", 'ゎ' => "wa",
        'ゕ' => "ka", 'ゖ' => "ke",
        _ => return None,
    })
}

/// Romanize a two-kana sequence: yōon and the small-vowel extensions used by loanwords.
///
/// A match always takes priority over romanizing the two kana separately.
#[rustfmt::skip]
pub const fn digraph_romaji(first: char, second: char) -> Option<&'static str> {
    Some(match (first, second) {
        ('き', 'ゃ') => "kya", ('き', 'ゅ') => "kyu", ('き', 'ょ') => "kyo",
        ('し', 'ゃ') => "sha", ('し', 'ゅ') => "shu", ('し', 'ょ') => "sho",
        ('ち', 'ゃ') => "cha", ('ち', 'ゅ') => "chu", ('ち', 'ょ') => "cho",
        ('に', 'ゃ') => "nya", ('に', 'ゅ') => "nyu", ('に', 'ょ') => "nyo",
        ('ひ', 'ゃ') => "hya", ('ひ', 'ゅ') => "hyu", ('ひ', 'ょ') => "hyo",
        ('み', 'ゃ') => "mya", ('み', 'ゅ') => "myu", ('み', 'ょ') => "myo",
        ('り', 'ゃ') => "rya", ('り', 'ゅ') => "ryu", ('り', 'ょ') => "ryo",
        ('ぎ', 'ゃ') => "gya", ('ぎ', 'ゅ') => "gyu", ('ぎ', 'ょ') => "gyo",
        ('じ', 'ゃ') => "ja", ('じ', 'ゅ') => "ju", ('じ', 'ょ') => "jo",
        ('ぢ', 'ゃ') => "ja", ('ぢ', 'ゅ') => "ju", ('ぢ', 'ょ') => "jo",
        ('び', 'ゃ') => "bya", ('び', 'ゅ') => "byu", ('び', 'ょ') => "byo",
        ('ぴ', 'ゃ') => "pya", ('ぴ', 'ゅ') => "pyu", ('ぴ', 'ょ') => "pyo",

        // Loanwords
        ('し', 'ぇ') => "she", ('ち', 'ぇ') => "che", ('じ', 'ぇ') => "je",
        ('て', 'ぃ') => "ti", ('で', 'ぃ') => "di",
        ('と', 'ぅ') => "tu", ('ど', 'ぅ') => "du",
        ('て', 'ゅ') => "tyu", ('で', 'ゅ') => "dyu",
        ('う', 'ぃ') => "wi", ('う', 'ぇ') => "we", ('う', 'ぉ') => "wo",
        ('い', 'ぇ') => "ye",
        ('く', 'ぁ') => "kwa", ('ぐ', 'ぁ') => "gwa",
        ('ふ', 'ぁ') => "fa", ('ふ', 'ぃ') => "fi", ('ふ', 'ぇ') => "fe", ('ふ', 'ぉ') => "fo",
        ('ふ', 'ゅ') => "fyu",
        ('つ', 'ぁ') => "tsa", ('つ', 'ぇ') => "tse", ('つ', 'ぉ') => "tso",
        ('ゔ', 'ぁ') => "va", ('ゔ', 'ぃ') => "vi", ('ゔ', 'ぇ') => "ve", ('ゔ', 'ぉ') => "vo",
        ('ゔ', 'ゃ') => "vya", ('ゔ', 'ゅ') => "vyu", ('ゔ', 'ょ') => "vyo",
        _ => return None,
    })
}
