/*!
Romaji output accumulators.

The romanizer only appends, and the long vowel mark `ー` needs to
[peek](RomajiOutput::last_char) the last emitted char, which may come from a
digraph, a geminated consonant or a passed-through char.
*/

pub trait RomajiOutput {
    fn push_romaji(&mut self, romaji: &str);

    fn push_char(&mut self, c: char);

    /// The last char emitted so far, `None` if nothing has been emitted.
    fn last_char(&self) -> Option<char>;
}

impl RomajiOutput for String {
    #[inline]
    fn push_romaji(&mut self, romaji: &str) {
        self.push_str(romaji);
    }

    #[inline]
    fn push_char(&mut self, c: char) {
        self.push(c);
    }

    #[inline]
    fn last_char(&self) -> Option<char> {
        self.chars().next_back()
    }
}
