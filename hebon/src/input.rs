/**
The text to romanize.

Stores the entire haystack and a start offset, so a caller scanning a larger
text can romanize from the middle of it without re-slicing.

An absent text (`None`) is the same as an empty one:
```
use hebon::Input;

assert!(Input::from(None::<&str>).is_empty());
assert_eq!(Input::new("ひらがな", 6).as_ref(), "がな");
```
*/
#[derive(Clone, Copy, Debug)]
pub struct Input<'h> {
    haystack: &'h str,
    start: usize,
}

impl<'h> Input<'h> {
    /// `start` is a byte offset and must be on a char boundary of `haystack`.
    /// Out of range offsets are clamped to the end.
    #[inline]
    pub fn new<H: ?Sized + AsRef<str>>(haystack: &'h H, start: usize) -> Self {
        let haystack = haystack.as_ref();
        Self {
            haystack,
            start: start.min(haystack.len()),
        }
    }

    #[inline]
    pub fn haystack(&self) -> &'h str {
        self.haystack
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }
}

impl<'h, H: ?Sized + AsRef<str>> From<&'h H> for Input<'h> {
    fn from(haystack: &'h H) -> Self {
        Self::new(haystack, 0)
    }
}

impl<'h, H: ?Sized + AsRef<str>> From<Option<&'h H>> for Input<'h> {
    fn from(haystack: Option<&'h H>) -> Self {
        match haystack {
            Some(haystack) => Self::new(haystack, 0),
            None => Self::new("", 0),
        }
    }
}

impl<'h> AsRef<str> for Input<'h> {
    fn as_ref(&self) -> &'h str {
        self.haystack.get(self.start..).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input() {
        let s = String::from("きゃりー");
        let input = Input::from(&s);
        assert_eq!(input.as_ref(), "きゃりー");
        assert_eq!(input.start(), 0);

        let input = Input::new(&s, 6);
        assert_eq!(input.haystack(), "きゃりー");
        assert_eq!(input.as_ref(), "りー");

        assert!(Input::new(&s, 100).is_empty());
        // Not a char boundary
        assert!(Input::new(&s, 1).is_empty());

        assert!(Input::from(Some("か")).as_ref() == "か");
        assert!(Input::from(None::<&str>).is_empty());
    }
}
