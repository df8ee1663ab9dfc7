//! Kana Unicode utils.
/*!
## Features
- Katakana ↔ hiragana [normalization](kana)
- Kana classification
- Fast search for the next possible kana in a haystack

## Crate features
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]
pub mod kana;

mod private {
    pub trait Sealed {}
}
use private::Sealed;

impl Sealed for char {}
impl Sealed for str {}
