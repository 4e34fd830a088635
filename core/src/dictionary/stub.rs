//! This module contains a stub dictionary.

use super::{DataDictionary, DataDictionaryEntryRef};
use crate::header::Tag;

/// An empty attribute dictionary.
///
/// Every look-up misses,
/// so no conformance constraint is ever known through it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_name(&self, _: &str) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }

    fn by_tag(&self, _: Tag) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::StubDataDictionary;
    use crate::dictionary::DataDictionary;
    use crate::header::Tag;

    #[test]
    fn stub_always_misses() {
        let dict = StubDataDictionary;
        assert!(dict.by_tag(Tag(0x0010, 0x0010)).is_none());
        assert!(dict.by_name("PatientName").is_none());
        assert!(dict.by_expr("(0010,0010)").is_none());
        // numeric tags are still understood
        assert_eq!(dict.parse_tag("0010,0010"), Some(Tag(0x0010, 0x0010)));
        assert_eq!(dict.parse_tag("PatientName"), None);
    }
}
