//! The standard data element dictionary,
//! built once on first use and read-only thereafter.

use crate::tags::ENTRIES;
use dicom_value_core::dictionary::{DataDictionary, DataDictionaryEntryRef, TagRange::*, VirtualVr};
use dicom_value_core::header::Tag;
use dicom_value_core::VR;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fmt::{Display, Formatter};

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardDataDictionary`]
/// already provides a lazy loaded singleton implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard dictionary.
///
/// There is no way to modify the registry once it is built,
/// so it can be read concurrently from any thread.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// mapping: name → entry
    by_name: HashMap<&'static str, &'static DataDictionaryEntryRef<'static>>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DataDictionaryEntryRef<'static>>,
    /// repeating elements of the form (ggxx, eeee). The `xx` portion is zeroed.
    repeating_ggxx: HashSet<Tag>,
    /// repeating elements of the form (gggg, eexx). The `xx` portion is zeroed.
    repeating_eexx: HashSet<Tag>,
}

impl StandardDataDictionaryRegistry {
    fn new() -> StandardDataDictionaryRegistry {
        StandardDataDictionaryRegistry {
            by_name: HashMap::with_capacity(ENTRIES.len() + 1),
            by_tag: HashMap::with_capacity(ENTRIES.len()),
            repeating_ggxx: HashSet::new(),
            repeating_eexx: HashSet::new(),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static DataDictionaryEntryRef<'static>) -> &mut Self {
        self.by_name.insert(entry.alias, entry);
        self.by_tag.insert(entry.tag.inner(), entry);
        match entry.tag {
            Group100(tag) => {
                self.repeating_ggxx.insert(tag);
            }
            Element100(tag) => {
                self.repeating_eexx.insert(tag);
            }
            _ => {}
        }
        self
    }

    /// The number of attribute records indexed by keyword.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterate over all attribute records, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &'static DataDictionaryEntryRef<'static>> + '_ {
        self.by_name.values().copied()
    }
}

/// Generic Group Length dictionary entry.
static GROUP_LENGTH_ENTRY: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
    tag: GroupLength,
    alias: "GenericGroupLength",
    vr: VirtualVr::Exact(VR::UL),
    vm: "1",
};

/// Generic Private Creator dictionary entry.
static PRIVATE_CREATOR_ENTRY: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
    tag: PrivateCreator,
    alias: "PrivateCreator",
    vr: VirtualVr::Exact(VR::LO),
    vm: "1",
};

/// A data element dictionary which consults
/// the library's global DICOM attribute registry.
///
/// This is the type which would generally be used
/// whenever a data element dictionary is needed,
/// such as when checking a value's conformance
/// to the multiplicity of its attribute.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl StandardDataDictionary {
    fn indexed_tag(tag: Tag) -> Option<&'static DataDictionaryEntryRef<'static>> {
        let r = registry();

        r.by_tag
            .get(&tag)
            .or_else(|| {
                // check tags repeating in different groups
                let group_trimmed = Tag(tag.0 & 0xFF00, tag.1);
                if r.repeating_ggxx.contains(&group_trimmed) {
                    return r.by_tag.get(&group_trimmed);
                }
                // check tags repeating in different elements
                let elem_trimmed = Tag(tag.0, tag.1 & 0xFF00);
                if r.repeating_eexx.contains(&elem_trimmed) {
                    return r.by_tag.get(&elem_trimmed);
                }

                None
            })
            .copied()
            .or_else(|| {
                if PRIVATE_CREATOR_ENTRY.tag.contains(tag) {
                    return Some(&PRIVATE_CREATOR_ENTRY);
                }
                if GROUP_LENGTH_ENTRY.tag.contains(tag) {
                    return Some(&GROUP_LENGTH_ENTRY);
                }

                None
            })
    }
}

impl DataDictionary for StandardDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        registry().by_name.get(name).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        StandardDataDictionary::indexed_tag(tag)
    }
}

impl Display for StandardDataDictionary {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        f.write_str("Standard DICOM Data Dictionary")
    }
}

fn init_dictionary() -> StandardDataDictionaryRegistry {
    let mut d = StandardDataDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    // generic group length has no tag of its own,
    // it is only reachable by name
    d.by_name.insert(GROUP_LENGTH_ENTRY.alias, &GROUP_LENGTH_ENTRY);
    tracing::debug!("Standard data dictionary initialized with {} entries", d.len());
    d
}

#[cfg(test)]
mod tests {
    use super::{registry, StandardDataDictionary};
    use dicom_value_core::dictionary::{
        DataDictionary, DataDictionaryEntry, DataDictionaryEntryRef, TagRange::*,
        ValueMultiplicity, VirtualVr,
    };
    use dicom_value_core::header::{Tag, VR};

    // tests for just a few attributes to make sure that the entries
    // were well installed into the crate
    #[test]
    fn smoke_test() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_name("PatientName"),
            Some(&DataDictionaryEntryRef {
                tag: Single(Tag(0x0010, 0x0010)),
                alias: "PatientName",
                vr: VirtualVr::Exact(VR::PN),
                vm: "1",
            })
        );

        assert_eq!(
            dict.by_name("ImageType"),
            Some(&DataDictionaryEntryRef {
                tag: Single(Tag(0x0008, 0x0008)),
                alias: "ImageType",
                vr: VirtualVr::Exact(VR::CS),
                vm: "2-n",
            })
        );

        let pixel_data = dict
            .by_tag(Tag(0x7FE0, 0x0010))
            .expect("Pixel Data attribute should exist");
        assert_eq!(pixel_data.tag, Single(Tag(0x7FE0, 0x0010)));
        assert_eq!(pixel_data.alias, "PixelData");
        assert_eq!(pixel_data.vr, VirtualVr::Px);

        // repeated overlay data
        let overlay_data = dict
            .by_tag(Tag(0x60EE, 0x3000))
            .expect("Repeated Overlay Data attribute should exist");
        assert_eq!(overlay_data.tag, Group100(Tag(0x6000, 0x3000)));
        assert_eq!(overlay_data.alias, "OverlayData");
        assert_eq!(overlay_data.vr.relaxed(), VR::OW);

        // repeated element
        let source_image_ids = dict
            .by_tag(Tag(0x0020, 0x3105))
            .expect("Source Image IDs attribute should exist");
        assert_eq!(source_image_ids.alias, "SourceImageIDs");
    }

    #[test]
    fn multiplicities_are_recorded() {
        let dict = StandardDataDictionary;

        let vm = |tag| dict.by_tag(tag).and_then(|e| e.multiplicity());
        assert_eq!(vm(crate::tags::PATIENT_NAME), Some(ValueMultiplicity::Exact(1)));
        assert_eq!(vm(crate::tags::PIXEL_SPACING), Some(ValueMultiplicity::Exact(2)));
        assert_eq!(
            vm(crate::tags::OPERATORS_NAME),
            Some(ValueMultiplicity::Unbounded { min: 1, step: 1 })
        );
        assert_eq!(dict.by_tag(crate::tags::PIXEL_SPACING).unwrap().vm(), "2");

        // every record carries a well formed multiplicity
        for entry in registry().entries() {
            assert!(
                entry.multiplicity().is_some(),
                "bad VM `{}` in {}",
                entry.vm,
                entry.alias
            );
        }
    }

    #[test]
    fn covers_the_attribute_registry() {
        let dict = StandardDataDictionary;

        assert!(registry().len() > 2000);

        let acquisition_matrix = dict
            .by_tag(Tag(0x0018, 0x1310))
            .expect("Acquisition Matrix attribute should exist");
        assert_eq!(acquisition_matrix.alias, "AcquisitionMatrix");
        assert_eq!(acquisition_matrix.vr, VirtualVr::Exact(VR::US));
        assert_eq!(
            acquisition_matrix.multiplicity(),
            Some(ValueMultiplicity::Exact(4))
        );

        let imager_pixel_spacing = dict
            .by_name("ImagerPixelSpacing")
            .expect("Imager Pixel Spacing attribute should exist");
        assert_eq!(imager_pixel_spacing.tag(), crate::tags::IMAGER_PIXEL_SPACING);
        assert_eq!(imager_pixel_spacing.vm, "2");

        assert_eq!(
            dict.by_tag(Tag(0x3006, 0x0050)).and_then(|e| e.multiplicity()),
            Some(ValueMultiplicity::Unbounded { min: 3, step: 3 })
        );

        // repeating curve group
        let curve_data = dict
            .by_tag(Tag(0x5002, 0x3000))
            .expect("Repeated Curve Data attribute should exist");
        assert_eq!(curve_data.tag, Group100(Tag(0x5000, 0x3000)));
        assert_eq!(curve_data.vr, VirtualVr::Ox);
    }

    #[test]
    fn constants_available() {
        use crate::tags::*;
        assert_eq!(PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(STATUS, Tag(0x0000, 0x0900));
        assert_eq!(ACQUISITION_DATE_TIME, Tag(0x0008, 0x002A));
    }

    #[test]
    fn can_parse_tags() {
        let dict = StandardDataDictionary;

        assert_eq!(dict.parse_tag("(7FE0,0010)"), Some(crate::tags::PIXEL_DATA));
        assert_eq!(dict.parse_tag("0010,21C0"), Some(Tag(0x0010, 0x21C0)));
        assert_eq!(
            dict.parse_tag("OperatorsName"),
            Some(crate::tags::OPERATORS_NAME)
        );

        // can't parse these
        assert_eq!(dict.parse_tag(""), None);
        assert_eq!(dict.parse_tag("1111,2222,3333"), None);
        assert_eq!(dict.parse_tag("OperatorNickname"), None);
    }

    #[test]
    fn can_query_by_expression() {
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_expr("(0010,0010)").map(|e| e.alias),
            Some("PatientName")
        );
        assert_eq!(dict.by_expr("0008,0060").map(|e| e.alias), Some("Modality"));
        assert_eq!(
            dict.by_expr("OperatorsName").map(|e| e.tag()),
            Some(crate::tags::OPERATORS_NAME)
        );

        // can't handle these
        assert_eq!(dict.by_expr("0080 0010"), None);
        assert_eq!(dict.by_expr("OPERATORSNAME"), None);
    }

    #[test]
    fn has_group_length_tags() {
        use crate::tags::*;
        let dict = StandardDataDictionary;

        assert_eq!(
            dict.by_tag(FILE_META_INFORMATION_GROUP_LENGTH).map(|e| e.alias),
            Some("FileMetaInformationGroupLength"),
        );
        assert_eq!(
            dict.by_tag(COMMAND_GROUP_LENGTH).map(|e| e.alias),
            Some("CommandGroupLength"),
        );

        // generic group length
        let generic = DataDictionaryEntryRef {
            tag: GroupLength,
            alias: "GenericGroupLength",
            vr: VirtualVr::Exact(VR::UL),
            vm: "1",
        };
        assert_eq!(dict.by_tag(Tag(0x7FE0, 0x0000)), Some(&generic));
        assert_eq!(dict.by_name("GenericGroupLength"), Some(&generic));
    }

    #[test]
    fn has_private_creator() {
        let dict = StandardDataDictionary;

        let private_creator = DataDictionaryEntryRef {
            tag: PrivateCreator,
            alias: "PrivateCreator",
            vr: VirtualVr::Exact(VR::LO),
            vm: "1",
        };

        assert_eq!(dict.by_tag(Tag(0x0009, 0x0010)), Some(&private_creator));
        assert_eq!(dict.by_tag(Tag(0x0009, 0x0011)), Some(&private_creator));
        assert_eq!(dict.by_tag(Tag(0x000B, 0x0010)), Some(&private_creator));
        assert_eq!(dict.by_tag(Tag(0x00ED, 0x00FF)), Some(&private_creator));
        // other private attributes are unknown
        assert_eq!(dict.by_tag(Tag(0x0009, 0x1001)), None);
    }

    #[test]
    fn can_be_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    StandardDataDictionary
                        .by_name("StudyDate")
                        .map(|e| e.tag())
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(crate::tags::STUDY_DATE));
        }
    }
}
