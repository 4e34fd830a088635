//! Core data element dictionary types

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};

use crate::header::{Tag, VR};

/// Specification of a range of tags pertaining to an attribute.
/// Very often, the dictionary of attributes indicates a unique
/// group part and element part `(group,elem)`,
/// but occasionally an attribute may cover
/// a range of groups or elements instead.
/// For example,
/// _Overlay Data_ (60xx,3000) has more than one possible tag,
/// since it is part of a repeating group.
/// Moreover, a unique variant is defined for group length tags
/// and another one for private creator tags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TagRange {
    /// Only a specific tag
    Single(Tag),
    /// The two rightmost digits of the _group_ portion are open:
    /// `(GGxx,EEEE)`
    Group100(Tag),
    /// The two rightmost digits of the _element_ portion are open:
    /// `(GGGG,EExx)`
    Element100(Tag),
    /// Generic group length tag,
    /// refers to any attribute of the form `(GGGG,0000)`,
    /// _save for the following exceptions_
    /// which have their own single tag record:
    ///
    /// - _Command Group Length_ (0000,0000)
    /// - _File Meta Information Group Length_ (0002,0000)
    GroupLength,
    /// Generic private creator tag,
    /// refers to any tag from (GGGG,0010) to (GGGG,00FF),
    /// where `GGGG` is an odd number.
    PrivateCreator,
}

impl TagRange {
    /// Retrieve the inner tag representation of this range.
    ///
    /// Open components are zeroed out.
    /// Returns a zeroed out tag
    /// (equivalent to _Command Group Length_)
    /// if it is a group length tag.
    /// If it is a private creator tag,
    /// this method returns `Tag(0x0009, 0x0010)`.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) => tag,
            TagRange::Group100(tag) => tag,
            TagRange::Element100(tag) => tag,
            TagRange::GroupLength => Tag(0x0000, 0x0000),
            TagRange::PrivateCreator => Tag(0x0009, 0x0010),
        }
    }

    /// Check whether the given tag is covered by this range.
    pub fn contains(self, tag: Tag) -> bool {
        match self {
            TagRange::Single(t) => t == tag,
            TagRange::Group100(t) => t.0 == tag.0 & 0xFF00 && t.1 == tag.1,
            TagRange::Element100(t) => t.0 == tag.0 && t.1 == tag.1 & 0xFF00,
            TagRange::GroupLength => tag.1 == 0x0000,
            TagRange::PrivateCreator => tag.is_private() && (0x0010..=0x00FF).contains(&tag.1),
        }
    }
}

/// An error returned when parsing an invalid tag range.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum TagRangeParseError {
    #[snafu(display("Not enough tag components, expected tag (group, element)"))]
    MissingTag { backtrace: Backtrace },
    #[snafu(display("Not enough tag components, expected tag element"))]
    MissingTagElement { backtrace: Backtrace },
    #[snafu(display(
        "tag component `group` has an invalid length: got {} but must be 4",
        got
    ))]
    InvalidGroupLength { got: usize, backtrace: Backtrace },
    #[snafu(display(
        "tag component `element` has an invalid length: got {} but must be 4",
        got
    ))]
    InvalidElementLength { got: usize, backtrace: Backtrace },
    #[snafu(display("unsupported tag range"))]
    UnsupportedTagRange { backtrace: Backtrace },
    #[snafu(display("invalid tag component `group`"))]
    InvalidTagGroup {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
    #[snafu(display("invalid tag component `element`"))]
    InvalidTagElement {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
}

impl FromStr for TagRange {
    type Err = TagRangeParseError;

    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('(') && s.ends_with(')') {
            s = &s[1..s.len() - 1];
        }
        let mut parts = s.split(',');
        let group = parts.next().context(MissingTagSnafu)?;
        let elem = parts.next().context(MissingTagElementSnafu)?;
        ensure!(
            group.len() == 4,
            InvalidGroupLengthSnafu { got: group.len() }
        );
        ensure!(
            elem.len() == 4,
            InvalidElementLengthSnafu { got: elem.len() }
        );

        match (&group.as_bytes()[2..], &elem.as_bytes()[2..]) {
            (b"xx", b"xx") => UnsupportedTagRangeSnafu.fail(),
            (b"xx", _) => {
                let group =
                    u16::from_str_radix(&group[..2], 16).context(InvalidTagGroupSnafu)? << 8;
                let elem = u16::from_str_radix(elem, 16).context(InvalidTagElementSnafu)?;
                Ok(TagRange::Group100(Tag(group, elem)))
            }
            (_, b"xx") => {
                let group = u16::from_str_radix(group, 16).context(InvalidTagGroupSnafu)?;
                let elem =
                    u16::from_str_radix(&elem[..2], 16).context(InvalidTagElementSnafu)? << 8;
                Ok(TagRange::Element100(Tag(group, elem)))
            }
            (_, _) => {
                let group = u16::from_str_radix(group, 16).context(InvalidTagGroupSnafu)?;
                let elem = u16::from_str_radix(elem, 16).context(InvalidTagElementSnafu)?;
                Ok(TagRange::Single(Tag(group, elem)))
            }
        }
    }
}

/// A "virtual" value representation (VR) descriptor
/// which extends the standard enumeration with context-dependent VRs.
///
/// It is used by element dictionary entries to describe circumstances
/// in which the real VR may depend on context.
/// As an example, the _Pixel Data_ attribute
/// can have a value representation of either [`OB`](VR::OB) or [`OW`](VR::OW).
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum VirtualVr {
    /// The value representation is exactly known
    /// and does not depend on context.
    Exact(VR),
    /// Represents a pixel data sample value
    /// with a short magnitude,
    /// either [`SS`](VR::SS) or [`US`](VR::US)
    /// depending on the pixel representation.
    Xs,
    /// Represents overlay data sample values.
    ///
    /// It can be either [`OB`](VR::OB) or [`OW`](VR::OW).
    Ox,
    /// Represents pixel data sample value.
    ///
    /// It can be either [`OB`](VR::OB) or [`OW`](VR::OW).
    Px,
    /// Represents LUT data, which can be [`US`](VR::US) or [`OW`](VR::OW)
    Lt,
}

impl From<VR> for VirtualVr {
    fn from(value: VR) -> Self {
        VirtualVr::Exact(value)
    }
}

impl VirtualVr {
    /// Return the underlying value representation
    /// in the case that it can be unambiguously defined without context.
    pub fn exact(self) -> Option<VR> {
        match self {
            VirtualVr::Exact(vr) => Some(vr),
            _ => None,
        }
    }

    /// Return the underlying value representation,
    /// making a relaxed conversion if it cannot be
    /// accurately resolved without context.
    ///
    /// - [`Xs`](VirtualVr::Xs) is relaxed to [`US`](VR::US)
    /// - [`Ox`](VirtualVr::Ox) is relaxed to [`OW`](VR::OW)
    /// - [`Px`](VirtualVr::Px) is relaxed to [`OW`](VR::OW)
    /// - [`Lt`](VirtualVr::Lt) is relaxed to [`OW`](VR::OW)
    pub fn relaxed(self) -> VR {
        match self {
            VirtualVr::Exact(vr) => vr,
            VirtualVr::Xs => VR::US,
            VirtualVr::Ox => VR::OW,
            VirtualVr::Px => VR::OW,
            VirtualVr::Lt => VR::OW,
        }
    }
}

/// The value multiplicity (VM) of an attribute,
/// as written in the data dictionary
/// (e.g. `"1"`, `"1-3"`, `"1-n"`, `"2-2n"`).
///
/// # Example
///
/// ```
/// # use dicom_value_core::dictionary::ValueMultiplicity;
/// let vm: ValueMultiplicity = "2-2n".parse()?;
/// assert!(!vm.is_single_value());
/// assert!(vm.admits(4));
/// assert!(!vm.admits(3));
/// # Ok::<_, dicom_value_core::dictionary::ParseMultiplicityError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueMultiplicity {
    /// Exactly this number of values: `"N"`
    Exact(u32),
    /// Between `min` and `max` values, inclusive: `"M-N"`
    Range {
        /// the minimum number of values
        min: u32,
        /// the maximum number of values
        max: u32,
    },
    /// At least `min` values, in multiples of `step`:
    /// `"M-n"` (step 1) or `"M-Kn"` (step `K`)
    Unbounded {
        /// the minimum number of values
        min: u32,
        /// the number of values must be a multiple of this step
        step: u32,
    },
}

/// An error returned when parsing an invalid value multiplicity.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseMultiplicityError {
    /// the multiplicity is empty or has too many components
    #[snafu(display("invalid value multiplicity `{}`", vm))]
    InvalidMultiplicity { vm: String, backtrace: Backtrace },
    /// a bound of the multiplicity is not a number
    #[snafu(display("invalid bound in value multiplicity `{}`", vm))]
    InvalidBound {
        vm: String,
        source: std::num::ParseIntError,
        backtrace: Backtrace,
    },
}

impl ValueMultiplicity {
    /// Whether exactly one value is permitted.
    pub fn is_single_value(self) -> bool {
        self == ValueMultiplicity::Exact(1)
    }

    /// Whether a value with the given number of elements
    /// conforms to this multiplicity.
    pub fn admits(self, count: usize) -> bool {
        let Ok(count) = u32::try_from(count) else {
            return false;
        };
        match self {
            ValueMultiplicity::Exact(n) => count == n,
            ValueMultiplicity::Range { min, max } => (min..=max).contains(&count),
            ValueMultiplicity::Unbounded { min, step } => {
                count >= min && (step <= 1 || count % step == 0)
            }
        }
    }
}

impl FromStr for ValueMultiplicity {
    type Err = ParseMultiplicityError;

    fn from_str(vm: &str) -> Result<Self, Self::Err> {
        let mut parts = vm.trim().split('-');
        let min = parts
            .next()
            .filter(|p| !p.is_empty())
            .context(InvalidMultiplicitySnafu { vm })?;
        let min: u32 = min.parse().context(InvalidBoundSnafu { vm })?;

        let Some(max) = parts.next() else {
            return Ok(ValueMultiplicity::Exact(min));
        };
        ensure!(parts.next().is_none(), InvalidMultiplicitySnafu { vm });

        match max.strip_suffix('n') {
            Some("") => Ok(ValueMultiplicity::Unbounded { min, step: 1 }),
            Some(step) => Ok(ValueMultiplicity::Unbounded {
                min,
                step: step.parse().context(InvalidBoundSnafu { vm })?,
            }),
            None => Ok(ValueMultiplicity::Range {
                min,
                max: max.parse().context(InvalidBoundSnafu { vm })?,
            }),
        }
    }
}

impl fmt::Display for ValueMultiplicity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ValueMultiplicity::Exact(n) => write!(f, "{}", n),
            ValueMultiplicity::Range { min, max } => write!(f, "{}-{}", min, max),
            ValueMultiplicity::Unbounded { min, step: 1 } => write!(f, "{}-n", min),
            ValueMultiplicity::Unbounded { min, step } => write!(f, "{}-{}n", min, step),
        }
    }
}

/// Type trait for a dictionary of DICOM attributes.
///
/// The main purpose of an attribute dictionary is
/// to retrieve a record containing additional information about a data element,
/// in one of the following ways:
///
/// - By DICOM tag, via [`by_tag`][1];
/// - By its keyword (also known as alias) via [`by_name`][2];
/// - By an expression which may either be a keyword
///   or a tag printed in one of its standard forms,
///   using [`by_expr`][3].
///
/// These methods will return `None`
/// when the tag or name is not recognized by the dictionary.
/// A miss is not an error:
/// it only means that no constraint is known for the attribute.
///
/// Implementations are read-only once built,
/// and may be shared freely across threads.
///
/// [1]: DataDictionary::by_tag
/// [2]: DataDictionary::by_name
/// [3]: DataDictionary::by_expr
pub trait DataDictionary {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Fetch a data element entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Fetch an entry by its usual alias
    /// (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases (or keyword)
    /// are usually in UpperCamelCase,
    /// not separated by spaces,
    /// and are case sensitive.
    ///
    /// Querying the dictionary by name is usually
    /// slightly more expensive than by DICOM tag.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its alias or by DICOM tag expression.
    ///
    /// This method accepts a tag descriptor in any of the following formats:
    ///
    /// - `(gggg,eeee)`:
    ///   a 4-digit hexadecimal group part
    ///   and a 4-digit hexadecimal element part
    ///   surrounded by parentheses
    /// - `gggg,eeee`:
    ///   a 4-digit hexadecimal group part
    ///   and a 4-digit hexadecimal element part
    ///   not surrounded by parentheses
    /// - _`KeywordName`_:
    ///   an exact match (case sensitive) by DICOM tag keyword
    ///
    /// When failing to identify the intended syntax or the tag keyword,
    /// `None` is returned.
    fn by_expr(&self, tag: &str) -> Option<&Self::Entry> {
        match tag.parse() {
            Ok(tag) => self.by_tag(tag),
            Err(_) => self.by_name(tag),
        }
    }

    /// Use this data element dictionary to interpret a DICOM tag.
    ///
    /// This method accepts the same tag descriptors as
    /// [`by_expr`](DataDictionary::by_expr).
    /// Tags in their numeric form are returned
    /// even if they are not known to the dictionary.
    fn parse_tag(&self, tag: &str) -> Option<Tag> {
        tag.parse().ok().or_else(|| {
            // look for tag in the dictionary
            self.by_name(tag).map(|e| e.tag())
        })
    }
}

impl<T> DataDictionary for &T
where
    T: DataDictionary + ?Sized,
{
    type Entry = T::Entry;

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        (**self).by_tag(tag)
    }

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        (**self).by_name(name)
    }
}

/// The data element dictionary entry type,
/// representing a DICOM attribute.
pub trait DataDictionaryEntry {
    /// The full possible tag range of the attribute,
    /// which this dictionary entry can represent.
    fn tag_range(&self) -> TagRange;

    /// Fetch a single tag applicable to this attribute.
    ///
    /// Note that this is not necessarily
    /// the original tag used as key for this entry.
    fn tag(&self) -> Tag {
        self.tag_range().inner()
    }

    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;

    /// The extended value representation descriptor of the attribute.
    /// The use of [`VirtualVr`] is to attend to edge cases
    /// in which the representation of a value
    /// depends on surrounding context.
    fn vr(&self) -> VirtualVr;

    /// The value multiplicity of the attribute,
    /// exactly as written in the dictionary (e.g. `"1-n"`).
    fn vm(&self) -> &str;

    /// The parsed value multiplicity of the attribute.
    ///
    /// Returns `None` if the dictionary record is malformed.
    fn multiplicity(&self) -> Option<ValueMultiplicity> {
        self.vm().parse().ok()
    }
}

/// A data type for a dictionary entry with string slices
/// for its alias and multiplicity.
#[derive(Debug, PartialEq, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag or tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: &'a str,
    /// The extended value representation descriptor of the attribute
    pub vr: VirtualVr,
    /// The value multiplicity of the attribute
    pub vm: &'a str,
}

impl<'a> DataDictionaryEntry for DataDictionaryEntryRef<'a> {
    fn tag_range(&self) -> TagRange {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn vr(&self) -> VirtualVr {
        self.vr
    }
    fn vm(&self) -> &str {
        self.vm
    }
}

#[cfg(test)]
mod tests {
    use super::{DataDictionaryEntry, DataDictionaryEntryRef, TagRange, ValueMultiplicity, VirtualVr};
    use crate::header::{Tag, VR};
    use rstest::rstest;

    #[test]
    fn test_parse_tag_range() {
        let tag: TagRange = "(1234,5678)".parse().unwrap();
        assert_eq!(tag, TagRange::Single(Tag(0x1234, 0x5678)));

        let tag: TagRange = "1234,5678".parse().unwrap();
        assert_eq!(tag, TagRange::Single(Tag(0x1234, 0x5678)));

        let tag: TagRange = "12xx,5678".parse().unwrap();
        assert_eq!(tag, TagRange::Group100(Tag(0x1200, 0x5678)));

        let tag: TagRange = "1234,56xx".parse().unwrap();
        assert_eq!(tag, TagRange::Element100(Tag(0x1234, 0x5600)));

        assert!("12xx,56xx".parse::<TagRange>().is_err());
        assert!("123,5678".parse::<TagRange>().is_err());
        assert!("1234".parse::<TagRange>().is_err());
    }

    #[test]
    fn tag_range_contains() {
        assert!(TagRange::Group100(Tag(0x6000, 0x3000)).contains(Tag(0x6002, 0x3000)));
        assert!(!TagRange::Group100(Tag(0x6000, 0x3000)).contains(Tag(0x6002, 0x3001)));
        assert!(TagRange::Element100(Tag(0x0020, 0x3100)).contains(Tag(0x0020, 0x31FF)));
        assert!(TagRange::GroupLength.contains(Tag(0x0008, 0x0000)));
        assert!(TagRange::PrivateCreator.contains(Tag(0x0009, 0x0010)));
        assert!(!TagRange::PrivateCreator.contains(Tag(0x0008, 0x0010)));
    }

    #[rstest]
    #[case("1", ValueMultiplicity::Exact(1))]
    #[case("3", ValueMultiplicity::Exact(3))]
    #[case("1-3", ValueMultiplicity::Range { min: 1, max: 3 })]
    #[case("1-n", ValueMultiplicity::Unbounded { min: 1, step: 1 })]
    #[case("2-2n", ValueMultiplicity::Unbounded { min: 2, step: 2 })]
    fn parse_multiplicity(#[case] text: &str, #[case] expected: ValueMultiplicity) {
        let vm: ValueMultiplicity = text.parse().unwrap();
        assert_eq!(vm, expected);
        assert_eq!(vm.to_string(), text);
    }

    #[rstest]
    #[case("")]
    #[case("n")]
    #[case("1-")]
    #[case("1-2-3")]
    #[case("1-xn")]
    fn parse_bad_multiplicity(#[case] text: &str) {
        assert!(text.parse::<ValueMultiplicity>().is_err());
    }

    #[test]
    fn only_exactly_one_is_single_value() {
        assert!(ValueMultiplicity::Exact(1).is_single_value());
        assert!(!ValueMultiplicity::Exact(2).is_single_value());
        assert!(!ValueMultiplicity::Range { min: 1, max: 3 }.is_single_value());
        assert!(!ValueMultiplicity::Unbounded { min: 1, step: 1 }.is_single_value());
    }

    #[test]
    fn multiplicity_admits_counts() {
        let vm = ValueMultiplicity::Range { min: 1, max: 3 };
        assert!(!vm.admits(0));
        assert!(vm.admits(1));
        assert!(vm.admits(3));
        assert!(!vm.admits(4));

        let vm = ValueMultiplicity::Unbounded { min: 3, step: 3 };
        assert!(vm.admits(3));
        assert!(vm.admits(6));
        assert!(!vm.admits(4));

        let vm = ValueMultiplicity::Unbounded { min: 1, step: 1 };
        assert!(vm.admits(1));
        assert!(vm.admits(u32::MAX as usize));
        assert!(!vm.admits(0));
    }

    #[test]
    fn entry_exposes_parsed_multiplicity() {
        let entry = DataDictionaryEntryRef {
            tag: TagRange::Single(Tag(0x0028, 0x0030)),
            alias: "PixelSpacing",
            vr: VirtualVr::Exact(VR::DS),
            vm: "2",
        };
        assert_eq!(entry.tag(), Tag(0x0028, 0x0030));
        assert_eq!(entry.multiplicity(), Some(ValueMultiplicity::Exact(2)));
    }
}
