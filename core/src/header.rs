//! This module contains the basic data types for interpreting a DICOM data element:
//! the attribute tag, the value representation,
//! and the element type which pairs both with an untyped value.

use crate::value::{DicomValueType, PrimitiveValue};
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::fmt;
use std::str::FromStr;

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// A tag is a `(group, element)` pair of 16-bit numbers.
/// Both `(u16, u16)` and `[u16; 2]` can be
/// efficiently converted to this type as well.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Check whether this tag belongs to a private group.
    ///
    /// Private groups have an odd group number,
    /// so no standard dictionary entry can be authoritative for them.
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// An error returned when parsing an invalid tag expression.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseTagError {
    /// the expression does not have 8 hexadecimal digits
    #[snafu(display("tag expression has {} hexadecimal digits, but must have 8", got))]
    InvalidTagLength { got: usize, backtrace: Backtrace },
    /// a tag component is not hexadecimal
    #[snafu(display("invalid tag component"))]
    InvalidTagComponent {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
}

/// Parse a tag in one of the forms
/// `(gggg,eeee)`, `gggg,eeee`, or `ggggeeee`.
impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('(') && s.ends_with(')') {
            s = &s[1..s.len() - 1];
        }
        let (group, elem) = match s.split_once(',') {
            Some((group, elem)) => {
                ensure!(
                    group.len() == 4 && elem.len() == 4,
                    InvalidTagLengthSnafu {
                        got: group.len() + elem.len()
                    }
                );
                (group, elem)
            }
            None => {
                ensure!(
                    s.len() == 8 && s.is_char_boundary(4),
                    InvalidTagLengthSnafu { got: s.len() }
                );
                s.split_at(4)
            }
        };
        let group = u16::from_str_radix(group, 16).context(InvalidTagComponentSnafu)?;
        let elem = u16::from_str_radix(elem, 16).context(InvalidTagComponentSnafu)?;
        Ok(Tag(group, elem))
    }
}

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// Retrieve a string representation of this VR.
    #[allow(clippy::inherent_to_string_shadow_display)]
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// A data type that represents and owns a DICOM data element
/// whose value has already been located and decoded by a stream reader.
///
/// The declared value representation is kept as read,
/// regardless of whether it is consistent with the value.
/// Elements are never modified once constructed.
#[derive(Debug, PartialEq, Clone)]
pub struct DataElement {
    tag: Tag,
    vr: VR,
    value: PrimitiveValue,
}

impl DataElement {
    /// Create a data element from the given parts.
    ///
    /// This method will not check whether the value representation is
    /// compatible with the given value.
    pub fn new<T>(tag: Tag, vr: VR, value: T) -> Self
    where
        T: Into<PrimitiveValue>,
    {
        DataElement {
            tag,
            vr,
            value: value.into(),
        }
    }

    /// Create an empty data element.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        DataElement {
            tag,
            vr,
            value: PrimitiveValue::Empty,
        }
    }

    /// Retrieve the element's tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Retrieve the declared value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Retrieve the untyped data value.
    #[inline]
    pub fn value(&self) -> &PrimitiveValue {
        &self.value
    }

    /// Retrieve the number of values in the element.
    pub fn multiplicity(&self) -> usize {
        self.value.cardinality()
    }

    /// Move the data value out of the element, discarding the rest.
    pub fn into_value(self) -> PrimitiveValue {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dicom_value;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_from_u16_array() {
        let t = Tag::from([0x0010u16, 0x0020u16]);
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_privacy_follows_group_parity() {
        assert!(!Tag(0x0010, 0x0010).is_private());
        assert!(Tag(0x0009, 0x0010).is_private());
        assert!(Tag(0x7FE1, 0x0001).is_private());
        assert!(!Tag(0x7FE0, 0x0010).is_private());
    }

    #[test]
    fn parse_tag_expressions() {
        assert_eq!("(0010,0010)".parse::<Tag>().unwrap(), Tag(0x0010, 0x0010));
        assert_eq!("7FE0,0010".parse::<Tag>().unwrap(), Tag(0x7FE0, 0x0010));
        assert_eq!("00100030".parse::<Tag>().unwrap(), Tag(0x0010, 0x0030));

        assert!("".parse::<Tag>().is_err());
        assert!("0010,001".parse::<Tag>().is_err());
        assert!("1111,2222,3333".parse::<Tag>().is_err());
        assert!("PatientName".parse::<Tag>().is_err());
    }

    #[test]
    fn tag_display() {
        assert_eq!(Tag(0x0010, 0x0010).to_string(), "(0010,0010)");
        assert_eq!(Tag(0x7FE0, 0x0010).to_string(), "(7FE0,0010)");
    }

    #[test]
    fn vr_roundtrips_through_text() {
        assert_eq!("PN".parse::<VR>(), Ok(VR::PN));
        assert_eq!(VR::TM.to_string(), "TM");
        assert_eq!("DT".parse::<VR>(), Ok(VR::DT));
        assert!("ZZ".parse::<VR>().is_err());
        assert!("pn".parse::<VR>().is_err());
        assert_eq!(format!("{}", VR::DA), "DA");
    }

    #[test]
    fn element_keeps_declared_parts() {
        let element = DataElement::new(
            Tag(0x0008, 0x0060),
            VR::CS,
            dicom_value!(Strs, ["MR"]),
        );
        assert_eq!(element.tag(), Tag(0x0008, 0x0060));
        assert_eq!(element.vr(), VR::CS);
        assert_eq!(element.multiplicity(), 1);

        let element = DataElement::empty(Tag(0x0010, 0x0010), VR::PN);
        assert_eq!(element.value(), &PrimitiveValue::Empty);
        assert_eq!(element.multiplicity(), 0);
    }
}
