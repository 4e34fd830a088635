//! Declaration and implementation of a DICOM primitive value.
//!
//! See [`PrimitiveValue`](./enum.PrimitiveValue.html).

use super::{DicomValueType, C};
use crate::header::Tag;
use crate::value::person_name::PersonName;
use crate::value::temporal::{DicomDate, DicomDateTime, DicomTime};
use itertools::Itertools;
use std::fmt;

/// An enum representing the untyped payload of a DICOM element,
/// as produced by the stream reader.
///
/// The set of variants is closed:
/// a value is inspected through pattern matching
/// and never changes variant after construction.
/// Multiple elements are contained in a [`smallvec`] vector,
/// conveniently aliased to the type [`C`].
///
/// See the macro [`dicom_value!`] for a more intuitive means
/// of constructing these values.
///
/// # Example
///
/// ```
/// # use dicom_value_core::value::PrimitiveValue;
/// # use smallvec::smallvec;
/// let value = PrimitiveValue::from("Smith^John");
/// assert_eq!(value, PrimitiveValue::Strs(smallvec!["Smith^John".to_string()]));
/// assert_eq!(value.multiplicity(), 1);
/// ```
///
/// [`smallvec`]: ../../smallvec/index.html
/// [`C`]: ./type.C.html
/// [`dicom_value!`]: ../macro.dicom_value.html
#[derive(Debug, PartialEq, Clone)]
pub enum PrimitiveValue {
    /// No data. Usually employed for zero-lengthed values.
    Empty,

    /// A sequence of strings.
    /// Used for all textual value representations,
    /// including PN, DA, TM and DT.
    Strs(C<String>),

    /// A sequence of bytes.
    /// Used for OB and UN.
    U8(C<u8>),

    /// A sequence of integers.
    /// Used for the binary integer representations
    /// (SS, US, SL, UL, SV, UV) and IS.
    I64(C<i64>),

    /// A sequence of 64-bit floating point numbers.
    /// Used for FL, FD and DS.
    F64(C<f64>),

    /// A sequence of attribute tags.
    /// Used specifically for AT.
    Tags(C<Tag>),
}

/// An error type for an attempt of accessing a value
/// in one internal representation as another.
///
/// This error is raised whenever it is not possible to retrieve the requested
/// value, either because the inner representation is not compatible with the
/// requested value type, or a conversion would be required.
#[derive(Debug, Clone, PartialEq)]
pub struct CastValueError {
    /// The value format requested
    pub requested: &'static str,
    /// The value's actual representation
    pub got: ValueType,
}

impl fmt::Display for CastValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "bad value cast: requested {} but value is {:?}",
            self.requested, self.got
        )
    }
}

impl std::error::Error for CastValueError {}

impl PrimitiveValue {
    /// Obtain the number of individual elements.
    pub fn multiplicity(&self) -> usize {
        self.cardinality()
    }

    /// Determine whether this primitive value holds no elements.
    pub fn is_empty(&self) -> bool {
        self.multiplicity() == 0
    }

    /// Get the inner sequence of bytes.
    ///
    /// An empty value yields an empty slice.
    /// An error is returned if the variant is not compatible.
    pub fn bytes(&self) -> Result<&[u8], CastValueError> {
        match self {
            PrimitiveValue::U8(c) => Ok(c.as_slice()),
            PrimitiveValue::Empty => Ok(&[]),
            value => Err(CastValueError {
                requested: "bytes",
                got: value.value_type(),
            }),
        }
    }

    /// Get the inner sequence of string values.
    ///
    /// An empty value yields an empty slice.
    /// An error is returned if the variant is not compatible.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        match self {
            PrimitiveValue::Strs(c) => Ok(c.as_slice()),
            PrimitiveValue::Empty => Ok(&[]),
            value => Err(CastValueError {
                requested: "strings",
                got: value.value_type(),
            }),
        }
    }

    /// Get the inner sequence of integers.
    ///
    /// An empty value yields an empty slice.
    /// An error is returned if the variant is not compatible.
    pub fn ints(&self) -> Result<&[i64], CastValueError> {
        match self {
            PrimitiveValue::I64(c) => Ok(c.as_slice()),
            PrimitiveValue::Empty => Ok(&[]),
            value => Err(CastValueError {
                requested: "ints",
                got: value.value_type(),
            }),
        }
    }
}

/// Values are printed with backslash separators,
/// as they would be in a textual DICOM value.
impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PrimitiveValue::Empty => Ok(()),
            PrimitiveValue::Strs(values) => f.write_str(&values.iter().join("\\")),
            PrimitiveValue::U8(values) => f.write_str(&values.iter().join("\\")),
            PrimitiveValue::I64(values) => f.write_str(&values.iter().join("\\")),
            PrimitiveValue::F64(values) => f.write_str(&values.iter().join("\\")),
            PrimitiveValue::Tags(values) => f.write_str(&values.iter().join("\\")),
        }
    }
}

/// An enum representing an abstraction of a DICOM element's data value type.
/// This should be the equivalent of `PrimitiveValue` without the content.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueType {
    /// No data. Used for any value of length 0.
    Empty,
    /// A sequence of strings.
    Strs,
    /// A sequence of bytes.
    U8,
    /// A sequence of integers.
    I64,
    /// A sequence of 64-bit floating point numbers.
    F64,
    /// A sequence of attribute tags.
    Tags,
}

impl DicomValueType for PrimitiveValue {
    fn value_type(&self) -> ValueType {
        match self {
            PrimitiveValue::Empty => ValueType::Empty,
            PrimitiveValue::Strs(_) => ValueType::Strs,
            PrimitiveValue::U8(_) => ValueType::U8,
            PrimitiveValue::I64(_) => ValueType::I64,
            PrimitiveValue::F64(_) => ValueType::F64,
            PrimitiveValue::Tags(_) => ValueType::Tags,
        }
    }

    fn cardinality(&self) -> usize {
        match self {
            PrimitiveValue::Empty => 0,
            PrimitiveValue::Strs(c) => c.len(),
            PrimitiveValue::U8(c) => c.len(),
            PrimitiveValue::I64(c) => c.len(),
            PrimitiveValue::F64(c) => c.len(),
            PrimitiveValue::Tags(c) => c.len(),
        }
    }
}

/// A utility macro for implementing the conversion from a core type into a
/// DICOM primitive value with a single element.
macro_rules! impl_from_for_primitive {
    ($typ: ty, $variant: ident) => {
        impl From<$typ> for PrimitiveValue {
            fn from(value: $typ) -> Self {
                PrimitiveValue::$variant(C::from_elem(value, 1))
            }
        }
    };
}

impl_from_for_primitive!(i64, I64);
impl_from_for_primitive!(f64, F64);
impl_from_for_primitive!(Tag, Tags);
impl_from_for_primitive!(String, Strs);

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Strs(C::from_elem(value.to_owned(), 1))
    }
}

impl From<Vec<String>> for PrimitiveValue {
    fn from(value: Vec<String>) -> Self {
        PrimitiveValue::Strs(C::from_vec(value))
    }
}

impl From<Vec<u8>> for PrimitiveValue {
    fn from(value: Vec<u8>) -> Self {
        PrimitiveValue::U8(C::from_vec(value))
    }
}

impl From<&[u8]> for PrimitiveValue {
    fn from(value: &[u8]) -> Self {
        PrimitiveValue::U8(C::from_slice(value))
    }
}

impl From<Vec<i64>> for PrimitiveValue {
    fn from(value: Vec<i64>) -> Self {
        PrimitiveValue::I64(C::from_vec(value))
    }
}

/// A utility macro for implementing the conversion
/// from a structured textual value into its serialized primitive form.
macro_rules! impl_from_textual_for_primitive {
    ($typ: ty) => {
        impl From<$typ> for PrimitiveValue {
            fn from(value: $typ) -> Self {
                PrimitiveValue::Strs(C::from_elem(value.to_dicom_string(), 1))
            }
        }

        impl From<&$typ> for PrimitiveValue {
            fn from(value: &$typ) -> Self {
                PrimitiveValue::Strs(C::from_elem(value.to_dicom_string(), 1))
            }
        }
    };
}

impl_from_textual_for_primitive!(PersonName);
impl_from_textual_for_primitive!(DicomDate);
impl_from_textual_for_primitive!(DicomTime);
impl_from_textual_for_primitive!(DicomDateTime);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dicom_value;

    #[test]
    fn getters_follow_the_variant() {
        let value = dicom_value!(Strs, ["BASE", "LIGHT", "DARK"]);
        assert_eq!(
            value.strings().unwrap(),
            &["BASE".to_owned(), "LIGHT".to_owned(), "DARK".to_owned()],
        );
        assert_eq!(
            value.ints(),
            Err(CastValueError {
                requested: "ints",
                got: ValueType::Strs,
            })
        );

        let value = dicom_value!(I64, [1, 2, 5]);
        assert_eq!(value.ints().unwrap(), &[1, 2, 5]);
        assert!(value.strings().is_err());
        assert!(value.bytes().is_err());

        let value = PrimitiveValue::from(vec![0x01_u8, 0x02, 0xFF]);
        assert_eq!(value.bytes().unwrap(), &[0x01, 0x02, 0xFF]);
        assert_eq!(value.value_type(), ValueType::U8);
    }

    #[test]
    fn binary_only_variants_have_no_textual_getter() {
        let value = dicom_value!(F64, [0.5, 1.25]);
        assert_eq!(
            value.strings(),
            Err(CastValueError {
                requested: "strings",
                got: ValueType::F64,
            })
        );
        assert!(value.ints().is_err());
        assert_eq!(value.to_string(), "0.5\\1.25");

        let value = dicom_value!(Tags, [Tag(0x0010, 0x0010)]);
        assert!(value.bytes().is_err());
        assert_eq!(value.value_type(), ValueType::Tags);
        assert_eq!(value.multiplicity(), 1);
    }

    #[test]
    fn empty_value_is_compatible_with_every_getter() {
        let value = PrimitiveValue::Empty;
        assert!(value.strings().unwrap().is_empty());
        assert!(value.ints().unwrap().is_empty());
        assert!(value.bytes().unwrap().is_empty());
        assert!(value.is_empty());
        assert_eq!(value.to_string(), "");
    }

    #[test]
    fn display_uses_backslash_delimiters() {
        assert_eq!(
            dicom_value!(Strs, ["DERIVED", "PRIMARY"]).to_string(),
            "DERIVED\\PRIMARY"
        );
        assert_eq!(dicom_value!(I64, [256, 0, 16]).to_string(), "256\\0\\16");
        assert_eq!(
            PrimitiveValue::from(Tag(0x0010, 0x0010)).to_string(),
            "(0010,0010)"
        );
    }

    #[test]
    fn structured_values_serialize_into_strings() {
        let name = PersonName::parse("Potter^Harry").unwrap();
        assert_eq!(
            PrimitiveValue::from(&name),
            dicom_value!(Strs, ["Potter^Harry"])
        );

        let date = DicomDate::from_ym(2020, 3).unwrap();
        assert_eq!(PrimitiveValue::from(date), dicom_value!(Strs, ["202003"]));
    }
}
