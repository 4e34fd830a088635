//! This module includes the data types for a DICOM element's value,
//! both in its untyped form as read from a data set
//! and in the structured forms of the textual value representations:
//!
//! - [`PrimitiveValue`], the closed set of untyped payload variants;
//! - [`person_name`], the codec for _Person Name_ (PN) values;
//! - [`temporal`], the codec for _Date_ (DA), _Time_ (TM)
//!   and _Date Time_ (DT) values;
//! - [`render`], the separator joining rules shared by the textual codecs.

use smallvec::SmallVec;

pub mod person_name;
mod primitive;
pub mod render;
pub mod temporal;

pub use self::person_name::{
    GroupNullLevel, NameGroupKind, NameNullLevel, PersonName, PersonNameGroup,
};
pub use self::primitive::{CastValueError, PrimitiveValue, ValueType};
pub use self::temporal::{DicomDate, DicomDateTime, DicomTime, Precision, TemporalKind};

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// A trait for a value that maps to a DICOM element data value.
pub trait DicomValueType {
    /// Retrieve the specific type of this value.
    fn value_type(&self) -> ValueType;

    /// Retrieve the number of elements contained in the DICOM value.
    fn cardinality(&self) -> usize;
}

/// Helper macro for constructing a DICOM primitive value,
/// of an arbitrary variant and multiplicity.
///
/// The base syntax is a value type identifier,
/// which is one of the variants of [`PrimitiveValue`],
/// followed by either an expression resolving to one standard Rust value,
/// or a bracketed list of values of the same type.
///
/// String literals are converted into owned strings
/// when building a `Strs` value.
///
/// # Example
///
/// ```
/// # use dicom_value_core::dicom_value;
/// # use dicom_value_core::value::PrimitiveValue;
/// let value = dicom_value!(Strs, ["Smith^John", "Doe^Jane"]);
/// assert_eq!(value.multiplicity(), 2);
///
/// let value = dicom_value!(I64, [512, 256]);
/// assert_eq!(value.ints().unwrap(), &[512, 256]);
/// ```
#[macro_export]
macro_rules! dicom_value {
    // Empty value
    () => {
        $crate::value::PrimitiveValue::Empty
    };
    // Multiple strings
    (Strs, [ $($elem: expr),+ $(,)* ]) => {
        $crate::value::PrimitiveValue::Strs($crate::smallvec::smallvec![$($elem.to_owned(),)*])
    };
    // Multiple values of any other type
    ($typ: ident, [ $($elem: expr),+ $(,)* ]) => {
        $crate::value::PrimitiveValue::$typ($crate::smallvec::smallvec![$($elem,)*])
    };
    // A single string
    (Strs, $elem: expr) => {
        $crate::value::PrimitiveValue::Strs($crate::value::C::from_elem($elem.to_owned(), 1))
    };
    // A single value of any other type
    ($typ: ident, $elem: expr) => {
        $crate::value::PrimitiveValue::$typ($crate::value::C::from_elem($elem, 1))
    };
}
