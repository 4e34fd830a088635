//! Error types for value decoding.

use dicom_value_core::value::{person_name, temporal, ValueType};
use dicom_value_core::VR;
use snafu::{Backtrace, Snafu};

/// An error which may occur when decoding a data element's value
/// into one of the requested forms.
///
/// Parse failures carry the index of the offending value,
/// and the codec error as their source.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum DecodeValueError {
    /// error decoding element value: underlying not expected type: requested {requested} but value is {got:?}
    ConvertValue {
        /// the form requested
        requested: &'static str,
        /// the element's actual value type
        got: ValueType,
        backtrace: Backtrace,
    },
    /// expected single value, but found {count}
    MultipleValues { count: usize, backtrace: Backtrace },
    /// error decoding element value: operation violates dicom spec
    SpecViolation {
        #[snafu(backtrace)]
        source: SpecViolationError,
    },
    /// error parsing string value {index} to person name
    ParsePersonName {
        index: usize,
        #[snafu(backtrace)]
        source: person_name::Error,
    },
    /// error parsing string value {index}
    ParseTemporal {
        index: usize,
        #[snafu(backtrace)]
        source: temporal::Error,
    },
}

/// A decoding operation would go against
/// the attribute's definition in the data dictionary.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum SpecViolationError {
    /// value multiplicity is not '1': found '{vm}'
    NotSingle { vm: String, backtrace: Backtrace },
    /// cannot decode Value Representation to type '{target}': expected VR of '{expected}', got '{found}'
    WrongValueRepresentation {
        target: &'static str,
        expected: VR,
        found: VR,
        backtrace: Backtrace,
    },
}

impl DecodeValueError {
    /// Whether the value contradicts the data dictionary,
    /// either in multiplicity or in value representation.
    pub fn is_spec_violation(&self) -> bool {
        matches!(self, DecodeValueError::SpecViolation { .. })
    }

    /// Whether one of the values could not be parsed
    /// into a person name or temporal value.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            DecodeValueError::ParsePersonName { .. } | DecodeValueError::ParseTemporal { .. }
        )
    }

    /// Whether a single value was requested from
    /// an element with zero or more than one value.
    pub fn is_multiple_values(&self) -> bool {
        matches!(self, DecodeValueError::MultipleValues { .. })
    }
}

pub type Result<T, E = DecodeValueError> = std::result::Result<T, E>;
