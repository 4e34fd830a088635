//! This module contains the concept of a DICOM data dictionary.
//!
//! A data dictionary maps DICOM tags and attribute keywords
//! to records holding the attribute's typical value representation
//! and value multiplicity.
//! The standard dictionary lives in the `dicom-value-dictionary-std` crate.

pub mod data_element;
pub mod stub;

pub use self::data_element::{
    DataDictionary, DataDictionaryEntry, DataDictionaryEntryRef, ParseMultiplicityError,
    TagRange, TagRangeParseError, ValueMultiplicity, VirtualVr,
};
pub use self::stub::StubDataDictionary;
