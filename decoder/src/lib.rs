#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! This crate decodes the value of a DICOM data element
//! into the form requested by the caller:
//! raw bytes, strings, integers,
//! person names, dates, times or date-times.
//!
//! Decoding is done through a [`ValueDecoder`],
//! which can be created for any [`DataElement`]
//! by calling [`decoder`](ElementDecodeExt::decoder).
//! Single-value operations can optionally be checked
//! against the attribute's multiplicity in the data dictionary,
//! which is the [standard dictionary][dict] unless another one is given.
//!
//! [dict]: dicom_value_dictionary_std::StandardDataDictionary
//!
//! # Examples
//!
//! ```
//! use dicom_value_core::{dicom_value, DataElement, VR};
//! use dicom_value_decoder::ElementDecodeExt;
//! use dicom_value_dictionary_std::tags;
//! # fn run() -> Result<(), dicom_value_decoder::DecodeValueError> {
//!
//! let element = DataElement::new(tags::STUDY_DATE, VR::DA, dicom_value!(Strs, ["20200304"]));
//! let date = element.decoder().to_date(true, false)?;
//! assert_eq!(date.to_string(), "2020-03-04");
//!
//! // Pixel Spacing is defined with two values
//! let element = DataElement::new(tags::PIXEL_SPACING, VR::DS, dicom_value!(Strs, ["0.5"]));
//! assert!(element.decoder().to_str(true).is_err());
//! assert_eq!(element.decoder().to_str(false)?, "0.5");
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! When a failure can only be the result of a bug,
//! the [`must`](ValueDecoder::must) variant panics instead:
//!
//! ```
//! # use dicom_value_core::{dicom_value, DataElement, VR};
//! # use dicom_value_decoder::ElementDecodeExt;
//! # use dicom_value_dictionary_std::tags;
//! let element = DataElement::new(tags::PATIENT_NAME, VR::PN, dicom_value!(Strs, ["Potter^Harry"]));
//! let name = element.decoder().must().to_person_name(true);
//! assert_eq!(name.to_dicom_string(), "Potter^Harry");
//! ```

mod decode;
mod error;
mod must;

pub use crate::decode::ValueDecoder;
pub use crate::error::{DecodeValueError, Result, SpecViolationError};
pub use crate::must::MustValueDecoder;

use dicom_value_core::DataElement;

/// Extension trait for creating a value decoder out of a data element.
pub trait ElementDecodeExt {
    /// Create a decoder of this element's value,
    /// backed by the standard data dictionary.
    fn decoder(&self) -> ValueDecoder<'_>;
}

impl ElementDecodeExt for DataElement {
    fn decoder(&self) -> ValueDecoder<'_> {
        ValueDecoder::new(self)
    }
}
