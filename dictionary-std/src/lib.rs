//! This crate implements the standard DICOM data element dictionary.
//!
//! ## Run-time dictionary
//!
//! [`data_element`] contains information about the DICOM attributes
//! specified in the standard, [DICOM PS3.6],
//! including their typical value representation and value multiplicity.
//! It is used by default in the value decoders to check
//! whether a value conforms to its attribute.
//! When not using private tags, this dictionary should suffice.
//!
//! The dictionary is provided as a singleton behind a unit type,
//! [`StandardDataDictionary`].
//! Its index is built on first use and cannot be modified afterwards.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
//!
//! ## Constants
//!
//! [`tags`] maps attribute keywords to DICOM tags at compile time,
//! thus without incurring a look-up cost.
pub mod data_element;
pub mod tags;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
