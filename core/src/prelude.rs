//! Prelude module.
//!
//! You may import all symbols within for convenient usage of this library.
//!
//! # Example
//!
//! ```
//! use dicom_value_core::prelude::*;
//! ```

pub use crate::dictionary::{DataDictionary as _, DataDictionaryEntry as _};
pub use crate::value::{DicomDate, DicomDateTime, DicomTime, PersonName};
pub use crate::{dicom_value, DataElement, PrimitiveValue, Tag, VR};
