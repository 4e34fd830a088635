#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the DICOM value codecs,
//! containing the data structures and traits
//! for reading structured values out of DICOM data elements.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises various data types for DICOM element header,
//!   including common definitions for DICOM tags and value representations.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate attribute names and/or tags to a dictionary entry
//!   containing the attribute's value representation and multiplicity.
//! - [`value`] holds definitions for values in standard DICOM elements,
//!   and the codecs of the structured textual values:
//!   person names, dates, times and date-times.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`header`]: ./header/index.html
//! [`value`]: ./value/index.html

pub mod dictionary;
pub mod header;
pub mod prelude;
pub mod value;

pub use dictionary::DataDictionary;
pub use header::{DataElement, Tag, VR};
pub use value::PrimitiveValue;

// re-export crates that are part of the public API
pub use chrono;
pub use smallvec;
