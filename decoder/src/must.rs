//! A value decoder which panics instead of returning errors.
//!
//! This is meant for contexts where a decoding failure is a bug,
//! such as tests and prototypes.

use crate::decode::ValueDecoder;
use crate::error::Result;
use dicom_value_core::dictionary::DataDictionary;
use dicom_value_core::value::{DicomDate, DicomDateTime, DicomTime, PersonName};
use dicom_value_core::DataElement;
use snafu::Report;

/// Wraps a [`ValueDecoder`] so that every operation
/// returns its value directly,
/// panicking with the full error report on failure.
///
/// # Example
///
/// ```
/// # use dicom_value_core::{dicom_value, DataElement, Tag, VR};
/// # use dicom_value_decoder::ValueDecoder;
/// let element = DataElement::new(Tag(0x0008, 0x0020), VR::DA, dicom_value!(Strs, ["20200304"]));
/// let date = ValueDecoder::new(&element).must().to_date(true, false);
/// assert_eq!(date.to_string(), "2020-03-04");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MustValueDecoder<'e, D> {
    inner: ValueDecoder<'e, D>,
}

#[track_caller]
fn unwrap_or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", Report::from_error(e)),
    }
}

impl<'e, D> MustValueDecoder<'e, D> {
    pub(crate) fn new(inner: ValueDecoder<'e, D>) -> Self {
        MustValueDecoder { inner }
    }

    /// Retrieve the element being decoded.
    pub fn element(&self) -> &'e DataElement {
        self.inner.element()
    }

    /// Recover the fallible decoder.
    pub fn into_inner(self) -> ValueDecoder<'e, D> {
        self.inner
    }
}

impl<'e, D> MustValueDecoder<'e, D>
where
    D: DataDictionary,
{
    #[track_caller]
    pub fn to_bytes(&self) -> &'e [u8] {
        unwrap_or_panic(self.inner.to_bytes())
    }

    #[track_caller]
    pub fn to_strings(&self) -> &'e [String] {
        unwrap_or_panic(self.inner.to_strings())
    }

    #[track_caller]
    pub fn to_str(&self, check_spec: bool) -> &'e str {
        unwrap_or_panic(self.inner.to_str(check_spec))
    }

    #[track_caller]
    pub fn to_ints(&self) -> &'e [i64] {
        unwrap_or_panic(self.inner.to_ints())
    }

    #[track_caller]
    pub fn to_int(&self, check_spec: bool) -> i64 {
        unwrap_or_panic(self.inner.to_int(check_spec))
    }

    #[track_caller]
    pub fn to_person_names(&self) -> Vec<PersonName> {
        unwrap_or_panic(self.inner.to_person_names())
    }

    #[track_caller]
    pub fn to_person_name(&self, check_spec: bool) -> PersonName {
        unwrap_or_panic(self.inner.to_person_name(check_spec))
    }

    #[track_caller]
    pub fn to_dates(&self, allow_legacy: bool) -> Vec<DicomDate> {
        unwrap_or_panic(self.inner.to_dates(allow_legacy))
    }

    #[track_caller]
    pub fn to_date(&self, check_spec: bool, allow_legacy: bool) -> DicomDate {
        unwrap_or_panic(self.inner.to_date(check_spec, allow_legacy))
    }

    #[track_caller]
    pub fn to_times(&self) -> Vec<DicomTime> {
        unwrap_or_panic(self.inner.to_times())
    }

    #[track_caller]
    pub fn to_time(&self, check_spec: bool) -> DicomTime {
        unwrap_or_panic(self.inner.to_time(check_spec))
    }

    #[track_caller]
    pub fn to_datetimes(&self) -> Vec<DicomDateTime> {
        unwrap_or_panic(self.inner.to_datetimes())
    }

    #[track_caller]
    pub fn to_datetime(&self, check_spec: bool) -> DicomDateTime {
        unwrap_or_panic(self.inner.to_datetime(check_spec))
    }
}

#[cfg(test)]
mod tests {
    use crate::ValueDecoder;
    use dicom_value_core::{dicom_value, DataElement, VR};
    use dicom_value_dictionary_std::tags;

    #[test]
    fn passes_values_through() {
        let element = DataElement::new(
            tags::OPERATORS_NAME,
            VR::PN,
            dicom_value!(Strs, ["Potter^Harry", "Granger^Hermione"]),
        );
        let names = ValueDecoder::new(&element).must().to_person_names();
        assert_eq!(names.len(), 2);
        assert_eq!(names[1].alphabetic().family_name(), "Granger");
    }

    #[test]
    #[should_panic(expected = "expected single value, but found 2")]
    fn panics_on_multiple_values() {
        let element = DataElement::new(
            tags::OPERATORS_NAME,
            VR::PN,
            dicom_value!(Strs, ["Potter^Harry", "Granger^Hermione"]),
        );
        ValueDecoder::new(&element).must().to_person_name(false);
    }

    #[test]
    #[should_panic(expected = "expected VR of 'TM', got 'DA'")]
    fn panics_on_wrong_vr() {
        let element = DataElement::new(tags::STUDY_DATE, VR::DA, dicom_value!(Strs, ["20200101"]));
        ValueDecoder::new(&element).must().to_times();
    }
}
