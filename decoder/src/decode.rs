//! The value decoder, which extracts typed values out of a data element.

use crate::error::{
    ConvertValueSnafu, MultipleValuesSnafu, NotSingleSnafu, ParsePersonNameSnafu,
    ParseTemporalSnafu, Result, SpecViolationSnafu, WrongValueRepresentationSnafu,
};
use crate::must::MustValueDecoder;
use dicom_value_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dicom_value_core::value::temporal::{parse_date, parse_datetime, parse_time};
use dicom_value_core::value::{CastValueError, DicomDate, DicomDateTime, DicomTime, PersonName};
use dicom_value_core::{DataElement, VR};
use dicom_value_dictionary_std::StandardDataDictionary;
use snafu::{ensure, OptionExt, ResultExt};

/// A decoder of the value of one data element.
///
/// Each operation is independent and leaves the element untouched.
/// Operations returning a single value fail
/// unless the element holds exactly one value.
/// When they are asked to `check_spec`,
/// they also fail if the data dictionary
/// does not define the attribute as single-valued.
///
/// The person name and temporal operations
/// first check that the element has the matching value representation,
/// before any parsing takes place.
///
/// # Example
///
/// ```
/// # use dicom_value_core::{dicom_value, DataElement, Tag, VR};
/// # use dicom_value_decoder::ValueDecoder;
/// let element = DataElement::new(Tag(0x0010, 0x0010), VR::PN, dicom_value!(Strs, ["Potter^Harry"]));
/// let name = ValueDecoder::new(&element).to_person_name(true)?;
/// assert_eq!(name.alphabetic().given_name(), "Harry");
/// # Ok::<_, dicom_value_decoder::DecodeValueError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValueDecoder<'e, D = StandardDataDictionary> {
    element: &'e DataElement,
    dict: D,
}

impl<'e> ValueDecoder<'e> {
    /// Create a decoder for the given element,
    /// which consults the standard data dictionary.
    pub fn new(element: &'e DataElement) -> Self {
        ValueDecoder {
            element,
            dict: StandardDataDictionary,
        }
    }
}

impl<'e, D> ValueDecoder<'e, D> {
    /// Create a decoder for the given element,
    /// which consults the given data dictionary.
    pub fn with_dictionary(element: &'e DataElement, dict: D) -> Self {
        ValueDecoder { element, dict }
    }

    /// Change the data dictionary consulted by this decoder.
    pub fn dictionary<D2>(self, dict: D2) -> ValueDecoder<'e, D2> {
        ValueDecoder {
            element: self.element,
            dict,
        }
    }

    /// Retrieve the element being decoded.
    pub fn element(&self) -> &'e DataElement {
        self.element
    }

    /// Turn this decoder into one which panics on failure.
    pub fn must(self) -> MustValueDecoder<'e, D> {
        MustValueDecoder::new(self)
    }
}

impl<'e, D> ValueDecoder<'e, D>
where
    D: DataDictionary,
{
    fn check_single_value(&self, count: usize, check_spec: bool) -> Result<()> {
        ensure!(count == 1, MultipleValuesSnafu { count });

        let tag = self.element.tag();
        if !check_spec {
            return Ok(());
        }
        if tag.is_private() {
            tracing::debug!("Skipping multiplicity check of private attribute {}", tag);
            return Ok(());
        }
        let entry = match self.dict.by_tag(tag) {
            Some(entry) => entry,
            None => {
                tracing::debug!("No dictionary entry for {}, multiplicity not checked", tag);
                return Ok(());
            }
        };

        match entry.multiplicity() {
            Some(vm) if vm.is_single_value() => Ok(()),
            Some(_) => NotSingleSnafu { vm: entry.vm() }
                .fail()
                .context(SpecViolationSnafu),
            None => {
                tracing::debug!(
                    "Malformed multiplicity `{}` for {}, multiplicity not checked",
                    entry.vm(),
                    tag
                );
                Ok(())
            }
        }
    }

    fn check_vr(&self, target: &'static str, expected: VR) -> Result<()> {
        let found = self.element.vr();
        if found == expected {
            Ok(())
        } else {
            WrongValueRepresentationSnafu {
                target,
                expected,
                found,
            }
            .fail()
            .context(SpecViolationSnafu)
        }
    }

    fn single<I>(&self, values: I, check_spec: bool) -> Result<I::Item>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
    {
        let mut values = values.into_iter();
        self.check_single_value(values.len(), check_spec)?;
        values.next().context(MultipleValuesSnafu { count: 0_usize })
    }

    /// Retrieve the element's bytes.
    pub fn to_bytes(&self) -> Result<&'e [u8]> {
        self.element.value().bytes().map_err(convert_error)
    }

    /// Retrieve the element's strings.
    pub fn to_strings(&self) -> Result<&'e [String]> {
        self.element.value().strings().map_err(convert_error)
    }

    /// Retrieve the element's single string.
    pub fn to_str(&self, check_spec: bool) -> Result<&'e str> {
        self.single(self.to_strings()?, check_spec)
            .map(String::as_str)
    }

    /// Retrieve the element's integers.
    pub fn to_ints(&self) -> Result<&'e [i64]> {
        self.element.value().ints().map_err(convert_error)
    }

    /// Retrieve the element's single integer.
    pub fn to_int(&self, check_spec: bool) -> Result<i64> {
        self.single(self.to_ints()?, check_spec).copied()
    }

    /// Parse every string of a PN element into a person name.
    pub fn to_person_names(&self) -> Result<Vec<PersonName>> {
        self.check_vr("PersonName", VR::PN)?;
        self.to_strings()?
            .iter()
            .enumerate()
            .map(|(index, text)| PersonName::parse(text).context(ParsePersonNameSnafu { index }))
            .collect()
    }

    /// Parse the single string of a PN element into a person name.
    pub fn to_person_name(&self, check_spec: bool) -> Result<PersonName> {
        self.single(self.to_person_names()?, check_spec)
    }

    /// Parse every string of a DA element into a date.
    ///
    /// Dates in the ACR-NEMA form (`YYYY.MM.DD`)
    /// are only accepted if `allow_legacy` is true.
    pub fn to_dates(&self, allow_legacy: bool) -> Result<Vec<DicomDate>> {
        self.check_vr("DicomDate", VR::DA)?;
        self.to_strings()?
            .iter()
            .enumerate()
            .map(|(index, text)| {
                parse_date(text, allow_legacy).context(ParseTemporalSnafu { index })
            })
            .collect()
    }

    /// Parse the single string of a DA element into a date.
    pub fn to_date(&self, check_spec: bool, allow_legacy: bool) -> Result<DicomDate> {
        self.single(self.to_dates(allow_legacy)?, check_spec)
    }

    /// Parse every string of a TM element into a time.
    pub fn to_times(&self) -> Result<Vec<DicomTime>> {
        self.check_vr("DicomTime", VR::TM)?;
        self.to_strings()?
            .iter()
            .enumerate()
            .map(|(index, text)| parse_time(text).context(ParseTemporalSnafu { index }))
            .collect()
    }

    /// Parse the single string of a TM element into a time.
    pub fn to_time(&self, check_spec: bool) -> Result<DicomTime> {
        self.single(self.to_times()?, check_spec)
    }

    /// Parse every string of a DT element into a date-time.
    pub fn to_datetimes(&self) -> Result<Vec<DicomDateTime>> {
        self.check_vr("DicomDateTime", VR::DT)?;
        self.to_strings()?
            .iter()
            .enumerate()
            .map(|(index, text)| parse_datetime(text).context(ParseTemporalSnafu { index }))
            .collect()
    }

    /// Parse the single string of a DT element into a date-time.
    pub fn to_datetime(&self, check_spec: bool) -> Result<DicomDateTime> {
        self.single(self.to_datetimes()?, check_spec)
    }
}

fn convert_error(e: CastValueError) -> crate::DecodeValueError {
    ConvertValueSnafu {
        requested: e.requested,
        got: e.got,
    }
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeValueError;
    use dicom_value_core::dictionary::StubDataDictionary;
    use dicom_value_core::value::{PrimitiveValue, ValueType};
    use dicom_value_core::{dicom_value, Tag};
    use dicom_value_dictionary_std::tags;

    #[test]
    fn variant_getters() {
        let element = DataElement::new(tags::MODALITY, VR::CS, dicom_value!(Strs, ["MR"]));
        let decoder = ValueDecoder::new(&element);
        assert_eq!(decoder.to_strings().unwrap(), &["MR".to_string()]);
        assert_eq!(decoder.to_str(true).unwrap(), "MR");
        assert!(matches!(
            decoder.to_ints(),
            Err(DecodeValueError::ConvertValue {
                requested: "ints",
                got: ValueType::Strs,
                ..
            })
        ));
        assert!(decoder.to_bytes().is_err());

        let element = DataElement::new(tags::ROWS, VR::US, dicom_value!(I64, [512]));
        let decoder = ValueDecoder::new(&element);
        assert_eq!(decoder.to_ints().unwrap(), &[512]);
        assert_eq!(decoder.to_int(true).unwrap(), 512);
        assert!(decoder.to_strings().is_err());
    }

    #[test]
    fn single_value_count() {
        let element = DataElement::new(
            tags::IMAGE_TYPE,
            VR::CS,
            dicom_value!(Strs, ["ORIGINAL", "PRIMARY"]),
        );
        let err = ValueDecoder::new(&element).to_str(false).unwrap_err();
        assert!(matches!(err, DecodeValueError::MultipleValues { count: 2, .. }));
        assert_eq!(err.to_string(), "expected single value, but found 2");

        let element = DataElement::new(tags::MODALITY, VR::CS, PrimitiveValue::Empty);
        assert!(matches!(
            ValueDecoder::new(&element).to_str(false),
            Err(DecodeValueError::MultipleValues { count: 0, .. })
        ));
    }

    #[test]
    fn multiplicity_checked_against_dictionary() {
        let element = DataElement::new(tags::PIXEL_SPACING, VR::DS, dicom_value!(Strs, ["0.5"]));
        let decoder = ValueDecoder::new(&element);

        let err = decoder.to_str(true).unwrap_err();
        assert!(err.is_spec_violation());
        match err {
            DecodeValueError::SpecViolation {
                source: crate::SpecViolationError::NotSingle { vm, .. },
            } => assert_eq!(vm, "2"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(decoder.to_str(false).unwrap(), "0.5");

        // a dictionary without records does not constrain anything
        let decoder = decoder.dictionary(StubDataDictionary);
        assert_eq!(decoder.to_str(true).unwrap(), "0.5");
    }

    #[test]
    fn private_and_unknown_tags_are_not_checked() {
        let element = DataElement::new(Tag(0x0029, 0x1010), VR::LO, dicom_value!(Strs, ["x"]));
        assert_eq!(ValueDecoder::new(&element).to_str(true).unwrap(), "x");

        let element = DataElement::new(Tag(0x0018, 0x9999), VR::LO, dicom_value!(Strs, ["y"]));
        assert_eq!(ValueDecoder::new(&element).to_str(true).unwrap(), "y");
    }

    #[test]
    fn wrong_vr_is_reported_before_parsing() {
        // the value would not parse as a date either
        let element = DataElement::new(tags::STUDY_DATE, VR::LO, dicom_value!(Strs, ["not a date"]));
        let err = ValueDecoder::new(&element).to_dates(false).unwrap_err();
        assert!(err.is_spec_violation());
        assert!(!err.is_parse_failure());
        match err {
            DecodeValueError::SpecViolation {
                source:
                    crate::SpecViolationError::WrongValueRepresentation {
                        target,
                        expected,
                        found,
                        ..
                    },
            } => {
                assert_eq!(target, "DicomDate");
                assert_eq!(expected, VR::DA);
                assert_eq!(found, VR::LO);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn parse_failures_carry_the_index() {
        let element = DataElement::new(
            tags::DATE_OF_LAST_CALIBRATION,
            VR::DA,
            dicom_value!(Strs, ["20200101", "2020.01.02"]),
        );
        let decoder = ValueDecoder::new(&element);
        let err = decoder.to_dates(false).unwrap_err();
        assert!(err.is_parse_failure());
        assert!(matches!(err, DecodeValueError::ParseTemporal { index: 1, .. }));

        let dates = decoder.to_dates(true).unwrap();
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[1].to_dicom_string(), "20200102");
    }
}
