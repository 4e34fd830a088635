//! Decoding typed values out of data elements,
//! as a user of the crate would.

use dicom_value_core::dictionary::{
    DataDictionary, DataDictionaryEntryRef, TagRange, VirtualVr,
};
use dicom_value_core::value::{GroupNullLevel, NameNullLevel, Precision};
use dicom_value_core::{dicom_value, DataElement, PrimitiveValue, Tag, VR};
use dicom_value_decoder::{DecodeValueError, ElementDecodeExt, SpecViolationError, ValueDecoder};
use dicom_value_dictionary_std::tags;
use rstest::rstest;

/// A dictionary which knows a single private attribute.
#[derive(Debug, Clone, Copy)]
struct VendorDictionary;

static VENDOR_ENTRY: DataDictionaryEntryRef<'static> = DataDictionaryEntryRef {
    tag: TagRange::Single(Tag(0x0019, 0x1001)),
    alias: "VendorNumbers",
    vr: VirtualVr::Exact(VR::SL),
    vm: "1-n",
};

impl DataDictionary for VendorDictionary {
    type Entry = DataDictionaryEntryRef<'static>;

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        if tag == Tag(0x0019, 0x1001) {
            Some(&VENDOR_ENTRY)
        } else {
            None
        }
    }

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        if name == "VendorNumbers" {
            Some(&VENDOR_ENTRY)
        } else {
            None
        }
    }
}

#[test]
fn person_name_with_all_groups() {
    let element = DataElement::new(
        tags::PATIENT_NAME,
        VR::PN,
        dicom_value!(Strs, ["Yamada^Tarou=山田^太郎=やまだ^たろう"]),
    );
    let name = element.decoder().to_person_name(true).unwrap();
    assert_eq!(name.alphabetic().family_name(), "Yamada");
    assert_eq!(name.ideographic().given_name(), "太郎");
    assert_eq!(name.phonetic().family_name(), "やまだ");
    assert_eq!(name.trailing_null_level(), NameNullLevel::None);
    assert_eq!(name.to_dicom_string(), "Yamada^Tarou=山田^太郎=やまだ^たろう");
}

#[test]
fn person_name_keeps_trailing_delimiters() {
    let element = DataElement::new(
        tags::PATIENT_NAME,
        VR::PN,
        dicom_value!(Strs, ["Potter^Harry^^^=="]),
    );
    let name = element.decoder().to_person_name(true).unwrap();
    assert_eq!(name.alphabetic().trailing_null_level(), GroupNullLevel::All);
    assert_eq!(name.trailing_null_level(), NameNullLevel::All);
    assert_eq!(name.to_dicom_string(), "Potter^Harry^^^==");
    assert_eq!(name.without_trailing_nulls().to_dicom_string(), "Potter^Harry");
}

#[test]
fn person_names_of_a_multi_valued_attribute() {
    let element = DataElement::new(
        tags::OTHER_PATIENT_NAMES,
        VR::PN,
        dicom_value!(Strs, ["Potter^Harry", "Evans^Lily", ""]),
    );
    let names = element.decoder().to_person_names().unwrap();
    assert_eq!(names.len(), 3);
    assert_eq!(names[1].alphabetic().given_name(), "Lily");
    assert!(names[2].is_empty());
}

#[rstest]
#[case("Too=Many=Groups=Here", 0)]
#[case("A^B^C^D^E^F", 0)]
fn person_name_parse_errors(#[case] text: &str, #[case] index: usize) {
    let element = DataElement::new(tags::PATIENT_NAME, VR::PN, dicom_value!(Strs, [text]));
    match element.decoder().to_person_name(true) {
        Err(DecodeValueError::ParsePersonName { index: i, .. }) => assert_eq!(i, index),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[rstest]
#[case("2020", "2020", Precision::Year)]
#[case("202003", "2020-03", Precision::Month)]
#[case("20200304", "2020-03-04", Precision::Day)]
fn dates_at_every_precision(
    #[case] text: &str,
    #[case] shown: &str,
    #[case] precision: Precision,
) {
    let element = DataElement::new(tags::STUDY_DATE, VR::DA, dicom_value!(Strs, [text]));
    let date = element.decoder().to_date(true, false).unwrap();
    assert_eq!(date.precision(), precision);
    assert_eq!(date.to_string(), shown);
    assert_eq!(date.to_dicom_string(), text);
}

#[test]
fn legacy_dates_need_to_be_allowed() {
    let element = DataElement::new(tags::STUDY_DATE, VR::DA, dicom_value!(Strs, ["1993.08.22"]));
    let err = element.decoder().to_date(true, false).unwrap_err();
    assert!(err.is_parse_failure());

    let date = element.decoder().to_date(true, true).unwrap();
    assert_eq!(date.to_dicom_string(), "19930822");
}

#[test]
fn times_and_datetimes() {
    let element = DataElement::new(tags::STUDY_TIME, VR::TM, dicom_value!(Strs, ["103015.25"]));
    let time = element.decoder().to_time(true).unwrap();
    assert_eq!(time.precision(), Precision::Fraction(2));
    assert_eq!(time.to_string(), "10:30:15.25");

    let element = DataElement::new(
        tags::ACQUISITION_DATE_TIME,
        VR::DT,
        dicom_value!(Strs, ["2020030410-0330"]),
    );
    let dt = element.decoder().to_datetime(true).unwrap();
    assert_eq!(dt.precision(), Precision::Hour);
    assert_eq!(dt.offset().map(|o| o.local_minus_utc()), Some(-(3 * 3600 + 30 * 60)));
    assert_eq!(dt.to_dicom_string(), "2020030410-0330");
}

#[rstest]
#[case(VR::DA, "DicomDate")]
#[case(VR::TM, "DicomTime")]
#[case(VR::DT, "DicomDateTime")]
#[case(VR::PN, "PersonName")]
fn value_representation_must_match(#[case] expected_vr: VR, #[case] expected_target: &str) {
    // a long string holding text that none of the codecs accept
    let element = DataElement::new(tags::STUDY_DESCRIPTION, VR::LO, dicom_value!(Strs, ["=x=y=z"]));
    let decoder = element.decoder();
    let err = match expected_vr {
        VR::DA => decoder.to_dates(true).map(drop),
        VR::TM => decoder.to_times().map(drop),
        VR::DT => decoder.to_datetimes().map(drop),
        _ => decoder.to_person_names().map(drop),
    }
    .unwrap_err();

    match err {
        DecodeValueError::SpecViolation {
            source:
                SpecViolationError::WrongValueRepresentation {
                    target,
                    expected,
                    found,
                    ..
                },
        } => {
            assert_eq!(target, expected_target);
            assert_eq!(expected, expected_vr);
            assert_eq!(found, VR::LO);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn multiplicity_of_the_standard_dictionary() {
    let element = DataElement::new(
        tags::PATIENT_ORIENTATION,
        VR::CS,
        dicom_value!(Strs, ["A"]),
    );
    let err = element.decoder().to_str(true).unwrap_err();
    assert!(err.is_spec_violation());
    assert!(err
        .to_string()
        .contains("operation violates dicom spec"));
    assert_eq!(element.decoder().to_str(false).unwrap(), "A");

    // the count is checked before the dictionary
    let element = DataElement::new(
        tags::PATIENT_ORIENTATION,
        VR::CS,
        dicom_value!(Strs, ["A", "F"]),
    );
    let err = element.decoder().to_str(true).unwrap_err();
    assert!(err.is_multiple_values());
}

#[test]
fn fixed_multiplicities_beyond_one_reject_a_single_value() {
    // Acquisition Matrix: US, VM 4
    let element = DataElement::new(tags::ACQUISITION_MATRIX, VR::US, dicom_value!(I64, [256]));
    let err = element.decoder().to_int(true).unwrap_err();
    assert!(err.is_spec_violation());
    assert!(!err.is_multiple_values());
    assert_eq!(element.decoder().to_int(false).unwrap(), 256);

    // Imager Pixel Spacing: DS, VM 2
    let element = DataElement::new(
        tags::IMAGER_PIXEL_SPACING,
        VR::DS,
        dicom_value!(Strs, ["0.3"]),
    );
    let err = element.decoder().to_str(true).unwrap_err();
    assert!(err.is_spec_violation());
    assert_eq!(element.decoder().to_str(false).unwrap(), "0.3");
}

#[test]
fn multi_valued_dates_do_not_yield_a_single_date() {
    let element = DataElement::new(
        tags::DATE_OF_LAST_CALIBRATION,
        VR::DA,
        dicom_value!(Strs, ["20200101"]),
    );
    let decoder = element.decoder();
    assert!(decoder.to_date(true, false).unwrap_err().is_spec_violation());
    assert_eq!(
        decoder.to_date(false, false).unwrap().to_dicom_string(),
        "20200101"
    );
    assert_eq!(decoder.to_dates(false).unwrap().len(), 1);
}

#[test]
fn empty_elements_have_no_single_value() {
    let element = DataElement::empty(tags::PATIENT_NAME, VR::PN);
    let decoder = element.decoder();
    assert!(decoder.to_person_names().unwrap().is_empty());
    match decoder.to_person_name(true) {
        Err(DecodeValueError::MultipleValues { count: 0, .. }) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn custom_dictionary_is_consulted() {
    let element = DataElement::new(Tag(0x0019, 0x1001), VR::SL, dicom_value!(I64, [7]));

    // private attributes are never checked against a dictionary
    let decoder = ValueDecoder::with_dictionary(&element, VendorDictionary);
    assert_eq!(decoder.to_int(true).unwrap(), 7);

    // standard attributes unknown to the custom dictionary are not checked either
    let element = DataElement::new(tags::PIXEL_SPACING, VR::DS, dicom_value!(Strs, ["0.5"]));
    let decoder = ValueDecoder::with_dictionary(&element, VendorDictionary);
    assert_eq!(decoder.to_str(true).unwrap(), "0.5");

    // but switching back to the standard dictionary brings the constraint back
    let decoder = decoder.dictionary(dicom_value_dictionary_std::StandardDataDictionary);
    assert!(decoder.to_str(true).is_err());
}

#[test]
fn conversion_errors_name_the_variants() {
    let element = DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(512_i64));
    let err = element.decoder().to_strings().unwrap_err();
    assert_eq!(
        err.to_string(),
        "error decoding element value: underlying not expected type: requested strings but value is I64"
    );
}

#[test]
#[should_panic(expected = "error parsing string value 1")]
fn must_decoder_panics_on_parse_failure() {
    let element = DataElement::new(
        tags::DATE_OF_LAST_CALIBRATION,
        VR::DA,
        dicom_value!(Strs, ["20200101", "20201301"]),
    );
    element.decoder().must().to_dates(false);
}
