//! Properties of the textual value codecs
//! which hold for any well-formed input.

use dicom_value_core::value::render::render_with_separators;
use dicom_value_core::value::temporal::{parse_date, parse_datetime, parse_time};
use dicom_value_core::value::{GroupNullLevel, NameNullLevel, PersonName};
use rstest::rstest;

#[rstest]
#[case("Potter^Harry")]
#[case("Potter^Harry^^^")]
#[case("Potter^Harry^")]
#[case("^^Middle")]
#[case("Yamada^Tarou=山田^太郎=やまだ^たろう")]
#[case("Yamada^Tarou==")]
#[case("Yamada^Tarou=")]
#[case("=山田^太郎")]
#[case("")]
fn person_names_are_written_as_read(#[case] text: &str) {
    let name = PersonName::parse(text).unwrap();
    assert_eq!(name.to_dicom_string(), text);
}

#[rstest]
#[case("Potter^Harry^^^==", "Potter^Harry")]
#[case("^^^^==", "")]
#[case("Yamada^^^=山田^^=", "Yamada=山田")]
fn trailing_nulls_can_be_stripped(#[case] text: &str, #[case] stripped: &str) {
    let name = PersonName::parse(text).unwrap();
    assert_eq!(name.without_trailing_nulls().to_dicom_string(), stripped);
}

#[test]
fn full_delimiters_are_added_on_request() {
    let name = PersonName::parse("Potter^Harry").unwrap();
    let full = name.with_trailing_nulls();
    assert_eq!(full.trailing_null_level(), NameNullLevel::All);
    assert_eq!(full.phonetic().trailing_null_level(), GroupNullLevel::All);
    assert_eq!(full.to_dicom_string(), "Potter^Harry^^^=^^^^=^^^^");
    assert_eq!(full.without_empty_groups().to_dicom_string(), "Potter^Harry^^^");
}

#[test]
fn separators_never_hide_content() {
    let segments = ["", "", "Middle", "", ""];
    for level in 0..segments.len() {
        let text = render_with_separators(&segments, '^', level);
        assert!(text.starts_with("^^Middle"), "{} at level {}", text, level);
        assert_eq!(text.split('^').count(), level.max(2) + 1);
    }
}

#[rstest]
#[case("1999")]
#[case("199912")]
#[case("19991231")]
fn dates_are_written_as_read(#[case] text: &str) {
    assert_eq!(parse_date(text, false).unwrap().to_dicom_string(), text);
}

#[rstest]
#[case("23")]
#[case("2359")]
#[case("235959")]
#[case("235959.1")]
#[case("235959.999999")]
fn times_are_written_as_read(#[case] text: &str) {
    assert_eq!(parse_time(text).unwrap().to_dicom_string(), text);
}

#[rstest]
#[case("1999")]
#[case("19991231")]
#[case("1999123123")]
#[case("19991231235959.5")]
#[case("19991231235959.123456+0100")]
#[case("2020-0800")]
fn datetimes_are_written_as_read(#[case] text: &str) {
    assert_eq!(parse_datetime(text).unwrap().to_dicom_string(), text);
}

#[rstest]
#[case("19990230")]
#[case("1999-12-31")]
#[case("99")]
fn bad_dates_are_rejected(#[case] text: &str) {
    assert!(parse_date(text, true).is_err());
}

#[rstest]
#[case("24")]
#[case("2360")]
#[case("235960")]
#[case("12:30")]
#[case("235959.1234567")]
fn bad_times_are_rejected(#[case] text: &str) {
    assert!(parse_time(text).is_err());
}

#[rstest]
#[case("20200101+1500")]
#[case("20200101+0060")]
#[case("20200101+01")]
fn bad_offsets_are_rejected(#[case] text: &str) {
    assert!(parse_datetime(text).is_err());
}
