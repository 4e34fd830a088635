use dicom_value_core::prelude::*;

#[test]
fn can_use_prelude() {
    // can refer to `DataElement`, `Tag`, `VR`, and `dicom_value!`
    let elem = DataElement::new(
        Tag(0x0010, 0x0010),
        VR::PN,
        dicom_value!(Strs, ["Simões^João"]),
    );
    assert_eq!(elem.multiplicity(), 1);

    // can parse the structured values
    let name: PersonName = elem.value().strings().unwrap()[0].parse().unwrap();
    assert_eq!(name.alphabetic().given_name(), "João");

    let date: DicomDate = "20240229".parse().unwrap();
    let time: DicomTime = "2359".parse().unwrap();
    let datetime = DicomDateTime::from_date_and_time(date, time).unwrap();
    assert_eq!(datetime.to_dicom_string(), "202402292359");

    // and store them back
    let value = PrimitiveValue::from(&datetime);
    assert_eq!(value.strings().unwrap(), &["202402292359".to_owned()]);

    // can call `by_tag`
    assert_eq!(
        dicom_value_core::dictionary::stub::StubDataDictionary.by_tag(Tag(0x0010, 0x0010)),
        None,
    );
}
