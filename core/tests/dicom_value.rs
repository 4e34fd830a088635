//! Separate test suite for using `dicom_value!` in an isolated context,
//! without direct access to dependency `smallvec`

// empty module makes `smallvec` dependency unreachable,
// as would be typical in dependents of `dicom_value_core`
// unless they include it themselves
mod smallvec {}

#[test]
fn use_dicom_value() {
    use dicom_value_core::dicom_value;

    // multiple string literals with variant, no trailing comma
    let value = dicom_value!(Strs, ["BASE", "LIGHT", "DARK"]);
    assert_eq!(
        value.strings().unwrap(),
        &["BASE".to_owned(), "LIGHT".to_owned(), "DARK".to_owned(),],
    );

    // single string with variant
    let value = dicom_value!(Strs, "Potter^Harry");
    assert_eq!(value.strings().unwrap(), &["Potter^Harry".to_owned()]);

    // numeric values
    let value = dicom_value!(I64, [1, 2, 5]);
    assert_eq!(value.ints().unwrap(), &[1, 2, 5],);

    // nothing at all
    let value = dicom_value!();
    assert!(value.is_empty());
    assert_eq!(value.multiplicity(), 0);
}
