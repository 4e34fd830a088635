//! Parsing and serialization of _Person Name_ (PN) values.
//!
//! A person name holds up to three component groups delimited by `=`:
//! the alphabetic, the ideographic and the phonetic representation.
//! Each group holds up to five components delimited by `^`:
//! family name, given name, middle name, name prefix and name suffix.
//!
//! Trailing empty components may or may not be followed by delimiters.
//! This is tracked at both tiers with a _trailing null level_,
//! the highest delimiter boundary found before the trailing emptiness,
//! so that values are written back with the same delimiters
//! in which they were read.
//!
//! # Example
//!
//! ```
//! # use dicom_value_core::value::PersonName;
//! let name = PersonName::parse("Potter^Harry")?;
//! assert_eq!(name.alphabetic().family_name(), "Potter");
//! assert_eq!(name.alphabetic().given_name(), "Harry");
//! assert_eq!(name.to_dicom_string(), "Potter^Harry");
//! assert_eq!(
//!     name.with_trailing_nulls().to_dicom_string(),
//!     "Potter^Harry^^^=^^^^=^^^^",
//! );
//! # Ok::<_, dicom_value_core::value::person_name::Error>(())
//! ```

use crate::value::render::render_with_separators;
use snafu::{ensure, Backtrace, Snafu};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

const GROUP_SEPARATOR: char = '=';
const SEGMENT_SEPARATOR: char = '^';

const MAX_GROUPS: usize = 3;
const MAX_SEGMENTS: usize = 5;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display(
        "error parsing PN value: no more than 3 groups with \
         '[Alphabetic]=[Ideographic]=[Phonetic]' format are allowed: \
         value contains {} groups. see 'PN' entry in official dicom spec: \
         http://dicom.nema.org/medical/dicom/current/output/html/part05.html#sect_6.2",
        count
    ))]
    TooManyGroups { count: usize, backtrace: Backtrace },
    #[snafu(display(
        "error parsing PN value: no more than 5 segments with \
         '[Last]^[First]^[Middle]^[Prefix]^[Suffix]' format are allowed: \
         value group {} contains {} segments. see 'PN' entry in official dicom spec: \
         http://dicom.nema.org/medical/dicom/current/output/html/part05.html#sect_6.2",
        group,
        count
    ))]
    TooManyGroupSegments {
        group: NameGroupKind,
        count: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("trailing null level {} is out of range, must be at most {}", got, max))]
    InvalidNullLevel {
        max: usize,
        got: usize,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// One of the three component groups of a person name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NameGroupKind {
    /// The alphabetic representation of the name
    Alphabetic,
    /// The ideographic representation of the name
    Ideographic,
    /// The phonetic representation of the name
    Phonetic,
}

impl NameGroupKind {
    fn from_index(i: usize) -> Option<NameGroupKind> {
        match i {
            0 => Some(NameGroupKind::Alphabetic),
            1 => Some(NameGroupKind::Ideographic),
            2 => Some(NameGroupKind::Phonetic),
            _ => None,
        }
    }
}

impl fmt::Display for NameGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            NameGroupKind::Alphabetic => "Alphabetic",
            NameGroupKind::Ideographic => "Ideographic",
            NameGroupKind::Phonetic => "Phonetic",
        })
    }
}

/// The highest component delimiter kept after the last
/// non-empty component of a name group.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupNullLevel {
    /// No trailing delimiters
    #[default]
    None = 0,
    /// Delimiters up to the given name
    Given = 1,
    /// Delimiters up to the middle name
    Middle = 2,
    /// Delimiters up to the name prefix
    Prefix = 3,
    /// Delimiters up to the name suffix, all four of them
    All = 4,
}

/// The highest group delimiter kept after the last
/// non-empty group of a person name.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameNullLevel {
    /// No trailing delimiters
    #[default]
    None = 0,
    /// Delimiters up to the ideographic group
    Ideographic = 1,
    /// Delimiters up to the phonetic group, both of them
    All = 2,
}

impl TryFrom<usize> for GroupNullLevel {
    type Error = Error;

    fn try_from(level: usize) -> Result<Self> {
        match level {
            0 => Ok(GroupNullLevel::None),
            1 => Ok(GroupNullLevel::Given),
            2 => Ok(GroupNullLevel::Middle),
            3 => Ok(GroupNullLevel::Prefix),
            4 => Ok(GroupNullLevel::All),
            got => InvalidNullLevelSnafu { max: 4_usize, got }.fail(),
        }
    }
}

impl TryFrom<usize> for NameNullLevel {
    type Error = Error;

    fn try_from(level: usize) -> Result<Self> {
        match level {
            0 => Ok(NameNullLevel::None),
            1 => Ok(NameNullLevel::Ideographic),
            2 => Ok(NameNullLevel::All),
            got => InvalidNullLevelSnafu { max: 2_usize, got }.fail(),
        }
    }
}

impl From<GroupNullLevel> for usize {
    fn from(level: GroupNullLevel) -> usize {
        level as usize
    }
}

impl From<NameNullLevel> for usize {
    fn from(level: NameNullLevel) -> usize {
        level as usize
    }
}

impl fmt::Display for GroupNullLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            GroupNullLevel::None => "NONE",
            GroupNullLevel::Given => "GivenName",
            GroupNullLevel::Middle => "MiddleName",
            GroupNullLevel::Prefix => "NamePrefix",
            GroupNullLevel::All => "ALL",
        })
    }
}

impl fmt::Display for NameNullLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            NameNullLevel::None => "NONE",
            NameNullLevel::Ideographic => "Ideographic",
            NameNullLevel::All => "ALL",
        })
    }
}

/// A single component group of a person name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct PersonNameGroup {
    family_name: String,
    given_name: String,
    middle_name: String,
    name_prefix: String,
    name_suffix: String,
    trailing_null_level: GroupNullLevel,
}

impl PersonNameGroup {
    /// Create a name group out of its five components,
    /// without trailing delimiters.
    pub fn new(
        family_name: impl Into<String>,
        given_name: impl Into<String>,
        middle_name: impl Into<String>,
        name_prefix: impl Into<String>,
        name_suffix: impl Into<String>,
    ) -> Self {
        PersonNameGroup {
            family_name: family_name.into(),
            given_name: given_name.into(),
            middle_name: middle_name.into(),
            name_prefix: name_prefix.into(),
            name_suffix: name_suffix.into(),
            trailing_null_level: GroupNullLevel::None,
        }
    }

    /// Return a copy of this group with the given trailing null level.
    pub fn with_trailing_null_level(self, trailing_null_level: GroupNullLevel) -> Self {
        PersonNameGroup {
            trailing_null_level,
            ..self
        }
    }

    /// The person's family or last name.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// The person's given or first names.
    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    /// Any middle names of the person.
    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }

    /// The name prefix, such as a title.
    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }

    /// The name suffix.
    pub fn name_suffix(&self) -> &str {
        &self.name_suffix
    }

    pub fn trailing_null_level(&self) -> GroupNullLevel {
        self.trailing_null_level
    }

    /// All five components in order.
    pub fn segments(&self) -> [&str; MAX_SEGMENTS] {
        [
            &self.family_name,
            &self.given_name,
            &self.middle_name,
            &self.name_prefix,
            &self.name_suffix,
        ]
    }

    /// Whether all components are empty,
    /// regardless of the trailing null level.
    pub fn is_empty(&self) -> bool {
        self.segments().iter().all(|s| s.is_empty())
    }

    /// Serialize the group into its DICOM form.
    pub fn to_dicom_string(&self) -> String {
        render_with_separators(
            &self.segments(),
            SEGMENT_SEPARATOR,
            self.trailing_null_level.into(),
        )
    }

    fn parse(text: &str, group: NameGroupKind) -> Result<Self> {
        let count = text.split(SEGMENT_SEPARATOR).count();
        ensure!(
            count <= MAX_SEGMENTS,
            TooManyGroupSegmentsSnafu { group, count }
        );

        let mut segments = text.split(SEGMENT_SEPARATOR).map(str::to_owned);
        let mut next = || segments.next().unwrap_or_default();
        let out = PersonNameGroup {
            family_name: next(),
            given_name: next(),
            middle_name: next(),
            name_prefix: next(),
            name_suffix: next(),
            trailing_null_level: GroupNullLevel::None,
        };

        // the delimiter levels only apply when the text ends in one
        if text.ends_with(SEGMENT_SEPARATOR) {
            let level = GroupNullLevel::try_from(count - 1)?;
            tracing::trace!("{} group '{}' has trailing null level {}", group, text, level);
            Ok(out.with_trailing_null_level(level))
        } else {
            Ok(out)
        }
    }
}

impl fmt::Display for PersonNameGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_dicom_string())
    }
}

/// A structured _Person Name_ value,
/// comprising its three component groups.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct PersonName {
    alphabetic: PersonNameGroup,
    ideographic: PersonNameGroup,
    phonetic: PersonNameGroup,
    trailing_null_level: NameNullLevel,
}

impl PersonName {
    /// Create a person name out of its three groups,
    /// without trailing group delimiters.
    pub fn new(
        alphabetic: PersonNameGroup,
        ideographic: PersonNameGroup,
        phonetic: PersonNameGroup,
    ) -> Self {
        PersonName {
            alphabetic,
            ideographic,
            phonetic,
            trailing_null_level: NameNullLevel::None,
        }
    }

    /// Parse a person name from its textual DICOM representation.
    ///
    /// Empty text yields an empty name without trailing delimiters.
    /// Missing groups and components are empty.
    pub fn parse(text: &str) -> Result<Self> {
        let count = text.split(GROUP_SEPARATOR).count();
        ensure!(count <= MAX_GROUPS, TooManyGroupsSnafu { count });

        let mut name = PersonName::default();
        let mut last_empty = false;
        for (i, group_text) in text.split(GROUP_SEPARATOR).enumerate() {
            let kind = match NameGroupKind::from_index(i) {
                Some(kind) => kind,
                None => break,
            };
            *name.group_mut(kind) = PersonNameGroup::parse(group_text, kind)?;
            last_empty = group_text.is_empty();
        }

        if last_empty {
            name.trailing_null_level = NameNullLevel::try_from(count - 1)?;
            tracing::trace!(
                "person name '{}' has trailing null level {}",
                text,
                name.trailing_null_level
            );
        }
        Ok(name)
    }

    pub fn alphabetic(&self) -> &PersonNameGroup {
        &self.alphabetic
    }

    pub fn ideographic(&self) -> &PersonNameGroup {
        &self.ideographic
    }

    pub fn phonetic(&self) -> &PersonNameGroup {
        &self.phonetic
    }

    /// Retrieve a component group by kind.
    pub fn group(&self, kind: NameGroupKind) -> &PersonNameGroup {
        match kind {
            NameGroupKind::Alphabetic => &self.alphabetic,
            NameGroupKind::Ideographic => &self.ideographic,
            NameGroupKind::Phonetic => &self.phonetic,
        }
    }

    fn group_mut(&mut self, kind: NameGroupKind) -> &mut PersonNameGroup {
        match kind {
            NameGroupKind::Alphabetic => &mut self.alphabetic,
            NameGroupKind::Ideographic => &mut self.ideographic,
            NameGroupKind::Phonetic => &mut self.phonetic,
        }
    }

    pub fn trailing_null_level(&self) -> NameNullLevel {
        self.trailing_null_level
    }

    /// Return a copy of this name with the given trailing null levels,
    /// for the name itself and for each of its groups.
    pub fn with_format(
        self,
        level: NameNullLevel,
        alphabetic: GroupNullLevel,
        ideographic: GroupNullLevel,
        phonetic: GroupNullLevel,
    ) -> Self {
        PersonName {
            alphabetic: self.alphabetic.with_trailing_null_level(alphabetic),
            ideographic: self.ideographic.with_trailing_null_level(ideographic),
            phonetic: self.phonetic.with_trailing_null_level(phonetic),
            trailing_null_level: level,
        }
    }

    /// Return a copy of this name which is written
    /// with every delimiter at every tier.
    pub fn with_trailing_nulls(&self) -> Self {
        self.clone().with_format(
            NameNullLevel::All,
            GroupNullLevel::All,
            GroupNullLevel::All,
            GroupNullLevel::All,
        )
    }

    /// Return a copy of this name which is written
    /// without any trailing delimiters.
    pub fn without_trailing_nulls(&self) -> Self {
        self.clone().with_format(
            NameNullLevel::None,
            GroupNullLevel::None,
            GroupNullLevel::None,
            GroupNullLevel::None,
        )
    }

    /// Return a copy of this name without trailing group delimiters,
    /// where empty groups lose their component delimiters.
    ///
    /// Groups with content keep their trailing null levels.
    pub fn without_empty_groups(&self) -> Self {
        let mut out = self.clone();
        out.trailing_null_level = NameNullLevel::None;
        for group in [
            &mut out.alphabetic,
            &mut out.ideographic,
            &mut out.phonetic,
        ] {
            if group.is_empty() {
                group.trailing_null_level = GroupNullLevel::None;
            }
        }
        out
    }

    /// Whether all components of all groups are empty,
    /// regardless of the trailing null levels.
    pub fn is_empty(&self) -> bool {
        self.alphabetic.is_empty() && self.ideographic.is_empty() && self.phonetic.is_empty()
    }

    /// Serialize the name into its DICOM form.
    pub fn to_dicom_string(&self) -> String {
        let groups = [
            self.alphabetic.to_dicom_string(),
            self.ideographic.to_dicom_string(),
            self.phonetic.to_dicom_string(),
        ];
        render_with_separators(&groups, GROUP_SEPARATOR, self.trailing_null_level.into())
    }
}

impl From<PersonNameGroup> for PersonName {
    fn from(alphabetic: PersonNameGroup) -> Self {
        PersonName {
            alphabetic,
            ..Default::default()
        }
    }
}

impl FromStr for PersonName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PersonName::parse(s)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_dicom_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn full_group(prefix: &str) -> PersonNameGroup {
        PersonNameGroup::new(
            format!("{}Family", prefix),
            format!("{}Given", prefix),
            format!("{}Middle", prefix),
            format!("{}Prefix", prefix),
            format!("{}Suffix", prefix),
        )
    }

    #[test]
    fn parse_all_groups() {
        let text = "aFamily^aGiven^aMiddle^aPrefix^aSuffix=\
                    iFamily^iGiven^iMiddle^iPrefix^iSuffix=\
                    pFamily^pGiven^pMiddle^pPrefix^pSuffix";
        let name = PersonName::parse(text).unwrap();
        assert_eq!(
            name,
            PersonName::new(full_group("a"), full_group("i"), full_group("p"))
        );
        assert!(!name.is_empty());
        assert_eq!(name.to_dicom_string(), text);
    }

    #[test]
    fn parse_missing_phonetic_group_keeps_delimiter() {
        let text = "aFamily^aGiven^aMiddle^aPrefix^aSuffix=\
                    iFamily^iGiven^iMiddle^iPrefix^iSuffix=";
        let name = PersonName::parse(text).unwrap();
        assert_eq!(name.trailing_null_level(), NameNullLevel::All);
        assert!(name.phonetic().is_empty());
        assert_eq!(name.to_dicom_string(), text);
    }

    #[test]
    fn parse_partial_group_levels() {
        let name = PersonName::parse("Potter^^").unwrap();
        assert_eq!(name.alphabetic().family_name(), "Potter");
        assert_eq!(name.alphabetic().trailing_null_level(), GroupNullLevel::Middle);
        assert_eq!(name.trailing_null_level(), NameNullLevel::None);

        let name = PersonName::parse("aSuffix=").unwrap();
        assert_eq!(name.trailing_null_level(), NameNullLevel::Ideographic);
        assert_eq!(name.alphabetic().family_name(), "aSuffix");

        // a non-empty group text resets the group tier level
        let name = PersonName::parse("=^").unwrap();
        assert_eq!(name.trailing_null_level(), NameNullLevel::None);
        assert_eq!(name.ideographic().trailing_null_level(), GroupNullLevel::Given);
        assert!(name.is_empty());
    }

    #[rstest]
    #[case("Potter^Harry")]
    #[case("Potter^")]
    #[case("Potter^^")]
    #[case("^Harry")]
    #[case("Potter^Harry^^^")]
    #[case("a^^c")]
    #[case("aSuffix=")]
    #[case("Yamada^Tarou=山田^太郎=やまだ^たろう")]
    #[case("=^")]
    #[case("=")]
    #[case("==")]
    #[case("")]
    fn parsed_names_are_written_back_verbatim(#[case] text: &str) {
        let name: PersonName = text.parse().unwrap();
        assert_eq!(name.to_dicom_string(), text);
        assert_eq!(name.to_string(), text);
    }

    #[test]
    fn empty_inputs() {
        let name = PersonName::parse("").unwrap();
        assert!(name.is_empty());
        assert_eq!(name.trailing_null_level(), NameNullLevel::None);
        assert_eq!(name, PersonName::default());

        let name = PersonName::parse("==").unwrap();
        assert!(name.is_empty());
        assert_eq!(name.trailing_null_level(), NameNullLevel::All);
    }

    #[test]
    fn trailing_null_normalization() {
        let name = PersonName::parse("Potter^Harry").unwrap();
        assert_eq!(
            name.with_trailing_nulls().to_dicom_string(),
            "Potter^Harry^^^=^^^^=^^^^"
        );
        assert_eq!(
            name.with_trailing_nulls()
                .without_trailing_nulls()
                .to_dicom_string(),
            "Potter^Harry"
        );
        assert_eq!(
            PersonName::default().with_trailing_nulls().to_dicom_string(),
            "^^^^=^^^^=^^^^"
        );
    }

    #[test]
    fn without_empty_groups_keeps_partial_delimiters() {
        let name = PersonName::parse("Potter^Harry^^=^^=")
            .unwrap()
            .without_empty_groups();
        assert_eq!(name.trailing_null_level(), NameNullLevel::None);
        assert_eq!(name.alphabetic().trailing_null_level(), GroupNullLevel::Prefix);
        assert_eq!(name.ideographic().trailing_null_level(), GroupNullLevel::None);
        assert_eq!(name.to_dicom_string(), "Potter^Harry^^");
    }

    #[test]
    fn with_format_sets_every_level() {
        let name = PersonName::from(PersonNameGroup::new("Doe", "John", "", "", "")).with_format(
            NameNullLevel::Ideographic,
            GroupNullLevel::Given,
            GroupNullLevel::Middle,
            GroupNullLevel::None,
        );
        assert_eq!(name.to_dicom_string(), "Doe^John=^^");
    }

    #[test]
    fn too_many_groups() {
        let err = PersonName::parse("===").unwrap_err();
        assert!(matches!(err, Error::TooManyGroups { count: 4, .. }));
        assert_eq!(
            err.to_string(),
            "error parsing PN value: no more than 3 groups with \
             '[Alphabetic]=[Ideographic]=[Phonetic]' format are allowed: \
             value contains 4 groups. see 'PN' entry in official dicom spec: \
             http://dicom.nema.org/medical/dicom/current/output/html/part05.html#sect_6.2"
        );
    }

    #[rstest]
    #[case("^^^^^", NameGroupKind::Alphabetic)]
    #[case("=^^^^^", NameGroupKind::Ideographic)]
    #[case("==^^^^^", NameGroupKind::Phonetic)]
    fn too_many_segments(#[case] text: &str, #[case] kind: NameGroupKind) {
        match PersonName::parse(text) {
            Err(err @ Error::TooManyGroupSegments { .. }) => {
                let message = err.to_string();
                assert!(message.contains(&format!("value group {} contains 6 segments", kind)));
                assert!(matches!(err, Error::TooManyGroupSegments { group, count: 6, .. } if group == kind));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn null_levels_from_index() {
        assert_eq!(GroupNullLevel::try_from(3).unwrap(), GroupNullLevel::Prefix);
        assert_eq!(NameNullLevel::try_from(1).unwrap(), NameNullLevel::Ideographic);
        assert!(matches!(
            GroupNullLevel::try_from(5),
            Err(Error::InvalidNullLevel { max: 4, got: 5, .. })
        ));
        assert!(matches!(
            NameNullLevel::try_from(3),
            Err(Error::InvalidNullLevel { max: 2, got: 3, .. })
        ));
    }

    #[test]
    fn null_level_names() {
        assert_eq!(GroupNullLevel::None.to_string(), "NONE");
        assert_eq!(GroupNullLevel::Given.to_string(), "GivenName");
        assert_eq!(GroupNullLevel::Middle.to_string(), "MiddleName");
        assert_eq!(GroupNullLevel::Prefix.to_string(), "NamePrefix");
        assert_eq!(GroupNullLevel::All.to_string(), "ALL");
        assert_eq!(NameNullLevel::Ideographic.to_string(), "Ideographic");
        assert_eq!(NameNullLevel::All.to_string(), "ALL");
    }
}
