/// How to process retired entries
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RetiredOptions {
    /// ignore retired attributes
    Ignore,
    /// include retired attributes
    Include {
        /// mark constants as deprecated
        deprecate: bool,
    },
}

impl RetiredOptions {
    /// Create retired options from two flags.
    /// `ignore` takes precedence over `deprecate`.
    pub fn from_flags(ignore: bool, deprecate: bool) -> Self {
        if ignore {
            RetiredOptions::Ignore
        } else {
            RetiredOptions::Include { deprecate }
        }
    }

    /// Whether retired constants are marked as deprecated.
    pub fn deprecates(self) -> bool {
        matches!(self, RetiredOptions::Include { deprecate: true })
    }
}

#[cfg(test)]
mod tests {
    use super::RetiredOptions;

    #[test]
    fn ignoring_takes_precedence() {
        assert_eq!(RetiredOptions::from_flags(true, true), RetiredOptions::Ignore);
        assert_eq!(
            RetiredOptions::from_flags(false, true),
            RetiredOptions::Include { deprecate: true }
        );
        assert!(!RetiredOptions::from_flags(false, false).deprecates());
    }
}
