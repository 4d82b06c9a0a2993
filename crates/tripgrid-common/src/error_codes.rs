//! Error categories and the sysexits.h exit codes they map to.

pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const DATAERR: i32 = 65;
    pub const NOINPUT: i32 = 66;
    pub const CANTCREAT: i32 = 73;
    pub const IOERR: i32 = 74;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input bytes decoded but do not describe a valid grid, or did not decode.
    InvalidInput,
    /// The input file does not exist.
    NotFound,
    /// The output file could not be created or replaced.
    Output,
    /// Any other filesystem failure.
    External,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::InvalidInput => "invalid_input",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Output => "output",
            ErrorCategory::External => "external",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::InvalidInput => exit_codes::DATAERR,
            ErrorCategory::NotFound => exit_codes::NOINPUT,
            ErrorCategory::Output => exit_codes::CANTCREAT,
            ErrorCategory::External => exit_codes::IOERR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCategory; 4] = [
        ErrorCategory::InvalidInput,
        ErrorCategory::NotFound,
        ErrorCategory::Output,
        ErrorCategory::External,
    ];

    #[test]
    fn test_category_strings_are_distinct() {
        let mut names: Vec<&str> = ALL.iter().map(ErrorCategory::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
        assert_eq!(ErrorCategory::InvalidInput.as_str(), "invalid_input");
    }

    #[test]
    fn test_category_exit_codes() {
        assert_eq!(ErrorCategory::InvalidInput.exit_code(), 65);
        assert_eq!(ErrorCategory::NotFound.exit_code(), 66);
        assert_eq!(ErrorCategory::Output.exit_code(), 73);
        assert_eq!(ErrorCategory::External.exit_code(), 74);
    }
}
