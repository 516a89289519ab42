use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Ignore,
    None,
}

impl Severity {
    /// One-letter code shown with `--severity`, or `None` if violations of
    /// this severity are never reported.
    pub fn code(self) -> Option<char> {
        match self {
            Severity::Error => Some('e'),
            Severity::Warning => Some('w'),
            Severity::Info => Some('i'),
            Severity::Ignore | Severity::None => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownSeverity(pub String);

impl fmt::Display for UnknownSeverity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown severity '{}'", self.0)
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Severity, UnknownSeverity> {
        match s {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "ignore" => Ok(Severity::Ignore),
            // checkstyle writers leave the attribute out for "none"
            "none" | "" => Ok(Severity::None),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}
