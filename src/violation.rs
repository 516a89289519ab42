use std::cmp::Ordering;

/// A reported `<error>` entry of a checkstyle report, carrying the display
/// code of its severity.
///
/// Two violations are equal when line, column and message match; the code is
/// not part of the identity, so a set of violations keeps whichever code was
/// inserted first.
#[derive(Clone, Debug)]
pub struct Violation {
    pub line: i64,
    pub column: i64,
    pub code: char,
    pub message: String,
}

impl Violation {
    fn key(&self) -> (i64, i64, &str) {
        (self.line, self.column, &self.message)
    }
}

impl PartialEq for Violation {
    fn eq(&self, other: &Violation) -> bool {
        self.key() == other.key() /* ignore code */
    }
}

impl Eq for Violation {}

impl PartialOrd for Violation {
    fn partial_cmp(&self, other: &Violation) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Violation {
    fn cmp(&self, other: &Violation) -> Ordering {
        self.key().cmp(&other.key())
    }
}

#[cfg(test)]
mod tests {
    use super::Violation;

    fn v(line: i64, column: i64, code: char, message: &str) -> Violation {
        Violation {
            line,
            column,
            code,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_eq_ignores_code() {
        assert_eq!(v(1, 2, 'e', "foo"), v(1, 2, 'i', "foo"));
        assert_ne!(v(1, 2, 'e', "foo"), v(1, 3, 'e', "foo"));
        assert_ne!(v(1, 2, 'e', "foo"), v(1, 2, 'e', "bar"));
    }

    #[test]
    fn test_ord_is_line_column_message() {
        let mut vs = vec![
            v(10, 1, 'e', "a"),
            v(9, 99, 'e', "a"),
            v(9, 5, 'e', "b"),
            v(9, 5, 'w', "a"),
            v(100000000, 0, 'e', "a"),
            v(-1, 0, 'e', "a"),
        ];
        vs.sort();
        let keys: Vec<_> = vs.iter().map(|v| (v.line, v.column, v.message.as_str())).collect();
        assert_eq!(
            keys,
            vec![
                (-1, 0, "a"),
                (9, 5, "a"),
                (9, 5, "b"),
                (9, 99, "a"),
                (10, 1, "a"),
                (100000000, 0, "a"),
            ]
        );
    }
}
