use crate::report::ReportSet;
use std::io::Write;

/// Formats every retained violation as `file:line:column: message`, with the
/// severity code after the column when `output_severity` is set. Files come in
/// name order and violations in line, column, message order.
pub fn render(reports: &ReportSet, output_severity: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(reports.len());
    for (filename, file) in reports.files() {
        for v in file.violations() {
            let message = v.message.replace('\n', "");
            let line = if output_severity {
                format!(
                    "{}:{}:{}:{}: {}",
                    filename, v.line, v.column, v.code, message
                )
            } else {
                format!("{}:{}:{}: {}", filename, v.line, v.column, message)
            };
            lines.push(line);
        }
    }
    lines
}

pub fn display_violations<W: Write>(
    reports: &ReportSet,
    output_severity: bool,
    mut out: W,
) -> std::io::Result<usize> {
    let lines = render(reports, output_severity);
    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(lines.len())
}

#[cfg(test)]
mod tests {
    use crate::checkstyle;
    use crate::report::ReportSet;
    use crate::severity::Severity;

    fn two_files() -> ReportSet {
        let mut reports = ReportSet::new();
        checkstyle::read_reports(
            include_str!("../tests/data/two-files.xml").as_bytes(),
            &mut reports,
        )
        .unwrap();
        reports
    }

    #[test]
    fn test_render_without_severity() {
        assert_eq!(
            super::render(&two_files(), false),
            vec!["A.java:5:2: bad", "B.java:1:1: hmm"]
        );
    }

    #[test]
    fn test_render_with_severity() {
        assert_eq!(
            super::render(&two_files(), true),
            vec!["A.java:5:2:e: bad", "B.java:1:1:w: hmm"]
        );
    }

    #[test]
    fn test_render_flag_only_adds_code() {
        let mut reports = ReportSet::new();
        reports.record("x.c", 3, 0, Severity::Info, "a: b");
        reports.record("x.c", 1, 9, Severity::Error, "c");
        reports.record("w.c", 2, 2, Severity::Warning, "d");
        let plain = super::render(&reports, false);
        let tagged = super::render(&reports, true);
        assert_eq!(plain.len(), tagged.len());
        for (p, t) in plain.iter().zip(&tagged) {
            let mut parts = t.splitn(5, ':').collect::<Vec<_>>();
            assert!(["e", "w", "i"].contains(&parts.remove(3)));
            assert_eq!(&parts.join(":"), p);
        }
    }

    #[test]
    fn test_render_strips_newlines() {
        let mut reports = ReportSet::new();
        reports.record("a", 1, 1, Severity::Error, "one\ntwo\n");
        assert_eq!(super::render(&reports, false), vec!["a:1:1: onetwo"]);
    }

    #[test]
    fn test_render_numeric_order() {
        let mut reports = ReportSet::new();
        reports.record("a", 10, 1, Severity::Error, "m");
        reports.record("a", 9, 12, Severity::Error, "m");
        reports.record("a", 9, 2, Severity::Error, "z");
        reports.record("a", 9, 2, Severity::Error, "a");
        assert_eq!(
            super::render(&reports, false),
            vec!["a:9:2: a", "a:9:2: z", "a:9:12: m", "a:10:1: m"]
        );
    }

    #[test]
    fn test_render_empty() {
        assert!(super::render(&ReportSet::new(), true).is_empty());
    }

    #[test]
    fn test_display_violations() {
        let mut out = Vec::new();
        let n = super::display_violations(&two_files(), true, &mut out).unwrap();
        assert_eq!(n, 2);
        assert_eq!(
            String::from_utf8_lossy(&out),
            "A.java:5:2:e: bad\nB.java:1:1:w: hmm\n"
        );
    }
}
