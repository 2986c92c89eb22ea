//! Output formatter implementations.

use crate::Result;

use super::{OutputFormatter, Report};

/// Formatter printing the result path of each report on its own line.
///
/// `common-prefix --remove` reports are followed by their remainders, one per
/// line. The empty "no relation" result prints as an empty line.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[Report]) -> Result<String> {
        let mut lines = Vec::new();

        for report in reports {
            lines.push(report.result.display().to_string());
            lines.extend(report.remainders.iter().map(|r| r.display().to_string()));
        }

        Ok(lines.join("\n"))
    }
}

/// Formatter emitting reports as pretty-printed JSON.
///
/// A single report is written as an object, several as an array.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[Report]) -> Result<String> {
        let json = match reports {
            [single] => serde_json::to_string_pretty(single)?,
            _ => serde_json::to_string_pretty(reports)?,
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn relative_report() -> Report {
        Report::relation(
            "relative",
            Path::new("/a/d"),
            Path::new("/a/b/c"),
            PathBuf::from("../../d"),
        )
    }

    #[test]
    fn test_text_one_line_per_report() {
        let reports = [
            Report::single("normalize", Path::new("a/./b"), PathBuf::from("a/b")),
            Report::single("normalize", Path::new("../x/.."), PathBuf::from("..")),
        ];
        assert_eq!(TextFormatter.format(&reports).unwrap(), "a/b\n..");
    }

    #[test]
    fn test_text_empty_result_is_empty_line() {
        let reports = [Report::relation(
            "lexical",
            Path::new("a"),
            Path::new("/b"),
            PathBuf::new(),
        )];
        assert_eq!(TextFormatter.format(&reports).unwrap(), "");
    }

    #[test]
    fn test_text_includes_remainders() {
        let reports = [Report::many(
            "common-prefix",
            vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/d")],
            PathBuf::from("/a"),
            vec![PathBuf::from("b/c"), PathBuf::from("d")],
        )];
        assert_eq!(TextFormatter.format(&reports).unwrap(), "/a\nb/c\nd");
    }

    #[test]
    fn test_json_single_report_is_object() {
        let output = JsonFormatter.format(&[relative_report()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["operation"], "relative");
        assert_eq!(parsed["path"], "/a/d");
        assert_eq!(parsed["start"], "/a/b/c");
        assert_eq!(parsed["result"], "../../d");
        assert_eq!(parsed["is_empty"], false);
        assert!(parsed.get("inputs").is_none());
        assert!(parsed.get("remainders").is_none());
    }

    #[test]
    fn test_json_several_reports_is_array() {
        let output = JsonFormatter
            .format(&[relative_report(), relative_report()])
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    }

    #[cfg(unix)]
    #[test]
    fn test_json_rejects_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bad = PathBuf::from(OsStr::from_bytes(b"caf\xe9"));
        let report = Report::single("normalize", &bad, bad.clone());
        assert!(matches!(
            JsonFormatter.format(&[report]),
            Err(crate::Error::Json(_))
        ));
    }
}
