/// Line comment marker.
pub const COMMENT: &str = "//";

/// Splits a raw line into its code part and the comment text after `//`.
pub fn split_comment(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once(COMMENT) {
        Some((code, comment)) => (code, Some(comment)),
        None => (raw, None),
    }
}

/// Strips comments and blank lines, keeping the 0-based source index of each line.
pub fn clean_lines(text: &str) -> Vec<(usize, String)> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let (code, _) = split_comment(raw);
            let code = code.trim();
            (!code.is_empty()).then(|| (idx, code.to_string()))
        })
        .collect()
}

pub fn clean(text: &str) -> Vec<String> {
    clean_lines(text).into_iter().map(|(_, code)| code).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_comments_and_blanks() {
        let text = "// header\n\n   @2  // load\n\tD=A\n   \n// trailer";
        assert_eq!(clean(text), vec!["@2", "D=A"]);
    }

    #[test]
    fn keeps_source_index() {
        let text = "// header\n@2\n\nD=A\r\n";
        assert_eq!(
            clean_lines(text),
            vec![(1, "@2".to_string()), (3, "D=A".to_string())]
        );
    }

    #[test]
    fn comment_only_line() {
        assert_eq!(split_comment("//// x"), ("", Some("// x")));
        assert_eq!(split_comment("M=D"), ("M=D", None));
        assert!(clean("   // nothing here").is_empty());
    }
}
