//! Line-oriented pre-pass over raw script text.
//!
//! Runs before block extraction. Only single-line comments are removed
//! here; block comments are elided later by the extractor's balancer.

/// Marker that opens a single-line comment.
const LINE_COMMENT: &str = "//";

/// Splits on `\r\n`, `\r` and `\n`.
///
/// Unlike `str::lines`, a trailing terminator yields a final empty line, so
/// the line count survives a rejoin with `\n`.
fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(source);
    std::iter::from_fn(move || {
        let text = rest?;
        match text.find(['\r', '\n']) {
            Some(idx) => {
                let width = if text[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&text[idx + width..]);
                Some(&text[..idx])
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}

/// Removes every single-line comment from `source`.
///
/// Each line is trimmed, then cut at the first `//` and trimmed again.
/// The marker is matched without any awareness of string literals, so a
/// `//` inside a quoted string also truncates the line. Lines are joined
/// back with `\n`.
///
/// The output never contains `//` or `\r`, and keeps one line per input
/// line, so applying this twice is a no-op.
pub fn strip_line_comments(source: &str) -> String {
    split_lines(source)
        .map(|line| {
            let line = line.trim();
            match line.find(LINE_COMMENT) {
                Some(idx) => line[..idx].trim_end(),
                None => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Counts lines carrying code: not blank, and not starting with `//`.
pub fn count_code_lines(source: &str) -> u32 {
    let count = split_lines(source)
        .filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with(LINE_COMMENT)
        })
        .count();

    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_trailing_comment() {
        let out = strip_line_comments("start { return true; } // go");
        assert_eq!(out, "start { return true; }");
    }

    #[test]
    fn removes_whole_comment_lines_but_keeps_line_structure() {
        let out = strip_line_comments("// header\ninit {}\n  // note\nupdate {}");
        assert_eq!(out, "\ninit {}\n\nupdate {}");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let out = strip_line_comments("    vars.x = 1;   \n\tvars.y = 2;");
        assert_eq!(out, "vars.x = 1;\nvars.y = 2;");
    }

    #[test]
    fn marker_inside_string_literal_still_cuts() {
        let out = strip_line_comments(r#"print("https://example.com");"#);
        assert_eq!(out, r#"print("https:"#);
    }

    #[test]
    fn block_comments_are_left_alone() {
        let out = strip_line_comments("/* keep */ init { }");
        assert_eq!(out, "/* keep */ init { }");
    }

    #[test]
    fn stripping_is_idempotent() {
        let inputs = [
            "",
            "\n\n",
            "a // b // c",
            "/ //x",
            "///// all comment",
            "x = \"//\"; // y\r\n  z  ",
            "state(\"game.exe\") { int a : 0x10; } // ptr\nstart { return true; }",
            "split { return true; }\n// trailer\n",
            "split { return true; }\n\n\n",
            "start { return true; }\r// note\rsplit { return true; }\r",
        ];

        for input in inputs {
            let once = strip_line_comments(input);
            let twice = strip_line_comments(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
            assert!(!once.contains(LINE_COMMENT));
        }
    }

    #[test]
    fn trailing_lines_are_kept() {
        assert_eq!(strip_line_comments("\n\n"), "\n\n");
        assert_eq!(
            strip_line_comments("split { return true; }\n// trailer\n"),
            "split { return true; }\n\n"
        );
    }

    #[test]
    fn splits_on_every_line_ending() {
        let out = strip_line_comments("a // x\r\nb // y\rc // z\nd");
        assert_eq!(out, "a\nb\nc\nd");
    }

    #[test]
    fn carriage_return_only_source_keeps_later_lines() {
        let src = "start { return true; }\r// note\rsplit { return true; }\r";

        assert_eq!(
            strip_line_comments(src),
            "start { return true; }\n\nsplit { return true; }\n"
        );
        assert_eq!(count_code_lines(src), 2);
    }

    #[test]
    fn counts_only_code_lines() {
        let src = "// comment\n\n   \nstate(\"x\") {\n    // inner\n}\nstart { return true; }\n";
        assert_eq!(count_code_lines(src), 3);
    }

    #[test]
    fn empty_source_has_zero_lines() {
        assert_eq!(count_code_lines(""), 0);
    }
}
