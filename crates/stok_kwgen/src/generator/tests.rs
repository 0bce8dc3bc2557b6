use super::*;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn render(config: &KwgenConfig, source: &str) -> String {
    let mut generator = MacroGenerator::new(config);
    let mut out = Vec::new();
    generator.process_source(source.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// === Normalisation ===

#[test]
fn normalize_strips_all_whitespace() {
    assert_eq!(normalize_line(b"  foo bar\t"), b"foobar");
    assert_eq!(normalize_line(b"\x0B\x0Cbaz\r"), b"baz");
}

#[test]
fn normalize_blank_line_is_empty() {
    assert!(normalize_line(b"").is_empty());
    assert!(normalize_line(b" \t \r").is_empty());
}

// === Lines ===

#[test]
fn word_without_prefix() {
    let out = render(&KwgenConfig::default(), "if\n");
    assert_eq!(out, "\\newcommand{\\if}{\\texttt{if}}\n");
}

#[test]
fn prefix_applies_to_following_words() {
    let out = render(&KwgenConfig::default(), ":kw\nif\nelse\n");
    assert_eq!(
        out,
        "\\newcommand{\\kwif}{\\texttt{if}}\n\\newcommand{\\kwelse}{\\texttt{else}}\n"
    );
}

#[test]
fn prefix_can_change_and_clear() {
    let out = render(&KwgenConfig::default(), ":kw\nif\n:op\nplus\n:\nraw\n");
    assert_eq!(
        out,
        concat!(
            "\\newcommand{\\kwif}{\\texttt{if}}\n",
            "\\newcommand{\\opplus}{\\texttt{plus}}\n",
            "\\newcommand{\\raw}{\\texttt{raw}}\n",
        )
    );
}

#[test]
fn blank_and_whitespace_lines_skipped() {
    let out = render(&KwgenConfig::default(), "\n   \n\tfor \n\n");
    assert_eq!(out, "\\newcommand{\\for}{\\texttt{for}}\n");
}

#[test]
fn last_line_without_newline() {
    let out = render(&KwgenConfig::default(), "a\nb");
    assert_eq!(out, "\\newcommand{\\a}{\\texttt{a}}\n\\newcommand{\\b}{\\texttt{b}}\n");
}

#[test]
fn crlf_line_endings() {
    let out = render(&KwgenConfig::default(), ":p\r\nx\r\n");
    assert_eq!(out, "\\newcommand{\\px}{\\texttt{x}}\n");
}

#[test]
fn indented_marker_still_sets_prefix() {
    let out = render(&KwgenConfig::default(), "  : k w \nfn\n");
    assert_eq!(out, "\\newcommand{\\kwfn}{\\texttt{fn}}\n");
}

#[test]
fn custom_marker() {
    let config = KwgenConfig {
        marker: b'@',
        ..KwgenConfig::default()
    };
    let out = render(&config, "@m\n:x\n");
    assert_eq!(out, "\\newcommand{\\m:x}{\\texttt{:x}}\n");
}

#[test]
fn long_prefix_truncated() {
    let config = KwgenConfig {
        max_prefix: 3,
        ..KwgenConfig::default()
    };
    let mut generator = MacroGenerator::new(&config);
    let mut out = Vec::new();
    generator.process_line(b":abcdef", &mut out).unwrap();
    assert_eq!(generator.prefix(), b"abc");
    assert!(out.is_empty());
}

#[test]
fn emitted_counts_macros() {
    let mut generator = MacroGenerator::new(&KwgenConfig::default());
    let mut out = Vec::new();
    generator.process_source(b":p\na\n\nb\n", &mut out).unwrap();
    assert_eq!(generator.emitted(), 2);
}

// === Files ===

#[test]
fn prefix_persists_across_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    std::fs::write(&first, ":kw\nlet\n").unwrap();
    std::fs::write(&second, "in\n").unwrap();

    let mut generator = MacroGenerator::new(&KwgenConfig::default());
    let mut out = Vec::new();
    generator.process_file(&first, &mut out).unwrap();
    generator.process_file(&second, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\\newcommand{\\kwlet}{\\texttt{let}}\n\\newcommand{\\kwin}{\\texttt{in}}\n"
    );
}

#[test]
fn missing_file_reports_path() {
    let mut generator = MacroGenerator::new(&KwgenConfig::default());
    let mut out = Vec::new();
    let path = PathBuf::from("/nonexistent/words.txt");
    let err = generator.process_file(&path, &mut out).unwrap_err();
    assert!(matches!(err, KwgenError::Read { .. }));
    assert_eq!(err.to_string(), "cannot find file '/nonexistent/words.txt'");
}

/// Writer that fails every write.
struct Broken;

impl Write for Broken {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("disk full"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, "word\n").unwrap();

    let mut generator = MacroGenerator::new(&KwgenConfig::default());
    let err = generator.process_file(&path, &mut Broken).unwrap_err();
    assert!(matches!(err, KwgenError::Write { .. }));
    assert_eq!(err.to_string(), "error writing output: disk full");
}
