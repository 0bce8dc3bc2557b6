use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn run_config(list: &[&str]) -> KwgenConfig {
    match parse_args(&args(list)) {
        Ok(Command::Run(config)) => config,
        other => panic!("expected run config, got {other:?}"),
    }
}

#[test]
fn no_arguments_is_empty_run() {
    assert_eq!(run_config(&[]), KwgenConfig::default());
}

#[test]
fn defaults_match_word_list_format() {
    let config = KwgenConfig::default();
    assert_eq!(config.marker, b':');
    assert_eq!(config.max_prefix, 255);
    assert_eq!(config.output, None);
}

#[test]
fn files_keep_order() {
    let config = run_config(&["b.txt", "a.txt"]);
    assert_eq!(config.files, [PathBuf::from("b.txt"), PathBuf::from("a.txt")]);
}

#[test]
fn options_anywhere() {
    let config = run_config(&["one.txt", "--marker=@", "two.txt", "--max-prefix=8"]);
    assert_eq!(config.files.len(), 2);
    assert_eq!(config.marker, b'@');
    assert_eq!(config.max_prefix, 8);
}

#[test]
fn output_path() {
    let config = run_config(&["-o", "out.tex", "words.txt"]);
    assert_eq!(config.output, Some(PathBuf::from("out.tex")));
    assert_eq!(config.files, [PathBuf::from("words.txt")]);
}

#[test]
fn help_wins() {
    assert!(matches!(parse_args(&args(&["x.txt", "--help"])), Ok(Command::Help)));
    assert!(matches!(parse_args(&args(&["-h"])), Ok(Command::Help)));
}

#[test]
fn missing_output_path() {
    let err = parse_args(&args(&["-o"]));
    assert!(matches!(err, Err(KwgenError::Usage(ref msg)) if msg.contains("-o")));
}

#[test]
fn multi_byte_marker_rejected() {
    assert!(matches!(
        parse_args(&args(&["--marker=::"])),
        Err(KwgenError::Usage(_))
    ));
    assert!(matches!(
        parse_args(&args(&["--marker="])),
        Err(KwgenError::Usage(_))
    ));
}

#[test]
fn bad_prefix_length_rejected() {
    let result = parse_args(&args(&["--max-prefix=lots"]));
    assert!(matches!(result, Err(KwgenError::Usage(ref msg)) if msg.contains("lots")));
}

#[test]
fn unknown_option_rejected() {
    let result = parse_args(&args(&["--verbose"]));
    assert!(matches!(result, Err(KwgenError::Usage(ref msg)) if msg.contains("--verbose")));
}
