use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use fswatch::cli::CliArgs;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn plain_directories_parse() -> TestResult {
    let args = CliArgs::try_parse_from(["fswatch", "/tmp/a", "/tmp/b"])?;
    assert_eq!(args.extension, None);
    assert_eq!(
        args.directories,
        vec![PathBuf::from("/tmp/a"), PathBuf::from("/tmp/b")]
    );
    Ok(())
}

#[test]
fn extension_flag_parses() -> TestResult {
    let args = CliArgs::try_parse_from(["fswatch", "-t", "txt", "/tmp/a"])?;
    assert_eq!(args.extension.as_deref(), Some("txt"));
    assert_eq!(args.directories, vec![PathBuf::from("/tmp/a")]);
    Ok(())
}

#[test]
fn double_dash_passes_leading_dash_directories_verbatim() -> TestResult {
    let args = CliArgs::try_parse_from(["fswatch", "-t", "txt", "--", "-weird", "a"])?;
    assert_eq!(
        args.directories,
        vec![PathBuf::from("-weird"), PathBuf::from("a")]
    );
    Ok(())
}

#[test]
fn zero_directories_is_an_error() {
    assert!(CliArgs::try_parse_from(["fswatch"]).is_err());
    assert!(CliArgs::try_parse_from(["fswatch", "-t", "txt"]).is_err());
}

#[test]
fn unknown_flags_are_errors() {
    assert!(CliArgs::try_parse_from(["fswatch", "-x", "/tmp/a"]).is_err());
    // Help/version are disabled: the CLI surface is just -t and directories.
    assert!(CliArgs::try_parse_from(["fswatch", "--help"]).is_err());
}

#[test]
fn missing_extension_value_is_an_error() {
    assert!(CliArgs::try_parse_from(["fswatch", "/tmp/a", "-t"]).is_err());
}
