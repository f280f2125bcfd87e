use clap::Parser;
use dropin::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("dropin")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["./apptemplate", "./bookstore", "--entities", "Book,Library"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.source(), Some(&PathBuf::from("./apptemplate")));
    assert_eq!(parsed.target(), &PathBuf::from("./bookstore"));
    assert_eq!(parsed.entities, vec!["Book", "Library"]);
    assert!(parsed.project_name.is_none());
    assert!(parsed.module_path.is_none());
    assert!(!parsed.exclude_appitem);
    assert!(!parsed.dry_run);
    assert!(!parsed.skip_codegen);
    assert_eq!(parsed.verbose, 0);
}

#[test]
fn test_single_path_is_target() {
    let args = make_args(&["./bookstore", "--entities", "Book"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.source(), None);
    assert_eq!(parsed.target(), &PathBuf::from("./bookstore"));
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "./apptemplate",
        "./bookstore",
        "--entities",
        "Book",
        "--project-name",
        "bookstore",
        "--module-path",
        "github.com/alice/bookstore",
        "--exclude-appitem",
        "--dry-run",
        "--skip-codegen",
        "--config",
        "dropin.yaml",
        "-vv",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.project_name.as_deref(), Some("bookstore"));
    assert_eq!(parsed.module_path.as_deref(), Some("github.com/alice/bookstore"));
    assert!(parsed.exclude_appitem);
    assert!(parsed.dry_run);
    assert!(parsed.skip_codegen);
    assert_eq!(parsed.config, Some(PathBuf::from("dropin.yaml")));
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn test_missing_entities() {
    let args = make_args(&["./apptemplate", "./bookstore"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_missing_paths() {
    let args = make_args(&["--entities", "Book"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./apptemplate", "./bookstore", "extra", "--entities", "Book"]);
    assert!(Args::try_parse_from(args).is_err());
}
