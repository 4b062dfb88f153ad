use cpp_project::cli::Args;
use cpp_project::config::ProjectType;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("cpp_project")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let parsed = Args::try_parse_from(make_args(&["FlatMap"])).unwrap();

    assert_eq!(parsed.project_name, "FlatMap");
    assert_eq!(parsed.project_type, None);
    assert!(!parsed.git);
    assert!(!parsed.force);
    assert!(!parsed.yes);
    assert!(!parsed.dry_run);
    assert!(!parsed.verbose);

    let user = parsed.user_config();
    assert_eq!(user.project_name, "FlatMap");
    assert_eq!(user.abbreviation, None);
    assert_eq!(user.template_dir, None);
    assert!(!user.create_vcs);
}

#[test]
fn test_all_options() {
    let args = make_args(&[
        "flat_map",
        "-t",
        "lib",
        "-T",
        "mba_flat_map",
        "-s",
        "fm",
        "-n",
        "mba",
        "-N",
        "MBa",
        "-g",
        "--template-dir",
        "/templates",
        "--force",
        "--yes",
        "--dry-run",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();
    let user = parsed.user_config();

    assert_eq!(user.project_type, Some(ProjectType::CompiledLibrary));
    assert_eq!(user.target_base_name.as_deref(), Some("mba_flat_map"));
    assert_eq!(user.abbreviation.as_deref(), Some("fm"));
    assert_eq!(user.cpp_namespace.as_deref(), Some("mba"));
    assert_eq!(user.cmake_namespace.as_deref(), Some("MBa"));
    assert_eq!(user.template_dir, Some(PathBuf::from("/templates")));
    assert!(user.create_vcs);
    assert!(parsed.force && parsed.yes && parsed.dry_run && parsed.verbose);
}

#[test]
fn test_project_type_values() {
    let parse = |value: &str| {
        Args::try_parse_from(make_args(&["demo", "--type", value]))
            .map(|args| args.project_type)
    };

    assert_eq!(parse("exec").unwrap(), Some(ProjectType::Executable));
    assert_eq!(parse("lib").unwrap(), Some(ProjectType::CompiledLibrary));
    assert_eq!(parse("header-only").unwrap(), Some(ProjectType::HeaderOnlyLibrary));
    assert_eq!(parse("lib_header_only").unwrap(), Some(ProjectType::HeaderOnlyLibrary));
    assert!(parse("plugin").is_err());
}

#[test]
fn test_empty_override_is_kept() {
    let parsed = Args::try_parse_from(make_args(&["demo", "--ns-cpp", ""])).unwrap();
    assert_eq!(parsed.user_config().cpp_namespace.as_deref(), Some(""));
}

#[test]
fn test_missing_args() {
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}
