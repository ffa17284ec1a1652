use super::*;
use std::path::Path;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_extract_default_out() {
    match parse(&["unmap", "extract"]) {
        CliCommand::Extract { out } => assert_eq!(out, Path::new("files")),
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_extract_out() {
    match parse(&["unmap", "extract", "--out", "/tmp/tree"]) {
        CliCommand::Extract { out } => assert_eq!(out, Path::new("/tmp/tree")),
        _ => panic!("expected Extract with --out"),
    }
}

#[test]
fn cli_parse_unpack() {
    match parse(&["unmap", "unpack", "main.js.map"]) {
        CliCommand::Unpack { map, out } => {
            assert_eq!(map, Path::new("main.js.map"));
            assert_eq!(out, Path::new("files"));
        }
        _ => panic!("expected Unpack"),
    }
}

#[test]
fn cli_parse_unpack_out() {
    match parse(&["unmap", "unpack", "m.map", "--out", "tree"]) {
        CliCommand::Unpack { map, out } => {
            assert_eq!(map, Path::new("m.map"));
            assert_eq!(out, Path::new("tree"));
        }
        _ => panic!("expected Unpack with --out"),
    }
}

#[test]
fn cli_parse_sources() {
    match parse(&["unmap", "sources", "m.map"]) {
        CliCommand::Sources { map, json } => {
            assert_eq!(map, Path::new("m.map"));
            assert!(!json);
        }
        _ => panic!("expected Sources"),
    }
}

#[test]
fn cli_parse_sources_json() {
    match parse(&["unmap", "sources", "m.map", "--json"]) {
        CliCommand::Sources { json, .. } => assert!(json),
        _ => panic!("expected Sources with --json"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["unmap", "frobnicate"]).is_err());
}
