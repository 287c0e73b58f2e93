use darulifta_core::{AssistConfig, DarulIfta};

use crate::cli::{Cli, Commands};
use clap::Parser;

use super::run_with_app;

fn app() -> DarulIfta {
    DarulIfta::with_config(AssistConfig::default()).expect("app")
}

fn command(argv: &[&str]) -> Commands {
    Cli::try_parse_from(argv).expect("parse").command
}

#[test]
fn export_writes_the_transcript_to_the_requested_path() {
    let temp = tempfile::tempdir().expect("tempdir");
    let out = temp.path().join("ruling.txt");
    let argv = [
        "darulifta",
        "export",
        "1004",
        "--out",
        out.to_str().expect("path str"),
    ];

    run_with_app(&app(), command(&argv)).expect("export");

    let body = std::fs::read_to_string(&out).expect("read transcript");
    assert!(body.contains("Fatwa Number: L-2023-1004"));
    assert!(body.contains("Zakat on Gold Jewelry"));
}

#[test]
fn export_of_a_missing_id_fails() {
    let result = run_with_app(&app(), command(&["darulifta", "export", "9999"]));
    assert!(result.is_err());
}

#[test]
fn search_rejects_an_unknown_category() {
    let argv = ["darulifta", "search", "zakat", "--category", "Astrology"];
    assert!(run_with_app(&app(), command(&argv)).is_err());
}

#[test]
fn list_and_search_run_against_the_seeded_archive() {
    let app = app();
    run_with_app(&app, command(&["darulifta", "list"])).expect("list");
    run_with_app(&app, command(&["darulifta", "search", "zakat"])).expect("search");
}
