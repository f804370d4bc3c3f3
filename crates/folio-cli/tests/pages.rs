use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn write_expertise(home: &Path, count: usize) {
    let data = home.join("data");
    fs::create_dir_all(&data).unwrap();
    let areas: Vec<String> = (1..=count)
        .map(|i| format!(r#"{{"titulo": "Area {i}", "descripcion": "About area {i}"}}"#))
        .collect();
    fs::write(
        data.join("expertise.json"),
        format!(r#"{{"areasEspecializacion": [{}]}}"#, areas.join(",")),
    )
    .unwrap();
}

#[test]
fn test_pages_prints_requested_page() {
    let dir = tempdir().unwrap();
    write_expertise(dir.path(), 5);

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["pages", "expertise", "--per-page", "2", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Area 3"))
        .stdout(predicate::str::contains("Area 4"))
        .stdout(predicate::str::contains("Area 5").not())
        .stdout(predicate::str::contains("Page 2/3  ○ ● ○"));
}

#[test]
fn test_pages_uses_builtin_content_without_data() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["pages", "expertise"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Artificial Intelligence"))
        .stdout(predicate::str::contains("Page 1/1"));
}

#[test]
fn test_pages_out_of_range() {
    let dir = tempdir().unwrap();
    write_expertise(dir.path(), 2);

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["pages", "expertise", "--page", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_pages_rejects_unknown_section() {
    cargo_bin_cmd!("folio")
        .args(["pages", "blog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown section"));
}
