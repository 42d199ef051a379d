use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::process::Command;
use std::thread::{self, JoinHandle};

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

/// `orgsync` run from `cwd` with a clean source environment.
fn orgsync_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("orgsync"));
    cmd.current_dir(cwd)
        .env_remove("SHEET_CSV_URL")
        .env_remove("ORGS_SHEET_ID")
        .env_remove("ORGS_SHEET_GID")
        .env_remove("RUST_LOG");
    cmd
}

fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
    });
    (format!("http://{addr}/export.csv"), handle)
}

#[test]
fn missing_source_url_exits_1_and_writes_nothing() {
    let cwd = TempDir::new().expect("cwd");

    orgsync_cmd(cwd.path())
        .arg("sync")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("SHEET_CSV_URL"));

    assert!(!cwd.path().join("data").exists(), "no output without config");
}

#[test]
fn not_found_exits_1_with_status_in_diagnostic() {
    let cwd = TempDir::new().expect("cwd");
    let (url, server) = serve_once("404 Not Found", "");

    orgsync_cmd(cwd.path())
        .env("SHEET_CSV_URL", &url)
        .arg("sync")
        .assert()
        .code(1)
        .stderr(contains("404").and(contains("Not Found")));
    server.join().expect("server thread");

    assert!(!cwd.path().join("data").exists(), "no output on failed fetch");
}

#[test]
fn unwritable_output_exits_1_with_one_error_line() {
    let cwd = TempDir::new().expect("cwd");
    // `data` is a file, so `data/orgs.json` cannot be created.
    fs::write(cwd.path().join("data"), "not a directory").expect("seed");
    let (url, server) = serve_once("200 OK", "name\nAcme\n");

    let output = orgsync_cmd(cwd.path())
        .env("SHEET_CSV_URL", &url)
        .arg("sync")
        .output()
        .expect("run orgsync");
    server.join().expect("server thread");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "no status line on failure");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr was:\n{stderr}");
    assert!(stderr.starts_with("Error: "), "stderr was:\n{stderr}");
    assert!(stderr.contains("data"), "stderr was:\n{stderr}");
    assert_eq!(
        fs::read_to_string(cwd.path().join("data")).expect("data"),
        "not a directory"
    );
}

#[test]
fn sync_writes_data_orgs_json_and_reports_count() {
    let cwd = TempDir::new().expect("cwd");
    let (url, server) = serve_once("200 OK", "name,city\nAcme,Springfield\n,,\n");

    orgsync_cmd(cwd.path())
        .env("SHEET_CSV_URL", &url)
        .arg("sync")
        .assert()
        .success()
        .stdout("Wrote 1 records to data/orgs.json\n");
    server.join().expect("server thread");

    let written = fs::read_to_string(cwd.path().join("data").join("orgs.json")).expect("output");
    assert_eq!(
        written,
        "[\n  {\n    \"name\": \"Acme\",\n    \"city\": \"Springfield\"\n  }\n]"
    );
}

#[test]
fn rerun_with_same_content_is_byte_identical() {
    let cwd = TempDir::new().expect("cwd");
    let output = cwd.path().join("data").join("orgs.json");
    let mut runs = Vec::new();

    for _ in 0..2 {
        let (url, server) = serve_once("200 OK", "org,email\nShelter,a@example.org\nPantry,\n");
        orgsync_cmd(cwd.path())
            .env("SHEET_CSV_URL", &url)
            .arg("sync")
            .assert()
            .success();
        server.join().expect("server thread");
        runs.push(fs::read(&output).expect("output"));
    }

    assert_eq!(runs[0], runs[1]);
}

#[test]
fn dry_run_reports_without_writing() {
    let cwd = TempDir::new().expect("cwd");
    let (url, server) = serve_once("200 OK", "name\nAcme\n");

    orgsync_cmd(cwd.path())
        .env("SHEET_CSV_URL", &url)
        .args(["sync", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("[dry-run] Would write 1 records to data/orgs.json"));
    server.join().expect("server thread");

    assert!(!cwd.path().join("data").exists(), "dry-run must not create files");
}

#[test]
fn shape_and_output_flags() {
    let cwd = TempDir::new().expect("cwd");
    let (url, server) = serve_once(
        "200 OK",
        "First name,Last name,Site\nAda,Lovelace,Food Bank\nAda,Lovelace,Library\n",
    );

    orgsync_cmd(cwd.path())
        .env("SHEET_CSV_URL", &url)
        .args(["sync", "--shape", "assignments", "--output", "out/assignments.json"])
        .assert()
        .success()
        .stdout(contains("Wrote 1 assignments to out/assignments.json"));
    server.join().expect("server thread");

    let written = fs::read_to_string(cwd.path().join("out").join("assignments.json")).expect("output");
    let value: serde_json::Value = serde_json::from_str(&written).expect("json");
    assert_eq!(value["adalovelace"].as_array().map(Vec::len), Some(2));
}

#[test]
fn config_file_supplies_source_and_output() {
    let cwd = TempDir::new().expect("cwd");
    let (url, server) = serve_once("200 OK", "Site Name\nDepot\n");
    fs::write(
        cwd.path().join("orgsync.yaml"),
        format!("source_url: {url}\noutput: data/sites.json\nshape: sites\n"),
    )
    .expect("write config");

    orgsync_cmd(cwd.path())
        .args(["sync", "--config", "orgsync.yaml"])
        .assert()
        .success()
        .stdout(contains("Wrote 1 sites to data/sites.json"));
    server.join().expect("server thread");

    assert!(cwd.path().join("data").join("sites.json").exists());
}

#[test]
fn unknown_shape_is_rejected_by_argument_parsing() {
    let cwd = TempDir::new().expect("cwd");
    orgsync_cmd(cwd.path())
        .env("SHEET_CSV_URL", "http://127.0.0.1:9/export.csv")
        .args(["sync", "--shape", "orgs"])
        .assert()
        .failure()
        .stderr(contains("unknown shape"));
}

#[test]
fn diff_shows_additions_and_writes_nothing() {
    let cwd = TempDir::new().expect("cwd");
    let (url, server) = serve_once("200 OK", "name\nAcme\n");

    orgsync_cmd(cwd.path())
        .env("SHEET_CSV_URL", &url)
        .env("NO_COLOR", "1")
        .arg("diff")
        .assert()
        .success()
        .stdout(contains("+++ b/data/orgs.json").and(contains("\"name\": \"Acme\"")));
    server.join().expect("server thread");

    assert!(!cwd.path().join("data").exists());
}

#[test]
fn diff_reports_no_differences_after_sync() {
    let cwd = TempDir::new().expect("cwd");

    let (url, server) = serve_once("200 OK", "name\nAcme\n");
    orgsync_cmd(cwd.path())
        .env("SHEET_CSV_URL", &url)
        .arg("sync")
        .assert()
        .success();
    server.join().expect("server thread");

    let (url, server) = serve_once("200 OK", "name\nAcme\n");
    orgsync_cmd(cwd.path())
        .env("SHEET_CSV_URL", &url)
        .arg("diff")
        .assert()
        .success()
        .stdout(contains("No differences for data/orgs.json."));
    server.join().expect("server thread");
}
