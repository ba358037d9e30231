use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

mod common;
use common::Sandbox;

fn dated(sb: &Sandbox, stem: &str, ext: &str) -> PathBuf {
    let today = chrono::Local::now().date_naive();
    sb.exports
        .join(format!("{stem}_{}.{ext}", today.format("%Y-%m-%d")))
}

fn sandbox_with_data(name: &str) -> Sandbox {
    let sb = Sandbox::new(name);
    sb.use_export_folder();
    sb.add("1", "7", "2024-05-01", "2024-05-02");
    sb.add("2", "12", "2024-05-03", "2024-05-04");
    sb
}

#[test]
fn test_export_csv_headers_and_rows() {
    let sb = sandbox_with_data("export_csv");

    sb.cmd()
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(dated(&sb, "traceability_log", "csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "Mushroom Type,Box Number,Restaurant Name,Packed Date,Shipped Date"
    );
    assert_eq!(lines[1], "Blue Oyster,007,Restaurant A,2024-05-01,2024-05-02");
    assert_eq!(lines[2], "Lion's Mane,012,Restaurant A,2024-05-03,2024-05-04");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_export_uses_default_format_setting() {
    let sb = sandbox_with_data("export_default_format");

    sb.cmd()
        .args(["settings", "--set", "default_export_format=excel"])
        .assert()
        .success();

    sb.cmd().arg("export").assert().success();

    let path = dated(&sb, "traceability_log", "xlsx");
    let bytes = fs::read(path).unwrap();
    // xlsx is a zip container
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_pdf_is_an_invoice_for_the_latest_entry() {
    let sb = sandbox_with_data("export_pdf");

    sb.cmd()
        .args(["export", "--format", "pdf"])
        .assert()
        .success()
        .stdout(contains("Invoice PDF export completed"));

    let bytes = fs::read(dated(&sb, "invoice", "pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_summary_report_pdf() {
    let sb = sandbox_with_data("export_report");

    sb.cmd()
        .arg("report")
        .assert()
        .success()
        .stdout(contains("Summary PDF export completed"));

    let bytes = fs::read(dated(&sb, "summary_report", "pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_refuses_to_overwrite_without_confirmation() {
    let sb = sandbox_with_data("export_overwrite");

    sb.cmd().args(["export", "--format", "csv"]).assert().success();

    sb.cmd()
        .args(["export", "--format", "csv"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    sb.cmd()
        .args(["export", "--format", "csv", "--force"])
        .assert()
        .success();
}

#[test]
fn test_export_with_empty_log_fails() {
    let sb = Sandbox::new("export_empty");
    sb.use_export_folder();

    sb.cmd()
        .args(["export", "--format", "csv"])
        .assert()
        .failure()
        .stderr(contains("No data to export."));

    sb.cmd()
        .args(["export", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(contains("No data to generate invoice."));
}

#[test]
fn test_export_skips_malformed_entries() {
    let sb = sandbox_with_data("export_malformed");

    let mut log = sb.read_log();
    log.push("hand edited nonsense".into());
    fs::write(&sb.log, serde_json::to_string(&log).unwrap()).unwrap();

    sb.cmd()
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("Skipping malformed entry"));

    let content = fs::read_to_string(dated(&sb, "traceability_log", "csv")).unwrap();
    assert_eq!(content.lines().count(), 3);
}
