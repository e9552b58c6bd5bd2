use hourtracker::models::NewEntry;
use predicates::str::contains;
use std::fs;
use std::io::Read;
use std::path::Path;

mod common;
use common::{ht, init_db, init_db_with_data, setup_test_db, store, temp_file, temp_out};

#[test]
fn test_export_csv_basic() {
    let db_path = setup_test_db("export_csv_basic");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv_basic", "csv");

    ht().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Date,Type,Hours,Travel,Recorded");
    assert_eq!(lines.len(), 4);
    assert!(content.contains("2025-09-01,Event Cover,7.5,1,1"));
    assert!(content.contains("2025-10-02,Client X,4,0.5,0"));
}

#[test]
fn test_export_csv_extended_columns() {
    let db_path = setup_test_db("export_csv_extended");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv_extended", "csv");

    ht().args(["--db", &db_path, "export", "--file", &out, "--extended"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Date,Type,Hours,Travel,Recorded,Name,Notes"));
    assert!(content.contains("Site visit"));
    assert!(content.contains("kickoff"));
}

#[test]
fn test_export_csv_with_range() {
    let db_path = setup_test_db("export_csv_range");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv_range", "csv");

    ht().args([
        "--db", &db_path, "export", "--file", &out, "--range", "2025-09-10:2025-10-31",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(!content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
    assert!(content.contains("2025-10-02"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty_range");
    init_db_with_data(&db_path);
    let out = temp_out("export_empty_range", "csv");

    ht().args(["--db", &db_path, "export", "--file", &out, "--range", "2019"])
        .assert()
        .success()
        .stdout(contains("nothing exported"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_invalid_range_fails() {
    let db_path = setup_test_db("export_bad_range");
    init_db_with_data(&db_path);
    let out = temp_out("export_bad_range", "csv");

    ht().args(["--db", &db_path, "export", "--file", &out, "--range", "2025-9"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_export_existing_file_requires_force() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);
    let out = temp_file("export_force", "csv", "keep me");

    ht().args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    ht().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("Date,"));
}

#[test]
fn test_export_unknown_extension_needs_format() {
    let db_path = setup_test_db("export_unknown_ext");
    init_db_with_data(&db_path);
    let out = temp_out("export_unknown_ext", "txt");

    ht().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("--format"));

    ht().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();
    assert!(Path::new(&out).exists());
}

#[test]
fn test_export_xlsx_creates_workbook() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_data(&db_path);
    let out = temp_out("export_xlsx", "xlsx");

    ht().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let mut archive = zip::ZipArchive::new(fs::File::open(&out).unwrap()).unwrap();

    let workbook = read_part(&mut archive, "xl/workbook.xml");
    let hours = workbook.find("<sheet name=\"Hours\"").expect("Hours sheet");
    let summary = workbook.find("<sheet name=\"Summary\"").expect("Summary sheet");
    assert!(hours < summary);

    assert!(archive.by_name("xl/charts/chart1.xml").is_ok());
    assert!(archive.by_name("xl/charts/chart2.xml").is_ok());

    let strings = read_part(&mut archive, "xl/sharedStrings.xml");
    assert!(strings.contains(">Total<"));
    assert!(strings.contains("Year to date"));
    assert!(strings.contains("Event Cover"));
}

fn read_part(archive: &mut zip::ZipArchive<fs::File>, name: &str) -> String {
    let mut part = archive.by_name(name).unwrap();
    let mut content = String::new();
    part.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn test_export_xlsx_fails_on_malformed_date() {
    let db_path = setup_test_db("export_xlsx_bad_date");
    init_db_with_data(&db_path);

    // The store itself does not validate dates.
    store(&db_path)
        .add(&NewEntry::new("15/09/2025", "Work", 1.0, 0.0))
        .unwrap();

    let out = temp_out("export_xlsx_bad_date", "xlsx");

    ht().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("15/09/2025"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_csv_round_trip_appends_entries() {
    let db_path = setup_test_db("import_round_trip");
    init_db_with_data(&db_path);
    let out = temp_out("import_round_trip", "csv");

    ht().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    ht().args(["--db", &db_path, "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Imported 3 entries."));

    let entries = store(&db_path).list_all().unwrap();
    assert_eq!(entries.len(), 6);

    let client: Vec<_> = entries.iter().filter(|e| e.entry_type == "Client X").collect();
    assert_eq!(client.len(), 2);
    assert_ne!(client[0].id, client[1].id);
    assert_eq!(client[0].total(), client[1].total());
}

#[test]
fn test_import_skips_short_rows() {
    let db_path = setup_test_db("import_short_rows");
    init_db(&db_path);
    let input = temp_file(
        "import_short_rows",
        "csv",
        "Date,Type,Hours,Travel,Recorded\n\
         2025-05-01,Work,8,0.5,yes\n\
         2025-05-02,Work,6\n\
         2025-05-03,Admin,1,,0\n",
    );

    ht().args(["--db", &db_path, "import", "--file", &input])
        .assert()
        .success()
        .stdout(contains("1 short rows skipped"));

    let entries = store(&db_path).list_all().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, "2025-05-03");
    assert_eq!(entries[0].travel_time, 0.0);
    assert!(entries[1].recorded);
}

#[test]
fn test_import_bad_number_leaves_store_untouched() {
    let db_path = setup_test_db("import_bad_number");
    init_db_with_data(&db_path);
    let input = temp_file(
        "import_bad_number",
        "csv",
        "Date,Type,Hours,Travel\n\
         2025-05-01,Work,8,0\n\
         2025-05-02,Work,eight,0\n",
    );

    ht().args(["--db", &db_path, "import", "--file", &input])
        .assert()
        .failure()
        .stderr(contains("line 3"));

    assert_eq!(store(&db_path).list_all().unwrap().len(), 3);
}

#[test]
fn test_import_missing_file_fails() {
    let db_path = setup_test_db("import_missing");
    init_db(&db_path);
    let input = temp_out("import_missing", "csv");

    ht().args(["--db", &db_path, "import", "--file", &input])
        .assert()
        .failure();
}
