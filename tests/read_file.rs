use std::fs;
use std::io::Write;

use tvc_viewer::data::writer;
use tvc_viewer::{read_file, Dataset, ReadError, Reader, Record, HEADER_LINES};

fn file_with(data_lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for i in 0..HEADER_LINES {
        writeln!(file, "META {i}: instrument header, not data").unwrap();
    }
    for line in data_lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn reads_example_file() {
    let file = file_with(&["0.0 1.5 0.2", "1.0 2.5 0.4", "2.0 3.5 0.6"]);
    let ds = read_file(file.path()).unwrap();

    assert_eq!(ds.time(), &[0.0, 1.0, 2.0]);
    assert_eq!(ds.value(), &[1.5, 2.5, 3.5]);
    assert_eq!(ds.color(), &[0.2, 0.4, 0.6]);
}

#[test]
fn header_only_file_is_empty() {
    let file = file_with(&[]);
    let ds = read_file(file.path()).unwrap();
    assert_eq!(ds.len(), 0);
}

#[test]
fn time_column_follows_first_token() {
    let lines: Vec<String> = (0..250)
        .map(|i| format!("{} {} {}", i as f64 * 0.5, -(i as f64), i % 7))
        .collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let file = file_with(&refs);

    let ds = read_file(file.path()).unwrap();
    assert_eq!(ds.len(), 250);
    assert_eq!(ds.value().len(), 250);
    assert_eq!(ds.color().len(), 250);
    for (i, t) in ds.time().iter().enumerate() {
        assert_eq!(*t, i as f64 * 0.5);
    }
}

#[test]
fn written_file_reads_back() {
    let ds: Dataset = (0..100)
        .map(|i| {
            let t = i as f64 / 3.0;
            Record::new(t, t.sin() * 1e-3, t.cos().abs())
        })
        .collect();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    writer::write_file(&path, &ds).unwrap();

    assert_eq!(read_file(&path).unwrap(), ds);
}

#[test]
fn bad_line_aborts_with_line_number() {
    let file = file_with(&["1 2 3", "4 5 6", "7 x 9", "10 11 12"]);
    let err = read_file(file.path()).unwrap_err();
    assert!(err.is_parse());
    assert_eq!(err.line(), Some(HEADER_LINES + 3));
    assert!(err.to_string().contains("'x'"));
}

#[test]
fn short_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.txt");
    fs::write(&path, "only\nthree\nlines\n").unwrap();

    let err = read_file(&path).unwrap_err();
    assert!(err.is_io());
    assert!(matches!(err, ReadError::TruncatedHeader { found: 3, .. }));
}

#[test]
fn unopenable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_file(&dir.path().join("missing.txt")).unwrap_err();
    assert!(err.is_io());
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn configured_header_length_shifts_data_start() {
    let file = file_with(&["1 2 3"]);
    // Reading with a longer header swallows the only data line.
    let ds = Reader::with_header_lines(HEADER_LINES + 1)
        .read_file(file.path())
        .unwrap();
    assert!(ds.is_empty());
}

#[test]
fn read_failure_after_open_names_the_file() {
    // A directory opens on Unix but fails on the first read.
    let dir = tempfile::tempdir().unwrap();
    let err = read_file(dir.path()).unwrap_err();
    if let ReadError::Open { .. } = err {
        // Platforms that refuse to open directories report it up front.
        return;
    }
    assert!(err.is_io());
    assert!(matches!(err, ReadError::ReadFile { .. }));
    assert!(err
        .to_string()
        .contains(&dir.path().display().to_string()));
}
