//! Tests for line source implementations.

use std::io::{self, BufRead, BufReader, Read};

use crate::source::LineSource;
use crate::{FileSource, InMemorySource, ParseError, StdinSource, read_rows};

#[test]
fn stdin_source_uses_dash_id() {
    assert_eq!(StdinSource::new().id(), "-");
}

#[test]
fn file_source_id_is_the_path() {
    let source = FileSource::new("data/people.csv".into());
    assert_eq!(source.id(), "data/people.csv");
    assert_eq!(source.path(), &std::path::PathBuf::from("data/people.csv"));
}

#[test]
fn file_source_open_fails_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path().join("nope.csv"));
    assert!(source.open().is_err());
}

#[test]
fn in_memory_from_lines_terminates_each_line() {
    let source = InMemorySource::from_lines("mem", ["a,b", "c,d"]);
    let mut text = String::new();
    source
        .open()
        .expect("open should succeed")
        .read_to_string(&mut text)
        .unwrap();
    assert_eq!(text, "a,b\nc,d\n");
}

#[test]
fn open_returns_a_fresh_reader_each_call() {
    let source = InMemorySource::new("mem", "a,b\nc,d\n");

    let mut first = String::new();
    source.open().unwrap().read_to_string(&mut first).unwrap();
    let mut second = String::new();
    source.open().unwrap().read_to_string(&mut second).unwrap();

    // Both readers start at the beginning.
    assert_eq!(first, second);
}

#[test]
fn mid_stream_read_failure_is_source_unavailable() {
    // A reader that yields one line and then fails, simulating a dropped
    // connection behind the source.
    struct FlakyReader {
        sent: bool,
    }

    impl Read for FlakyReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.sent {
                return Err(io::Error::new(
                    io::ErrorKind::ConnectionReset,
                    "reader dropped",
                ));
            }
            self.sent = true;
            let bytes = b"a,b\n";
            buf[..bytes.len()].copy_from_slice(bytes);
            Ok(bytes.len())
        }
    }

    #[derive(Debug)]
    struct FlakySource;

    impl LineSource for FlakySource {
        fn id(&self) -> &str {
            "flaky"
        }

        fn open(&self) -> io::Result<Box<dyn BufRead + Send>> {
            Ok(Box::new(BufReader::new(FlakyReader { sent: false })))
        }
    }

    let err = read_rows(&FlakySource).expect_err("expected mid-stream failure");
    match err {
        ParseError::SourceUnavailable { target, .. } => assert_eq!(target, "flaky"),
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
}
