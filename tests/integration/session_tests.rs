use dupsweep::app::{run_session, run_session_with, Presets};
use dupsweep::config::SortOrder;
use dupsweep::prompt::Terminal;
use dupsweep::scanner::{FileDigest, HashError, Hasher};
use std::cell::Cell;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

type TestTerminal = Terminal<Cursor<Vec<u8>>, Vec<u8>>;

fn terminal(input: &str) -> TestTerminal {
    Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(terminal: TestTerminal) -> String {
    String::from_utf8(terminal.into_output()).unwrap()
}

/// A(10,"x") B(10,"x") C(10,"y") D(20,"z")
fn abcd() -> (TempDir, [PathBuf; 4]) {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    let c = dir.path().join("c.txt");
    let d = dir.path().join("d.txt");
    fs::write(&a, "x".repeat(10)).unwrap();
    fs::write(&b, "x".repeat(10)).unwrap();
    fs::write(&c, "y".repeat(10)).unwrap();
    fs::write(&d, "z".repeat(20)).unwrap();
    (dir, [a, b, c, d])
}

/// Digest source that counts how often it was asked.
struct CountingDigest {
    inner: Hasher,
    calls: Cell<usize>,
}

impl FileDigest for CountingDigest {
    fn digest(&self, path: &Path) -> Result<String, HashError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.digest(path)
    }
}

#[test]
fn test_end_to_end_delete_first_ordinal() {
    let (dir, [a, b, c, d]) = abcd();
    let mut t = terminal("\n1\nyes\nyes\n1\n");

    let outcome = run_session(Some(dir.path().to_path_buf()), &Presets::default(), &mut t).unwrap();

    let report = outcome.deletion.unwrap();
    assert_eq!(report.bytes_freed, 10);
    assert_eq!(report.success_count(), 1);
    assert_eq!(outcome.duplicate_files, Some(2));
    assert!(!a.exists());
    assert!(b.exists());
    assert!(c.exists());
    assert!(d.exists());

    let digest = Hasher::new().digest(&b).unwrap();
    let expected = format!(
        "Enter file format:\n\
         Size sorting options:\n\
         1. Descending\n\
         2. Ascending\n\
         Enter a sorting option:\n\
         20 bytes\n{d}\n\n\
         10 bytes\n{a}\n{b}\n{c}\n\n\
         Check for duplicates?\n\
         10 bytes\nHash: {digest}\n1. {a}\n2. {b}\n\n\
         Delete files?\n\
         Enter file numbers to delete:\n\
         Total freed up space: 10 bytes\n",
        a = a.display(),
        b = b.display(),
        c = c.display(),
        d = d.display(),
    );
    assert_eq!(output(t), expected);
}

#[test]
fn test_presets_skip_questions() {
    let (dir, _) = abcd();
    let presets = Presets {
        extension: Some(".txt".to_string()),
        order: Some(SortOrder::Ascending),
    };
    let mut t = terminal("no\n");

    let outcome = run_session(Some(dir.path().to_path_buf()), &presets, &mut t).unwrap();

    assert_eq!(outcome.scanned_files, 4);
    let text = output(t);
    assert!(!text.contains("Enter file format:"));
    assert!(!text.contains("Size sorting options:"));
    assert!(text.starts_with("10 bytes\n"));
}

#[test]
fn test_answer_no_to_check_never_hashes() {
    let (dir, _) = abcd();
    let digest = CountingDigest {
        inner: Hasher::new(),
        calls: Cell::new(0),
    };
    let mut t = terminal("\n2\nno\n");

    let outcome =
        run_session_with(Some(dir.path().to_path_buf()), &Presets::default(), &mut t, &digest)
            .unwrap();

    assert_eq!(digest.calls.get(), 0);
    assert!(outcome.duplicate_files.is_none());
    assert!(output(t).ends_with("Check for duplicates?\n"));
}

#[test]
fn test_only_colliding_sizes_are_hashed() {
    let dir = tempdir().unwrap();
    for i in 0..5 {
        fs::write(dir.path().join(format!("unique{i}")), "u".repeat(i + 1)).unwrap();
    }
    for i in 0..3 {
        fs::write(dir.path().join(format!("same{i}")), "s".repeat(50)).unwrap();
    }
    let digest = CountingDigest {
        inner: Hasher::new(),
        calls: Cell::new(0),
    };
    let mut t = terminal("\n1\nyes\nno\n");

    run_session_with(Some(dir.path().to_path_buf()), &Presets::default(), &mut t, &digest)
        .unwrap();

    assert_eq!(digest.calls.get(), 3);
}

#[test]
fn test_no_duplicates_found() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("one"), b"1").unwrap();
    fs::write(dir.path().join("two"), b"22").unwrap();
    let mut t = terminal("\n1\nyes\n");

    let outcome = run_session(Some(dir.path().to_path_buf()), &Presets::default(), &mut t).unwrap();

    assert_eq!(outcome.duplicate_files, Some(0));
    assert!(outcome.deletion.is_none());
    let text = output(t);
    assert!(text.ends_with("Check for duplicates?\nNo duplicates found.\n"));
    assert!(!text.contains("Delete files?"));
}

#[test]
fn test_decline_deletion_keeps_files() {
    let (dir, files) = abcd();
    let mut t = terminal("\n1\nyes\nno\n");

    let outcome = run_session(Some(dir.path().to_path_buf()), &Presets::default(), &mut t).unwrap();

    assert!(outcome.deletion.is_none());
    assert!(files.iter().all(|f| f.exists()));
    assert!(!output(t).contains("Total freed up space"));
}

#[test]
fn test_invalid_answers_are_reasked() {
    let (dir, [a, b, ..]) = abcd();
    let mut t = terminal("\n0\nsideways\n1\nYes\nyes\nmaybe\nyes\n3 x 1\n5\n2\n");

    let outcome = run_session(Some(dir.path().to_path_buf()), &Presets::default(), &mut t).unwrap();

    assert_eq!(outcome.deletion.unwrap().bytes_freed, 10);
    assert!(a.exists());
    assert!(!b.exists());

    let text = output(t);
    assert_eq!(text.matches("Wrong option").count(), 4);
    assert_eq!(text.matches("Wrong format").count(), 2);
    assert_eq!(text.matches("Enter file numbers to delete:").count(), 3);
}

#[test]
fn test_empty_selection_deletes_nothing() {
    let (dir, files) = abcd();
    let mut t = terminal("\n1\nyes\nyes\n\n");

    let outcome = run_session(Some(dir.path().to_path_buf()), &Presets::default(), &mut t).unwrap();

    assert!(outcome.deletion.is_none());
    assert!(files.iter().all(|f| f.exists()));
    assert!(!output(t).contains("Total freed up space"));
}

#[test]
fn test_ascending_order_numbers_smaller_sizes_first() {
    let dir = tempdir().unwrap();
    let small = [dir.path().join("s1"), dir.path().join("s2")];
    let large = [dir.path().join("l1"), dir.path().join("l2")];
    for p in &small {
        fs::write(p, "s".repeat(10)).unwrap();
    }
    for p in &large {
        fs::write(p, "l".repeat(30)).unwrap();
    }
    let mut t = terminal("\n2\nyes\nyes\n3\n");

    let outcome = run_session(Some(dir.path().to_path_buf()), &Presets::default(), &mut t).unwrap();

    assert_eq!(outcome.deletion.unwrap().bytes_freed, 30);
    assert!(!large[0].exists());
    assert!(small.iter().all(|p| p.exists()));
    assert!(large[1].exists());
}
