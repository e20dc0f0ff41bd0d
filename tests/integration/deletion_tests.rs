use dupsweep::actions::{apply_selection, parse_selection, DeleteError};
use dupsweep::app::{run_session_with, Presets};
use dupsweep::config::{ExtensionFilter, SortOrder};
use dupsweep::duplicates::{enumerate, group_duplicates, SizeIndex};
use dupsweep::prompt::Terminal;
use dupsweep::scanner::{FileDigest, HashError, Hasher};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Hashes normally, but removes `victim` right after hashing it, as if
/// another process deleted the file between the report and the deletion.
struct VanishingDigest {
    inner: Hasher,
    victim: PathBuf,
}

impl FileDigest for VanishingDigest {
    fn digest(&self, path: &Path) -> Result<String, HashError> {
        let digest = self.inner.digest(path)?;
        if path == self.victim {
            fs::remove_file(path).unwrap();
        }
        Ok(digest)
    }
}

#[test]
fn test_failed_deletion_does_not_stop_batch() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    let e = dir.path().join("e");
    let f = dir.path().join("f");
    fs::write(&a, "x".repeat(10)).unwrap();
    fs::write(&b, "x".repeat(10)).unwrap();
    fs::write(&e, "hello").unwrap();
    fs::write(&f, "hello").unwrap();

    let digest = VanishingDigest {
        inner: Hasher::new(),
        victim: b.clone(),
    };
    let mut terminal = Terminal::new(Cursor::new(b"\n1\nyes\nyes\n2 3\n".to_vec()), Vec::new());

    let outcome = run_session_with(
        Some(dir.path().to_path_buf()),
        &Presets::default(),
        &mut terminal,
        &digest,
    )
    .unwrap();

    let report = outcome.deletion.unwrap();
    assert_eq!(report.success_count(), 1);
    assert_eq!(report.failure_count(), 1);
    assert_eq!(report.bytes_freed, 5);
    assert!(matches!(&report.failures[0], DeleteError::NotFound(p) if p == &b));
    assert!(a.exists());
    assert!(!e.exists());
    assert!(f.exists());

    let text = String::from_utf8(terminal.into_output()).unwrap();
    assert!(text.contains(&format!("Could not delete: file not found: {}", b.display())));
    assert!(text.ends_with("Total freed up space: 5 bytes\n"));
}

#[test]
fn test_deletion_uses_display_numbering() {
    let dir = tempdir().unwrap();
    for name in ["p1", "p2", "p3"] {
        fs::write(dir.path().join(name), "p".repeat(7)).unwrap();
    }
    for name in ["q1", "q2"] {
        fs::write(dir.path().join(name), "q".repeat(70)).unwrap();
    }

    let sizes = SizeIndex::build(dir.path(), &ExtensionFilter::any()).unwrap();
    let (dupes, _) = group_duplicates(&sizes, &Hasher::new()).unwrap();

    let displayed: Vec<(usize, PathBuf)> = enumerate(&dupes, SortOrder::Descending)
        .map(|f| (f.ordinal, f.path.to_path_buf()))
        .collect();
    let selection = parse_selection("2 4", dupes.file_count()).unwrap();

    let report = apply_selection(&dupes, SortOrder::Descending, &selection);

    let deleted: Vec<(usize, PathBuf)> = report
        .deleted
        .iter()
        .map(|d| (d.ordinal, d.path.clone()))
        .collect();
    assert_eq!(deleted, vec![displayed[1].clone(), displayed[3].clone()]);
    assert_eq!(report.bytes_freed, 70 + 7);
    assert!(!displayed[1].1.exists());
    assert!(!displayed[3].1.exists());
    assert!(displayed[0].1.exists());
    assert!(displayed[2].1.exists());
    assert!(displayed[4].1.exists());
}

#[test]
fn test_deleting_every_copy_is_allowed() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a"), "dup").unwrap();
    fs::write(dir.path().join("b"), "dup").unwrap();

    let sizes = SizeIndex::build(dir.path(), &ExtensionFilter::any()).unwrap();
    let (dupes, _) = group_duplicates(&sizes, &Hasher::new()).unwrap();
    let selection = parse_selection("1 2", dupes.file_count()).unwrap();

    let report = apply_selection(&dupes, SortOrder::Ascending, &selection);

    assert_eq!(report.success_count(), 2);
    assert_eq!(report.bytes_freed, 6);
}
