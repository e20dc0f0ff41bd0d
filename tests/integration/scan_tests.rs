use dupsweep::config::{ExtensionFilter, SortOrder};
use dupsweep::duplicates::{enumerate, group_duplicates, SizeIndex};
use dupsweep::scanner::{FileDigest, Hasher};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();

    let sizes = SizeIndex::build(dir.path(), &ExtensionFilter::any()).unwrap();
    let (dupes, stats) = group_duplicates(&sizes, &Hasher::new()).unwrap();

    assert!(sizes.is_empty());
    assert!(dupes.is_empty());
    assert_eq!(stats.total_files, 0);
}

#[test]
fn test_scan_index_sizes_match_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"1234").unwrap();
    fs::write(dir.path().join("b.txt"), b"12345678").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("c.txt"), b"abcd").unwrap();

    let sizes = SizeIndex::build(dir.path(), &ExtensionFilter::any()).unwrap();

    assert_eq!(sizes.file_count(), 3);
    for (size, paths) in sizes.iter() {
        for path in paths {
            assert_eq!(fs::metadata(path).unwrap().len(), size);
        }
    }
    assert_eq!(sizes.paths(4).len(), 2);
}

#[test]
fn test_scan_extension_filter() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"same").unwrap();
    fs::write(dir.path().join("b.txt"), b"same").unwrap();
    fs::write(dir.path().join("c.md"), b"same").unwrap();
    fs::write(dir.path().join("d.TXT"), b"same").unwrap();

    let sizes = SizeIndex::build(dir.path(), &ExtensionFilter::new(".txt")).unwrap();

    assert_eq!(sizes.file_count(), 2);
    for (_, paths) in sizes.iter() {
        for path in paths {
            assert_eq!(path.extension().unwrap(), "txt");
        }
    }
}

#[test]
fn test_scan_groups_true_duplicates() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    let c = dir.path().join("c");
    let d = dir.path().join("d");
    fs::write(&a, "x".repeat(10)).unwrap();
    fs::write(&b, "x".repeat(10)).unwrap();
    fs::write(&c, "y".repeat(10)).unwrap();
    fs::write(&d, "z".repeat(20)).unwrap();

    let sizes = SizeIndex::build(dir.path(), &ExtensionFilter::any()).unwrap();
    let (dupes, stats) = group_duplicates(&sizes, &Hasher::new()).unwrap();

    assert_eq!(dupes.sizes().collect::<Vec<_>>(), vec![10]);
    let buckets = dupes.buckets(10).unwrap();
    assert_eq!(buckets.len(), 1);

    let digest = Hasher::new().digest(&a).unwrap();
    assert_eq!(buckets[&digest], vec![a.clone(), b.clone()]);

    assert_eq!(stats.hashed_files, 3);
    assert_eq!(stats.eliminated_unique, 1);

    let numbered: Vec<(usize, PathBuf)> = enumerate(&dupes, SortOrder::Descending)
        .map(|f| (f.ordinal, f.path.to_path_buf()))
        .collect();
    assert_eq!(numbered, vec![(1, a), (2, b)]);
}

#[test]
fn test_scan_empty_files_are_duplicates_of_each_other() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("e1"), b"").unwrap();
    fs::write(dir.path().join("e2"), b"").unwrap();

    let sizes = SizeIndex::build(dir.path(), &ExtensionFilter::any()).unwrap();
    let (dupes, _) = group_duplicates(&sizes, &Hasher::new()).unwrap();

    assert_eq!(dupes.file_count(), 2);
    assert_eq!(dupes.reclaimable_bytes(), 0);
}

#[test]
fn test_scan_sort_order_controls_report_order() {
    let dir = tempdir().unwrap();
    for (name, content) in [
        ("a10", "a".repeat(10)),
        ("b10", "a".repeat(10)),
        ("c20", "c".repeat(20)),
        ("d30", "d".repeat(30)),
        ("e30", "d".repeat(30)),
    ] {
        fs::write(dir.path().join(name), content).unwrap();
    }

    let sizes = SizeIndex::build(dir.path(), &ExtensionFilter::any()).unwrap();
    let (dupes, _) = group_duplicates(&sizes, &Hasher::new()).unwrap();

    let order_of = |order| {
        let mut seen = Vec::new();
        for file in enumerate(&dupes, order) {
            if seen.last() != Some(&file.size) {
                seen.push(file.size);
            }
        }
        seen
    };

    assert_eq!(order_of(SortOrder::Descending), vec![30, 10]);
    assert_eq!(order_of(SortOrder::Ascending), vec![10, 30]);
}
