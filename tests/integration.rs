use codemapper::output::{render_markdown, render_text};
use codemapper::{load_patterns, map_directory, scan, IgnorePattern, MapBuilder};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn integration_end_to_end_with_ignored_subdir() {
    let root = tempdir().unwrap();
    let cwd = tempdir().unwrap();
    fs::write(root.path().join("a.py"), "print('hello')\n").unwrap();
    fs::create_dir(root.path().join("sub")).unwrap();
    fs::write(root.path().join("sub/b.bin"), b"\x00\x01\x02").unwrap();
    fs::write(root.path().join(".cmignore"), "sub/\n").unwrap();

    let output = root.path().join("codebase_map.md");
    let patterns = load_patterns(None, cwd.path(), root.path()).unwrap();
    let result = scan(root.path(), &patterns, &output).unwrap();

    assert!(result.dirs.is_empty());
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].rel, PathBuf::from("a.py"));

    let doc = render_markdown(root.path(), &result, "2026-01-01 00:00:00");
    assert!(doc.contains("- 📄 [a.py](#file_a_py)"));
    assert!(doc.contains("<a id='file_a_py'></a>"));
    assert!(doc.contains("```python\nprint('hello')\n```"));
    assert!(!doc.contains("b.bin"));
    assert!(!doc.contains(".cmignore"));
    assert!(doc.contains("- **Total directories:** 1 (including root)"));
    assert!(doc.contains("- **Total files:** 1"));
}

#[test]
fn integration_anchored_pattern_prunes_root_dir_only() {
    let root = tempdir().unwrap();
    fs::create_dir_all(root.path().join("build")).unwrap();
    fs::write(root.path().join("build/output.txt"), "x").unwrap();
    fs::create_dir_all(root.path().join("nested/build")).unwrap();
    fs::write(root.path().join("nested/build/output.txt"), "y").unwrap();

    let output = root.path().join("codebase_map.md");
    let patterns = vec![IgnorePattern::parse("/build")];
    let result = scan(root.path(), &patterns, &output).unwrap();

    let rels: Vec<PathBuf> = result.files.iter().map(|f| f.rel.clone()).collect();
    assert!(!rels.contains(&PathBuf::from("build/output.txt")));
    assert!(rels.contains(&PathBuf::from("nested/build/output.txt")));
    assert!(result.dirs.contains(&PathBuf::from("nested/build")));
    assert!(!result.dirs.contains(&PathBuf::from("build")));
}

#[test]
fn integration_any_depth_pattern_excludes_all_levels() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("a.log"), "a").unwrap();
    fs::write(root.path().join("keep.txt"), "k").unwrap();
    fs::create_dir_all(root.path().join("deep/nested")).unwrap();
    fs::write(root.path().join("deep/nested/b.log"), "b").unwrap();

    let output = root.path().join("codebase_map.md");
    let patterns = vec![IgnorePattern::parse("**/*.log")];
    let result = scan(root.path(), &patterns, &output).unwrap();

    let rels: Vec<PathBuf> = result.files.iter().map(|f| f.rel.clone()).collect();
    assert_eq!(rels, vec![PathBuf::from("keep.txt")]);
    assert_eq!(result.dirs.len(), 2);
}

#[test]
fn integration_output_inside_root_never_listed() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("a.txt"), "a").unwrap();
    let output = root.path().join("codebase_map.md");
    fs::write(&output, "stale output from a previous run").unwrap();

    let result = scan(root.path(), &[], &output).unwrap();
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].rel, PathBuf::from("a.txt"));
}

#[test]
fn integration_rendering_is_deterministic() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("b.txt"), "b").unwrap();
    fs::write(root.path().join("a.txt"), "a").unwrap();
    fs::create_dir(root.path().join("src")).unwrap();
    fs::write(root.path().join("src/lib.rs"), "pub fn f() {}\n").unwrap();

    let output = root.path().join("codebase_map.md");
    let first = scan(root.path(), &[], &output).unwrap();
    let second = scan(root.path(), &[], &output).unwrap();

    let ts = "2026-01-01 00:00:00";
    assert_eq!(
        render_markdown(root.path(), &first, ts),
        render_markdown(root.path(), &second, ts)
    );
    assert_eq!(
        render_text(root.path(), &first),
        render_text(root.path(), &second)
    );
}

#[test]
fn integration_markdown_lists_files_before_subdirs() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("z.txt"), "z").unwrap();
    fs::create_dir(root.path().join("a")).unwrap();
    fs::write(root.path().join("a/inner.txt"), "i").unwrap();

    let output = root.path().join("codebase_map.md");
    let result = scan(root.path(), &[], &output).unwrap();
    let doc = render_markdown(root.path(), &result, "2026-01-01 00:00:00");

    // Root-level files come before the first directory entry.
    let file_pos = doc.find("- 📄 [z.txt](#file_z_txt)").unwrap();
    let dir_pos = doc.find("- 📁 **a/**").unwrap();
    assert!(file_pos < dir_pos);
    assert!(doc.contains("    - 📄 [inner.txt](#file_a_inner_txt)"));
}

#[test]
fn integration_text_variant_tree_and_markers() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("z.txt"), "plain text\n").unwrap();
    fs::create_dir(root.path().join("a")).unwrap();
    fs::write(root.path().join("a/inner.txt"), "inner\n").unwrap();
    fs::write(root.path().join("data.bin"), b"\x00\xff").unwrap();

    let output = root.path().join("codebase_map.md");
    let result = scan(root.path(), &[], &output).unwrap();
    let text = render_text(root.path(), &result);

    assert!(text.starts_with("DIRECTORY STRUCTURE:\n\n"));
    // Directories sort before files in the text tree.
    assert!(text.contains("├── a/\n│   └── inner.txt\n"));
    assert!(text.contains("└── z.txt\n"));
    assert!(text.contains("\nFILE CONTENTS:\n\n"));
    assert!(text.contains("data.bin [BINARY]\n"));
    assert!(text.contains("z.txt\nplain text\n"));
    assert!(!text.contains("```"));
}

#[test]
fn integration_map_directory_writes_both_variants() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("hello.py"), "print('hi')").unwrap();
    fs::write(root.path().join("data.bin"), b"\x00\x01").unwrap();
    fs::create_dir(root.path().join("src")).unwrap();
    fs::write(root.path().join("src/lib.rs"), "pub fn f() {}\n").unwrap();

    let output = root.path().join("map.md");
    let options = MapBuilder::new(root.path())
        .output(&output)
        .raw(true)
        .build();
    let summary = map_directory(&options).unwrap();

    assert_eq!(summary.dir_count, 2);
    assert_eq!(summary.file_count, 3);
    assert_eq!(summary.raw_output, Some(root.path().join("map.txt")));

    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.contains("## hello.py"));
    // Content without a trailing newline gets one before the closing fence.
    assert!(doc.contains("```python\nprint('hi')\n```"));
    assert!(doc.contains("*[BINARY FILE - CONTENTS SKIPPED]*"));
    assert!(doc.contains("## src/lib.rs"));
    assert!(doc.contains("```rust\npub fn f() {}\n```"));
    assert!(doc.contains("- **Total directories:** 2 (including root)"));
    assert!(!doc.contains("## map.md"));

    let text = fs::read_to_string(root.path().join("map.txt")).unwrap();
    assert!(text.contains("DIRECTORY STRUCTURE:"));
    assert!(text.contains("data.bin [BINARY]"));
}

#[test]
fn integration_missing_root_is_fatal() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");
    let options = MapBuilder::new(&missing)
        .output(dir.path().join("map.md"))
        .build();
    assert!(map_directory(&options).is_err());
}
