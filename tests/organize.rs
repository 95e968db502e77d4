// ==============================================================================
// Library Integration Tests: Organize Real Directories
// ==============================================================================
//
// Each test builds a small directory in a temp dir, runs the organizer against
// the real filesystem, and compares the resulting tree.

mod common;

use std::fs;

use pretty_assertions::assert_eq;
use simfold::{Filesystem, MemoryFs, OrganizeError, Organizer, RealFs};

use common::{dir_with, render_diagnostic, tree};

// ==============================================================================
// Grouping
// ==============================================================================

#[test]
fn groups_similar_reports_and_leaves_notes() {
    let dir = dir_with(&["report.txt", "report2.txt", "notes.md"]);

    let report = Organizer::new().organize(dir.path()).expect("organize");

    assert_eq!(report.folders_created(), 1);
    assert_eq!(
        tree(dir.path()),
        [
            "notes.md",
            "report (and 2 similar)",
            "report (and 2 similar)/report.txt",
            "report (and 2 similar)/report2.txt",
        ]
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("report (and 2 similar)/report2.txt"))
            .expect("read moved file"),
        "report2.txt"
    );
}

#[test]
fn report_v2_is_below_the_default_threshold() {
    // "report" vs "report_v2": distance 3 over a grid side of 10.
    let dir = dir_with(&["report.txt", "report_v2.txt", "notes.md"]);

    let report = Organizer::new().organize(dir.path()).expect("organize");

    assert!(report.is_empty());
    assert_eq!(tree(dir.path()), ["notes.md", "report.txt", "report_v2.txt"]);
}

#[test]
fn lower_threshold_groups_report_v2() {
    let dir = dir_with(&["report.txt", "report_v2.txt", "notes.md"]);

    Organizer::new()
        .threshold(0.65)
        .organize(dir.path())
        .expect("organize");

    assert_eq!(
        tree(dir.path()),
        [
            "notes.md",
            "report (and 2 similar)",
            "report (and 2 similar)/report.txt",
            "report (and 2 similar)/report_v2.txt",
        ]
    );
}

#[test]
fn existing_folder_keeps_its_contents() {
    let dir = dir_with(&["IMG_0001.jpg", "IMG_0002.jpg"]);
    let taken = dir.path().join("IMG_0001 (and 2 similar)");
    fs::create_dir(&taken).expect("create existing folder");
    fs::write(taken.join("old.jpg"), "old").expect("write old file");

    let report = Organizer::new().organize(dir.path()).expect("organize");

    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].folder, "IMG_0001 (and 3 similar)");
    assert_eq!(
        tree(dir.path()),
        [
            "IMG_0001 (and 2 similar)",
            "IMG_0001 (and 2 similar)/old.jpg",
            "IMG_0001 (and 3 similar)",
            "IMG_0001 (and 3 similar)/IMG_0001.jpg",
            "IMG_0001 (and 3 similar)/IMG_0002.jpg",
        ]
    );
}

#[test]
fn subdirectories_are_moved_like_files() {
    let dir = dir_with(&["invoice.pdf"]);
    fs::create_dir(dir.path().join("invoices")).expect("create subdirectory");
    fs::write(dir.path().join("invoices/march.pdf"), "march").expect("write nested file");

    Organizer::new()
        .threshold(0.75)
        .organize(dir.path())
        .expect("organize");

    // "invoice" vs "invoices": distance 1 over a grid side of 9.
    assert_eq!(
        tree(dir.path()),
        [
            "invoice (and 2 similar)",
            "invoice (and 2 similar)/invoice.pdf",
            "invoice (and 2 similar)/invoices",
            "invoice (and 2 similar)/invoices/march.pdf",
        ]
    );
}

#[test]
fn second_run_changes_nothing() {
    let dir = dir_with(&["report.txt", "report2.txt", "notes.md"]);
    let organizer = Organizer::new();

    organizer.organize(dir.path()).expect("first run");
    let after_first = tree(dir.path());

    let second = organizer.organize(dir.path()).expect("second run");
    assert!(second.is_empty());
    assert_eq!(tree(dir.path()), after_first);
}

#[test]
fn odd_names_do_not_break_splitting() {
    let dir = dir_with(&[".gitignore", ".env", "Makefile", "trailing.", "a.b.c"]);

    let report = Organizer::new().organize(dir.path()).expect("organize");

    // Only the two dotfiles share a base name (the empty string).
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].folder, " (and 2 similar)");
    assert_eq!(
        tree(dir.path()),
        [
            " (and 2 similar)",
            " (and 2 similar)/.env",
            " (and 2 similar)/.gitignore",
            "Makefile",
            "a.b.c",
            "trailing.",
        ]
    );
}

// ==============================================================================
// Dry Runs
// ==============================================================================

#[test]
fn plan_matches_organize_and_touches_nothing() {
    let names = ["draft.txt", "draft1.txt", "final.txt", "photo.jpg", "photo.png"];
    let dir = dir_with(&names);
    let before = tree(dir.path());

    let plan = Organizer::new().plan(dir.path()).expect("plan");
    assert_eq!(tree(dir.path()), before);

    let done = Organizer::new().organize(dir.path()).expect("organize");
    assert_eq!(plan, done);
    assert_eq!(plan.folders_created(), 2);
}

#[test]
fn memory_snapshot_reflects_disk() {
    let dir = dir_with(&["a.txt", "b.txt"]);

    let memory = MemoryFs::snapshot(&RealFs, dir.path()).expect("snapshot");
    let mut names = memory.list_entries(dir.path()).expect("list memory");
    names.sort();

    assert_eq!(names, ["a.txt", "b.txt"]);
}

// ==============================================================================
// Errors
// ==============================================================================

#[test]
fn missing_directory_reports_list_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("does-not-exist");

    let err = Organizer::new().organize(&missing).unwrap_err();

    assert!(matches!(err, OrganizeError::ListDir { ref path, .. } if *path == missing));
    assert_eq!(err.io_error().kind(), std::io::ErrorKind::NotFound);

    let rendered = render_diagnostic(&err);
    assert!(rendered.contains("simfold::list_dir"), "{rendered}");
    assert!(rendered.contains("check that the directory exists"), "{rendered}");
}

#[test]
fn plan_on_missing_directory_fails_the_same_way() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("does-not-exist");

    let err = Organizer::new().plan(&missing).unwrap_err();

    assert!(matches!(err, OrganizeError::ListDir { .. }));
}
