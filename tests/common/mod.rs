// ==============================================================================
// Shared Test Helpers
// ==============================================================================
//
// Each test file that imports this module compiles its own copy, so not every
// function is used in every binary. Suppress the resulting dead_code warnings.
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use miette::{GraphicalReportHandler, GraphicalTheme};
use tempfile::TempDir;
use walkdir::WalkDir;

/// A fresh temporary directory holding one file per name. Each file's content
/// is its own name, so tests can check that nothing was swapped or clobbered.
pub fn dir_with(names: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for name in names {
        fs::write(dir.path().join(name), name).expect("create test file");
    }
    dir
}

/// Every path under `root`, relative to it, with `/` separators, sorted.
/// Directories are listed as well as files.
pub fn tree(root: &Path) -> Vec<String> {
    let mut paths: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.expect("walk test directory");
            entry
                .path()
                .strip_prefix(root)
                .expect("walked path is under the root")
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    paths.sort();
    paths
}

/// Render a diagnostic to a deterministic string. Uses the non-unicode theme
/// at 80 columns.
pub fn render_diagnostic(diagnostic: &dyn miette::Diagnostic) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::none()).with_width(80);
    let mut buf = String::new();
    handler
        .render_report(&mut buf, diagnostic)
        .expect("render to String is infallible");
    buf
}
