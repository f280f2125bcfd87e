#![allow(dead_code)]

use dropin::context::{Context, Project};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const FIXTURE: &str = "tests/templates/apptemplate";
pub const EXPECTED: &str = "tests/expected/bookstore";

/// Copies the fixture template into `dest` so a test can add files to it.
pub fn copy_fixture(dest: &Path) -> PathBuf {
    for entry in WalkDir::new(FIXTURE) {
        let entry = entry.unwrap();
        let relative = entry.path().strip_prefix(FIXTURE).unwrap();
        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
    dest.to_path_buf()
}

/// Writes `content` at `root/relative`, creating parent directories.
pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A bookstore run with Book and Library, generators off.
pub fn bookstore_context(source_root: &Path, target_root: &Path) -> Context {
    Context {
        source_root: source_root.to_path_buf(),
        target_root: target_root.to_path_buf(),
        entities: vec!["Book".to_string(), "Library".to_string()],
        project: Project::new("bookstore", "github.com/alice/bookstore"),
        exclude_template_entity: true,
        dry_run: false,
        skip_codegen: true,
        config_path: None,
    }
}

/// Relative paths of every file under `root`, sorted.
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

/// Files under `root` whose bytes contain `needle`.
pub fn files_containing(root: &Path, needle: &str) -> Vec<String> {
    list_files(root)
        .into_iter()
        .filter(|file| {
            let bytes = fs::read(root.join(file)).unwrap();
            String::from_utf8_lossy(&bytes).contains(needle)
        })
        .collect()
}
