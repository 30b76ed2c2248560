use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory holding an `opcode.json` with the given contents.
pub fn workspace(json: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("opcode.json");
    let output = dir.path().join("opcodes.txt");
    std::fs::write(&input, json).unwrap();
    (dir, input, output)
}

pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
