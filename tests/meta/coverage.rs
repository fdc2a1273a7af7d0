//! Layout checks keeping `tests/unit` a mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    /// Every `.rs` file below `dir`, relative to `dir`, with `/` separators
    fn rust_files(dir: &Path) -> io::Result<BTreeSet<String>> {
        let mut files = BTreeSet::new();
        let mut pending = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            for entry in fs::read_dir(&current)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(dir)
                        .map_err(|_| io::Error::other("path outside scanned directory"))?;
                    let parts: Vec<_> = relative
                        .components()
                        .map(|part| part.as_os_str().to_string_lossy().into_owned())
                        .collect();
                    files.insert(parts.join("/"));
                }
            }
        }

        Ok(files)
    }

    fn is_module_file(relative: &str) -> bool {
        relative == "mod.rs" || relative.ends_with("/mod.rs")
    }

    fn list(paths: &[&String], prefix: &str) -> String {
        paths
            .iter()
            .map(|path| format!("  - {prefix}/{path}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests each source module has a unit test file at the mirrored path
    // Verified by adding a source file without tests
    #[test]
    fn test_src_modules_have_unit_tests() {
        let sources = rust_files(Path::new(SRC_DIR)).expect("Failed to scan src");
        let tests = rust_files(Path::new(UNIT_DIR)).expect("Failed to scan unit tests");

        let missing: Vec<_> = sources
            .iter()
            .filter(|path| !matches!(path.as_str(), "lib.rs" | "main.rs"))
            .filter(|path| !is_module_file(path))
            .filter(|path| !tests.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            list(&missing, SRC_DIR)
        );
    }

    // Tests no unit test file outlives the source module it covers
    // Verified by renaming a source module
    #[test]
    fn test_unit_tests_have_src_modules() {
        let sources = rust_files(Path::new(SRC_DIR)).expect("Failed to scan src");
        let tests = rust_files(Path::new(UNIT_DIR)).expect("Failed to scan unit tests");

        let orphaned: Vec<_> = tests
            .iter()
            .filter(|path| !is_module_file(path))
            .filter(|path| !sources.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source module:\n{}",
            list(&orphaned, UNIT_DIR)
        );
    }

    // Tests each unit test file is declared by its parent module
    // Verified by removing a declaration from a mod.rs
    #[test]
    fn test_unit_tests_are_declared() {
        let tests = rust_files(Path::new(UNIT_DIR)).expect("Failed to scan unit tests");

        let undeclared: Vec<_> = tests
            .iter()
            .filter(|path| !is_module_file(path))
            .filter(|path| {
                let file = PathBuf::from(UNIT_DIR).join(path.as_str());
                let stem = file
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let parent_mod = file.with_file_name("mod.rs");
                let declarations = fs::read_to_string(parent_mod).unwrap_or_default();
                !declarations
                    .lines()
                    .any(|line| line.trim() == format!("pub mod {stem};"))
            })
            .collect();

        assert!(
            undeclared.is_empty(),
            "Unit test files never compiled:\n{}",
            list(&undeclared, UNIT_DIR)
        );
    }

    // Tests every test file holds at least one test function
    // Verified by emptying a test module
    #[test]
    fn test_test_files_contain_tests() {
        let files = rust_files(Path::new(TESTS_DIR)).expect("Failed to scan tests");

        let empty: Vec<_> = files
            .iter()
            .filter(|path| path.as_str() != "main.rs" && !is_module_file(path))
            .filter(|path| {
                !fs::read_to_string(Path::new(TESTS_DIR).join(path.as_str()))
                    .is_ok_and(|content| content.contains("#[test]"))
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            list(&empty, TESTS_DIR)
        );
    }
}
