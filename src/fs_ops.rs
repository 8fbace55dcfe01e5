//! File-system helpers over the [`FileSystem`] collaborator.
//!
//! Thin pass-throughs with no dialog involvement: recursive copy/move,
//! rename-in-place, extension-filtered listing, and line-oriented text
//! file I/O.

use std::path::{Path, PathBuf};

use crate::fs::FileSystem;

/// Copy a file or directory tree recursively.
pub fn copy_tree(fs: &dyn FileSystem, from: &Path, to: &Path) -> std::io::Result<()> {
    let md = fs.properties(from)?;
    if !md.is_dir {
        fs.copy_file(from, to)?;
        return Ok(());
    }

    fs.create_dir(to)?;
    for e in fs.read_dir(from)? {
        let child_to = to.join(&e.name);
        copy_tree(fs, &e.path, &child_to)?;
    }
    Ok(())
}

/// Move a file or directory tree.
///
/// Tries a plain rename first and falls back to copy-and-delete when the
/// rename is refused (e.g. across mount points).
pub fn move_tree(fs: &dyn FileSystem, from: &Path, to: &Path) -> std::io::Result<()> {
    if fs.rename(from, to).is_ok() {
        return Ok(());
    }

    let md = fs.properties(from)?;
    if md.is_dir {
        copy_tree(fs, from, to)?;
        fs.remove_dir_all(from)
    } else {
        fs.copy_file(from, to)?;
        fs.remove_file(from)
    }
}

/// Rename a file or directory in place, keeping its parent.
///
/// Returns the new path.
pub fn rename_in_place(
    fs: &dyn FileSystem,
    path: &Path,
    new_name: &str,
) -> std::io::Result<PathBuf> {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let target = parent.join(new_name);
    fs.rename(path, &target)?;
    Ok(target)
}

/// Ensure a directory exists, optionally creating it and its parents.
///
/// Returns whether the directory exists afterwards.
pub fn verify_and_create_dir(
    fs: &dyn FileSystem,
    path: &Path,
    create: bool,
) -> std::io::Result<bool> {
    if fs.properties(path).map(|p| p.is_dir).unwrap_or(false) {
        return Ok(true);
    }
    if !create {
        return Ok(false);
    }
    fs.create_dir_all(path)?;
    Ok(fs.properties(path).map(|p| p.is_dir).unwrap_or(false))
}

/// List files in `dir` (non-recursive), optionally restricted to an
/// extension (with or without dot, case-insensitive).
pub fn list_files(
    fs: &dyn FileSystem,
    dir: &Path,
    extension: Option<&str>,
) -> std::io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for e in fs.read_dir(dir)? {
        if !e.is_dir && matches_extension(&e.path, extension) {
            out.push(e.path);
        }
    }
    Ok(out)
}

/// List the immediate subdirectories of `dir`.
pub fn list_dirs(fs: &dyn FileSystem, dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for e in fs.read_dir(dir)? {
        if e.is_dir {
            out.push(e.path);
        }
    }
    Ok(out)
}

/// As [`list_files`], but descends into subdirectories.
pub fn list_files_recursive(
    fs: &dyn FileSystem,
    dir: &Path,
    extension: Option<&str>,
) -> std::io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(d) = stack.pop() {
        for e in fs.read_dir(&d)? {
            if e.is_dir {
                stack.push(e.path);
            } else if matches_extension(&e.path, extension) {
                out.push(e.path);
            }
        }
    }
    Ok(out)
}

/// Base file names without extension for a listing result.
pub fn file_stems(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|p| p.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .collect()
}

fn matches_extension(path: &Path, wanted: Option<&str>) -> bool {
    let Some(wanted) = wanted else { return true };
    let wanted = wanted.trim().trim_start_matches("*.").trim_start_matches('.');
    if wanted.is_empty() || wanted == "*" {
        return true;
    }
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

/// Read a text file into lines.
pub fn load_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text.lines().map(str::to_owned).collect())
}

/// Write lines to a file, replacing its contents.
pub fn save_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    std::fs::write(path, out)
}

/// Append lines to an existing text file, or prepend with `before = true`.
pub fn append_lines(path: &Path, lines: &[String], before: bool) -> std::io::Result<()> {
    let mut content = load_lines(path)?;
    if before {
        let mut v = lines.to_vec();
        v.extend(content);
        content = v;
    } else {
        content.extend(lines.iter().cloned());
    }
    save_lines(path, &content)
}

/// Insert lines into an existing text file at `index` (clamped to the end).
pub fn insert_lines(path: &Path, lines: &[String], index: usize) -> std::io::Result<()> {
    let mut content = load_lines(path)?;
    let at = index.min(content.len());
    content.splice(at..at, lines.iter().cloned());
    save_lines(path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::StdFileSystem;

    fn unique_temp_dir(prefix: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        let pid = std::process::id();
        let t = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        p.push(format!("file-dialogs-fs-ops-{prefix}-{pid}-{t}"));
        p
    }

    #[test]
    fn copy_tree_recursively_copies_a_directory() {
        let fs = StdFileSystem;
        let root = unique_temp_dir("copy_tree_dir");
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).unwrap();

        let src = root.join("src");
        let src_nested = src.join("nested");
        std::fs::create_dir_all(&src_nested).unwrap();
        std::fs::write(src.join("a.txt"), b"hello").unwrap();
        std::fs::write(src_nested.join("b.txt"), b"world").unwrap();

        let dst = root.join("dst");
        copy_tree(&fs, &src, &dst).unwrap();

        assert!(dst.join("a.txt").exists());
        assert!(dst.join("nested").join("b.txt").exists());

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn move_tree_falls_back_to_copy_and_delete() {
        let fs = StdFileSystem;
        let root = unique_temp_dir("move_tree_file");
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).unwrap();

        let src = root.join("a.txt");
        let dst = root.join("b.txt");
        std::fs::write(&src, b"hello").unwrap();

        move_tree(&fs, &src, &dst).unwrap();
        assert!(!src.exists());
        assert!(dst.exists());

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn rename_in_place_keeps_the_parent() {
        let fs = StdFileSystem;
        let root = unique_temp_dir("rename_in_place");
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).unwrap();

        let src = root.join("old.txt");
        std::fs::write(&src, b"x").unwrap();

        let renamed = rename_in_place(&fs, &src, "new.txt").unwrap();
        assert_eq!(renamed, root.join("new.txt"));
        assert!(!src.exists());
        assert!(renamed.exists());

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn list_files_honors_extension_filter() {
        let fs = StdFileSystem;
        let root = unique_temp_dir("list_files");
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(root.join("sub")).unwrap();
        std::fs::write(root.join("a.txt"), b"").unwrap();
        std::fs::write(root.join("b.TXT"), b"").unwrap();
        std::fs::write(root.join("c.wav"), b"").unwrap();
        std::fs::write(root.join("sub").join("d.txt"), b"").unwrap();

        let mut flat = list_files(&fs, &root, Some("txt")).unwrap();
        flat.sort();
        assert_eq!(flat, vec![root.join("a.txt"), root.join("b.TXT")]);

        let mut deep = list_files_recursive(&fs, &root, Some("*.txt")).unwrap();
        deep.sort();
        assert_eq!(
            deep,
            vec![root.join("a.txt"), root.join("b.TXT"), root.join("sub").join("d.txt")]
        );

        let all = list_files(&fs, &root, None).unwrap();
        assert_eq!(all.len(), 3);

        let stems = file_stems(&flat);
        assert_eq!(stems, vec!["a", "b"]);

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn list_dirs_returns_only_subdirectories() {
        let fs = StdFileSystem;
        let root = unique_temp_dir("list_dirs");
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(root.join("one")).unwrap();
        std::fs::create_dir_all(root.join("two")).unwrap();
        std::fs::write(root.join("a.txt"), b"").unwrap();

        let mut dirs = list_dirs(&fs, &root).unwrap();
        dirs.sort();
        assert_eq!(dirs, vec![root.join("one"), root.join("two")]);

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn line_io_round_trips() {
        let root = unique_temp_dir("line_io");
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).unwrap();
        let file = root.join("lines.txt");

        let lines: Vec<String> = ["one", "two", "three"].iter().map(|s| s.to_string()).collect();
        save_lines(&file, &lines).unwrap();
        assert_eq!(load_lines(&file).unwrap(), lines);

        append_lines(&file, &["four".to_string()], false).unwrap();
        assert_eq!(load_lines(&file).unwrap().last().unwrap(), "four");

        append_lines(&file, &["zero".to_string()], true).unwrap();
        assert_eq!(load_lines(&file).unwrap().first().unwrap(), "zero");

        insert_lines(&file, &["one-and-a-half".to_string()], 2).unwrap();
        assert_eq!(load_lines(&file).unwrap()[2], "one-and-a-half");

        // Index past the end clamps to append.
        insert_lines(&file, &["last".to_string()], 999).unwrap();
        assert_eq!(load_lines(&file).unwrap().last().unwrap(), "last");

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn verify_and_create_dir_reports_existence() {
        let fs = StdFileSystem;
        let root = unique_temp_dir("verify_create");
        let _ = std::fs::remove_dir_all(&root);

        let target = root.join("a").join("b");
        assert!(!verify_and_create_dir(&fs, &target, false).unwrap());
        assert!(verify_and_create_dir(&fs, &target, true).unwrap());
        assert!(verify_and_create_dir(&fs, &target, false).unwrap());

        std::fs::remove_dir_all(&root).unwrap();
    }
}
