use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files under `root`, sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.is_dir() {
        return Err(IoError::NotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Mirror `src` into a new directory `dest`, returning the copied files.
///
/// `dest` must not exist yet; callers clear it first.
pub fn copy_directory(src: &Path, dest: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !src.is_dir() {
        return Err(IoError::NotFound(src.to_path_buf()));
    }
    if dest.exists() {
        return Err(IoError::DestinationExists(dest.to_path_buf()));
    }

    let mut copied = Vec::new();
    copy_directory_recursive(src, dest, &mut copied)?;
    copied.sort();
    Ok(copied)
}

fn copy_directory_recursive(
    src: &Path,
    dest: &Path,
    copied: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    fs::create_dir(dest).map_err(IoError::Io)?;

    for entry in fs::read_dir(src).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let src_entry = entry.path();
        let dest_entry = dest.join(entry.file_name());

        if src_entry.is_dir() {
            copy_directory_recursive(&src_entry, &dest_entry, copied)?;
        } else {
            log::debug!(
                "Copying {} to {}",
                src_entry.display(),
                dest_entry.display()
            );
            fs::copy(&src_entry, &dest_entry).map_err(IoError::Io)?;
            copied.push(dest_entry);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn touch(path: &Path, content: &str) {
        write_file(path, content).unwrap();
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.md");
        assert!(matches!(read_file(&missing), Err(IoError::NotFound(p)) if p == missing));
    }

    #[test]
    fn write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a/b/c.html");
        write_file(&path, "<p>x</p>").unwrap();
        assert_eq!(read_file(&path).unwrap(), "<p>x</p>");
    }

    #[test]
    fn scan_finds_nested_markdown_only() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("index.md"), "# Home");
        touch(&root.join("blog/post.md"), "# Post");
        touch(&root.join("blog/image.png"), "png");

        let files = scan_markdown_files(root).unwrap();
        assert_eq!(
            files,
            vec![root.join("blog/post.md"), root.join("index.md")]
        );
    }

    #[test]
    fn scan_missing_root_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            scan_markdown_files(&temp_dir.path().join("nope")),
            Err(IoError::NotFound(_))
        ));
    }

    #[test]
    fn copy_mirrors_tree() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("static");
        let dest = temp_dir.path().join("public");
        touch(&src.join("index.css"), "body {}");
        touch(&src.join("images/cat.png"), "meow");

        let copied = copy_directory(&src, &dest).unwrap();

        assert_eq!(
            copied,
            vec![dest.join("images/cat.png"), dest.join("index.css")]
        );
        assert_eq!(read_file(&dest.join("images/cat.png")).unwrap(), "meow");
        assert_eq!(read_file(&dest.join("index.css")).unwrap(), "body {}");
    }

    #[test]
    fn copy_empty_directory_creates_destination() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("static");
        fs::create_dir(&src).unwrap();
        let dest = temp_dir.path().join("public");

        assert!(copy_directory(&src, &dest).unwrap().is_empty());
        assert!(dest.is_dir());
    }

    #[test]
    fn copy_refuses_existing_destination() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("static");
        let dest = temp_dir.path().join("public");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dest).unwrap();

        assert!(matches!(
            copy_directory(&src, &dest),
            Err(IoError::DestinationExists(p)) if p == dest
        ));
    }

    #[test]
    fn copy_missing_source_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            copy_directory(&temp_dir.path().join("nope"), &temp_dir.path().join("out")),
            Err(IoError::NotFound(_))
        ));
    }
}
