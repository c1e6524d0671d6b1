use std::path::{Path, PathBuf};

use relative_path::RelativePathBuf;

use crate::io::{read_file, scan_markdown_files, write_file};

use super::{SiteError, page::render_page};

/// Generates one HTML page from a Markdown file and a template file.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    basepath: &str,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using template {}",
        from_path.display(),
        dest_path.display(),
        template_path.display()
    );

    let markdown = read_file(from_path)?;
    let template = read_file(template_path)?;

    let page = render_page(&markdown, &template, basepath).map_err(|source| SiteError::Page {
        path: from_path.to_path_buf(),
        source,
    })?;

    write_file(dest_path, &page)?;
    Ok(())
}

/// Generates a page for every Markdown file under `content_dir`, mirroring
/// the directory layout under `dest_dir` with `.html` extensions.
///
/// Returns the written paths, sorted. Non-Markdown files are ignored.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    basepath: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    let mut written = Vec::new();

    for source in scan_markdown_files(content_dir)? {
        let dest = destination_for(&source, content_dir, dest_dir)?;
        generate_page(&source, template_path, &dest, basepath)?;
        written.push(dest);
    }

    written.sort();
    Ok(written)
}

/// Maps `content_dir/a/b.md` to `dest_dir/a/b.html`.
fn destination_for(source: &Path, content_dir: &Path, dest_dir: &Path) -> Result<PathBuf, SiteError> {
    let invalid = || SiteError::InvalidPath {
        path: source.to_path_buf(),
        root: content_dir.to_path_buf(),
    };
    let relative = source.strip_prefix(content_dir).map_err(|_| invalid())?;
    let relative = RelativePathBuf::from_path(relative).map_err(|_| invalid())?;
    Ok(relative.with_extension("html").to_path(dest_dir))
}
