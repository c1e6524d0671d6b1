use crate::convert::{ConvertError, markdown_to_html};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

const TITLE_MARKER: &str = "# ";

/// Problems with a single page's content, independent of where it lives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("No title found in markdown, ensure there is a single h1 header")]
    NoTitle,
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// The text of the first `# ` line, trimmed.
pub fn extract_title(markdown: &str) -> Result<String, PageError> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix(TITLE_MARKER))
        .map(|title| title.trim().to_string())
        .ok_or(PageError::NoTitle)
}

/// Substitutes every title and content placeholder in `template`.
pub fn apply_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Points root-relative `href` and `src` attributes at `basepath`.
pub fn rewrite_base_path(html: &str, basepath: &str) -> String {
    html.replace(r#"href="/"#, &format!(r#"href="{basepath}"#))
        .replace(r#"src="/"#, &format!(r#"src="{basepath}"#))
}

/// Builds a complete page from Markdown and a template.
pub fn render_page(markdown: &str, template: &str, basepath: &str) -> Result<String, PageError> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    let page = apply_template(template, &title, &content);
    Ok(rewrite_base_path(&page, basepath))
}
