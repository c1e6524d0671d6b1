use crate::{
    html::{ElementNode, RenderError, render_html},
    parsing::{
        ParseError,
        blocks::{Block, ListItem},
        inline::InlineSpan,
        parse_document,
    },
};

/// Tag of the root element that owns a converted document.
pub const ROOT_TAG: &str = "div";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Converts a Markdown document into an element tree rooted at a `div`.
pub fn markdown_to_element_tree(markdown: &str) -> Result<ElementNode, ParseError> {
    let children = parse_document(markdown)?
        .into_iter()
        .map(block_to_node)
        .collect();
    Ok(ElementNode::parent(ROOT_TAG, children))
}

/// Converts and renders in one step.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    let tree = markdown_to_element_tree(markdown)?;
    Ok(render_html(&tree)?)
}

fn block_to_node(block: Block) -> ElementNode {
    match block {
        Block::Paragraph(spans) => ElementNode::parent("p", spans_to_nodes(spans)),
        Block::Heading { level, content } => {
            ElementNode::parent(format!("h{level}"), spans_to_nodes(content))
        }
        Block::Code(code) => ElementNode::parent("pre", vec![ElementNode::leaf("code", code)]),
        Block::Quote(text) => ElementNode::leaf("blockquote", text),
        Block::UnorderedList(items) => ElementNode::parent("ul", items_to_nodes(items)),
        Block::OrderedList(items) => ElementNode::parent("ol", items_to_nodes(items)),
    }
}

fn items_to_nodes(items: Vec<ListItem>) -> Vec<ElementNode> {
    items
        .into_iter()
        .map(|item| ElementNode::parent("li", spans_to_nodes(item)))
        .collect()
}

fn spans_to_nodes(spans: Vec<InlineSpan>) -> Vec<ElementNode> {
    spans.into_iter().map(span_to_node).collect()
}

/// Maps one inline span to its leaf element.
pub fn span_to_node(span: InlineSpan) -> ElementNode {
    match span {
        InlineSpan::Text(text) => ElementNode::text(text),
        InlineSpan::Bold(text) => ElementNode::leaf("b", text),
        InlineSpan::Italic(text) => ElementNode::leaf("i", text),
        InlineSpan::Code(text) => ElementNode::leaf("code", text),
        InlineSpan::Link { text, url } => ElementNode::leaf("a", text).with_attribute("href", url),
        InlineSpan::Image { alt, url } => ElementNode::void("img")
            .with_attribute("src", url)
            .with_attribute("alt", alt),
    }
}
