use super::{
    error::RenderError,
    node::{Attributes, ElementNode},
};

/// Renders an element tree to HTML, depth-first in child order.
///
/// Attribute values are escaped for a double-quoted context; text values
/// are written verbatim.
pub fn render_html(node: &ElementNode) -> Result<String, RenderError> {
    let mut out = String::new();
    render_into(node, &mut out)?;
    Ok(out)
}

fn render_into(node: &ElementNode, out: &mut String) -> Result<(), RenderError> {
    match node {
        ElementNode::Leaf {
            tag: None, value, ..
        } => out.push_str(value),
        ElementNode::Leaf {
            tag: Some(tag),
            value,
            attributes,
            void,
        } => {
            if tag.is_empty() {
                return Err(RenderError::MissingTag);
            }
            if value.is_empty() && !void {
                return Err(RenderError::MissingValue { tag: tag.clone() });
            }
            open_tag(tag, attributes, out);
            out.push_str(value);
            close_tag(tag, out);
        }
        ElementNode::Parent {
            tag,
            children,
            attributes,
        } => {
            if tag.is_empty() {
                return Err(RenderError::MissingTag);
            }
            if children.is_empty() {
                return Err(RenderError::EmptyChildren { tag: tag.clone() });
            }
            open_tag(tag, attributes, out);
            for child in children {
                render_into(child, out)?;
            }
            close_tag(tag, out);
        }
    }
    Ok(())
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    render_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// ` key="value"` per attribute, in key order.
fn render_attributes(attributes: &Attributes, out: &mut String) {
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn untagged_leaf_renders_value() {
        assert_snapshot!(render_html(&ElementNode::text("Just text")).unwrap(), @"Just text");
    }

    #[test]
    fn tagged_leaf_wraps_value() {
        assert_snapshot!(render_html(&ElementNode::leaf("p", "Hello")).unwrap(), @"<p>Hello</p>");
    }

    #[test]
    fn leaf_with_attribute() {
        let node = ElementNode::leaf("a", "Click me!").with_attribute("href", "https://www.google.com");
        assert_snapshot!(render_html(&node).unwrap(), @r#"<a href="https://www.google.com">Click me!</a>"#);
    }

    #[test]
    fn void_leaf_renders_without_value() {
        let node = ElementNode::void("img")
            .with_attribute("src", "/cat.png")
            .with_attribute("alt", "a cat");
        assert_snapshot!(render_html(&node).unwrap(), @r#"<img alt="a cat" src="/cat.png"></img>"#);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let node = ElementNode::leaf("a", "q").with_attribute("href", r#"/say?"hi""#);
        assert_snapshot!(render_html(&node).unwrap(), @r#"<a href="/say?&quot;hi&quot;">q</a>"#);
    }

    #[test]
    fn parent_renders_children_in_order() {
        let node = ElementNode::parent(
            "p",
            vec![
                ElementNode::leaf("b", "Bold text"),
                ElementNode::text("Normal text"),
                ElementNode::leaf("i", "italic text"),
                ElementNode::text("Normal text"),
            ],
        );
        assert_snapshot!(
            render_html(&node).unwrap(),
            @"<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn nested_parents() {
        let node = ElementNode::parent(
            "div",
            vec![ElementNode::parent(
                "span",
                vec![ElementNode::leaf("b", "grandchild")],
            )],
        );
        assert_snapshot!(render_html(&node).unwrap(), @"<div><span><b>grandchild</b></span></div>");
    }

    #[test]
    fn parent_attributes_render_on_open_tag() {
        let node = ElementNode::parent("div", vec![ElementNode::text("x")])
            .with_attribute("class", "content");
        assert_snapshot!(render_html(&node).unwrap(), @r#"<div class="content">x</div>"#);
    }

    #[test]
    fn tagged_leaf_without_value_fails() {
        assert_eq!(
            render_html(&ElementNode::leaf("b", "")),
            Err(RenderError::MissingValue { tag: "b".into() })
        );
    }

    #[test]
    fn parent_without_children_fails() {
        assert_eq!(
            render_html(&ElementNode::parent("ul", vec![])),
            Err(RenderError::EmptyChildren { tag: "ul".into() })
        );
    }

    #[test]
    fn parent_without_tag_fails() {
        assert_eq!(
            render_html(&ElementNode::parent("", vec![ElementNode::text("x")])),
            Err(RenderError::MissingTag)
        );
        assert_eq!(
            render_html(&ElementNode::leaf("", "x")),
            Err(RenderError::MissingTag)
        );
    }

    #[test]
    fn error_in_deep_child_aborts_render() {
        let node = ElementNode::parent(
            "div",
            vec![
                ElementNode::leaf("p", "fine"),
                ElementNode::parent("ol", vec![ElementNode::parent("li", vec![])]),
            ],
        );
        assert_eq!(
            render_html(&node),
            Err(RenderError::EmptyChildren { tag: "li".into() })
        );
    }
}
