use std::collections::BTreeMap;

/// Element attributes. Sorted by key so rendering is deterministic.
pub type Attributes = BTreeMap<String, String>;

/// A node in the output element tree.
///
/// The root of a converted document owns every node below it; nothing is
/// shared between subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementNode {
    /// Literal text when `tag` is `None`, otherwise `<tag>value</tag>`.
    ///
    /// A tagged leaf must have a non-empty value unless `void` is set.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
        void: bool,
    },
    /// `<tag>` wrapping its children in order. Must have a tag and at least
    /// one child.
    Parent {
        tag: String,
        children: Vec<ElementNode>,
        attributes: Attributes,
    },
}

impl ElementNode {
    /// Untagged text.
    pub fn text(value: impl Into<String>) -> Self {
        ElementNode::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
            void: false,
        }
    }

    /// `<tag>value</tag>`
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        ElementNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
            void: false,
        }
    }

    /// A tagged leaf that is allowed to have no value, like `img`.
    pub fn void(tag: impl Into<String>) -> Self {
        ElementNode::Leaf {
            tag: Some(tag.into()),
            value: String::new(),
            attributes: Attributes::new(),
            void: true,
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<ElementNode>) -> Self {
        ElementNode::Parent {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Sets an attribute, replacing any previous value for `key`.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            ElementNode::Leaf { attributes, .. } | ElementNode::Parent { attributes, .. } => {
                attributes.insert(key.into(), value.into());
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            ElementNode::Leaf { tag, .. } => tag.as_deref(),
            ElementNode::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            ElementNode::Leaf { attributes, .. } | ElementNode::Parent { attributes, .. } => {
                attributes
            }
        }
    }

    /// Children of a parent node; empty for leaves.
    pub fn children(&self) -> &[ElementNode] {
        match self {
            ElementNode::Leaf { .. } => &[],
            ElementNode::Parent { children, .. } => children,
        }
    }
}
