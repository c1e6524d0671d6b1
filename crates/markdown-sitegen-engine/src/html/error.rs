/// Structural violations found while rendering an element tree.
///
/// These point at a defect in whatever built the tree, not at the input
/// document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Element nodes with children must have a tag")]
    MissingTag,
    #[error("Element <{tag}> must have at least one child")]
    EmptyChildren { tag: String },
    #[error("Element <{tag}> must have a value")]
    MissingValue { tag: String },
}
