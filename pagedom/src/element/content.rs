#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    /// Word-wrapped text.
    Text(String),
    Children(Vec<super::Element>),
}
