pub type ImpactId = u32;

/// One impact statement attributed to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Impact {
    pub id: ImpactId,
    /// Organization the statement is attributed to. Many impacts share one.
    pub entity: String,
    /// Lead phrase of `text`, or empty.
    pub highlight: String,
    pub text: String,
}

impl Impact {
    pub fn new(
        id: ImpactId,
        entity: impl Into<String>,
        highlight: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            entity: entity.into(),
            highlight: highlight.into(),
            text: text.into(),
        }
    }
}
