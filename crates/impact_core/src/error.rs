use crate::ImpactId;

/// Failures of the selection and shuffle operations.
///
/// Both are value-level: callers keep whatever they were displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no impacts available")]
    EmptyCollection,
    #[error("no impact with id {id}")]
    InvalidReference { id: ImpactId },
}
