use descriptor::DescriptorError;
use loader::TemplateError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failure while producing an artifact.
pub enum GenerateError {
    #[error(transparent)]
    InvalidDescriptor(#[from] DescriptorError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("template expansion exceeded the maximum nesting depth of {depth}")]
    Cycle { depth: usize },
    #[error("placeholder '{{{{{token}}}}}' has no value")]
    UnresolvedPlaceholder { token: String },
}

impl GenerateError {
    /// Template id behind a missing-template failure, if that is what this is.
    pub fn missing_template(&self) -> Option<&str> {
        match self {
            GenerateError::Template(TemplateError::NotFound { id }) => Some(id),
            _ => None,
        }
    }
}
