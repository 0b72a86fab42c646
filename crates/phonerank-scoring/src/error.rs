use crate::derivation::MissingAttributeError;

/// An operation that needs at least one record was given none.
///
/// Raised by the range pass of normalization (minimum and maximum are
/// undefined over zero records) and by [`Ranking::best`](crate::ranking::Ranking::best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("empty record set: {operation} requires at least one record")]
pub struct EmptyInputError {
    operation: &'static str,
}

impl EmptyInputError {
    #[must_use]
    pub const fn new(operation: &'static str) -> Self {
        Self { operation }
    }

    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }
}

/// Failure of a whole pipeline run.
///
/// The pipeline either produces a fully scored ranking or one of these; it
/// never returns a partially scored record set.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PipelineError {
    #[display("{_0}")]
    MissingAttribute(MissingAttributeError),
    #[display("{_0}")]
    EmptyInput(EmptyInputError),
}
