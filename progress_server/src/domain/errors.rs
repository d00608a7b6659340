// Domain-level errors for progress workflows.
#[derive(Debug, PartialEq, Eq)]
pub enum ProgressError {
    MissingContentId,
    InvalidPoints,
    StorageFailure,
}
