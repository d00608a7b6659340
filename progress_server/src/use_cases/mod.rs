pub mod get_progress;
pub mod record_completion;

#[cfg(test)]
pub(crate) mod test_support;
