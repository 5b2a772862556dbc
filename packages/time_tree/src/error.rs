use thiserror::Error;

/// Errors that can occur when constructing timing scopes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller provided an empty string as a scope name.
    ///
    /// Scope names appear as task labels in the rendered report, so every
    /// scope must carry a non-empty name.
    #[error("scope name must not be empty")]
    EmptyName,
}

/// A specialized `Result` type for scope construction, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn empty_name_is_error() {
        let error = Error::EmptyName;

        // Verify it is a valid Error that can be used in Result context.
        let result: Result<()> = Err(error);
        assert!(result.is_err());
    }

    #[test]
    fn empty_name_displays_reason() {
        assert!(Error::EmptyName.to_string().contains("empty"));
    }
}
