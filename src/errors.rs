//! Crate-specific error and result types.

/// Result type returned by fallible input tracker operations.
pub type Result<T> = ::std::result::Result<T, Error>;

/// Error type for input tracker operations.
///
/// The only failure category is a caller passing a group name the tracker has
/// never heard of. Raw key codes never fail: they are tracked lazily on first
/// use.
#[derive(Clone, Debug, PartialEq, Eq, ::thiserror::Error)]
pub enum Error {
    /// A group definition referenced a member group which has not been
    /// registered yet. The failed registration leaves previously stored
    /// groups untouched.
    #[error("Cannot define key group '{group}': member group '{member}' is not registered")]
    UnknownGroupReference {
        /// The name of the group being defined.
        group: String,
        /// The unknown member group name.
        member: String,
    },

    /// A query was made for a group name which was never registered.
    #[error("Unknown key group '{0}'")]
    UnknownGroupQuery(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::pretty_assertions::assert_eq;

    #[test]
    fn test_display_messages() {
        let err = Error::UnknownGroupReference {
            group: "MODS".to_owned(),
            member: "HYPER".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot define key group 'MODS': member group 'HYPER' is not registered"
        );

        let err = Error::UnknownGroupQuery("JUMP".to_owned());
        assert_eq!(err.to_string(), "Unknown key group 'JUMP'");
    }
}
