//! Outcome of a single external adapter call

/// Result of calling an external provider through an adapter
///
/// Adapters collapse every provider error into `Failed` after logging it, so
/// the orchestrator branches on this value alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterOutcome<T> {
    /// The provider answered with a value
    Success(T),
    /// The call failed; details were logged by the adapter
    Failed,
}

impl<T> AdapterOutcome<T> {
    /// Whether the call failed
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Convert into an `Option`, dropping the failure marker
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failed => None,
        }
    }
}

impl AdapterOutcome<String> {
    /// Text of a successful call, or `None` when the call failed or the text is blank
    pub fn non_blank(self) -> Option<String> {
        self.success().filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_converts_to_some() {
        assert_eq!(AdapterOutcome::Success(3).success(), Some(3));
        assert_eq!(AdapterOutcome::<i32>::Failed.success(), None);
    }

    #[test]
    fn non_blank_rejects_whitespace() {
        assert_eq!(
            AdapterOutcome::Success("  \n".to_string()).non_blank(),
            None
        );
        assert_eq!(AdapterOutcome::<String>::Failed.non_blank(), None);
        assert_eq!(
            AdapterOutcome::Success(" hi ".to_string()).non_blank(),
            Some(" hi ".to_string())
        );
    }
}
