//! Query compilation: field scoping and requested-count coercion.

mod compiler;
mod count;

pub use compiler::{CompileError, Scope, Scopes, compile};
pub use count::{MAX_REQUESTED_ARTICLES, requested_count};

/// A compiled search, ready to be embedded in a provider request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    /// Trimmed term, wrapped in field-scope syntax when exactly one scope is enabled.
    pub term: String,
    pub requested_count: u32,
    pub field_flags: Scopes,
}

/// Compile the term and coerce the requested count in one step.
pub fn build_request(
    raw_term: &str,
    scopes: Scopes,
    count: &str,
) -> Result<QueryRequest, CompileError> {
    Ok(QueryRequest {
        term: compile(raw_term, scopes)?,
        requested_count: requested_count(count),
        field_flags: scopes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_request_scopes_term_and_coerces_count() {
        let request = build_request("  spotify ", Scopes::only(&[Scope::Text]), "abc").unwrap();
        assert_eq!(request.term, "text:(spotify)");
        assert_eq!(request.requested_count, 1);
        assert!(request.field_flags.text);
        assert!(!request.field_flags.header);
    }

    #[test]
    fn build_request_rejects_blank_term_before_count() {
        let err = build_request("   ", Scopes::default(), "7").unwrap_err();
        assert!(matches!(err, CompileError::EmptyQuery));
    }
}
