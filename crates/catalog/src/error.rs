use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unresolved placeholder {{{placeholder}}} in statement '{statement}'")]
    UnresolvedPlaceholder {
        statement: String,
        placeholder: String,
    },
}
