use thiserror::Error;

/// Problems with a token table, qualifying set or config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("mapping table is empty")]
    EmptyMappingTable,

    #[error("token pair {index} has an empty old token")]
    EmptyOldToken { index: usize },

    #[error("invalid qualifying suffix '{0}': suffixes must start with '.'")]
    InvalidSuffix(String),

    #[error("invalid order '{0}': expected 'longest-first' or 'table'")]
    InvalidOrder(String),

    #[error("invalid exclude pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}
