//! Permit engine: feed IO, envelope validation and table export.
mod credential;
mod envelope;
mod export;
mod feed;
mod types;

pub use credential::{
    mask_credential, CredentialStore, EnvCredentialStore, FileCredentialStore, CREDENTIAL_ENV_VAR,
};
pub use envelope::parse_envelope;
pub use export::{
    ensure_output_dir, render_table, write_table, ExportError, ExportOptions, ExportSummary,
};
pub use feed::{
    FeedClient, FeedSettings, HttpFeedClient, DEFAULT_END_INDEX, DEFAULT_START_INDEX,
};
pub use types::FeedError;
