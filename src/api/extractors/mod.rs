//! Custom extractors answering malformed input with the failure sentinel.

mod json_body;
mod path_params;
mod query_params;

pub use json_body::JsonBody;
pub use path_params::PathParams;
pub use query_params::QueryParams;
