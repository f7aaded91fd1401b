pub mod url_validator;

pub use url_validator::{has_path_segment, is_durable_link, validate_domain_prefix};
