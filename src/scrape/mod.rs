pub mod extractor;
pub mod resolver;
pub mod types;

pub use extractor::ContactExtractor;
pub use resolver::WebsiteResolver;
pub use types::{ContactInfo, FieldOutcome};
