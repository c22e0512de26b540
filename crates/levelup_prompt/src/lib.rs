//! Prompt registry and schema-validated invocation.
//!
//! Each named template declares the input fields it interpolates and the
//! output record it expects back. An invocation renders the template,
//! performs one exchange with the injected backend, and coerces the
//! response to the declared output record, failing with a schema error
//! when the response cannot be coerced.

mod extraction;
mod invoke;
mod outputs;
mod registry;
mod template;

pub use extraction::{extract_json, parse_json};
pub use invoke::invoke;
pub use outputs::{DescriptionOutput, LayoutOutput, ScenesOutput, ThemesOutput};
pub use registry::{
    ANALYZE_IMAGE, DESCRIBE_LEVEL, GENERATE_LAYOUT, PromptRegistry, SUGGEST_SCENES,
    SUGGEST_THEMES,
};
pub use template::PromptTemplate;
