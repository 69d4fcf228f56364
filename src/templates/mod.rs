mod builder;
mod definition;
mod matcher;
mod range;
mod validation;

pub use builder::{BuildResult, BuiltTemplate, TemplateBuilder, TemplateError};
pub use definition::{builtin_templates, SongCriteria, TemplateDefinition};
pub use matcher::{Sampling, SongMatcher, DEFAULT_SAMPLE_LIMIT};
pub use range::{resolve_range, RangeError};
pub use validation::{validate_template, ValidationFailure};
