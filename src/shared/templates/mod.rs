mod engine;

pub use engine::{render_template, template_exists, TemplateError};
