//! Curriculum content model, loading and validation.

mod model;
mod persistence;
mod source;
mod validate;

pub use model::{Category, Curriculum, Element, Module};
pub(crate) use model::non_empty;
pub use source::CurriculumSource;
pub use validate::CurriculumIssue;
