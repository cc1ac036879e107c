//! Cross-project volume comparison over a first-deposit window.

pub mod volume;

pub use volume::{compare_projects, ProjectVolume};
