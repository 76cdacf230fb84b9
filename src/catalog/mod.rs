//! Catalog data model.
//!
//! - [`ExerciseId`] - kebab-case join key shared by every source
//! - [`ExerciseRecord`] and [`Catalog`] - canonical exercise definitions
//! - [`Relation`], [`Relations`] and [`RelationshipGraph`] - regression and
//!   progression edges between exercises
//! - [`CatalogDocument`] and [`render_catalog`] - the persisted mapping form

pub mod document;
pub mod id;
pub mod record;
pub mod relation;

pub use document::{content_digest, render_catalog, CatalogDocument};
pub use id::ExerciseId;
pub use record::{Catalog, ExerciseRecord};
pub use relation::{Edge, Relation, RelationKind, Relations, RelationshipGraph};
