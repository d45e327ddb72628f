//! Generation domain - turns definition filenames into family crate text
//!
//! Discovery hands this module plain filenames. They are grouped into families by a
//! [`FamilyScheme`], each family becomes a [`RenderContext`], and a [`FamilyRenderer`]
//! produces the manifest, readme and source module for it. Nothing in here performs I/O.

pub mod context;
pub mod errors;
pub mod rules;
pub mod traits;
pub mod types;

pub use context::*;
pub use errors::*;
pub use rules::PrefixFamilyScheme;
pub use traits::*;
pub use types::*;
