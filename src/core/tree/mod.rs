//! Directory tree listing: exclusion filtering, per-level listing, and rendering.

mod error;
mod exclude;
mod list;
mod render;


pub use error::TreeError;
pub use exclude::ExclusionSet;
pub use list::{Entry, Listing, list_dir};
pub use render::TreePrinter;
