//! Structural elements module

mod material;
mod member;
mod node;
mod section;
mod support;

pub use material::{Material, MaterialCatalog};
pub use member::Member;
pub use node::Node;
pub use section::{Section, SectionCatalog};
pub use support::{Support, SupportKind};
