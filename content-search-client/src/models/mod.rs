pub mod content;
pub mod group;

pub use content::Content;
pub use group::Group;
