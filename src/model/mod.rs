pub mod builder;
pub mod collapsed;
pub mod file;
pub mod node;
pub mod patch;
pub mod tree;

pub use collapsed::CollapsedPaths;
pub use file::{CommitFile, File, SubmoduleConfig, TreeEntry};
pub use node::{Node, NodeKind};
pub use patch::{PatchSelection, PatchStatus, PatchStatusLookup};
pub use tree::FileTree;
