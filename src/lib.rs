//! Renders the changed files of a git repository as a collapsible tree of
//! styled lines, for both the working tree and individual commits.

pub mod config;
pub mod error;
pub mod icons;
pub mod model;
pub mod output;
pub mod render;
pub mod theme;
pub mod vcs;
