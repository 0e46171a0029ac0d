pub mod comments;
pub mod gallery;
