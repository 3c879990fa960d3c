//! View fragments rendered inside the page shell.

pub mod document;
pub mod hero;
pub mod not_found;
pub mod projects;
pub mod resources;
