//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod convert;
pub(crate) mod serve;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use convert::ConvertArgs;
pub(crate) use serve::ServeArgs;
