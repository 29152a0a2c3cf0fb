pub mod dependency;
pub mod list;
