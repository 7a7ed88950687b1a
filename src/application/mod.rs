pub mod configure;
pub mod registry;
pub mod translate;
