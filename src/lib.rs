pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod prettyprint;

pub use domain::catalog::CatalogList;
