pub mod export_catalog_routine;
