pub mod csv;
pub mod json_writer;
pub mod summary;
