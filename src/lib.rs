pub mod cli;
pub mod ctx;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod sanitize;
pub mod schema;
pub mod table;
