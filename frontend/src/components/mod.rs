pub mod form;
pub mod handlers;
pub mod header;
pub mod results;
pub mod utils;
