mod export_handler;

pub use export_handler::*;
