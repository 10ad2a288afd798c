pub mod menu_reader;
pub mod script_reader;
pub mod summary_writer;
