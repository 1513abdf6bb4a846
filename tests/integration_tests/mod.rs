pub mod common;
mod cli;
mod settings_file;
