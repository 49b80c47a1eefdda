pub mod paths;

pub use paths::{config_path, taxaplease_home};
