pub mod backend;
pub mod config;
pub mod error;
#[cfg(feature = "highgui")]
pub mod highgui;
pub mod viewer;
