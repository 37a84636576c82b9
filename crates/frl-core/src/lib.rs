pub mod config;
pub mod logging;

pub mod candidates;
pub mod defer;
pub mod dom;
pub mod loader;
pub mod probe;
