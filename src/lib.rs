//! Probes a target web server for directories by issuing one blocking GET
//! per wordlist entry and reporting the paths that answer 200.

pub mod config;
pub mod logger;
pub mod probe;
pub mod wordlist;
