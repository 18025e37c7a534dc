pub mod apis;
pub mod arguments;
pub mod config;
pub mod display;
pub mod errors;
pub mod logger;
pub mod monitor;
pub mod paths;
pub mod run;
pub mod shutdown;
pub mod tokens;
pub mod watchlist;
