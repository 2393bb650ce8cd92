pub mod cli;
pub mod config;
pub mod layout;
pub mod paths;

#[cfg(test)]
pub mod testing;
