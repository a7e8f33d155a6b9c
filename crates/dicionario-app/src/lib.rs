pub mod logging;
pub mod protocol;
pub mod server;
pub mod service;
pub mod state;
pub mod tools;

#[cfg(test)]
mod tests;
