pub mod client;

#[cfg(test)]
mod client_test;

pub use client::{DirectoryClient, FetchError, interpret_response};
