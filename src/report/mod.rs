pub mod aggregate;
pub mod fetcher;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;
