//! Use cases composing the domain with the gateway port

pub mod classify_request;
pub mod process_batch;
pub mod synthesize_steps;

#[cfg(test)]
pub(crate) mod test_support;
