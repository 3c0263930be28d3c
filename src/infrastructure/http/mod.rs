//! HTTP transport layer

mod transport;

pub use transport::{HttpTransport, Method, ResponseMeta, Transport};

#[cfg(test)]
pub use transport::mock;
