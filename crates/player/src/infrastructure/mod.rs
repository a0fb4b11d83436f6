pub mod http_client;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
