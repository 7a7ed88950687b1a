pub mod azure;
pub mod http;
pub mod mtuoc;
