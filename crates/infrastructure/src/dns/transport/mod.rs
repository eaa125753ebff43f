pub mod https;
pub mod privacy;

pub use https::HttpsTransport;
