//! Amazon Lightsail client over the AWS JSON 1.1 protocol.

pub mod client;
pub mod dispatch;
pub mod operations;

pub use client::LightsailClient;
pub use dispatch::marshall_by_name;
pub use operations::Lightsail;
