pub mod codec;
pub mod server;
pub mod wire_response;

pub use server::DnsServerHandler;
