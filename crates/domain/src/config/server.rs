use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Receive buffer for one datagram; longer datagrams are cut by the socket.
    #[serde(default = "default_recv_buffer_size")]
    pub recv_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: default_dns_port(),
            bind_address: default_bind_address(),
            recv_buffer_size: default_recv_buffer_size(),
        }
    }
}

impl ServerConfig {
    /// `bind_address` is a bare IP literal, v4 or v6.
    pub fn dns_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.bind_address.trim().parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid bind address '{}'", self.bind_address))
        })?;
        Ok(SocketAddr::new(ip, self.dns_port))
    }
}

fn default_dns_port() -> u16 {
    53
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_recv_buffer_size() -> usize {
    1024
}
