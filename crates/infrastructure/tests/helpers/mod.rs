#![allow(dead_code)]
pub mod builders;

pub use builders::QueryBuilder;

use std::net::SocketAddr;

pub fn peer() -> SocketAddr {
    "192.168.1.100:53000".parse().unwrap()
}

pub fn read_u16(buf: &[u8], at: usize) -> u16 {
    u16::from_be_bytes([buf[at], buf[at + 1]])
}

pub fn read_u32(buf: &[u8], at: usize) -> u32 {
    u32::from_be_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}
