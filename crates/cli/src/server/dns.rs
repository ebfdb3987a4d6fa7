use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tld_dns_infrastructure::dns::DnsServerHandler;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

/// Serves until Ctrl-C. Datagrams are handled strictly one at a time.
pub async fn start_dns_server(
    socket_addr: SocketAddr,
    recv_buffer_size: usize,
    handler: DnsServerHandler,
) -> anyhow::Result<()> {
    let socket = create_udp_socket(socket_addr)?;

    info!(bind_address = %socket_addr, "Domain Name Server started");

    tokio::select! {
        _ = run_udp_loop(&socket, recv_buffer_size, &handler) => {}
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("Shutdown signal received");
        }
    }

    Ok(())
}

async fn run_udp_loop(socket: &UdpSocket, recv_buffer_size: usize, handler: &DnsServerHandler) {
    let mut recv_buf = vec![0u8; recv_buffer_size];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        debug!(client = %from, len = n, "Received query");

        match handler.handle_datagram(&recv_buf[..n], from) {
            Ok(Some(response)) => {
                if let Err(e) = socket.send_to(&response, from).await {
                    warn!(client = %from, error = %e, "Failed to send response");
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(client = %from, error = %e, "Dropping unreadable datagram");
            }
        }
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
