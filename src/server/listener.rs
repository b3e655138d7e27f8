// Listener module
// Binds the demo server socket

use std::net::SocketAddr;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

use webhelpers::config::ServerConfig;

/// Bind the address in `config` with a queue of `config.backlog` pending
/// connections. `SO_REUSEADDR` and `SO_REUSEPORT` let a restarted demo bind
/// while the previous socket is still in `TIME_WAIT`.
pub fn bind(config: &ServerConfig, addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = match addr {
        SocketAddr::V4(_) => Domain::IPV4,
        SocketAddr::V6(_) => Domain::IPV6,
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.set_reuse_port(true)?;
    // tokio requires a non-blocking socket
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(config.backlog.max(1))?;

    TcpListener::from_std(socket.into())
}
