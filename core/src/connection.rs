//! A single-use TCP connection with EOF-framed reads.
//!
//! # Design
//! `Connection` owns its `TcpStream` and is passed by value through the
//! request pipeline: `connect` creates it, `send_all` and `recv_all` borrow
//! it, `close` consumes it. An error on any step drops the value, which
//! releases the socket, so no path leaks a half-used connection. There is
//! no pooling and no reuse.
//!
//! `recv_all` treats the peer closing its side as the end of the response.
//! The client always asks for `Connection: close`, so this is the only
//! framing it relies on.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};

use tracing::{debug, info, warn};

use crate::error::ClientError;

/// Bytes requested from the socket per read.
pub const READ_CHUNK_SIZE: usize = 1024;

#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    host: String,
    port: u16,
}

impl Connection {
    /// Open a TCP connection to `host:port`. Host names are resolved by the
    /// OS; bracketed IPv6 literals are accepted.
    pub fn connect(host: &str, port: u16) -> Result<Self, ClientError> {
        let stream =
            TcpStream::connect(format!("{host}:{port}")).map_err(|source| ClientError::Connect {
                host: host.to_string(),
                port,
                source,
            })?;
        info!(host, port, "connected");
        Ok(Self {
            stream,
            host: host.to_string(),
            port,
        })
    }

    /// Write every byte of `payload`, retrying short writes.
    pub fn send_all(&mut self, payload: &str) -> Result<(), ClientError> {
        self.stream
            .write_all(payload.as_bytes())
            .and_then(|()| self.stream.flush())
            .map_err(ClientError::Send)?;
        debug!(bytes = payload.len(), "request sent");
        Ok(())
    }

    /// Read until the peer closes the stream and decode the result as UTF-8.
    pub fn recv_all(&mut self) -> Result<String, ClientError> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        loop {
            match self.stream.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => buffer.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ClientError::Receive(e)),
            }
        }
        debug!(bytes = buffer.len(), "response received");
        String::from_utf8(buffer)
            .map_err(|e| ClientError::MalformedResponse(format!("response is not valid UTF-8: {e}")))
    }

    /// Shut down both directions and release the socket.
    pub fn close(self) -> Result<(), ClientError> {
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotConnected => {
                warn!(host = %self.host, port = self.port, "socket already disconnected");
            }
            Err(e) => return Err(ClientError::Close(e)),
        }
        debug!(host = %self.host, port = self.port, "connection closed");
        Ok(())
    }
}
