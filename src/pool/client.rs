// DUCO Miner - Free and Open Source Software Statement
//
// This project, duco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/client.rs
// Version: 1.2.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the TCP client for communicating with the mining pool,
// located in the pool subdirectory. It opens one connection per session and
// wraps it in a line reader/writer pair.
//
// Tree Location:
// - src/pool/client.rs (pool TCP client logic)
// - Depends on: tokio

use crate::error::{MinerError, Result};
use crate::pool::lookup::PoolEndpoint;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

/// Pool client for opening TCP connections to the mining pool
#[derive(Clone, Debug)]
pub struct PoolClient {
    endpoint: PoolEndpoint,
}

impl PoolClient {
    pub fn new(endpoint: PoolEndpoint) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &PoolEndpoint {
        &self.endpoint
    }

    /// Connect to the pool (hostnames are resolved by tokio)
    pub async fn connect(&self) -> Result<PoolConnection> {
        let stream = TcpStream::connect((self.endpoint.host.as_str(), self.endpoint.port)).await?;
        stream.set_nodelay(true)?; // Disable Nagle's algorithm, every message is one short line
        Ok(PoolConnection::new(stream))
    }
}

/// One live pool connection, owned by exactly one session
pub struct PoolConnection {
    lines: Lines<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl PoolConnection {
    pub fn new(stream: TcpStream) -> Self {
        let (reader, writer) = stream.into_split();
        Self { lines: BufReader::new(reader).lines(), writer }
    }

    /// Read one line; `None` means the pool closed the connection
    pub async fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next_line().await?)
    }

    /// Read one line, treating end of stream as an error
    pub async fn expect_line(&mut self) -> Result<String> {
        self.read_line().await?.ok_or(MinerError::ConnectionClosed)
    }

    pub async fn send(&mut self, message: &str) -> Result<()> {
        self.writer.write_all(message.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

// Changelog:
// - v1.2.0 (2026-10-17): Line-oriented connection wrapper.
//   - PoolClient now owns its endpoint and returns a PoolConnection with read_line/send.
//   - Dropped SocketAddr/connect_str variants; tokio resolves host:port directly.
// - v1.1.0 (2025-06-23): Added DNS resolution support
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
