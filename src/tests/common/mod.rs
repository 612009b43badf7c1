// tests/common/mod.rs
pub use serde_json::json;

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use httpmock::MockServer;
use reqwest::Client;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::cache::MemoryCache;
use crate::store::TokenStore;

pub const TOKEN_ENDPOINT: &str = "/auth/token";

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

pub fn memory_store() -> TokenStore<MemoryCache> {
    TokenStore::with_parts(MemoryCache::new(), build_reqwest_client())
}

pub fn token_url(server: &MockServer) -> String {
    server.url(TOKEN_ENDPOINT)
}

/// Unique id so tests sharing a backend never collide
pub fn unique_id(label: &str) -> String {
    format!("{label}-{}", Uuid::new_v4().simple())
}

/// Spawn a minimal RESP server on an ephemeral port.
///
/// GET always answers nil, DEL answers 0, every other command `+OK`. The first
/// accepted connection is closed right after its first GET reply. Returns the
/// accept loop handle, the address and the number of accepted connections.
pub async fn spawn_flaky_redis() -> (JoinHandle<()>, SocketAddr, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = accepted.clone();
    let handle = tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(serve_resp(socket, n == 0));
        }
    });
    (handle, addr, accepted)
}

async fn serve_resp(socket: TcpStream, close_after_get: bool) {
    let (read_half, mut write_half) = socket.into_split();
    let mut reader = BufReader::new(read_half);
    while let Some(command) = read_command(&mut reader).await {
        let name = command.first().map(|c| c.to_uppercase()).unwrap_or_default();
        let reply: &[u8] = match name.as_str() {
            "GET" => b"$-1\r\n",
            "DEL" => b":0\r\n",
            _ => b"+OK\r\n",
        };
        if write_half.write_all(reply).await.is_err() {
            return;
        }
        if close_after_get && name == "GET" {
            let _ = write_half.shutdown().await;
            return;
        }
    }
}

async fn read_command<R: AsyncBufRead + Unpin>(reader: &mut R) -> Option<Vec<String>> {
    let header = read_line(reader).await?;
    let count: usize = header.strip_prefix('*')?.parse().ok()?;
    let mut parts = Vec::with_capacity(count);
    for _ in 0..count {
        let len: usize = read_line(reader).await?.strip_prefix('$')?.parse().ok()?;
        // payload + CRLF
        let mut buf = vec![0u8; len + 2];
        reader.read_exact(&mut buf).await.ok()?;
        buf.truncate(len);
        parts.push(String::from_utf8_lossy(&buf).into_owned());
    }
    Some(parts)
}

async fn read_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> Option<String> {
    let mut line = String::new();
    match reader.read_line(&mut line).await {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end().to_owned()),
    }
}
