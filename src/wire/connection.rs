use super::frame;
use anyhow::Context;
use std::io::Read;
use std::net::TcpStream;

/// One blocking, bidirectional connection to a remote player. Each remote
/// player owns exactly one of these for its whole lifetime; it is never
/// shared or pooled. Reads block with no timeout, so an unresponsive peer
/// stalls the game (a documented gap of the existing protocol).
#[derive(Debug)]
pub struct Connection(TcpStream);

impl Connection {
    pub fn open(host: &str, port: u16) -> anyhow::Result<Self> {
        let stream = TcpStream::connect((host, port))
            .with_context(|| format!("connect to {}:{}", host, port))?;
        Ok(Self(stream))
    }

    /// frames and sends one narration line or move request.
    pub fn send(&mut self, payload: &str) -> anyhow::Result<()> {
        log::debug!("wire send: {}", payload);
        frame(&mut self.0, payload).context("send frame")
    }

    /// blocks until the peer sends something substantive. keep-alive tokens
    /// are swallowed here so callers only ever see real responses.
    pub fn receive(&mut self) -> anyhow::Result<String> {
        next_substantive(&mut self.0)
    }
}

/// Reads raw chunks until one is not the "NOP" keep-alive token. A zero-byte
/// read means the peer hung up, which surfaces as an error for the caller to
/// resolve as a protocol violation.
fn next_substantive<R: Read>(source: &mut R) -> anyhow::Result<String> {
    loop {
        let mut buffer = [0u8; crate::WIRE_BUFFER];
        let n = source.read(&mut buffer).context("receive")?;
        anyhow::ensure!(n > 0, "peer closed connection");
        let text = String::from_utf8_lossy(&buffer[..n]).into_owned();
        if text.trim() == "NOP" {
            log::debug!("keep-alive from peer");
            continue;
        }
        log::debug!("wire recv: {}", text.trim_end());
        return Ok(text);
    }
}
