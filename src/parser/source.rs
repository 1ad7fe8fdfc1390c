//! Byte sources the lexer reads from

use crate::error::{Result, RexpError};
use std::io::{self, Read};
use std::net::TcpStream;

/// Read size used when discarding leftover socket data
const DRAIN_BLOCK_SIZE: usize = 4096;

/// A connected stream socket that can be switched between blocking modes
pub trait Socket: Read {
    fn set_nonblocking(&self, nonblocking: bool) -> io::Result<()>;
}

impl Socket for TcpStream {
    fn set_nonblocking(&self, nonblocking: bool) -> io::Result<()> {
        TcpStream::set_nonblocking(self, nonblocking)
    }
}

#[cfg(unix)]
impl Socket for std::os::unix::net::UnixStream {
    fn set_nonblocking(&self, nonblocking: bool) -> io::Result<()> {
        std::os::unix::net::UnixStream::set_nonblocking(self, nonblocking)
    }
}

impl<S: Socket + ?Sized> Socket for &mut S {
    fn set_nonblocking(&self, nonblocking: bool) -> io::Result<()> {
        (**self).set_nonblocking(nonblocking)
    }
}

enum Origin<'a> {
    Buffer { data: &'a [u8], offset: usize },
    Stream(Box<dyn Read + 'a>),
    Socket(Box<dyn Socket + 'a>),
}

/// Readable origin of encoded bytes: an in-memory buffer, a byte stream or a socket
pub struct ByteSource<'a> {
    origin: Origin<'a>,
    position: u64,
}

impl<'a> ByteSource<'a> {
    pub fn buffer(data: &'a [u8]) -> Self {
        Self::with_origin(Origin::Buffer { data, offset: 0 })
    }

    pub fn stream(reader: impl Read + 'a) -> Self {
        Self::with_origin(Origin::Stream(Box::new(reader)))
    }

    pub fn socket(socket: impl Socket + 'a) -> Self {
        Self::with_origin(Origin::Socket(Box::new(socket)))
    }

    fn with_origin(origin: Origin<'a>) -> Self {
        Self {
            origin,
            position: 0,
        }
    }

    /// Total number of bytes consumed so far
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn is_socket(&self) -> bool {
        matches!(self.origin, Origin::Socket(_))
    }

    /// Read exactly `n` bytes, or fail with `EndOfData`
    pub fn read_exact(&mut self, n: usize) -> Result<Vec<u8>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        let position = self.position;
        let bytes = match &mut self.origin {
            Origin::Buffer { data, offset } => {
                let end = offset
                    .checked_add(n)
                    .filter(|&end| end <= data.len())
                    .ok_or(RexpError::EndOfData {
                        position: position + (data.len() - *offset) as u64,
                    })?;
                let bytes = data[*offset..end].to_vec();
                *offset = end;
                bytes
            }
            Origin::Stream(reader) => read_up_to(reader, n, position)?,
            Origin::Socket(socket) => read_up_to(socket, n, position)?,
        };
        self.position += n as u64;
        Ok(bytes)
    }

    /// Read exactly `N` bytes into an array
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_exact(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&bytes);
        Ok(out)
    }

    /// Discard whatever a socket has buffered, leaving it in blocking mode.
    ///
    /// Does nothing for buffer and stream sources.
    pub fn drain(&mut self) {
        let Origin::Socket(socket) = &mut self.origin else {
            return;
        };
        if let Err(e) = socket.set_nonblocking(true) {
            tracing::debug!(
                error = %e,
                "cannot switch socket to non-blocking mode, skipping drain"
            );
            return;
        }
        let mut buf = [0u8; DRAIN_BLOCK_SIZE];
        let mut discarded = 0u64;
        loop {
            match socket.read(&mut buf) {
                Ok(0) => break,
                Ok(k) => discarded += k as u64,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(_) => break,
            }
        }
        if let Err(e) = socket.set_nonblocking(false) {
            tracing::warn!(error = %e, "failed to restore blocking mode on socket");
        }
        self.position += discarded;
        tracing::debug!(discarded, "drained socket");
    }
}

/// Accumulate reads until `n` bytes arrive or the reader reports end of stream
fn read_up_to<R: Read + ?Sized>(reader: &mut R, n: usize, position: u64) -> Result<Vec<u8>> {
    // Grow with the data actually received rather than trusting `n` for the allocation.
    let mut bytes = Vec::new();
    reader.take(n as u64).read_to_end(&mut bytes)?;
    if bytes.len() < n {
        return Err(RexpError::EndOfData {
            position: position + bytes.len() as u64,
        });
    }
    Ok(bytes)
}
