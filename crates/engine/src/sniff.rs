//! Byte-order-marker sniffing over seekable streams.

use std::io::{self, ErrorKind, Read, Seek, SeekFrom};

use whitespace_stats_core::Encoding;

/// The first bytes of a stream, at most [`Encoding::MAX_PREAMBLE_LEN`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamPrefix {
    bytes: [u8; Encoding::MAX_PREAMBLE_LEN],
    len: usize,
}

impl StreamPrefix {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Encoding reported for the stream, in sniffing priority order.
    #[must_use]
    pub fn identify(&self) -> Option<Encoding> {
        Encoding::identify(self.as_bytes())
    }

    /// Encoding the stream is decoded with; the longest preamble wins.
    #[must_use]
    pub fn decoding(&self) -> Option<Encoding> {
        Encoding::decoding_for(self.as_bytes())
    }
}

/// Read the stream's first bytes from offset 0 and restore the original position.
///
/// The position is restored even when reading fails.
///
/// # Errors
///
/// Propagates seek and read failures other than `Interrupted`.
fn peek_prefix<R: Read + Seek>(stream: &mut R) -> io::Result<StreamPrefix> {
    let original = stream.stream_position()?;
    let prefix = read_prefix(stream);
    stream.seek(SeekFrom::Start(original))?;
    prefix
}

/// Peek the stream's preamble and log what it announces.
///
/// A prefix matching no preamble is a normal outcome.
///
/// # Errors
///
/// Propagates I/O failures from seeking or reading.
pub fn sniff<R: Read + Seek>(stream: &mut R) -> io::Result<StreamPrefix> {
    let prefix = peek_prefix(stream)?;
    log::trace!(
        "sniffed prefix {:02X?}: reported {:?}, decoded as {:?}",
        prefix.as_bytes(),
        prefix.identify(),
        prefix.decoding()
    );
    Ok(prefix)
}

fn read_prefix<R: Read + Seek>(stream: &mut R) -> io::Result<StreamPrefix> {
    stream.seek(SeekFrom::Start(0))?;

    let mut prefix = StreamPrefix::default();
    while prefix.len < prefix.bytes.len() {
        match stream.read(&mut prefix.bytes[prefix.len..]) {
            Ok(0) => break,
            Ok(n) => prefix.len += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(prefix)
}
