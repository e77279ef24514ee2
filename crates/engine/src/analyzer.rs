use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use whitespace_stats_core::{Encoding, FileCharacteristics, TextAnalyzer};

use crate::decode::Decoder;
use crate::error::{EngineError, Result};
use crate::sniff;

pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Analyses one file: preamble sniffing, decoding, classification and the
/// text/binary decision.
#[derive(Debug, Clone, Copy)]
pub struct FileAnalyzer {
    buffer_size: usize,
}

impl Default for FileAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl FileAnalyzer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    #[must_use]
    pub const fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            buffer_size: if buffer_size == 0 { DEFAULT_BUFFER_SIZE } else { buffer_size },
        }
    }

    /// Analyse the whole stream, from offset 0.
    ///
    /// The reported encoding is the sniffed one; decoding uses the longest
    /// matching preamble, or UTF-8 when there is none. Preamble bytes are not
    /// part of the text.
    ///
    /// # Errors
    ///
    /// Returns an error if seeking or reading fails. `Interrupted` reads are retried.
    pub fn analyze<R: Read + Seek>(&self, mut reader: R) -> io::Result<FileCharacteristics> {
        let prefix = sniff::sniff(&mut reader)?;
        let detected = prefix.identify();
        let decoding = prefix.decoding();

        let skip = decoding.map_or(0, |encoding| encoding.preamble().len());
        reader.seek(SeekFrom::Start(skip as u64))?;

        let mut decoder = Decoder::new(decoding.unwrap_or(Encoding::DEFAULT));
        let mut text = TextAnalyzer::new();
        let mut reader = BufReader::with_capacity(self.buffer_size, reader);

        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }
            decoder.decode(buf, |c| text.feed(c));
            let len = buf.len();
            reader.consume(len);
        }
        decoder.finish(|c| text.feed(c));

        Ok(FileCharacteristics::classify(detected, text.finish()))
    }

    /// Open `path` read-only and analyse it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::FileRead`] if the file cannot be opened or read.
    pub fn analyze_path(&self, path: &Path) -> Result<FileCharacteristics> {
        let file = File::open(path).map_err(|e| EngineError::file_read(path, e))?;
        let characteristics = self.analyze(file).map_err(|e| EngineError::file_read(path, e))?;
        log::debug!("{}: {}", path.display(), characteristics.type_label());
        Ok(characteristics)
    }
}
