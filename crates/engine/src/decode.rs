//! Streaming decoders for the encodings in [`Encoding`].
//!
//! Input arrives in arbitrary chunks; a multi-byte sequence split across two
//! chunks is carried over. Invalid or truncated sequences decode to
//! U+FFFD, which is printable, so undecodable bytes alone never make a file
//! binary.

use whitespace_stats_core::Encoding;

const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// Decoder state for one stream.
#[derive(Debug, Clone)]
pub enum Decoder {
    Utf8(Utf8Decoder),
    Utf16(Utf16Decoder),
    Utf32(Utf32Decoder),
}

impl Decoder {
    #[must_use]
    pub fn new(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Utf8 => Self::Utf8(Utf8Decoder::default()),
            Encoding::Utf16Be => Self::Utf16(Utf16Decoder::new(true)),
            Encoding::Utf16Le => Self::Utf16(Utf16Decoder::new(false)),
            Encoding::Utf32Be => Self::Utf32(Utf32Decoder::new(true)),
            Encoding::Utf32Le => Self::Utf32(Utf32Decoder::new(false)),
        }
    }

    /// Decode the next chunk, handing every complete character to `sink`.
    pub fn decode<F: FnMut(char)>(&mut self, bytes: &[u8], mut sink: F) {
        match self {
            Self::Utf8(decoder) => decoder.decode(bytes, &mut sink),
            Self::Utf16(decoder) => decoder.decode(bytes, &mut sink),
            Self::Utf32(decoder) => decoder.decode(bytes, &mut sink),
        }
    }

    /// Flush an incomplete trailing sequence as U+FFFD.
    pub fn finish<F: FnMut(char)>(&mut self, mut sink: F) {
        match self {
            Self::Utf8(decoder) => decoder.finish(&mut sink),
            Self::Utf16(decoder) => decoder.finish(&mut sink),
            Self::Utf32(decoder) => decoder.finish(&mut sink),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    fn decode<F: FnMut(char)>(&mut self, bytes: &[u8], sink: &mut F) {
        if self.pending.is_empty() {
            let rest = decode_utf8_lossy(bytes, sink);
            self.pending.extend_from_slice(rest);
        } else {
            let mut joined = std::mem::take(&mut self.pending);
            joined.extend_from_slice(bytes);
            let rest = decode_utf8_lossy(&joined, sink);
            self.pending = rest.to_vec();
        }
    }

    fn finish<F: FnMut(char)>(&mut self, sink: &mut F) {
        if !self.pending.is_empty() {
            self.pending.clear();
            sink(REPLACEMENT);
        }
    }
}

/// Decode `input`, returning the incomplete sequence at its end (if any).
fn decode_utf8_lossy<'a, F: FnMut(char)>(mut input: &'a [u8], sink: &mut F) -> &'a [u8] {
    loop {
        match std::str::from_utf8(input) {
            Ok(text) => {
                text.chars().for_each(&mut *sink);
                return &[];
            }
            Err(err) => {
                let (valid, after) = input.split_at(err.valid_up_to());
                if let Ok(text) = std::str::from_utf8(valid) {
                    text.chars().for_each(&mut *sink);
                }
                match err.error_len() {
                    Some(len) => {
                        sink(REPLACEMENT);
                        input = &after[len..];
                    }
                    // Truncated sequence: wait for the next chunk.
                    None => return after,
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Utf16Decoder {
    big_endian: bool,
    odd_byte: Option<u8>,
    high_surrogate: Option<u16>,
}

impl Utf16Decoder {
    const fn new(big_endian: bool) -> Self {
        Self {
            big_endian,
            odd_byte: None,
            high_surrogate: None,
        }
    }

    const fn unit(&self, pair: [u8; 2]) -> u16 {
        if self.big_endian {
            u16::from_be_bytes(pair)
        } else {
            u16::from_le_bytes(pair)
        }
    }

    fn decode<F: FnMut(char)>(&mut self, mut bytes: &[u8], sink: &mut F) {
        if let Some(first) = self.odd_byte.take() {
            let Some((&second, rest)) = bytes.split_first() else {
                self.odd_byte = Some(first);
                return;
            };
            self.push_unit(self.unit([first, second]), sink);
            bytes = rest;
        }

        let mut pairs = bytes.chunks_exact(2);
        for pair in &mut pairs {
            self.push_unit(self.unit([pair[0], pair[1]]), sink);
        }
        if let [last] = pairs.remainder() {
            self.odd_byte = Some(*last);
        }
    }

    fn push_unit<F: FnMut(char)>(&mut self, unit: u16, sink: &mut F) {
        match unit {
            0xD800..=0xDBFF => {
                if self.high_surrogate.replace(unit).is_some() {
                    sink(REPLACEMENT);
                }
            }
            0xDC00..=0xDFFF => match self.high_surrogate.take() {
                Some(high) => {
                    let scalar = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(unit) - 0xDC00);
                    sink(char::from_u32(scalar).unwrap_or(REPLACEMENT));
                }
                None => sink(REPLACEMENT),
            },
            _ => {
                if self.high_surrogate.take().is_some() {
                    sink(REPLACEMENT);
                }
                sink(char::from_u32(u32::from(unit)).unwrap_or(REPLACEMENT));
            }
        }
    }

    fn finish<F: FnMut(char)>(&mut self, sink: &mut F) {
        if self.high_surrogate.take().is_some() {
            sink(REPLACEMENT);
        }
        if self.odd_byte.take().is_some() {
            sink(REPLACEMENT);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Utf32Decoder {
    big_endian: bool,
    buffer: [u8; 4],
    len: usize,
}

impl Utf32Decoder {
    const fn new(big_endian: bool) -> Self {
        Self {
            big_endian,
            buffer: [0; 4],
            len: 0,
        }
    }

    fn decode<F: FnMut(char)>(&mut self, bytes: &[u8], sink: &mut F) {
        for &byte in bytes {
            self.buffer[self.len] = byte;
            self.len += 1;
            if self.len == self.buffer.len() {
                let value = if self.big_endian {
                    u32::from_be_bytes(self.buffer)
                } else {
                    u32::from_le_bytes(self.buffer)
                };
                sink(char::from_u32(value).unwrap_or(REPLACEMENT));
                self.len = 0;
            }
        }
    }

    fn finish<F: FnMut(char)>(&mut self, sink: &mut F) {
        if self.len > 0 {
            self.len = 0;
            sink(REPLACEMENT);
        }
    }
}
