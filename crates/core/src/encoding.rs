use core::fmt;

/// Unicode encodings recognised by their byte-order marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    #[cfg_attr(feature = "serde", serde(rename = "UTF-8"))]
    Utf8,
    #[cfg_attr(feature = "serde", serde(rename = "UTF-16BE"))]
    Utf16Be,
    #[cfg_attr(feature = "serde", serde(rename = "UTF-16LE"))]
    Utf16Le,
    #[cfg_attr(feature = "serde", serde(rename = "UTF-32BE"))]
    Utf32Be,
    #[cfg_attr(feature = "serde", serde(rename = "UTF-32LE"))]
    Utf32Le,
}

impl Encoding {
    /// Priority order used when reporting a stream's encoding.
    ///
    /// UTF-16 LE is tried before UTF-32 LE, so `FF FE 00 00` reports as UTF-16 LE.
    pub const SNIFF_ORDER: [Self; 5] = [Self::Utf8, Self::Utf16Be, Self::Utf16Le, Self::Utf32Be, Self::Utf32Le];

    /// Longest preamble of any encoding; the number of bytes a sniffer needs to peek.
    pub const MAX_PREAMBLE_LEN: usize = 4;

    /// Fallback used for decoding when no preamble is present.
    pub const DEFAULT: Self = Self::Utf8;

    #[must_use]
    pub const fn preamble(self) -> &'static [u8] {
        match self {
            Self::Utf8 => &[0xEF, 0xBB, 0xBF],
            Self::Utf16Be => &[0xFE, 0xFF],
            Self::Utf16Le => &[0xFF, 0xFE],
            Self::Utf32Be => &[0x00, 0x00, 0xFE, 0xFF],
            Self::Utf32Le => &[0xFF, 0xFE, 0x00, 0x00],
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf32Be => "UTF-32BE",
            Self::Utf32Le => "UTF-32LE",
        }
    }

    /// Identify the encoding whose preamble starts `prefix`, in [`Self::SNIFF_ORDER`].
    ///
    /// `prefix` holds the first bytes of the stream (at most
    /// [`Self::MAX_PREAMBLE_LEN`]); a candidate longer than the prefix never matches.
    #[must_use]
    pub fn identify(prefix: &[u8]) -> Option<Self> {
        Self::SNIFF_ORDER
            .into_iter()
            .find(|encoding| prefix.starts_with(encoding.preamble()))
    }

    /// The encoding a BOM-aware reader would decode `prefix` with: the longest
    /// matching preamble wins.
    #[must_use]
    pub fn decoding_for(prefix: &[u8]) -> Option<Self> {
        Self::SNIFF_ORDER
            .into_iter()
            .filter(|encoding| prefix.starts_with(encoding.preamble()))
            .max_by_key(|encoding| encoding.preamble().len())
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
