//! Text codec for received lines

/// Result of decoding one received line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedLine {
    /// Decoded text with trailing whitespace removed
    pub text: String,
    /// Number of bytes discarded because they were not valid UTF-8
    pub dropped: usize,
}

/// Text codec: lossy UTF-8 decoding that skips invalid sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl TextCodec {
    /// Create a new text codec
    pub fn new() -> Self {
        Self
    }

    /// Decode a raw line.
    ///
    /// Invalid byte sequences are left out of the output entirely (no
    /// replacement character), then trailing whitespace, including the
    /// `\r\n` terminator and the ASCII separators `0x1C..=0x1F`, is trimmed.
    pub fn decode_line(&self, data: &[u8]) -> DecodedLine {
        let mut text = String::with_capacity(data.len());
        let mut dropped = 0;

        for chunk in data.utf8_chunks() {
            text.push_str(chunk.valid());
            dropped += chunk.invalid().len();
        }

        text.truncate(text.trim_end_matches(is_trailing_space).len());

        DecodedLine { text, dropped }
    }
}

/// Unicode whitespace plus the file/group/record/unit separators
fn is_trailing_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
