/// Outcome of feeding bytes into the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// The terminating blank line has not been seen yet.
    Scanning,
    /// The request is complete; respond now.
    Ready,
}

/// Detects the blank line that terminates an HTTP request's header block,
/// without parsing method, path, or headers.
///
/// The whole state is one flag: "the current position is a line boundary and
/// the line just finished was empty". The flag starts true, so a connection
/// that opens with a bare newline completes immediately. Rules per byte:
///
/// - `\n` while the flag is set: the request is ready.
/// - `\n` otherwise: a line just ended; the next one is empty so far.
/// - `\r`: ignored, so both `\r\n\r\n` and `\n\n` terminate a request.
/// - anything else: the current line is non-empty.
#[derive(Debug)]
pub struct RequestScanner {
    at_blank_line: bool,
}

impl RequestScanner {
    pub fn new() -> Self {
        Self {
            at_blank_line: true,
        }
    }

    /// Advances the scanner by one byte.
    pub fn push(&mut self, byte: u8) -> Scan {
        match byte {
            b'\n' if self.at_blank_line => Scan::Ready,
            b'\n' => {
                self.at_blank_line = true;
                Scan::Scanning
            }
            b'\r' => Scan::Scanning,
            _ => {
                self.at_blank_line = false;
                Scan::Scanning
            }
        }
    }

    /// Feeds a chunk of bytes, stopping at the byte that completes the
    /// request. Returns the number of bytes consumed when the request is
    /// ready; bytes after the terminating newline are left untouched.
    pub fn feed(&mut self, bytes: &[u8]) -> Option<usize> {
        for (i, &byte) in bytes.iter().enumerate() {
            if self.push(byte) == Scan::Ready {
                return Some(i + 1);
            }
        }
        None
    }
}

impl Default for RequestScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_on_crlf_terminated_request() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let consumed = RequestScanner::new().feed(req).unwrap();

        assert_eq!(consumed, req.len());
    }

    #[test]
    fn incomplete_without_blank_line() {
        let mut scanner = RequestScanner::new();

        assert_eq!(scanner.feed(b"GET / HTTP/1.1\r\nHost: example.com\r\n"), None);
    }
}
