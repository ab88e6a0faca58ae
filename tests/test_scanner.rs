use roomsense::http::scanner::{RequestScanner, Scan};

fn ready_at(bytes: &[u8]) -> Option<usize> {
    RequestScanner::new().feed(bytes)
}

#[test]
fn test_crlf_terminated_request() {
    let req = b"GET / HTTP/1.1\r\nHost: x\r\n\r\n";
    assert_eq!(ready_at(req), Some(req.len()));
}

#[test]
fn test_lf_only_request() {
    let req = b"GET / HTTP/1.1\nHost: x\n\n";
    assert_eq!(ready_at(req), Some(req.len()));
}

#[test]
fn test_mixed_line_endings() {
    // \n\r\n counts as two consecutive line terminators.
    let req = b"GET /\nHost: x\n\r\n";
    assert_eq!(ready_at(req), Some(req.len()));
}

#[test]
fn test_carriage_returns_do_not_break_blank_line() {
    // The \r bytes between the newlines are ignored.
    assert_eq!(ready_at(b"a\n\r\r\n"), Some(5));
}

#[test]
fn test_incomplete_headers() {
    assert_eq!(ready_at(b"GET / HTTP/1.1\r\nHost: x\r\n"), None);
    assert_eq!(ready_at(b"abc"), None);
    assert_eq!(ready_at(b""), None);
}

#[test]
fn test_nonempty_lines_never_complete() {
    assert_eq!(ready_at(b"a\nb\nc\nd"), None);
}

#[test]
fn test_leading_newline_completes_immediately() {
    // The scanner starts at a line boundary, so an empty first line is a
    // complete request.
    assert_eq!(ready_at(b"\n"), Some(1));
    assert_eq!(ready_at(b"\r\n"), Some(2));
}

#[test]
fn test_bytes_after_terminator_are_not_consumed() {
    let req = b"GET / HTTP/1.1\r\n\r\nEXTRA";
    assert_eq!(ready_at(req), Some(req.len() - 5));
}

#[test]
fn test_byte_at_a_time_matches_bulk_feed() {
    let inputs: &[&[u8]] = &[
        b"GET / HTTP/1.1\r\nHost: x\r\n\r\n",
        b"POST /anything HTTP/1.0\n\n",
        b"a\r\nb\r\n\r\ntrailing",
        b"no terminator here",
        b"\r\r\r\n\n",
    ];

    for input in inputs {
        let bulk = ready_at(input);

        let mut scanner = RequestScanner::new();
        let mut trickled = None;
        for (i, &byte) in input.iter().enumerate() {
            if scanner.push(byte) == Scan::Ready {
                trickled = Some(i + 1);
                break;
            }
        }

        assert_eq!(bulk, trickled, "input {:?}", input);
    }
}

#[test]
fn test_fresh_scanner_per_connection() {
    // A scanner that already consumed a partial request must not leak state
    // into a new one.
    let mut old = RequestScanner::new();
    assert_eq!(old.feed(b"GET / HTTP/1.1\r\nHost:"), None);

    let mut fresh = RequestScanner::new();
    assert_eq!(fresh.feed(b"\r\n\r\n"), Some(2));
}
