//! Best-effort TTL recovery from a raw DNS wireformat answer.
//!
//! This is a heuristic, not a DNS parser. It assumes a single question whose
//! name carries no compression pointers, followed directly by one answer
//! record that starts with a two-byte name pointer. Anything that does not
//! fit that shape, or yields an implausible TTL, falls back to a default.

use std::time::Duration;

pub const DEFAULT_TTL: Duration = Duration::from_millis(300_000);

const DNS_HEADER_LEN: usize = 12;
const MIN_PAYLOAD_LEN: usize = 20;
/// QTYPE + QCLASS, plus the name terminator itself.
const QUESTION_TAIL_LEN: usize = 5;
/// Name pointer + TYPE + CLASS of the first answer record.
const ANSWER_PREFIX_LEN: usize = 6;
/// Answer prefix plus the four TTL bytes.
const MIN_ANSWER_LEN: usize = 10;
const MAX_TTL_SECS: u32 = 86_400;

/// TTL of the first answer record, or [`DEFAULT_TTL`]. Never fails.
pub fn extract_ttl(payload: &[u8]) -> Duration {
    extract_ttl_or(payload, DEFAULT_TTL)
}

pub fn extract_ttl_or(payload: &[u8], default: Duration) -> Duration {
    scan_answer_ttl(payload)
        .map(|secs| Duration::from_secs(u64::from(secs)))
        .unwrap_or(default)
}

fn scan_answer_ttl(payload: &[u8]) -> Option<u32> {
    if payload.len() <= MIN_PAYLOAD_LEN {
        return None;
    }

    let scan_limit = payload.len() - 4;
    let mut offset = DNS_HEADER_LEN;
    while offset < scan_limit && payload[offset] != 0 {
        offset += 1;
    }
    offset += QUESTION_TAIL_LEN;

    let remaining = payload.len().checked_sub(offset)?;
    if remaining < MIN_ANSWER_LEN {
        return None;
    }
    offset += ANSWER_PREFIX_LEN;

    let bytes: [u8; 4] = payload.get(offset..offset + 4)?.try_into().ok()?;
    let ttl = u32::from_be_bytes(bytes);

    (ttl > 0 && ttl < MAX_TTL_SECS).then_some(ttl)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 12-byte header, question `a.` + QTYPE/QCLASS, one answer record with
    /// a name pointer, TYPE, CLASS and the given TTL, padded to 30 bytes.
    fn crafted_response(ttl: u32) -> Vec<u8> {
        let mut msg = vec![
            0x12, 0x34, 0x81, 0x80, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
        ];
        msg.extend_from_slice(&[0x01, b'a', 0x00]);
        msg.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        msg.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01]);
        msg.extend_from_slice(&ttl.to_be_bytes());
        msg.push(0x00);
        msg
    }

    #[test]
    fn test_crafted_payload_is_thirty_bytes() {
        assert_eq!(crafted_response(120).len(), 30);
    }

    #[test]
    fn test_extracts_valid_ttl() {
        assert_eq!(
            extract_ttl(&crafted_response(120)),
            Duration::from_millis(120_000)
        );
    }

    #[test]
    fn test_ttl_above_bound_uses_default() {
        assert_eq!(extract_ttl(&crafted_response(90_000)), DEFAULT_TTL);
    }

    #[test]
    fn test_ttl_at_bound_uses_default() {
        assert_eq!(extract_ttl(&crafted_response(86_400)), DEFAULT_TTL);
    }

    #[test]
    fn test_zero_ttl_uses_default() {
        assert_eq!(extract_ttl(&crafted_response(0)), DEFAULT_TTL);
    }

    #[test]
    fn test_short_payload_uses_default() {
        assert_eq!(extract_ttl(&[0u8; 20]), DEFAULT_TTL);
        assert_eq!(extract_ttl(&[]), DEFAULT_TTL);
    }

    #[test]
    fn test_truncated_answer_uses_default() {
        let mut msg = crafted_response(120);
        msg.truncate(26);
        assert_eq!(extract_ttl(&msg), DEFAULT_TTL);
    }

    #[test]
    fn test_missing_terminator_uses_default() {
        let mut msg = vec![0u8; 12];
        msg.extend(std::iter::repeat(0x41).take(20));
        assert_eq!(extract_ttl(&msg), DEFAULT_TTL);
    }

    #[test]
    fn test_custom_default() {
        let fallback = Duration::from_secs(42);
        assert_eq!(extract_ttl_or(&[1, 2, 3], fallback), fallback);
    }
}
