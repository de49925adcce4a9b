//! Line framing for daemon envelopes
//!
//! The daemon sends exactly one compact JSON message per connection,
//! terminated by `\n`. The first newline ends the message. Anything that
//! breaks that shape is a protocol fault rather than a silent truncation:
//! bytes after the terminator, a peer that closes mid-message, or a message
//! that outgrows the configured limit.

use bytes::BytesMut;
use fgp_vercel_core::protocol::TERMINATOR;
use fgp_vercel_core::{Error, Request, Result};
use serde_json::Value;
use tokio_util::codec::{Decoder, Encoder};

#[derive(Debug, Clone)]
pub struct EnvelopeCodec {
    max_length: usize,
}

impl EnvelopeCodec {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    fn parse(line: &[u8]) -> Result<Value> {
        let text = std::str::from_utf8(line)?;
        Ok(serde_json::from_str(text.trim())?)
    }
}

impl<'a> Encoder<&'a Request> for EnvelopeCodec {
    type Error = Error;

    fn encode(&mut self, item: &'a Request, dst: &mut BytesMut) -> Result<()> {
        dst.extend_from_slice(&item.to_line()?);
        Ok(())
    }
}

impl Decoder for EnvelopeCodec {
    type Item = Value;
    type Error = Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Value>> {
        let Some(pos) = src.iter().position(|b| *b == TERMINATOR) else {
            if src.len() > self.max_length {
                return Err(Error::Protocol(format!(
                    "response exceeds {} bytes without a terminator",
                    self.max_length
                )));
            }
            return Ok(None);
        };

        if pos > self.max_length {
            return Err(Error::Protocol(format!(
                "response of {} bytes exceeds the {} byte limit",
                pos, self.max_length
            )));
        }

        let trailing = src.len() - pos - 1;
        if trailing > 0 {
            return Err(Error::Protocol(format!(
                "{} unexpected bytes after response terminator",
                trailing
            )));
        }

        let line = src.split_to(pos + 1);
        Self::parse(&line[..pos]).map(Some)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Value>> {
        if let Some(value) = self.decode(src)? {
            return Ok(Some(value));
        }
        if src.is_empty() {
            return Ok(None);
        }

        // Incomplete bytes surface as a decode fault; a complete message that
        // merely lacks its newline is still a framing violation.
        let remaining = src.split();
        Self::parse(&remaining)?;
        Err(Error::Protocol(
            "response ended without a newline terminator".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn codec() -> EnvelopeCodec {
        EnvelopeCodec::new(1024)
    }

    #[test]
    fn test_encode_request_line() {
        let req = Request::new("health", None).unwrap();
        let mut buf = BytesMut::new();
        codec().encode(&req, &mut buf).unwrap();
        assert_eq!(buf.last(), Some(&b'\n'));

        let decoded: Request = serde_json::from_slice(&buf).unwrap();
        assert_eq!(decoded, req);
    }

    #[test]
    fn test_partial_read() {
        let mut codec = codec();
        let mut acc = BytesMut::new();
        acc.extend_from_slice(br#"{"ok": true, "res"#);
        assert!(codec.decode(&mut acc).unwrap().is_none());

        acc.extend_from_slice(b"ult\": {}}  \r\n");
        let value = codec.decode(&mut acc).unwrap().unwrap();
        assert_eq!(value, json!({"ok": true, "result": {}}));
        assert!(acc.is_empty());
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut acc = BytesMut::from(&b"{\"ok\":true}\n{\"ok\":true}\n"[..]);
        assert!(matches!(
            codec().decode(&mut acc),
            Err(Error::Protocol(_))
        ));
    }

    #[test]
    fn test_oversized_frame_rejected() {
        let mut codec = EnvelopeCodec::new(8);
        let mut acc = BytesMut::from(&b"{\"ok\":true,\"result\""[..]);
        assert!(matches!(codec.decode(&mut acc), Err(Error::Protocol(_))));
    }

    #[test]
    fn test_oversized_terminated_frame_rejected() {
        let mut codec = EnvelopeCodec::new(16);
        let mut acc = BytesMut::from(&b"{\"ok\": true, \"result\": {\"projects\": []}}\n"[..]);
        assert!(matches!(codec.decode(&mut acc), Err(Error::Protocol(_))));

        let mut exact = BytesMut::from(&b"{\"ok\": true}\n"[..]);
        assert!(codec.decode(&mut exact).unwrap().is_some());
    }

    #[test]
    fn test_eof_handling() {
        let mut empty = BytesMut::new();
        assert!(codec().decode_eof(&mut empty).unwrap().is_none());

        let mut incomplete = BytesMut::from(&b"{\"ok\": tr"[..]);
        let err = codec().decode_eof(&mut incomplete).unwrap_err();
        assert!(err.is_decode());

        let mut unterminated = BytesMut::from(&b"{\"ok\": true}"[..]);
        let err = codec().decode_eof(&mut unterminated).unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn test_invalid_utf8_is_decode_fault() {
        let mut acc = BytesMut::from(&b"{\"ok\": \xff}\n"[..]);
        let err = codec().decode(&mut acc).unwrap_err();
        assert!(matches!(err, Error::Utf8(_)));
    }
}
