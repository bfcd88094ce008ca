use crate::Face;

/// start-of-frame byte
pub const STX: u8 = 0x02;
/// header/payload separator byte
pub const ETX: u8 = 0x03;

/// Writes one outgoing frame: STX, the ASCII decimal byte-length of the
/// payload, ETX, then the payload itself. No terminator. This reproduces the
/// established wire format byte for byte; peers depend on it, so it is a
/// fixed contract rather than something to redesign.
pub fn frame<W: std::io::Write>(sink: &mut W, payload: &str) -> std::io::Result<()> {
    write!(sink, "\x02{}\x03{}", payload.len(), payload)?;
    sink.flush()
}

/// A remote player's answer to a move request, decoded from one inbound line.
/// Keep-alive ("NOP") never reaches this type; the connection swallows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// bare newline or empty line: stop rerolling, bank everything
    Bank,
    /// whitespace-separated face values the player wants to keep
    Keep(Vec<Face>),
    /// tokens that would not parse as integers. resolved as a bank,
    /// but worth flagging upstream.
    Garbled,
}

impl From<&str> for Response {
    fn from(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::Bank;
        }
        match text
            .split_whitespace()
            .map(|token| token.parse::<Face>())
            .collect::<Result<Vec<Face>, _>>()
        {
            Ok(dice) => Self::Keep(dice),
            Err(_) => Self::Garbled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_bytes() {
        let mut sink = Vec::new();
        frame(&mut sink, "abc").unwrap();
        assert!(sink == vec![STX, b'3', ETX, b'a', b'b', b'c']);
    }

    #[test]
    fn frame_length_is_decimal() {
        let mut sink = Vec::new();
        let payload = "[1, 2, 3, 4, 5, 6]";
        frame(&mut sink, payload).unwrap();
        assert!(sink[0] == STX);
        assert!(&sink[1..3] == b"18");
        assert!(sink[3] == ETX);
        assert!(&sink[4..] == payload.as_bytes());
    }

    #[test]
    fn keep_response() {
        assert!(Response::from("1 1 5") == Response::Keep(vec![1, 1, 5]));
        assert!(Response::from("5\n") == Response::Keep(vec![5]));
    }

    #[test]
    fn bank_response() {
        assert!(Response::from("") == Response::Bank);
        assert!(Response::from("\n") == Response::Bank);
        assert!(Response::from("   ") == Response::Bank);
    }

    #[test]
    fn garbled_response() {
        assert!(Response::from("banana") == Response::Garbled);
        assert!(Response::from("1 two 5") == Response::Garbled);
    }
}
