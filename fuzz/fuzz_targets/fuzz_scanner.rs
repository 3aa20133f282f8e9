#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqscan::Scanner;

#[derive(Arbitrary, Debug)]
enum Op {
    SetPosition(usize),
    Advance,
    Skip(u8),
    PeekNth(u8),
    PeekNext(u8),
    Element(char),
    Collection(String),
    Set(String),
    UpTo(char),
    Through(char),
    UpToCollection(String),
    UpToSet(String),
    WhileAlphanumeric,
    ExpectCollection(String),
}

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    ops: Vec<Op>,
}

/// Applies `op` and checks the scanner's contract: the position stays on a
/// char boundary within bounds, only `SetPosition` moves backwards, peeks do
/// not move, and every returned span is exactly what was consumed.
fn step(s: &mut Scanner<'_, str>, text: &str, op: &Op) {
    let before = s.position();
    let span = match op {
        Op::SetPosition(p) => {
            s.set_position(*p);
            None
        }
        Op::Advance => {
            s.advance();
            None
        }
        Op::Skip(n) => Some(s.scan(usize::from(*n))),
        Op::PeekNth(n) => {
            let _ = s.peek_nth(usize::from(*n));
            assert_eq!(s.position(), before);
            None
        }
        Op::PeekNext(n) => {
            let peeked = s.peek_next(usize::from(*n));
            assert_eq!(s.position(), before);
            assert!(s.remaining().starts_with(peeked));
            None
        }
        Op::Element(c) => Some(s.scan_element(*c)),
        Op::Collection(c) => {
            let span = s.scan_collection(c.as_str());
            assert!(span.is_empty() || span == c.as_str());
            Some(span)
        }
        Op::Set(set) => Some(s.scan_set(set.as_str())),
        Op::UpTo(c) => Some(s.scan_up_to(*c)),
        Op::Through(c) => Some(s.scan_through(*c)),
        Op::UpToCollection(c) => {
            let span = s.scan_up_to_collection(c.as_str());
            if !c.is_empty() {
                assert!(!span.contains(c.as_str()));
            }
            Some(span)
        }
        Op::UpToSet(set) => Some(s.scan_up_to_set(set.as_str())),
        Op::WhileAlphanumeric => Some(s.scan_while(char::is_alphanumeric)),
        Op::ExpectCollection(c) => {
            if s.expect_collection(c.as_str()).is_err() {
                assert_eq!(s.position(), before);
            }
            None
        }
    };

    let after = s.position();
    assert!(after <= text.len());
    assert!(text.is_char_boundary(after));
    if !matches!(op, Op::SetPosition(_)) {
        assert!(after >= before);
    }
    if let Some(span) = span {
        assert_eq!(span, &text[before..after]);
    }
}

fuzz_target!(|input: Input| {
    let mut s = Scanner::new(input.text.as_str());
    for op in &input.ops {
        step(&mut s, &input.text, op);
    }
});
