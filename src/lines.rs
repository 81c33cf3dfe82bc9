//! Line assembly for outgoing article text.
//!
//! Before the poster hands body text (a signature, quoted material) to
//! its message pipeline, the individual lines are flattened into one
//! blob ending in exactly one newline.

use bytes::{BufMut, Bytes, BytesMut};

/// Join lines into a single newline-terminated blob.
///
/// Elements are joined with `\n`. The result always ends in exactly one
/// newline: one is appended when the last element lacks it, and none is
/// added when the last element already ends with one. Interior elements
/// are taken verbatim. An empty input yields a lone newline.
///
/// # Example
///
/// ```
/// use newspost_rs::join_lines;
///
/// assert_eq!(&join_lines(["a", "b", "c"])[..], b"a\nb\nc\n");
/// assert_eq!(&join_lines(["a", "b", "c\n"])[..], b"a\nb\nc\n");
/// assert_eq!(&join_lines::<[&str; 0]>([])[..], b"\n");
/// ```
pub fn join_lines<I>(lines: I) -> Bytes
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut buf = BytesMut::new();
    let mut first = true;
    let mut last_terminated = false;
    for line in lines {
        let line = line.as_ref();
        if !first {
            buf.put_u8(b'\n');
        }
        first = false;
        buf.put_slice(line.as_bytes());
        last_terminated = line.ends_with('\n');
    }
    if !last_terminated {
        buf.put_u8(b'\n');
    }
    buf.freeze()
}
