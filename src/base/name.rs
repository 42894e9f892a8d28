//! Decoding domain names.
//!
//! Domain names are decoded into their textual representation with each
//! label followed by a dot, i.e., `www.example.com.` for a three label
//! name and `.` for the root. Octets that would be ambiguous in this
//! representation are escaped the way zone files do: a space, dot, or
//! backslash is preceded by a backslash and non-printable octets are
//! written as a backslash followed by three decimal digits.
//!
//! In an attempt to keep messages small, DNS uses a procedure called ‘name
//! compression.’ Instead of repeating a name or a suffix of a name, a
//! message may contain a pointer to the position where that suffix first
//! appeared. Decoding resolves such pointers through the name cache of the
//! [`Cursor`]: every position at which a label sequence started is
//! recorded together with the resulting name. A pointer is only valid if
//! its target is in that cache. Since entries are only ever added once the
//! name starting there is complete, pointers can’t form loops and can’t
//! point forward.
//!
//! Names of mailboxes as used in SOA records are decoded through
//! [`parse_mailbox`] which uses an `@` instead of the first dot, giving
//! `hostmaster@example.com.` for the wire name
//! `hostmaster.example.com.`.

use super::wire::{CachedName, Cursor, DecodeError};
use crate::config::ExtendedLabels;
use core::fmt::Write;
use std::string::String;
use std::vec::Vec;
use tracing::debug;

//------------ Constants -----------------------------------------------------

/// The maximum length of a domain name in wire format.
const MAX_NAME_LEN: usize = 255;

//------------ Functions -----------------------------------------------------

/// Decodes a domain name at the current position of the cursor.
///
/// The cursor is left right after the name’s last label or compression
/// pointer.
pub fn parse(cursor: &mut Cursor) -> Result<String, DecodeError> {
    parse_cached(cursor).map(|name| name.text)
}

/// Decodes a mailbox name at the current position of the cursor.
///
/// This is the same as [`parse`] except that the first label is separated
/// from the rest of the name by an `@`.
pub fn parse_mailbox(cursor: &mut Cursor) -> Result<String, DecodeError> {
    parse(cursor).map(into_mailbox)
}

/// Decodes a domain name and returns the cache entry for it.
fn parse_cached(cursor: &mut Cursor) -> Result<CachedName, DecodeError> {
    // Collect the literal labels with their start positions until we hit
    // the end of the name.
    let mut labels = Vec::new();
    let mut tail = loop {
        let pos = cursor.pos();
        let ltype = cursor.parse_u8()?;
        match LabelType::from_octet(ltype) {
            LabelType::Normal(0) => {
                // The root label, either on its own or ending the name.
                let root = CachedName {
                    text: String::from("."),
                    wire_len: 1,
                };
                if labels.is_empty() {
                    cursor.cache_name(pos, root.clone());
                }
                break root;
            }
            LabelType::Normal(len) => {
                let label = cursor.parse_octets(usize::from(len))?;
                labels.push((pos, label));
            }
            LabelType::Compressed(high) => {
                let target = (usize::from(high) << 8)
                    | usize::from(cursor.parse_u8()?);
                let name = match cursor.cached_name(target) {
                    Some(name) => name.clone(),
                    None => return Err(DecodeError::InvalidPointer(target)),
                };
                cursor.cache_name(pos, name.clone());
                break name;
            }
            LabelType::Extended(value) => {
                match cursor.config().extended_labels() {
                    ExtendedLabels::Reject => {
                        return Err(DecodeError::ExtendedLabel(value))
                    }
                    ExtendedLabels::Empty => {
                        debug!(
                            pos,
                            ltype = value,
                            "treating extended label as empty"
                        );
                        break CachedName {
                            text: String::new(),
                            wire_len: 0,
                        };
                    }
                }
            }
        }
    };

    // Now assemble the name back to front, remembering every suffix.
    while let Some((pos, label)) = labels.pop() {
        let wire_len = tail.wire_len + label.len() + 1;
        if wire_len > MAX_NAME_LEN {
            return Err(DecodeError::LongName);
        }
        let mut text =
            String::with_capacity(label.len() + tail.text.len() + 1);
        push_label(&mut text, &label);
        text.push('.');
        if tail.text != "." {
            text.push_str(&tail.text);
        }
        tail = CachedName { text, wire_len };
        cursor.cache_name(pos, tail.clone());
    }
    Ok(tail)
}

/// Appends the textual representation of a label.
fn push_label(target: &mut String, label: &[u8]) {
    for &ch in label {
        if ch == b' ' || ch == b'.' || ch == b'\\' {
            target.push('\\');
            target.push(ch as char);
        } else if !(0x20..0x7F).contains(&ch) {
            // Writing to a string can’t fail.
            let _ = write!(target, "\\{:03}", ch);
        } else {
            target.push(ch as char)
        }
    }
}

/// Turns a domain name into a mailbox name.
///
/// Replaces the first unescaped dot with an `@` unless that dot ends the
/// name.
fn into_mailbox(mut name: String) -> String {
    let mut escaped = false;
    let mut sep = None;
    for (idx, ch) in name.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '.' {
            sep = Some(idx);
            break;
        }
    }
    if let Some(idx) = sep {
        if idx + 1 < name.len() {
            name.replace_range(idx..idx + 1, "@");
        }
    }
    name
}

//------------ LabelType -----------------------------------------------------

/// The type of a label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LabelType {
    /// A normal label with its size in octets.
    Normal(u8),

    /// A compressed label with the upper six bits of the target.
    Compressed(u8),

    /// An extended label with its full header octet.
    Extended(u8),
}

impl LabelType {
    fn from_octet(ltype: u8) -> Self {
        match ltype & 0xC0 {
            0xC0 => LabelType::Compressed(ltype & 0x3F),
            0x40 => LabelType::Extended(ltype),
            _ => LabelType::Normal(ltype & 0x3F),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;

    fn cursor_at<'a>(
        octets: &'a [u8],
        config: &'a Config,
        pos: usize,
    ) -> Cursor<'a> {
        let mut cursor = Cursor::new(octets, config);
        cursor.skip(pos).unwrap();
        cursor
    }

    #[test]
    fn root() {
        let config = Config::default();
        let mut cursor = cursor_at(b"\0", &config, 0);
        assert_eq!(parse(&mut cursor).unwrap(), ".");
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn flat() {
        let config = Config::default();
        let mut cursor = cursor_at(b"\x03www\x07example\x03com\0", &config, 0);
        assert_eq!(parse(&mut cursor).unwrap(), "www.example.com.");
        assert_eq!(cursor.pos(), 17);

        // Every suffix has been remembered.
        assert_eq!(cursor.cached_name(0).unwrap().text, "www.example.com.");
        assert_eq!(cursor.cached_name(4).unwrap().text, "example.com.");
        assert_eq!(cursor.cached_name(12).unwrap().text, "com.");
        assert_eq!(cursor.cached_name(12).unwrap().wire_len, 5);
        assert!(cursor.cached_name(16).is_none());
    }

    #[test]
    fn compressed() {
        let config = Config::default();
        let octets = b"\x07example\x03com\0\x03www\xc0\x00\xc0\x0d";
        let mut cursor = Cursor::new(octets, &config);
        assert_eq!(parse(&mut cursor).unwrap(), "example.com.");
        assert_eq!(parse(&mut cursor).unwrap(), "www.example.com.");
        assert_eq!(cursor.pos(), 19);

        // A pointer to a pointer collapses to the same name.
        assert_eq!(parse(&mut cursor).unwrap(), "www.example.com.");
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn pointer_into_suffix() {
        let config = Config::default();
        let octets = b"\x07example\x03com\0\x04mail\xc0\x08";
        let mut cursor = Cursor::new(octets, &config);
        parse(&mut cursor).unwrap();
        assert_eq!(parse(&mut cursor).unwrap(), "mail.com.");
    }

    #[test]
    fn short_input() {
        let config = Config::default();
        assert_eq!(
            parse(&mut cursor_at(b"\x03www\x07exam", &config, 0)),
            Err(DecodeError::ShortInput)
        );
        assert_eq!(
            parse(&mut cursor_at(b"\x03www\x07example", &config, 0)),
            Err(DecodeError::ShortInput)
        );
        assert_eq!(
            parse(&mut cursor_at(b"\x03www\xc0", &config, 0)),
            Err(DecodeError::ShortInput)
        );
    }

    #[test]
    fn bad_pointers() {
        let config = Config::default();

        // Pointer to itself.
        assert_eq!(
            parse(&mut cursor_at(b"\x03www\xc0\x04", &config, 4)),
            Err(DecodeError::InvalidPointer(4))
        );

        // Pointer forward.
        assert_eq!(
            parse(&mut cursor_at(b"\xc0\x02\x03www\0", &config, 0)),
            Err(DecodeError::InvalidPointer(2))
        );

        // Pointer to a name that hasn’t been decoded.
        assert_eq!(
            parse(&mut cursor_at(b"\x03www\0\xc0\x00", &config, 5)),
            Err(DecodeError::InvalidPointer(0))
        );

        // Two-step loop.
        assert_eq!(
            parse(&mut cursor_at(b"\xc0\x02\xc0\x00", &config, 2)),
            Err(DecodeError::InvalidPointer(0))
        );

        // Pointer beyond the end.
        assert_eq!(
            parse(&mut cursor_at(b"\x03www\xc0\xee", &config, 0)),
            Err(DecodeError::InvalidPointer(0xee))
        );
    }

    #[test]
    fn long_name() {
        let config = Config::default();

        // 255 octets are fine.
        let mut buf = Vec::new();
        for _ in 0..25 {
            buf.extend_from_slice(b"\x09123456789");
        }
        buf.extend_from_slice(b"\x03123\0");
        let mut cursor = Cursor::new(&buf, &config);
        let name = parse_cached(&mut cursor).unwrap();
        assert_eq!(name.wire_len, 255);

        // 256 octets are not.
        let mut buf = Vec::new();
        for _ in 0..25 {
            buf.extend_from_slice(b"\x09123456789");
        }
        buf.extend_from_slice(b"\x041234\0");
        let mut cursor = Cursor::new(&buf, &config);
        assert_eq!(parse(&mut cursor), Err(DecodeError::LongName));
    }

    #[test]
    fn long_name_through_pointer() {
        let config = Config::default();
        let mut buf = Vec::new();
        for _ in 0..25 {
            buf.extend_from_slice(b"\x09123456789");
        }
        buf.extend_from_slice(b"\x03123\0");
        buf.extend_from_slice(b"\x01a\xc0\x00");
        let mut cursor = Cursor::new(&buf, &config);
        parse(&mut cursor).unwrap();
        assert_eq!(parse(&mut cursor), Err(DecodeError::LongName));
    }

    #[test]
    fn escapes() {
        let config = Config::default();
        let mut cursor = cursor_at(b"\x04a.b\\\x02\x00 \0", &config, 0);
        assert_eq!(parse(&mut cursor).unwrap(), "a\\.b\\\\.\\000\\ .");
    }

    #[test]
    fn extended_label() {
        let config = Config::default();
        assert_eq!(
            parse(&mut cursor_at(b"\x03www\x41\x00", &config, 0)),
            Err(DecodeError::ExtendedLabel(0x41))
        );

        let mut config = Config::default();
        config.set_extended_labels(ExtendedLabels::Empty);
        let mut cursor = cursor_at(b"\x03www\x41\x00", &config, 0);
        assert_eq!(parse(&mut cursor).unwrap(), "www.");
        assert_eq!(cursor.pos(), 5);
        let mut cursor = cursor_at(b"\x41", &config, 0);
        assert_eq!(parse(&mut cursor).unwrap(), "");
    }

    #[test]
    fn mailbox() {
        let config = Config::default();
        let octets = b"\x0ahostmaster\x07example\x03com\0\xc0\x00\x05admin\0\0";
        let mut cursor = Cursor::new(octets, &config);
        assert_eq!(
            parse_mailbox(&mut cursor).unwrap(),
            "hostmaster@example.com."
        );

        // The cache keeps the plain domain name.
        assert_eq!(
            cursor.cached_name(0).unwrap().text,
            "hostmaster.example.com."
        );
        assert_eq!(
            parse_mailbox(&mut cursor).unwrap(),
            "hostmaster@example.com."
        );
        assert_eq!(parse_mailbox(&mut cursor).unwrap(), "admin.");
        assert_eq!(parse_mailbox(&mut cursor).unwrap(), ".");
    }

    #[test]
    fn mailbox_with_escaped_dot() {
        assert_eq!(
            into_mailbox(String::from("john\\.doe.example.com.")),
            "john\\.doe@example.com."
        );
    }
}
