//! PDF Object Model
//!
//! The subset of PDF object types a transcript needs: numbers, literal
//! strings, names, arrays, dictionaries, streams, and indirect references.

use std::collections::BTreeMap;
use std::io::{self, Write};

/// PDF object types
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Integer(i64),
    Real(f64),
    /// Literal string, written between parentheses
    String(Vec<u8>),
    /// Name object, written with a leading `/`
    Name(String),
    Array(Vec<PdfObject>),
    Dictionary(PdfDictionary),
    Stream(PdfStream),
    /// Indirect reference to object `n 0 R`
    Reference(u32),
}

impl PdfObject {
    pub fn name(s: impl Into<String>) -> Self {
        PdfObject::Name(s.into())
    }

    pub fn string(s: &str) -> Self {
        PdfObject::String(s.as_bytes().to_vec())
    }

    /// An array of reals, such as a media box
    pub fn reals(values: &[f64]) -> Self {
        PdfObject::Array(values.iter().copied().map(PdfObject::Real).collect())
    }
}

impl From<PdfDictionary> for PdfObject {
    fn from(dict: PdfDictionary) -> Self {
        PdfObject::Dictionary(dict)
    }
}

impl From<PdfStream> for PdfObject {
    fn from(stream: PdfStream) -> Self {
        PdfObject::Stream(stream)
    }
}

/// PDF dictionary with keys in sorted order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfDictionary {
    entries: BTreeMap<String, PdfObject>,
}

impl PdfDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dictionary with its `/Type` entry set
    pub fn typed(type_name: &str) -> Self {
        let mut dict = Self::new();
        dict.insert("Type", PdfObject::name(type_name));
        dict
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PdfObject>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries.get(key)
    }
}

/// PDF stream (dictionary + uncompressed data)
///
/// `/Length` is filled in when the stream is written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfStream {
    pub dict: PdfDictionary,
    pub data: Vec<u8>,
}

impl PdfStream {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            dict: PdfDictionary::new(),
            data,
        }
    }
}

/// Serialize an object into `w`
pub fn write_object<W: Write>(w: &mut W, obj: &PdfObject) -> io::Result<()> {
    match obj {
        PdfObject::Integer(n) => write!(w, "{n}"),
        PdfObject::Real(n) => w.write_all(format_real(*n).as_bytes()),
        PdfObject::String(bytes) => write_literal(w, bytes),
        PdfObject::Name(name) => write_name(w, name),
        PdfObject::Array(items) => {
            w.write_all(b"[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    w.write_all(b" ")?;
                }
                write_object(w, item)?;
            }
            w.write_all(b"]")
        }
        PdfObject::Dictionary(dict) => write_dictionary(w, dict),
        PdfObject::Stream(stream) => {
            let mut dict = stream.dict.clone();
            dict.insert("Length", PdfObject::Integer(stream.data.len() as i64));
            write_dictionary(w, &dict)?;
            w.write_all(b"\nstream\n")?;
            w.write_all(&stream.data)?;
            w.write_all(b"\nendstream")
        }
        PdfObject::Reference(n) => write!(w, "{n} 0 R"),
    }
}

/// Format a real with at most four decimals and no trailing zeros
pub fn format_real(n: f64) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    let s = format!("{n:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}

/// Write bytes as a literal string, escaping delimiters and non-printables
pub fn write_literal<W: Write>(w: &mut W, bytes: &[u8]) -> io::Result<()> {
    w.write_all(b"(")?;
    for &byte in bytes {
        match byte {
            b'(' | b')' | b'\\' => w.write_all(&[b'\\', byte])?,
            b'\n' => w.write_all(b"\\n")?,
            b'\r' => w.write_all(b"\\r")?,
            0x20..=0x7E => w.write_all(&[byte])?,
            _ => write!(w, "\\{byte:03o}")?,
        }
    }
    w.write_all(b")")
}

fn write_name<W: Write>(w: &mut W, name: &str) -> io::Result<()> {
    w.write_all(b"/")?;
    for byte in name.bytes() {
        match byte {
            b'#' | b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' => {
                write!(w, "#{byte:02X}")?
            }
            0x21..=0x7E => w.write_all(&[byte])?,
            _ => write!(w, "#{byte:02X}")?,
        }
    }
    Ok(())
}

fn write_dictionary<W: Write>(w: &mut W, dict: &PdfDictionary) -> io::Result<()> {
    w.write_all(b"<<")?;
    for (key, value) in &dict.entries {
        w.write_all(b" ")?;
        write_name(w, key)?;
        w.write_all(b" ")?;
        write_object(w, value)?;
    }
    w.write_all(b" >>")
}
