//! Binary object-image format shared by the LC-3 assembler and VM.
//!
//! An image is a flat sequence of big-endian 16-bit words. The first word is
//! the origin, the address at which the rest of the payload is placed; the
//! remaining words are the payload in memory order. The total byte length is
//! therefore always even, and the payload must fit between the origin and
//! the end of the 65 536-cell address space.

use byteorder::{ByteOrder, WriteBytesExt};
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::{error, fmt, io};
use util::Endian;

pub type Word = u16;

/// Number of addressable memory cells on the target machine.
pub const MEMORY_SIZE: usize = 1 << 16;

#[derive(Debug)]
pub enum Error {
    /// The image does not split into whole 2-byte words.
    OddImageSize(usize),
    /// The payload does not fit between the origin and the end of memory.
    ImageTooLarge { words: usize, origin: Word },
    /// A hex rendition contained a non-digit or half a byte.
    InvalidHex,
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OddImageSize(len) => write!(
                f,
                "image of {} bytes doesn't map to a whole number of 2 byte words",
                len
            ),
            Error::ImageTooLarge { words, origin } => write!(
                f,
                "image of {} words is too big to load at origin {:#06x}",
                words, origin
            ),
            Error::InvalidHex => f.write_str("hex image is not a sequence of hex byte pairs"),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

/// A parsed object image: an origin plus the words placed there.
///
/// Construction is checked, so an `Image` value always fits in memory.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    origin: Word,
    words: Vec<Word>,
}

impl Image {
    pub fn new(origin: Word, words: Vec<Word>) -> Result<Image, Error> {
        if words.len() > MEMORY_SIZE - origin as usize {
            return Err(Error::ImageTooLarge {
                words: words.len(),
                origin,
            });
        }
        Ok(Image { origin, words })
    }

    /// Parses the binary format: 2-byte big-endian origin, then the payload
    /// words. No memory is touched on failure; the checks all run here.
    pub fn from_bytes(bytes: &[u8]) -> Result<Image, Error> {
        if bytes.len() % 2 != 0 {
            return Err(Error::OddImageSize(bytes.len()));
        }
        if bytes.is_empty() {
            return Image::new(0, Vec::new());
        }
        let origin = Endian::read_u16(&bytes[..2]);
        let payload = &bytes[2..];
        let mut words = vec![0; payload.len() / 2];
        if words.len() > MEMORY_SIZE - origin as usize {
            return Err(Error::ImageTooLarge {
                words: words.len(),
                origin,
            });
        }
        Endian::read_u16_into(payload, &mut words);
        Ok(Image { origin, words })
    }

    /// Parses a hex rendition of the binary format, e.g. `"3000 E005 2213"`.
    /// Whitespace may appear between any two digits.
    pub fn from_hex(hex: &str) -> Result<Image, Error> {
        let mut digits = hex.chars().filter(|c| !c.is_whitespace());
        let mut bytes = Vec::new();
        while let Some(high) = digits.next() {
            let low = digits.next().ok_or(Error::InvalidHex)?;
            let high = high.to_digit(16).ok_or(Error::InvalidHex)?;
            let low = low.to_digit(16).ok_or(Error::InvalidHex)?;
            bytes.push((high << 4 | low) as u8);
        }
        Image::from_bytes(&bytes)
    }

    pub fn origin(&self) -> Word {
        self.origin
    }

    pub fn words(&self) -> &[Word] {
        &self.words[..]
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0; (self.words.len() + 1) * 2];
        Endian::write_u16(&mut bytes[..2], self.origin);
        Endian::write_u16_into(&self.words[..], &mut bytes[2..]);
        bytes
    }
}

pub fn read<R: Read>(reader: &mut R) -> Result<Image, Error> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Image::from_bytes(&bytes[..])
}

pub fn write<W: Write>(writer: &mut W, image: &Image) -> io::Result<()> {
    writer.write_u16::<Endian>(image.origin)?;
    for &word in image.words() {
        writer.write_u16::<Endian>(word)?;
    }
    Ok(())
}

pub trait ReadObjExt: Read + Sized {
    fn read_obj(&mut self) -> Result<Image, Error> {
        read(self)
    }
}

impl<R: Read + Sized> ReadObjExt for R {}

pub trait WriteObjExt: Write + Sized {
    fn write_obj(&mut self, image: &Image) -> io::Result<()> {
        write(self, image)
    }
}

impl<W: Write + Sized> WriteObjExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Image, Error> {
    BufReader::new(File::open(path)?).read_obj()
}

pub fn write_file<P: AsRef<Path>>(path: P, image: &Image) -> io::Result<()> {
    BufWriter::new(File::create(path)?).write_obj(image)
}

const MNEMONICS: [&str; 16] = [
    "BR", "ADD", "LD", "ST", "JSR", "AND", "LDR", "STR", "RTI", "NOT", "LDI", "STI", "JMP", "RES",
    "LEA", "TRAP",
];

const TRAP_ALIASES: [&str; 6] = ["GETC", "OUT", "PUTS", "IN", "PUTSP", "HALT"];

fn mnemonic(word: Word) -> &'static str {
    let opcode = (word >> 12) as usize;
    if opcode == 0xF {
        let vector = word & 0xFF;
        if (0x20..=0x25).contains(&vector) {
            return TRAP_ALIASES[(vector - 0x20) as usize];
        }
    }
    MNEMONICS[opcode]
}

/// Renders an image as a listing, one word per line: address, raw word,
/// decoded mnemonic and, for character-sized words, the character itself.
pub fn disassemble(image: &Image) -> String {
    let mut listing = String::new();
    for (i, &word) in image.words().iter().enumerate() {
        let address = image.origin().wrapping_add(i as Word);
        let glyph = match word {
            0x20..=0x7E => char::from(word as u8),
            _ => ' ',
        };
        listing.push_str(&format!(
            "x{:04X}: (x{:04X}) {:<5} | {}\n",
            address,
            word,
            mnemonic(word),
            glyph
        ));
    }
    listing
}
