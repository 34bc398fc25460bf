use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of characters in a base64 alphabet.
pub const ALPHABET_LEN: usize = 64;

/// Lowest character code an alphabet may contain (`'+'`). Inverse table keys are
/// offset by this value.
pub const CODE_BASE: u8 = b'+';

/// Size of a dense decode table, one slot per ASCII code.
pub const DECODE_TABLE_LEN: usize = 128;

/// Marks a decode table slot whose character is not in the alphabet.
pub const INVALID: u8 = 0xff;

const URL_SAFE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
const STANDARD_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

pub type DecodeTable = [u8; DECODE_TABLE_LEN];

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAlphabet {
    #[error("invalid length {0}, expected 64 characters")]
    InvalidLength(usize),
    #[error("non-ascii char {0:?}")]
    NonAscii(char),
    #[error("char {0:?} is below '+'")]
    BelowBase(char),
    #[error("duplicate char {0:?}")]
    Duplicate(char),
}

/// An ordered set of 64 distinct ASCII characters, none below `'+'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet<'a> {
    symbols: &'a [u8],
}

impl Alphabet<'static> {
    /// The base64url alphabet (`-` and `_` for values 62 and 63).
    pub const URL_SAFE: Alphabet<'static> = Alphabet {
        symbols: URL_SAFE_ALPHABET,
    };

    /// The RFC 4648 standard alphabet (`+` and `/` for values 62 and 63).
    pub const STANDARD: Alphabet<'static> = Alphabet {
        symbols: STANDARD_ALPHABET,
    };
}

impl<'a> Alphabet<'a> {
    pub fn new(symbols: &'a str) -> Result<Self, InvalidAlphabet> {
        let len = symbols.chars().count();
        if len != ALPHABET_LEN {
            return Err(InvalidAlphabet::InvalidLength(len));
        }

        let mut seen = HashSet::with_capacity(ALPHABET_LEN);
        for c in symbols.chars() {
            if !c.is_ascii() {
                return Err(InvalidAlphabet::NonAscii(c));
            }
            if (c as u8) < CODE_BASE {
                return Err(InvalidAlphabet::BelowBase(c));
            }
            if !seen.insert(c) {
                return Err(InvalidAlphabet::Duplicate(c));
            }
        }

        Ok(Self {
            symbols: symbols.as_bytes(),
        })
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Builds the dense decode table for every character of the alphabet.
    pub fn decode_table(&self) -> DecodeTable {
        compute_reverse(self.symbols)
    }
}

impl fmt::Display for Alphabet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Validated alphabets are ASCII.
        for &b in self.symbols {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

/// Owned alphabet, used where the symbols come from outside the program
/// (command line arguments).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetBuf(String);

impl AlphabetBuf {
    pub fn as_alphabet(&self) -> Alphabet<'_> {
        Alphabet {
            symbols: self.0.as_bytes(),
        }
    }
}

impl FromStr for AlphabetBuf {
    type Err = InvalidAlphabet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::new(s)?;
        Ok(Self(s.to_owned()))
    }
}

pub(crate) const fn compute_reverse(alphabet: &[u8]) -> DecodeTable {
    let mut table: DecodeTable = [INVALID; DECODE_TABLE_LEN];

    let mut i = 0;
    while i < alphabet.len() {
        let index = alphabet[i] as usize;
        if index < DECODE_TABLE_LEN {
            table[index] = i as u8;
        }
        i += 1;
    }

    table
}
