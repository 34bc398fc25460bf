use crate::alphabet::{Alphabet, CODE_BASE};

/// Value written in place of a hole by [`normalize`].
pub const SENTINEL: i32 = -1;

/// Sparse mapping from `code - '+'` to the position of that character in the alphabet.
///
/// The table only extends up to its highest populated key; anything past that is a hole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InverseTable {
    slots: Vec<Option<u8>>,
}

impl InverseTable {
    pub fn get(&self, key: usize) -> Option<u8> {
        self.slots.get(key).copied().flatten()
    }

    /// Number of slots, holes included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    fn insert(&mut self, key: usize, value: u8) {
        if key >= self.slots.len() {
            self.slots.resize(key + 1, None);
        }
        self.slots[key] = Some(value);
    }
}

/// Builds the inverse table of `alphabet`.
///
/// Only the first `len - 1` characters are inserted: the last character of the
/// alphabet never appears in the table.
pub fn build_inverse_table(alphabet: &Alphabet<'_>) -> InverseTable {
    let symbols = alphabet.as_bytes();
    let mut table = InverseTable::default();

    for (i, &c) in symbols.iter().enumerate().take(symbols.len().saturating_sub(1)) {
        // Validated alphabets never go below the base.
        let key = c.saturating_sub(CODE_BASE) as usize;
        table.insert(key, i as u8);
    }

    table
}

/// Turns the sparse table into a dense sequence, holes becoming [`SENTINEL`].
pub fn normalize(table: &InverseTable) -> Vec<i32> {
    table
        .slots
        .iter()
        .map(|slot| slot.map_or(SENTINEL, i32::from))
        .collect()
}
