pub mod alphabet;
pub mod inverse;
pub mod render;

pub use alphabet::{Alphabet, AlphabetBuf, InvalidAlphabet};
pub use inverse::{build_inverse_table, normalize, InverseTable};
