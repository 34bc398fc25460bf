use std::fmt::Write;

use crate::alphabet::DecodeTable;
use crate::inverse::{normalize, InverseTable};

const UNDEFINED: &str = "undefined";
const BYTES_PER_LINE: usize = 16;

/// Formats the slot at key 0 followed by the normalized table, on one line.
pub fn render_report(table: &InverseTable) -> String {
    let first = match table.get(0) {
        Some(v) => v.to_string(),
        None => UNDEFINED.to_owned(),
    };

    format!("{} {:?}", first, normalize(table))
}

/// Formats a decode table as a C array declaration named `name`.
pub fn render_c_table(name: &str, table: &DecodeTable) -> String {
    let mut output = String::with_capacity(table.len() * 6 + name.len() + 64);

    // Writing to a String is infallible.
    let _ = writeln!(output, "static const uint8_t {}[{}] = {{", name, table.len());
    for (i, row) in table.chunks(BYTES_PER_LINE).enumerate() {
        let cells: Vec<String> = row.iter().map(|b| format!("0x{:02X}", b)).collect();
        let last = (i + 1) * BYTES_PER_LINE >= table.len();
        let _ = writeln!(output, "  {}{}", cells.join(", "), if last { "" } else { "," });
    }
    output.push_str("};\n");

    output
}
