//! Header serialization: render a word sequence as a fixed-size C array.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Include-guard macro derived from the array name.
pub fn guard_for(array_name: &str) -> String {
    format!("{}_H", array_name.to_ascii_uppercase())
}

/// Escape a word for use inside a C string literal.
///
/// The built-in catalog is alphabetic only, so this normally copies the
/// input through unchanged; it exists so a future catalog entry containing a
/// quote or backslash cannot corrupt the generated header.
pub fn escape_c_literal(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

/// Write the dictionary as a guarded C header.
///
/// The declared array size always equals `words.len()`; elements are emitted
/// in the order received, one per line, with no trailing comma after the
/// last. Callers pass an already sorted, already truncated sequence.
pub fn write_dictionary<W: Write>(out: &mut W, array_name: &str, words: &[String]) -> io::Result<()> {
    let guard = guard_for(array_name);
    writeln!(out, "#ifndef {guard}")?;
    writeln!(out, "#define {guard}")?;
    writeln!(out)?;
    writeln!(out, "const char* {}[{}] = {{", array_name, words.len())?;
    for (i, word) in words.iter().enumerate() {
        let sep = if i + 1 < words.len() { "," } else { "" };
        writeln!(out, "    \"{}\"{}", escape_c_literal(word), sep)?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(out, "#endif // {guard}")?;
    Ok(())
}

/// Write the dictionary header to `path`, truncating any existing file.
///
/// The write is not atomic: a failure partway through can leave a truncated
/// header on disk.
pub fn write_dictionary_file<P: AsRef<Path>>(
    path: P,
    array_name: &str,
    words: &[String],
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_dictionary(&mut writer, array_name, words)?;
    writer.flush()
}
