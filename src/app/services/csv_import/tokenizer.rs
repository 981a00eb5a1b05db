//! CSV tokenizer with quote and line-ending handling
//!
//! Converts raw CSV text into ordered rows of string fields. The tokenizer
//! is deliberately permissive: it never fails, and malformed input degrades
//! to whatever fields can still be read.

/// Tokenize raw CSV text into rows of fields
///
/// Fields are comma-separated. A double-quoted field may contain literal
/// commas and newlines, and a doubled quote inside a quoted field decodes
/// to one literal quote. Carriage returns are discarded unconditionally,
/// collapsing CRLF and CR-only input to LF semantics. A row is emitted at
/// each unquoted newline and at end of input; an unterminated quoted field
/// runs to the end of input rather than failing.
///
/// Rows that consist of a single all-blank field are dropped, which is how
/// trailing blank lines show up. No header/body distinction is made here.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(std::mem::take(&mut field));
            }
            '\n' if !in_quotes => {
                row.push(std::mem::take(&mut field));
                flush_row(&mut rows, &mut row);
            }
            '\r' => {}
            _ => field.push(ch),
        }
    }

    row.push(field);
    flush_row(&mut rows, &mut row);

    rows
}

/// Emit a pending row unless it is a lone blank field
///
/// A row qualifies when it has more than one field or any field is
/// non-blank after trimming.
fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.len() > 1 || row.iter().any(|field| !field.trim().is_empty()) {
        rows.push(std::mem::take(row));
    } else {
        row.clear();
    }
}
