// src/interchange/codec.rs
//
// Field escaping, line encoding and the quote-aware line tokenizer.
// Everything here is a pure string transform.

/// Field delimiter of the exchange format
pub const DELIMITER: char = ';';

/// One export column: header label plus field accessor
///
/// A `None` value encodes as an empty field (zero characters, no
/// quotes).
pub struct Column<T> {
    pub label: &'static str,
    pub value: fn(&T) -> Option<String>,
}

/// Escape one field for output
///
/// Fields containing the delimiter, a double quote, a newline, or
/// leading/trailing whitespace are wrapped in double quotes with every
/// internal quote doubled. Anything else passes through unchanged.
pub fn escape_field(value: &str) -> String {
    let needs_quoting = value.contains(DELIMITER)
        || value.contains('"')
        || value.contains('\n')
        || value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace);

    if needs_quoting {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Join one record's fields into a line, escaping each independently
pub fn encode_line(fields: &[Option<String>]) -> String {
    fields
        .iter()
        .map(|field| match field {
            Some(value) => escape_field(value),
            None => String::new(),
        })
        .collect::<Vec<_>>()
        .join(";")
}

/// Encode a full document: header line, then one line per record in
/// input order
pub fn encode_document<T>(records: &[T], columns: &[Column<T>]) -> String {
    let header = columns
        .iter()
        .map(|c| c.label)
        .collect::<Vec<_>>()
        .join(";");

    let lines: Vec<String> = records
        .iter()
        .map(|record| {
            let fields: Vec<Option<String>> =
                columns.iter().map(|c| (c.value)(record)).collect();
            encode_line(&fields)
        })
        .collect();

    format!("{}\n{}", header, lines.join("\n"))
}

/// Split one line into fields, honoring quoted segments
///
/// Single left-to-right scan with one character of lookahead:
/// - `"` outside a quoted segment opens quoting
/// - `""` inside a quoted segment is a literal quote
/// - `"` inside a quoted segment otherwise closes it
/// - the delimiter only terminates a field outside quotes
/// - an unterminated quote consumes to end of line
///
/// Fields are trimmed of surrounding whitespace, but only whitespace
/// that sits outside quotes; quoted content survives verbatim so the
/// escaping applied by [`escape_field`] stays invertible.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    // Unquoted whitespace hanging off the end of `current`; dropped if
    // the field ends before more content arrives.
    let mut trailing_ws = 0usize;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '"' {
            if !in_quote {
                in_quote = true;
                trailing_ws = 0;
            } else if chars.peek() == Some(&'"') {
                current.push('"');
                chars.next();
            } else {
                in_quote = false;
            }
        } else if ch == DELIMITER && !in_quote {
            current.truncate(current.len() - trailing_ws);
            fields.push(std::mem::take(&mut current));
            trailing_ws = 0;
        } else if !in_quote && ch.is_whitespace() {
            // Leading unquoted whitespace is dropped; anything later is
            // kept provisionally and truncated if the field ends here
            if !current.is_empty() {
                current.push(ch);
                trailing_ws += ch.len_utf8();
            }
        } else {
            current.push(ch);
            trailing_ws = 0;
        }
    }

    current.truncate(current.len() - trailing_ws);
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some((*v).to_string())).collect()
    }

    #[test]
    fn test_plain_fields_pass_through() {
        assert_eq!(escape_field("Naruto"), "Naruto");
        assert_eq!(encode_line(&opt(&["a", "b", "c"])), "a;b;c");
    }

    #[test]
    fn test_delimiter_and_quotes_are_escaped() {
        assert_eq!(escape_field("Steins;Gate"), "\"Steins;Gate\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field(" padded "), "\" padded \"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_none_encodes_as_empty_field() {
        let fields = vec![Some("a".to_string()), None, Some("c".to_string())];
        assert_eq!(encode_line(&fields), "a;;c");
    }

    #[test]
    fn test_tokenize_plain_line() {
        assert_eq!(tokenize_line("a;b;c"), vec!["a", "b", "c"]);
        assert_eq!(tokenize_line("a;;c"), vec!["a", "", "c"]);
        assert_eq!(tokenize_line(""), vec![""]);
    }

    #[test]
    fn test_tokenize_trims_unquoted_whitespace() {
        assert_eq!(tokenize_line(" a ; b ;c "), vec!["a", "b", "c"]);
        // A trailing carriage return is unquoted whitespace
        assert_eq!(tokenize_line("a;b\r"), vec!["a", "b"]);
    }

    #[test]
    fn test_tokenize_quoted_segments() {
        assert_eq!(tokenize_line("\"a;b\";c"), vec!["a;b", "c"]);
        assert_eq!(tokenize_line("\"say \"\"hi\"\"\";x"), vec!["say \"hi\"", "x"]);
        // Quoted whitespace is content, not padding
        assert_eq!(tokenize_line("\" padded \";x"), vec![" padded ", "x"]);
    }

    #[test]
    fn test_tokenize_unterminated_quote_consumes_to_eol() {
        assert_eq!(tokenize_line("\"a;b"), vec!["a;b"]);
    }

    #[test]
    fn test_tokenize_mid_field_quote() {
        // A quote opening mid-field shields the delimiter
        assert_eq!(tokenize_line("ab\"cd;e\"f;g"), vec!["abcd;ef", "g"]);
    }

    #[test]
    fn test_round_trip_nasty_fields() {
        let cases: Vec<Vec<&str>> = vec![
            vec!["plain", "with;delim", "with\"quote"],
            vec!["", " leading", "trailing ", " both "],
            vec!["line\nbreak", "\"", "\"\"", ";\";\""],
            vec!["a", "", ""],
        ];
        for fields in cases {
            let owned: Vec<Option<String>> =
                fields.iter().map(|f| Some((*f).to_string())).collect();
            let line = encode_line(&owned);
            assert_eq!(tokenize_line(&line), fields, "line was: {:?}", line);
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        struct Pair(&'static str, Option<&'static str>);
        const COLS: &[Column<Pair>] = &[
            Column {
                label: "A",
                value: |p| Some(p.0.to_string()),
            },
            Column {
                label: "B",
                value: |p| p.1.map(str::to_string),
            },
        ];
        let rows = vec![Pair("x;y", Some("z")), Pair("w", None)];
        let first = encode_document(&rows, COLS);
        let second = encode_document(&rows, COLS);
        assert_eq!(first, second);
        assert_eq!(first, "A;B\n\"x;y\";z\nw;");
    }

    #[test]
    fn test_encode_document_empty_input() {
        const COLS: &[Column<()>] = &[Column {
            label: "Only",
            value: |_| None,
        }];
        let records: Vec<()> = Vec::new();
        assert_eq!(encode_document(&records, COLS), "Only\n");
    }
}
