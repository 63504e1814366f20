//! Loaders for corpus statistics files

use crate::error::{Error, Result};
use crate::lines::LineReader;
use ahash::{AHashMap, AHashSet};
use std::io::{self, BufRead, Read};

/// Read a stopword list, one word per line
///
/// Words are trimmed and lowercased. Blank lines are skipped.
pub fn read_stopwords<R: BufRead>(reader: R) -> Result<AHashSet<String>> {
    let mut words = AHashSet::new();
    for line in LineReader::new(reader) {
        let word = line?.trim().to_lowercase();
        if !word.is_empty() {
            words.insert(word);
        }
    }
    Ok(words)
}

/// Read inverse document frequencies from a `term<TAB>df` table
///
/// Fields are separated by one or more tabs; extra fields are ignored. Each
/// term gets `ln(1 + num_docs / df)`. A later line for the same term
/// overwrites the earlier one.
///
/// # Arguments
/// * `reader` - Source of the table
/// * `num_docs` - Number of documents in the collection
pub fn read_idfs<R: BufRead>(reader: R, num_docs: u64) -> Result<AHashMap<String, f64>> {
    let n = num_docs as f64;
    let mut idfs = AHashMap::new();

    for (idx, line) in LineReader::new(reader).enumerate() {
        let line = line?;
        let line_no = idx + 1;

        let mut fields = line.split('\t').filter(|field| !field.is_empty());
        let (term, df) = match (fields.next(), fields.next()) {
            (Some(term), Some(df)) => (term, df),
            _ => {
                return Err(Error::MalformedLine {
                    line: line_no,
                    content: line.clone(),
                })
            }
        };

        let df: f64 = df.trim().parse().map_err(|_| Error::InvalidFrequency {
            line: line_no,
            value: df.to_string(),
        })?;

        idfs.insert(term.to_string(), (1.0 + n / df).ln());
    }

    Ok(idfs)
}

/// Count the line terminators in a reader
///
/// `\n`, `\r\n` and a lone `\r` each end one line; trailing text without a
/// terminator is not counted.
pub fn count_lines<R: Read>(reader: R) -> io::Result<usize> {
    let mut reader = io::BufReader::new(reader);
    let mut count = 0;
    let mut prev_cr = false;

    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            break;
        }
        for &byte in chunk {
            match byte {
                b'\n' if prev_cr => {}
                b'\n' | b'\r' => count += 1,
                _ => {}
            }
            prev_cr = byte == b'\r';
        }
        let len = chunk.len();
        reader.consume(len);
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stopwords() {
        let words = read_stopwords(Cursor::new("The\n  and \nOF\n\nthe\n")).unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.contains("the"));
        assert!(words.contains("and"));
        assert!(words.contains("of"));
        assert!(!words.contains(""));
    }

    #[test]
    fn test_read_stopwords_carriage_return_endings() {
        let words = read_stopwords(Cursor::new("the\rand\rof\r")).unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.contains("and"));
    }

    #[test]
    fn test_read_idfs() {
        let idfs = read_idfs(Cursor::new("rust\t10\nthe\t\t1000\nrare\t1\textra\n"), 1000).unwrap();
        assert_eq!(idfs.len(), 3);
        assert!((idfs["rust"] - 101f64.ln()).abs() < 1e-12);
        assert!((idfs["the"] - 2f64.ln()).abs() < 1e-12);
        assert!((idfs["rare"] - 1001f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_read_idfs_malformed_line() {
        let err = read_idfs(Cursor::new("rust\t10\nlonely\n"), 100).unwrap_err();
        match err {
            Error::MalformedLine { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "lonely");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_idfs_invalid_frequency() {
        let err = read_idfs(Cursor::new("rust\tten\n"), 100).unwrap_err();
        assert!(matches!(err, Error::InvalidFrequency { line: 1, ref value } if value == "ten"));
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(Cursor::new("")).unwrap(), 0);
        assert_eq!(count_lines(Cursor::new("a\nb\nc\n")).unwrap(), 3);
        assert_eq!(count_lines(Cursor::new("a\nb")).unwrap(), 1);
        assert_eq!(count_lines(Cursor::new("a\r\nb\rc\n")).unwrap(), 3);
        assert_eq!(count_lines(Cursor::new("\n\n")).unwrap(), 2);
    }

    #[test]
    fn test_count_lines_agrees_with_line_reader() {
        for text in ["a\rb\r\nc\n", "the\rand\rof\r", "x\r\n\r\n\ny\n"] {
            assert_eq!(
                count_lines(Cursor::new(text)).unwrap(),
                LineReader::new(Cursor::new(text)).count(),
                "line models disagree on {text:?}"
            );
        }
    }
}
