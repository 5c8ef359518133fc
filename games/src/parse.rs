//! Reading payoff matrices from text
//!
//! One row per line, entries separated by whitespace or commas. Blank lines
//! and everything after a `#` are ignored.

use std::io::Read;

use minimax_engine::Matrix;

use crate::error::ParseError;

pub fn parse_matrix(text: &str) -> Result<Matrix, ParseError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or("");
        let row = content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<f64>().map_err(|_| ParseError::Number {
                    line: idx + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, ParseError>>()?;
        if !row.is_empty() {
            rows.push(row);
        }
    }
    let matrix = Matrix::from_rows(&rows)?;
    log::debug!("parsed {}x{} payoff matrix", matrix.rows(), matrix.cols());
    Ok(matrix)
}

pub fn read_matrix<R: Read>(mut reader: R) -> Result<Matrix, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_matrix(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_engine::MatrixError;
    use std::io::Cursor;

    #[test]
    fn test_parse_whitespace_and_commas() {
        let m = parse_matrix("  1 2 \n\n3,4\n").unwrap();
        assert_eq!(m, Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap());
    }

    #[test]
    fn test_comments_ignored() {
        let m = parse_matrix("# rock paper scissors\n0 -1 1 # rock\n1 0 -1\n-1 1 0\n").unwrap();
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m[(0, 1)], -1.0);
    }

    #[test]
    fn test_bad_token_reports_line() {
        match parse_matrix("1 2\n3 x\n") {
            Err(ParseError::Number { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("expected number error, got {:?}", other),
        }
    }

    #[test]
    fn test_ragged_and_empty() {
        assert!(matches!(
            parse_matrix("1 2\n3\n"),
            Err(ParseError::Matrix(MatrixError::Ragged { row: 1, expected: 2, found: 1 }))
        ));
        assert!(matches!(
            parse_matrix("\n# nothing\n"),
            Err(ParseError::Matrix(MatrixError::Empty))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            parse_matrix("1 inf\n"),
            Err(ParseError::Matrix(MatrixError::NonFinite { row: 0, col: 1 }))
        ));
    }

    #[test]
    fn test_read_matrix() {
        let m = read_matrix(Cursor::new(b"1 -1\n-1 1\n")).unwrap();
        assert_eq!(m.shape(), (2, 2));
    }
}
