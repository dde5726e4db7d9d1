//! Reading and writing view-pair lists.
//!
//! A pair list holds one line per anchor view: `I J K ...` declares the pairs
//! `(I, J)`, `(I, K)` and so on. Blank lines are ignored. Pairs are stored as
//! `(min, max)`, so a list that mentions the same pair twice in either
//! orientation yields it once.

use std::{
    collections::BTreeSet,
    io::{self, BufRead, Write},
};

use tracing::{debug, instrument};

pub use crate::error::{PairFileError, PairFileErrorCode};

/// Parses a pair list into sorted, deduplicated `(min, max)` pairs.
///
/// # Errors
/// Returns [`PairFileError`] when the reader fails, a line has fewer than two
/// ids, an id is not a `u32`, or a view is paired with itself.
///
/// # Examples
/// ```
/// use viewgraph_core::read_pairs;
///
/// let pairs = read_pairs("0 1 2\n\n2 1\n".as_bytes())?;
/// assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
/// # Ok::<(), viewgraph_core::PairFileError>(())
/// ```
#[instrument(name = "viewgraph.read_pairs", level = "debug", skip(reader), err)]
pub fn read_pairs<R: BufRead>(reader: R) -> Result<Vec<(u32, u32)>, PairFileError> {
    let mut pairs = BTreeSet::new();
    for (offset, line) in reader.lines().enumerate() {
        let line_number = offset + 1;
        let line = line.map_err(|source| PairFileError::Io { source })?;
        let ids = parse_line(&line, line_number)?;
        let Some((&anchor, partners)) = ids.split_first() else {
            continue;
        };
        for &partner in partners {
            if partner == anchor {
                return Err(PairFileError::SelfPair {
                    line: line_number,
                    view: anchor,
                });
            }
            pairs.insert((anchor.min(partner), anchor.max(partner)));
        }
    }
    debug!(pairs = pairs.len(), "pair list loaded");
    Ok(pairs.into_iter().collect())
}

fn parse_line(line: &str, line_number: usize) -> Result<Vec<u32>, PairFileError> {
    let ids = line
        .split_whitespace()
        .map(|token| {
            token.parse::<u32>().map_err(|_| PairFileError::InvalidId {
                line: line_number,
                token: token.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if ids.len() == 1 {
        return Err(PairFileError::TooFewIds {
            line: line_number,
            found: 1,
        });
    }
    Ok(ids)
}

/// Writes one `I J` line per pair, in the order given.
///
/// # Errors
/// Returns any error raised by `writer`.
///
/// # Examples
/// ```
/// use viewgraph_core::write_pairs;
///
/// let mut buffer = Vec::new();
/// write_pairs(&mut buffer, &[(0, 1), (1, 2)])?;
/// assert_eq!(String::from_utf8_lossy(&buffer), "0 1\n1 2\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_pairs<W: Write>(mut writer: W, pairs: &[(u32, u32)]) -> io::Result<()> {
    for (first, second) in pairs {
        writeln!(writer, "{first} {second}")?;
    }
    Ok(())
}
