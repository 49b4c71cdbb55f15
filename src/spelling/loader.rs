//! Populate dictionaries from word lists with one word per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::spelling::dictionary::Dictionary;

/// Load every word of the file at `path` into `dictionary`.
///
/// Surrounding whitespace is trimmed and blank lines are skipped. Returns the
/// number of words that were new to the dictionary, so repeated lines (in any
/// letter case) are not counted twice.
pub fn load_dictionary<D, P>(dictionary: &mut D, path: P) -> Result<usize>
where
    D: Dictionary,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)?;
    let added = load_from_reader(dictionary, BufReader::new(file))?;
    info!(
        "loaded {added} new words from {} ({} total)",
        path.display(),
        dictionary.size()
    );
    Ok(added)
}

/// Load words from any buffered reader.
pub fn load_from_reader<D, R>(dictionary: &mut D, reader: R) -> Result<usize>
where
    D: Dictionary,
    R: BufRead,
{
    let mut added = 0;
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if dictionary.add_word(word)? {
            added += 1;
        }
    }
    Ok(added)
}
