use crate::utils::{Error, Result};
use bio::io::fasta;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One FASTA record. Exon bases are uppercase and intron bases lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    /// Header line without the leading '>'
    pub id: String,
    pub bases: String,
}

impl Sequence {
    pub fn new(id: impl Into<String>, bases: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bases: bases.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

pub fn load_sequences(path: &Path) -> Result<Vec<Sequence>> {
    let file = File::open(path).map_err(|source| Error::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sequences(file, path)
}

/// Parses FASTA records; sequence lines of a record are joined, so line breaks
/// within a record carry no meaning.
pub fn parse_sequences<R: Read>(reader: R, path: &Path) -> Result<Vec<Sequence>> {
    let parse_error = |reason: String| Error::Parse {
        path: path.to_path_buf(),
        reason,
    };

    let mut sequences = Vec::new();
    for record in fasta::Reader::new(reader).records() {
        let record = record.map_err(|e| parse_error(e.to_string()))?;
        let bases = std::str::from_utf8(record.seq())
            .map_err(|e| parse_error(format!("record {}: {}", record.id(), e)))?
            .trim_end()
            .to_string();
        let id = match record.desc() {
            Some(desc) => format!("{} {}", record.id(), desc),
            None => record.id().to_string(),
        };
        sequences.push(Sequence { id, bases });
    }

    if sequences.is_empty() {
        log::warn!("No sequences found in {}", path.display());
    }
    Ok(sequences)
}
