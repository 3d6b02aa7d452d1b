use super::pattern::Pattern;
use crate::utils::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct MotifDefinition {
    /// Motif text exactly as read, used for labeling
    pub raw: String,
    /// Uppercase form the pattern was compiled from
    pub normalized: String,
    pub pattern: Pattern,
}

impl MotifDefinition {
    pub fn new(raw: &str) -> Result<Self> {
        let normalized = raw.to_ascii_uppercase();
        let pattern = Pattern::compile(&normalized)?;
        Ok(Self {
            raw: raw.to_string(),
            normalized,
            pattern,
        })
    }

    pub fn len(&self) -> usize {
        self.pattern.width()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn load_motifs(path: &Path) -> Result<Vec<MotifDefinition>> {
    let file = File::open(path).map_err(|source| Error::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_motifs(BufReader::new(file), path)
}

/// Reads one motif per line; surrounding whitespace is ignored and blank lines
/// are skipped.
pub fn parse_motifs<R: BufRead>(reader: R, path: &Path) -> Result<Vec<MotifDefinition>> {
    let mut motifs = Vec::new();
    for (line_index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            reason: format!("line {}: {}", line_index + 1, e),
        })?;
        let motif = line.trim();
        if motif.is_empty() {
            continue;
        }
        motifs.push(MotifDefinition::new(motif)?);
    }

    if motifs.is_empty() {
        log::warn!("No motifs found in {}", path.display());
    }
    Ok(motifs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Vec<MotifDefinition>> {
        parse_motifs(content.as_bytes(), Path::new("motifs.txt"))
    }

    #[test]
    fn motifs_are_read_in_file_order() {
        let motifs = parse("ygcy\nGCAUG\n\n  catag \nYYYYYYYYYY\n").unwrap();
        let raw: Vec<_> = motifs.iter().map(|m| m.raw.as_str()).collect();
        assert_eq!(raw, vec!["ygcy", "GCAUG", "catag", "YYYYYYYYYY"]);
        assert_eq!(motifs[0].normalized, "YGCY");
        assert_eq!(motifs[3].len(), 10);
    }

    #[test]
    fn empty_motif_file_is_allowed() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n \n").unwrap().is_empty());
    }

    #[test]
    fn invalid_motif_fails_the_load() {
        assert!(matches!(
            parse("ATG\nAT!G\n"),
            Err(Error::InvalidBase { base: '!', .. })
        ));
    }

    #[test]
    fn non_ascii_letters_are_not_case_folded_into_bases() {
        assert!(matches!(
            MotifDefinition::new("ß"),
            Err(Error::InvalidBase { base: 'ß', .. })
        ));
        assert!(matches!(
            MotifDefinition::new("ſ"),
            Err(Error::InvalidBase { base: 'ſ', .. })
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let result = load_motifs(Path::new("/nonexistent/motifs.txt"));
        assert!(matches!(result, Err(Error::MissingFile { .. })));
    }
}
