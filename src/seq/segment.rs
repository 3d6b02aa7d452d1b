use super::record::Sequence;
use crate::utils::{Error, Result};
use itertools::Itertools;

/// Half-open interval of sequence offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Exon and flanking introns of a sequence. The three spans are adjacent and
/// together cover the whole sequence; either intron may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneModel {
    pub intron_before: Span,
    pub exon: Span,
    pub intron_after: Span,
}

impl GeneModel {
    pub fn len(&self) -> usize {
        self.intron_after.end
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Locates the single run of uppercase bases. Sequences with no uppercase base
/// or with more than one uppercase run are rejected.
pub fn segment(sequence: &Sequence) -> Result<GeneModel> {
    let exons = sequence
        .bases
        .bytes()
        .enumerate()
        .chunk_by(|(_, base)| base.is_ascii_uppercase())
        .into_iter()
        .filter(|(is_exon, _)| *is_exon)
        .filter_map(|(_, run)| run.map(|(pos, _)| pos).minmax().into_option())
        .map(|(first, last)| Span::new(first, last + 1))
        .collect_vec();

    let exon = match exons.as_slice() {
        [exon] => *exon,
        [] => {
            return Err(Error::MalformedSequence {
                id: sequence.id.clone(),
                reason: "no exon (uppercase bases) found".to_string(),
            })
        }
        _ => {
            return Err(Error::MalformedSequence {
                id: sequence.id.clone(),
                reason: format!(
                    "expected a single exon but found {} at {}",
                    exons.len(),
                    exons
                        .iter()
                        .map(|span| format!("{}-{}", span.start, span.end))
                        .join(", ")
                ),
            })
        }
    };

    Ok(GeneModel {
        intron_before: Span::new(0, exon.start),
        exon,
        intron_after: Span::new(exon.end, sequence.len()),
    })
}
