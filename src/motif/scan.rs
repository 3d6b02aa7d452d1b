use super::definition::MotifDefinition;
use super::pattern::Pattern;
use crate::seq::Sequence;

/// One match of a motif within a sequence; `len` is the motif length, not the
/// length of its expanded pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotifOccurrence {
    pub motif_index: usize,
    pub sequence_index: usize,
    pub start: usize,
    pub len: usize,
}

impl MotifOccurrence {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Returns the start offsets of every match of `pattern` in `seq`, in ascending
/// order. Overlapping matches are all reported: scanning resumes one character
/// after the start of the previous match.
pub fn find_all(pattern: &Pattern, seq: &str) -> Vec<usize> {
    let target = seq.to_ascii_uppercase();
    let mut starts = Vec::new();
    let mut pos = 0;
    while pos < target.len() {
        let Some(hit) = pattern.regex().find_at(&target, pos) else {
            break;
        };
        starts.push(hit.start());
        let step = target[hit.start()..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        pos = hit.start() + step;
    }
    starts
}

/// Scans one sequence for every motif. Occurrences are grouped by motif, in motif
/// order, and sorted by start within each motif.
pub fn scan_sequence(
    motifs: &[MotifDefinition],
    sequence_index: usize,
    sequence: &Sequence,
) -> Vec<MotifOccurrence> {
    let mut occurrences = Vec::new();
    for (motif_index, motif) in motifs.iter().enumerate() {
        let starts = find_all(&motif.pattern, &sequence.bases);
        log::debug!(
            "{}: {} occurrence(s) of {}",
            sequence.id,
            starts.len(),
            motif.raw
        );
        occurrences.extend(starts.into_iter().map(|start| MotifOccurrence {
            motif_index,
            sequence_index,
            start,
            len: motif.len(),
        }));
    }
    occurrences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(motif: &str, seq: &str) -> Vec<usize> {
        find_all(&Pattern::compile(motif).unwrap(), seq)
    }

    fn literal_offsets(motif: &str, seq: &str) -> Vec<usize> {
        let motif = motif.to_uppercase();
        let seq = seq.to_uppercase();
        (0..seq.len())
            .filter(|&i| seq[i..].starts_with(&motif))
            .collect()
    }

    #[test]
    fn overlapping_matches_are_reported() {
        assert_eq!(find("AA", "AAAA"), vec![0, 1, 2]);
        assert_eq!(find("ATA", "ATATATA"), vec![0, 2, 4]);
    }

    #[test]
    fn literal_motifs_match_substring_offsets() {
        let cases = [
            ("CAT", "ccatCATgcatcat"),
            ("gg", "GGGgaggg"),
            ("TTT", "acgt"),
            ("A", "aAtA"),
        ];
        for (motif, seq) in cases {
            assert_eq!(find(motif, seq), literal_offsets(motif, seq), "{motif} in {seq}");
        }
    }

    #[test]
    fn ambiguous_motif_requires_every_position() {
        // No offset has C/T followed by G, C and C/T
        assert_eq!(find("YGCY", "CGCGCGCA"), Vec::<usize>::new());
        assert_eq!(find("YGCY", "TGCTGCC"), vec![0, 3]);
        assert_eq!(find("YGCY", "tgctgcc"), vec![0, 3]);
    }

    #[test]
    fn no_match_gives_empty_result() {
        assert!(find("GATTACA", "").is_empty());
        assert!(find("GATTACA", "GATTAC").is_empty());
    }

    #[test]
    fn scanning_is_repeatable() {
        let pattern = Pattern::compile("NN").unwrap();
        assert_eq!(find_all(&pattern, "acgt"), find_all(&pattern, "acgt"));
        assert_eq!(find_all(&pattern, "acgt"), vec![0, 1, 2]);
    }

    #[test]
    fn occurrences_carry_motif_length() {
        let motifs = vec![
            MotifDefinition::new("ygcy").unwrap(),
            MotifDefinition::new("AA").unwrap(),
        ];
        let sequence = Sequence::new("s1", "aaTGCTaa");
        let occurrences = scan_sequence(&motifs, 3, &sequence);
        let summary: Vec<_> = occurrences
            .iter()
            .map(|o| (o.motif_index, o.start, o.end()))
            .collect();
        assert_eq!(summary, vec![(0, 2, 6), (1, 0, 2), (1, 6, 8)]);
        assert!(occurrences.iter().all(|o| o.sequence_index == 3));
    }
}
