//! IUPAC nucleotide codes.

/// What a single motif character stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseCode {
    /// A character matched as itself
    Literal(char),
    /// An ambiguity code standing for several concrete bases, listed in both cases
    Ambiguous(&'static str),
}

impl BaseCode {
    pub fn bases(&self) -> Vec<char> {
        match self {
            BaseCode::Literal(base) => vec![*base],
            BaseCode::Ambiguous(bases) => bases.chars().collect(),
        }
    }
}

/// Resolves a motif character, case-insensitively. Returns `None` for characters
/// that are neither a base, an ambiguity code, nor whitespace.
pub fn resolve(code: char) -> Option<BaseCode> {
    let resolved = match code.to_ascii_uppercase() {
        base @ ('A' | 'C' | 'G' | 'T') => BaseCode::Literal(base),
        'W' => BaseCode::Ambiguous("ATat"),
        'S' => BaseCode::Ambiguous("CGcg"),
        'M' => BaseCode::Ambiguous("ACac"),
        'K' => BaseCode::Ambiguous("GTgt"),
        'R' => BaseCode::Ambiguous("AGag"),
        'Y' => BaseCode::Ambiguous("CTct"),
        'B' => BaseCode::Ambiguous("CGTcgt"),
        'D' => BaseCode::Ambiguous("AGTagt"),
        'H' => BaseCode::Ambiguous("ACTact"),
        'V' => BaseCode::Ambiguous("ACGacg"),
        'N' => BaseCode::Ambiguous("ACGTacgt"),
        // RNA motifs are matched against DNA sequence
        'U' => BaseCode::Ambiguous("Tt"),
        c if c.is_whitespace() => BaseCode::Literal(c),
        _ => return None,
    };
    Some(resolved)
}
