use serde::Serialize;

/// One glyph placement: column `x`, row `y`, and the literal glyph text.
///
/// The glyph is stored exactly as it appeared in the input. It is usually a
/// single character, but longer strings are kept whole and occupy one cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Triplet {
    pub x: usize,
    pub glyph: String,
    pub y: usize,
}

impl Triplet {
    pub fn new(x: usize, glyph: impl Into<String>, y: usize) -> Self {
        Self {
            x,
            glyph: glyph.into(),
            y,
        }
    }
}

impl std::fmt::Display for Triplet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, '{}', {})", self.x, self.glyph, self.y)
    }
}

/// Bracketed, comma-separated display of a run of triplets.
#[derive(Debug, Clone, Copy)]
pub struct TripletList<'a>(pub &'a [Triplet]);

impl<'a> TripletList<'a> {
    /// The first `n` triplets, or all of them when there are fewer.
    pub fn head(triplets: &'a [Triplet], n: usize) -> Self {
        Self(&triplets[..n.min(triplets.len())])
    }

    /// The last `n` triplets, or all of them when there are fewer.
    pub fn tail(triplets: &'a [Triplet], n: usize) -> Self {
        Self(&triplets[triplets.len().saturating_sub(n)..])
    }

    pub fn as_slice(&self) -> &'a [Triplet] {
        self.0
    }
}

impl std::fmt::Display for TripletList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, triplet) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", triplet)?;
        }
        f.write_str("]")
    }
}
