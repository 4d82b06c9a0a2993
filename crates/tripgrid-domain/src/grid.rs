use crate::error::GridError;
use crate::triplet::Triplet;

/// Contents of a cell no triplet has touched.
pub const BLANK_CELL: &str = " ";

/// Placeholder glyph (U+2591 LIGHT SHADE) shown as blank space in rendered output.
pub const DEFAULT_FILLER: char = '\u{2591}';

/// Largest grid, in cells, that will be allocated (a 4096 x 4096 canvas).
pub const MAX_CELLS: usize = 1 << 24;

/// Bounding-box grid of glyphs, borrowed from the triplets that placed them.
///
/// Dimensions are `max(x) + 1` by `max(y) + 1`. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid<'a> {
    width: usize,
    height: usize,
    cells: Vec<&'a str>,
}

impl<'a> GlyphGrid<'a> {
    /// Places every triplet in input order; a later triplet at the same
    /// coordinate replaces the earlier glyph.
    pub fn from_triplets(triplets: &'a [Triplet]) -> Result<Self, GridError> {
        let max_x = triplets
            .iter()
            .map(|t| t.x)
            .max()
            .ok_or(GridError::EmptyInput)?;
        let max_y = triplets
            .iter()
            .map(|t| t.y)
            .max()
            .ok_or(GridError::EmptyInput)?;

        let width = max_x.saturating_add(1);
        let height = max_y.saturating_add(1);
        let too_large = GridError::TooLarge { width, height };
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= MAX_CELLS)
            .ok_or_else(|| too_large.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, BLANK_CELL);
        for t in triplets {
            cells[t.y * width + t.x] = t.glyph.as_str();
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[&'a str]> {
        self.cells.chunks(self.width)
    }

    /// Joins each row into a line, turning every `filler` character into a space.
    ///
    /// Only the text is rewritten; the stored cells keep the filler glyph.
    pub fn render(&self, filler: char) -> Rendered {
        let lines = self
            .rows()
            .map(|row| {
                row.iter()
                    .flat_map(|cell| cell.chars())
                    .map(|c| if c == filler { ' ' } else { c })
                    .collect::<String>()
            })
            .collect();

        Rendered {
            lines,
            width: self.width,
            height: self.height,
        }
    }
}

/// Output of [`GlyphGrid::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub lines: Vec<String>,
    pub width: usize,
    pub height: usize,
}

impl Rendered {
    /// Rows joined with `\n`, without a trailing newline.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}
