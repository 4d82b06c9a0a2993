use crate::error::Axis;
use crate::error::GridError;
use crate::triplet::Triplet;

/// Tokens per triplet: x, glyph, y.
pub const GROUP_SIZE: usize = 3;

/// Groups tokens into `(x, glyph, y)` triplets.
///
/// Fails on the first malformed group; no partial result is returned.
pub fn parse_triplets<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Triplet>, GridError> {
    if tokens.len() % GROUP_SIZE != 0 {
        return Err(GridError::TokenCount {
            count: tokens.len(),
        });
    }

    tokens
        .chunks_exact(GROUP_SIZE)
        .enumerate()
        .map(|(group, chunk)| {
            Ok(Triplet {
                x: parse_coordinate(group, Axis::X, chunk[0].as_ref())?,
                glyph: chunk[1].as_ref().to_string(),
                y: parse_coordinate(group, Axis::Y, chunk[2].as_ref())?,
            })
        })
        .collect()
}

fn parse_coordinate(group: usize, axis: Axis, token: &str) -> Result<usize, GridError> {
    let value: i64 = token.parse().map_err(|_| GridError::InvalidInteger {
        group,
        axis,
        token: token.to_string(),
    })?;
    usize::try_from(value).map_err(|_| GridError::NegativeCoordinate { group, axis, value })
}
