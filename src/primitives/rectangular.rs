use crate::errors::{Result, TopologyError};
use super::location::Location;
use super::topology::{DirectedEdge, Graphable, Topology};

/// Rectangular matrix-based topology with 2D (row, column) coordinates
///
/// The matrix always has at least one row and all rows share one length.
/// Edges connect every cell to its Moore neighborhood, clipped at the borders.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangularTopology<T> {
    matrix: Vec<Vec<T>>,
}

impl<T> RectangularTopology<T> {
    /// Validate and wrap a row-major matrix of tiles
    pub fn new(matrix: Vec<Vec<T>>) -> Result<Self> {
        let Some(first) = matrix.first() else {
            return Err(TopologyError::EmptyMatrix);
        };
        let expected = first.len();
        if let Some((row, found)) = matrix
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(TopologyError::RaggedRow { row, expected, found });
        }

        Ok(Self { matrix })
    }

    /// Location for a (row, column) index pair
    pub fn location(row: usize, col: usize) -> Location {
        Location::xy(row as i64, col as i64)
    }

    pub fn rows(&self) -> usize {
        self.matrix.len()
    }

    pub fn cols(&self) -> usize {
        self.matrix[0].len()
    }

    pub fn matrix(&self) -> &[Vec<T>] {
        &self.matrix
    }

    pub fn into_matrix(self) -> Vec<Vec<T>> {
        self.matrix
    }

    /// True for 2D locations inside the matrix
    pub fn contains(&self, loc: &Location) -> bool {
        self.index(loc).is_ok()
    }

    /// Matrix indices of `loc`
    fn index(&self, loc: &Location) -> Result<(usize, usize)> {
        self.check_location(loc)?;
        let out_of_bounds = || TopologyError::OutOfBounds { location: loc.clone() };

        let row = loc.coords()[0];
        let col = loc.coords()[1];
        let row = usize::try_from(row).map_err(|_| out_of_bounds())?;
        let col = usize::try_from(col).map_err(|_| out_of_bounds())?;
        if row >= self.rows() || col >= self.cols() {
            return Err(out_of_bounds());
        }
        Ok((row, col))
    }
}

impl<T> Topology for RectangularTopology<T> {
    type Tile = T;

    fn dimensions(&self) -> usize {
        2
    }

    fn get(&self, loc: &Location) -> Result<&T> {
        let (row, col) = self.index(loc)?;
        Ok(&self.matrix[row][col])
    }

    fn set(&mut self, loc: &Location, tile: T) -> Result<()> {
        let (row, col) = self.index(loc)?;
        self.matrix[row][col] = tile;
        Ok(())
    }

    fn as_graphable(&self) -> Option<&dyn Graphable<Tile = T>> {
        Some(self)
    }
}

impl<T> Graphable for RectangularTopology<T> {
    fn get_edges(&self, loc: &Location) -> Result<Vec<DirectedEdge<'_, T>>> {
        let (row, col) = self.index(loc)?;
        let from_tile = &self.matrix[row][col];

        let mut edges = Vec::with_capacity(8);
        for r in row.saturating_sub(1)..(row + 2).min(self.rows()) {
            for c in col.saturating_sub(1)..(col + 2).min(self.cols()) {
                if r == row && c == col {
                    continue;
                }
                edges.push(DirectedEdge {
                    from_loc: loc.clone(),
                    to_loc: Self::location(r, c),
                    from_tile,
                    to_tile: &self.matrix[r][c],
                });
            }
        }

        Ok(edges)
    }

    fn all_locations(&self) -> Box<dyn Iterator<Item = Location> + '_> {
        let cols = self.cols();
        Box::new(
            (0..self.rows()).flat_map(move |row| (0..cols).map(move |col| Self::location(row, col))),
        )
    }
}
