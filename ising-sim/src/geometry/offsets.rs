/// Nearest-neighbor displacements `(d_row, d_col)` in summation order:
/// East, South, West, North.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Forward half of [`NEIGHBOR_OFFSETS`] (East, South). Visiting only these
/// counts every bond of the torus exactly once.
pub const FORWARD_OFFSETS: [(isize, isize); 2] = [(0, 1), (1, 0)];
