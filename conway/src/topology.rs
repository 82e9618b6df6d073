// topology.rs - Moore neighbourhood with wraparound on both axes

/// Row/column deltas of the eight neighbours, centre excluded.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Folds `value` into `0..n`, negative values included.
#[inline]
pub fn wrap(value: isize, n: usize) -> usize {
    value.rem_euclid(n as isize) as usize
}

/// The eight wrapped neighbours of `(row, column)` on a `rows` x `columns` torus.
///
/// On boards narrower than three cells the same coordinate can appear more
/// than once; each occurrence counts as a separate neighbour.
pub fn neighbors(row: usize, column: usize, rows: usize, columns: usize) -> [(usize, usize); 8] {
    let (row, column) = (row as isize, column as isize);
    NEIGHBOR_OFFSETS.map(|(dr, dc)| (wrap(row + dr, rows), wrap(column + dc, columns)))
}
