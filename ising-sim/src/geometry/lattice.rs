use super::offsets::NEIGHBOR_OFFSETS;
use crate::error::{Result, SimError};
use crate::rng::RandomSource;

/// Wrap a coordinate that is at most one step outside `[0, lateral_size)`.
///
/// Callers only ever pass `x` in `[-1, lateral_size]`, which is all the
/// unit neighbor offsets can produce.
#[inline]
pub fn periodize(x: isize, lateral_size: usize) -> usize {
    let l = lateral_size as isize;
    debug_assert!((-1..=l).contains(&x), "coordinate {x} out of range for L={l}");
    if x >= l {
        (x - l) as usize
    } else if x < 0 {
        (x + l) as usize
    } else {
        x as usize
    }
}

/// Square `L x L` lattice of ±1 spins with periodic boundaries.
///
/// Sites are stored in row-major order: `(row, col)` lives at
/// `row * lateral_size + col`. Only the crate mutates spins, one site at a
/// time, so every stored value stays ±1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticeState {
    lateral_size: usize,
    spins: Vec<i8>,
}

impl LatticeState {
    /// Draw every site from an unbiased coin flip, in row-major order.
    pub fn random<R: RandomSource>(lateral_size: usize, rng: &mut R) -> Result<Self> {
        let n_spins = n_sites(lateral_size)?;
        let spins = (0..n_spins)
            .map(|_| if rng.next_bool() { 1 } else { -1 })
            .collect();
        Ok(Self {
            lateral_size,
            spins,
        })
    }

    /// Build a lattice from an explicit row-major configuration.
    pub fn from_spins(lateral_size: usize, spins: Vec<i8>) -> Result<Self> {
        let n_spins = n_sites(lateral_size)?;
        if spins.len() != n_spins {
            return Err(SimError::InvalidParameter(format!(
                "expected {n_spins} spins for L={lateral_size}, got {}",
                spins.len()
            )));
        }
        if let Some(bad) = spins.iter().find(|&&s| s != 1 && s != -1) {
            return Err(SimError::InvalidParameter(format!(
                "spin values must be +1 or -1, got {bad}"
            )));
        }
        Ok(Self {
            lateral_size,
            spins,
        })
    }

    #[inline]
    pub fn lateral_size(&self) -> usize {
        self.lateral_size
    }

    #[inline]
    pub fn n_spins(&self) -> usize {
        self.spins.len()
    }

    /// Row-major spin values.
    #[inline]
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i8 {
        self.spins[row * self.lateral_size + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, spin: i8) {
        debug_assert!(spin == 1 || spin == -1);
        self.spins[row * self.lateral_size + col] = spin;
    }

    /// Coordinates of the site displaced by a unit offset from `(row, col)`.
    #[inline]
    pub(crate) fn neighbor(
        &self,
        row: usize,
        col: usize,
        d_row: isize,
        d_col: isize,
    ) -> (usize, usize) {
        let l = self.lateral_size;
        let n_row = if d_row == 0 {
            row
        } else {
            periodize(row as isize + d_row, l)
        };
        let n_col = if d_col == 0 {
            col
        } else {
            periodize(col as isize + d_col, l)
        };
        (n_row, n_col)
    }

    /// Spins of the four nearest neighbors, in [`NEIGHBOR_OFFSETS`] order.
    #[inline]
    pub fn neighbor_spins(&self, row: usize, col: usize) -> impl Iterator<Item = i8> + '_ {
        NEIGHBOR_OFFSETS.iter().map(move |&(d_row, d_col)| {
            let (n_row, n_col) = self.neighbor(row, col, d_row, d_col);
            self.get(n_row, n_col)
        })
    }

    pub fn spin_sum(&self) -> i64 {
        self.spins.iter().map(|&s| s as i64).sum()
    }

    /// Comma-separated spins in row-major order, e.g. `1,-1,-1,1`.
    pub fn serialize(&self) -> String {
        self.spins
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn n_sites(lateral_size: usize) -> Result<usize> {
    if lateral_size == 0 {
        return Err(SimError::InvalidParameter(
            "lateral_size must be >= 1".to_string(),
        ));
    }
    lateral_size.checked_mul(lateral_size).ok_or_else(|| {
        SimError::InvalidParameter(format!("lateral_size {lateral_size} squared overflows"))
    })
}
