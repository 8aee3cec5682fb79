use crate::geometry::{LatticeState, FORWARD_OFFSETS};

/// Energy per spin of the current configuration.
///
/// `E = -J * sum_<ij> s_i s_j - H * sum_i s_i`, divided by `L^2`. Bonds are
/// visited through the forward (East, South) neighbors so each is counted
/// once; on `L = 2` the two bonds joining a pair are both counted, matching
/// the four-neighbor sum used by the flip energy.
///
/// On `L = 1` the single forward bond pairs the site with itself, so the bond
/// term is `-2J` whatever the spin and a flip leaves it unchanged, while
/// [`MetropolisEngine::energy_change`](crate::MetropolisEngine::energy_change)
/// still reports `8J` for the bonds. Differences of this value do not track
/// accepted flip energies on a 1x1 lattice.
pub fn energy_per_spin(lattice: &LatticeState, pair_interaction: f64, external_field: f64) -> f64 {
    let l = lattice.lateral_size();
    let mut bond_sum = 0i64;

    for row in 0..l {
        for col in 0..l {
            let si = lattice.get(row, col) as i64;
            for &(d_row, d_col) in FORWARD_OFFSETS.iter() {
                let (n_row, n_col) = lattice.neighbor(row, col, d_row, d_col);
                bond_sum += si * lattice.get(n_row, n_col) as i64;
            }
        }
    }

    let total = -pair_interaction * bond_sum as f64 - external_field * lattice.spin_sum() as f64;
    total / lattice.n_spins() as f64
}
