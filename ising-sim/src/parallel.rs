use rayon::prelude::*;

/// Run `body` once per replica, optionally in parallel, keeping replica order
/// in the output.
///
/// Each call gets exclusive access to one replica, so replicas never share
/// a lattice or a random stream. When `sequential` is true the replicas are
/// processed on the current thread without touching the rayon pool.
pub fn par_over_replicas<T, O>(
    replicas: &mut [T],
    sequential: bool,
    body: impl Fn(usize, &mut T) -> O + Send + Sync,
) -> Vec<O>
where
    T: Send,
    O: Send,
{
    if sequential {
        replicas
            .iter_mut()
            .enumerate()
            .map(|(i, r)| body(i, r))
            .collect()
    } else {
        replicas
            .par_iter_mut()
            .enumerate()
            .map(|(i, r)| body(i, r))
            .collect()
    }
}
