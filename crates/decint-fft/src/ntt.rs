//! Forward and inverse number-theoretic transform.
//!
//! Iterative Cooley-Tukey with a bit-reversal permutation up front. The
//! inverse reuses the forward pass: reverse the tail, transform, scale by
//! n^(−1).

use crate::field;

/// In-place forward transform. `roots` is the twiddle table for `data.len()`.
pub fn forward(data: &mut [u64], roots: &[u64]) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    debug_assert!(n.is_power_of_two());
    debug_assert_eq!(roots.len(), n / 2);

    bit_reverse_permutation(data);

    let mut size = 2;
    while size <= n {
        let half = size / 2;
        let step = n / size;
        for start in (0..n).step_by(size) {
            for j in 0..half {
                let w = roots[j * step];
                let u = data[start + j];
                let t = field::mul(data[start + j + half], w);
                data[start + j] = field::add(u, t);
                data[start + j + half] = field::sub(u, t);
            }
        }
        size *= 2;
    }
}

/// In-place inverse transform.
pub fn inverse(data: &mut [u64], roots: &[u64]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    data[1..].reverse();
    forward(data, roots);

    let inv_n = field::inv(n as u64);
    for x in data.iter_mut() {
        *x = field::mul(*x, inv_n);
    }
}

fn bit_reverse_permutation(data: &mut [u64]) {
    let n = data.len();
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            data.swap(i, j);
        }
    }
}
