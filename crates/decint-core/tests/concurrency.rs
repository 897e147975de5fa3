//! Threading contract tests.
//!
//! Distinct integers on distinct threads are independent even though the
//! kernels lean on thread-local scratch, and read-only access to a shared
//! integer needs no synchronization.

use std::sync::Arc;
use std::thread;

use decint_core::DecUint;

fn dec(s: &str) -> DecUint {
    s.parse().expect("decimal operand")
}

#[test]
fn disjoint_values_compute_in_parallel() {
    let handles: Vec<_> = (0..8)
        .map(|t| {
            thread::spawn(move || {
                // Big enough to pull each thread through the convolution
                // engine and its own twiddle cache.
                let a = dec(&format!("{}", t + 2).repeat(700));
                let b = dec(&"987654321".repeat(80));
                let product = &a * &b;
                let (q, r) = product.divmod(&b);
                assert_eq!(q, a);
                assert!(r.is_zero());
                product.to_decimal().len()
            })
        })
        .collect();
    for handle in handles {
        let emitted_len = handle.join().expect("worker thread");
        assert!(emitted_len > 700);
    }
}

#[test]
fn shared_value_supports_concurrent_reads() {
    let shared = Arc::new(dec(&"123456789".repeat(200)));
    let expected = shared.to_decimal();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            let expected = expected.clone();
            thread::spawn(move || {
                // Compare, emit to an owned string, and borrow the
                // thread-local emission buffer; all read-only.
                assert_eq!(shared.to_decimal(), expected);
                shared.with_decimal_str(|s| assert_eq!(s, expected));
                assert!(*shared > DecUint::new());
                assert_eq!(shared.digit_len(), expected.len());
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("reader thread");
    }
}

#[test]
fn emission_buffer_is_per_thread() {
    // Each thread's borrowed view reflects its own emission, never a
    // neighbor's.
    let handles: Vec<_> = (1..=4)
        .map(|t| {
            thread::spawn(move || {
                let v = dec(&t.to_string().repeat(50));
                for _ in 0..100 {
                    v.with_decimal_str(|s| {
                        assert_eq!(s.len(), 50);
                        assert!(s.bytes().all(|b| b == b'0' + t as u8));
                    });
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("emitter thread");
    }
}
