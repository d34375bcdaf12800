//! UTR (Unique Transaction Reference) generator.
//!
//! References are 8 bytes from a cryptographically secure source rendered
//! as 16 upper-case hex characters. There is no registry of issued
//! references and no dedup check: with 64 random bits a collision is
//! treated as impossible for the lab's purposes.

use rand::{RngCore, rngs::OsRng};
use upilab_types::{Reference, constants::REFERENCE_BYTES};

/// Draw a fresh reference from the operating system CSPRNG.
#[must_use]
pub fn generate_reference() -> Reference {
    let mut bytes = [0u8; REFERENCE_BYTES];
    OsRng.fill_bytes(&mut bytes);
    Reference::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn reference_shape() {
        for _ in 0..100 {
            let r = generate_reference();
            assert_eq!(r.as_str().len(), 16);
            assert!(Reference::is_well_formed(r.as_str()), "bad token: {r}");
        }
    }

    #[test]
    fn references_differ() {
        let a = generate_reference();
        let b = generate_reference();
        assert_ne!(a, b);
    }

    #[test]
    fn no_collisions_in_bulk() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate_reference()));
        }
    }

    #[test]
    fn distinct_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| (0..1_000).map(|_| generate_reference()).collect::<Vec<_>>())
            })
            .collect();
        let mut seen = HashSet::new();
        for handle in handles {
            for r in handle.join().unwrap() {
                assert!(seen.insert(r));
            }
        }
    }
}
