//! Stand-in collision engine: brute-force AABB overlap with begin-contact
//! reporting.
//!
//! A pair is reported on the first tick its rectangles overlap and not again
//! until they have separated. Only pairs where one body's contact-test mask
//! names the other's category are considered.

use std::collections::HashSet;

use lighthouse_sim::{ColliderView, CollisionBackend, ContactPair};

/// Begin-contact reporter.
///
/// Standing on the stairs asks for the next floor once: after a rejection
/// the player has to step off and back on to try again.
#[derive(Debug, Default)]
pub struct AabbContactBackend {
    touching: HashSet<ContactPair>,
}

impl AabbContactBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs currently overlapping.
    pub fn touching(&self) -> usize {
        self.touching.len()
    }
}

/// Order-independent key for a pair.
fn ordered(a: &ColliderView, b: &ColliderView) -> ContactPair {
    if a.entity <= b.entity {
        ContactPair {
            a: a.entity,
            b: b.entity,
        }
    } else {
        ContactPair {
            a: b.entity,
            b: a.entity,
        }
    }
}

impl CollisionBackend for AabbContactBackend {
    fn detect(&mut self, colliders: &[ColliderView]) -> Vec<ContactPair> {
        let mut now = HashSet::new();
        for (i, a) in colliders.iter().enumerate() {
            for b in &colliders[i + 1..] {
                if a.wants_contact_with(b) && a.rect().overlaps(&b.rect()) {
                    now.insert(ordered(a, b));
                }
            }
        }

        let mut began: Vec<ContactPair> = now.difference(&self.touching).copied().collect();
        // HashSet order is unstable; keep the batch deterministic
        began.sort_by_key(|pair| (pair.a, pair.b));
        self.touching = now;
        began
    }
}
