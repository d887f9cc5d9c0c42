//! Card instances - uniquely identified copies of catalog templates.
//!
//! Stamping attaches a fresh [`InstanceId`] to a template, producing a
//! card that can live in a deck, hand, or battlefield cell. Two instances
//! of the same template carry equal template fields but remain distinct
//! entities; removal and targeting always go through the instance id.
//!
//! Id generation is injected so tests get stable, predictable ids while
//! production callers can use a seeded random stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::template::CardTemplate;

/// Unique identifier for a stamped card instance.
///
/// Opaque and globally unique for the lifetime of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Injected source of fresh instance ids.
///
/// Every generator hands out strictly unique ids; the modes differ only
/// in where the sequence starts.
#[derive(Clone, Debug)]
pub struct InstanceIdGen {
    next: u64,
}

impl InstanceIdGen {
    /// Counter-based generator starting at 1. Use in tests for stable ids.
    #[must_use]
    pub fn sequential() -> Self {
        Self { next: 1 }
    }

    /// Generator whose sequence starts at a seeded random offset.
    ///
    /// The same seed always produces the same id stream.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self { next: rng.gen() }
    }

    /// Hand out the next unique id.
    pub fn next_id(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

impl Default for InstanceIdGen {
    fn default() -> Self {
        Self::sequential()
    }
}

/// A stamped card: a template plus a unique instance identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique identity for this copy.
    pub instance_id: InstanceId,

    /// The shared template this copy was stamped from.
    pub template: CardTemplate,
}

impl CardInstance {
    /// Stamp a template into a fresh instance.
    #[must_use]
    pub fn stamp(template: &CardTemplate, ids: &mut InstanceIdGen) -> Self {
        Self {
            instance_id: ids.next_id(),
            template: template.clone(),
        }
    }
}
