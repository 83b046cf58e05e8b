//! Actor addressing types
//!
//! Two ways to name a destination: a concrete [`ActorAddress`] (framework
//! instance + local actor), or a [`RemoteActorName`] that a remote framework
//! resolves at delivery time.

use serde::{Deserialize, Serialize};
use zerocopy::{AsBytes, FromBytes, FromZeroes};

/// Concrete actor address (8 bytes)
///
/// Identifies one actor uniquely within the distributed system: the
/// `framework_id` names a running framework instance, the `actor_id` names
/// a local actor inside it.
///
/// **CRITICAL**: the field layout IS the wire layout. Two naturally-aligned
/// `u32` fields give exactly 8 bytes with zero padding; the codec copies
/// this struct to and from the wire via its zerocopy representation, so the
/// width must stay constant and identical on both ends of a connection.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsBytes, FromBytes, FromZeroes)]
pub struct ActorAddress {
    /// Framework instance hosting the actor
    pub framework_id: u32,
    /// Actor identifier local to that framework
    pub actor_id: u32,
}
// Total: EXACTLY 8 bytes with zero padding.

impl ActorAddress {
    /// Encoded address width in bytes
    pub const SIZE: usize = 8;

    /// Create an address from its two components
    pub fn new(framework_id: u32, actor_id: u32) -> Self {
        Self {
            framework_id,
            actor_id,
        }
    }
}

/// Destination framework plus a human-readable actor name
///
/// Used when the sender does not know the destination's local actor id.
/// The name is resolved by the *receiving* framework at delivery time,
/// never by the sender. The wire format bounds the name to
/// [`MAX_ACTOR_NAME`](crate::constants::MAX_ACTOR_NAME) bytes; the bound is
/// enforced when the name is encoded, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteActorName {
    /// Framework instance that will resolve the name
    pub framework_id: u32,
    /// Actor name to resolve inside that framework
    pub actor_name: String,
}

impl RemoteActorName {
    /// Create a named destination
    pub fn new(framework_id: u32, actor_name: impl Into<String>) -> Self {
        Self {
            framework_id,
            actor_name: actor_name.into(),
        }
    }
}
