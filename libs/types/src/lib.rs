//! # Mail Types Library
//!
//! Shared type system for cross-process actor mail delivery.
//!
//! ## Design Philosophy
//!
//! - **Pure Data Structures**: addresses, names and the payload contract only —
//!   no codec logic, no transport, no I/O
//! - **Fixed Binary Width**: `ActorAddress` is zerocopy-enabled and exactly
//!   8 bytes, so both ends of a connection agree on the wire width at compile time
//! - **Opaque Payloads**: the envelope layers above never interpret payload
//!   bytes; the [`MailPayload`] trait is the entire contract
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → libs/codec → libs/network
//!     ↑            ↓             ↓
//! Pure Data   Wire Rules     Transport
//! Structures  Pack/Unpack    Frame Delivery
//! ```
//!
//! Codec and transport crates depend on this crate; nothing here depends back.

pub mod address;
pub mod constants;
pub mod payload;

pub use address::{ActorAddress, RemoteActorName};
pub use constants::{MAX_ACTOR_NAME, MODE_BYTE_SIZE, NAME_LEN_PREFIX_SIZE};
pub use payload::{MailPayload, OpaqueBytes};
