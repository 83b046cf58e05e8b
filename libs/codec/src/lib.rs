//! # Mail Envelope Codec
//!
//! ## Purpose
//!
//! This crate contains the "rules" layer of the mail system: the wire
//! envelope that carries one message between actor frameworks. It encodes a
//! sender address, a destination descriptor (concrete address or lazily
//! resolved name) and an opaque payload into a single contiguous buffer,
//! and decodes it back losslessly on the receiving side. Encoder and
//! decoder share one set of size arithmetic - a single off-by-one here
//! breaks every message on the wire.
//!
//! ## Wire Format
//!
//! ```text
//! ┌──────┬──────────────┬───────────────────────────┬─────────────────┐
//! │ mode │ from address │ destination               │ payload         │
//! │ (1)  │ (8)          │ (8) or (1 len + ≤255)     │ (remaining)     │
//! └──────┴──────────────┴───────────────────────────┴─────────────────┘
//! ```
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → libs/network
//!     ↑           ↓           ↓
//! Pure Data   Wire Rules   Transport
//! Structures  Pack/Unpack  Frame Delivery
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Network transport logic (belongs in `network`)
//! - Raw data structure definitions (belong in `types`)
//! - Payload interpretation (payloads are opaque byte carriers)
//! - Actor lookup or name resolution (carried data only; the remote
//!   framework resolves names at delivery time)
//!
//! ## Concurrency
//!
//! `pack` and `unpack` are purely functional over their inputs: no I/O, no
//! locks, no state outside the envelope and the caller's buffer. Distinct
//! envelopes may be packed and unpacked concurrently from any number of
//! threads.

pub mod address;
pub mod cursor;
pub mod envelope;
pub mod error;
pub mod name;
pub mod protocol;

pub use cursor::{ReadCursor, WriteCursor};
pub use envelope::{MailDestination, MailEnvelope};
pub use error::{EnvelopeError, EnvelopeResult};
pub use protocol::AddressingMode;
