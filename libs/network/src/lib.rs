//! # Mail Transport Boundary
//!
//! Moves packed mail frames between framework instances. This crate ONLY
//! handles:
//! - Carrying opaque frames from one framework id to another
//! - Endpoint registration and delivery failure reporting
//! - The outbound path that packs an envelope and hands it to a transport
//!
//! Does NOT handle:
//! - Envelope structure (belongs in `codec` - transports never look inside
//!   a frame)
//! - Actor scheduling, mailbox delivery or handler invocation
//! - Payload interpretation
//!
//! The bundled [`LoopbackTransport`] carries frames between frameworks
//! hosted in the same process; it exists for tests and demos, and as the
//! reference for what a real socket transport must provide.

pub mod error;
pub mod transport;

pub use error::{Result, TransportError};
pub use transport::{send_mail, LoopbackTransport, MailTransport};
