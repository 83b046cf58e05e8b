//! Two in-process frameworks exchanging mail over the loopback transport
//!
//! Framework 1 sends one message by concrete address and one by name;
//! framework 2 unpacks whatever arrives and reports it. This is the whole
//! delivery pipeline end to end: build envelope, pack, transport, unpack.
//!
//! Run with: `cargo run -p network --example loopback_mail`

use std::sync::Arc;

use codec::{MailDestination, MailEnvelope};
use network::{send_mail, LoopbackTransport};
use tracing::info;
use types::{ActorAddress, MailPayload, OpaqueBytes};

#[tokio::main]
async fn main() -> network::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let transport = LoopbackTransport::new();
    let mut framework2_inbox = transport.register(2);

    // A sender-side actor living in framework 1.
    let sender = ActorAddress::new(1, 7);

    // Mail to a concrete actor: framework 2, actor 3.
    let payload = Arc::new(OpaqueBytes::from_slice(b"a message of my customize type"));
    let by_address = MailEnvelope::by_address(sender, ActorAddress::new(2, 3), payload);
    send_mail(&transport, &by_address).await?;

    // Mail to a named actor: framework 2 resolves "worker-42" on delivery.
    let payload = Arc::new(OpaqueBytes::from_slice(b"resolve me lazily"));
    let by_name = MailEnvelope::by_name(sender, 2, "worker-42", payload);
    send_mail(&transport, &by_name).await?;

    // Framework 2 drains its inbox and unpacks each frame.
    for _ in 0..2 {
        let frame = framework2_inbox.recv().await.expect("transport closed");
        let mail: MailEnvelope<OpaqueBytes> = MailEnvelope::unpack(&frame)?;

        match mail.destination() {
            MailDestination::Address(to) => info!(
                from = ?mail.from_address(),
                actor_id = to.actor_id,
                payload = %String::from_utf8_lossy(mail.payload().as_bytes()),
                "mail delivered by address"
            ),
            MailDestination::Named(remote) => info!(
                from = ?mail.from_address(),
                actor_name = %remote.actor_name,
                payload = %String::from_utf8_lossy(mail.payload().as_bytes()),
                "mail delivered by name"
            ),
        }
    }

    Ok(())
}
