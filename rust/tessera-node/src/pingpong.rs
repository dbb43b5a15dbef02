//! A two-party ping-pong exchange between nodes.
//!
//! The initiator sends a signed `ping`, the responder checks the signature
//! and answers with a signed `pong`, and the initiator checks that in turn.
//! Neither side knows the other beforehand: each verifies the peer's
//! signature through its own registry, which resolves the peer's `did:key`
//! identity on first use.

use serde::{Deserialize, Serialize};
use tessera_identity::Identity;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{Node, NodeError};

/// Payload of the initiator's message.
pub const PING: &[u8] = b"ping";

/// Payload of the responder's message.
pub const PONG: &[u8] = b"pong";

/// Result reported by a successful exchange.
pub const OK: &str = "OK";

/// A signed message as it travels between nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Identity of the node that signed the message.
    pub sender: Identity,
    /// Message body.
    pub payload: Vec<u8>,
    /// Signature by `sender` over `payload`.
    pub signature: Vec<u8>,
}

/// One end of a bidirectional, in-process channel between two nodes.
///
/// Envelopes cross the channel JSON encoded, as they would cross a wire.
#[derive(Debug)]
pub struct Session {
    outbound: mpsc::Sender<Vec<u8>>,
    inbound: mpsc::Receiver<Vec<u8>>,
}

impl Session {
    /// Two connected session ends, each buffering up to `capacity` messages.
    pub fn pair(capacity: usize) -> (Session, Session) {
        let (left_tx, left_rx) = mpsc::channel(capacity);
        let (right_tx, right_rx) = mpsc::channel(capacity);
        (
            Session {
                outbound: left_tx,
                inbound: right_rx,
            },
            Session {
                outbound: right_tx,
                inbound: left_rx,
            },
        )
    }

    /// Sign `payload` as `node` and send it to the peer.
    pub async fn send(&self, node: &Node, payload: &[u8]) -> Result<(), NodeError> {
        let envelope = Envelope {
            sender: node.identity().clone(),
            payload: payload.to_vec(),
            signature: node.sig_service().sign(node.identity(), payload)?,
        };
        self.forward(&envelope).await
    }

    /// Send an envelope signed elsewhere, unchanged.
    pub async fn forward(&self, envelope: &Envelope) -> Result<(), NodeError> {
        let bytes = serde_json::to_vec(envelope)?;
        self.outbound
            .send(bytes)
            .await
            .map_err(|_| NodeError::Protocol("peer closed the session".into()))
    }

    /// Wait for the next message and check its signature as `node`.
    pub async fn receive(&mut self, node: &Node) -> Result<Envelope, NodeError> {
        let bytes = self
            .inbound
            .recv()
            .await
            .ok_or_else(|| NodeError::Protocol("peer closed the session".into()))?;
        let envelope: Envelope = serde_json::from_slice(&bytes)?;
        node.sig_service()
            .verify(&envelope.sender, &envelope.payload, &envelope.signature)?;
        debug!(node = %node.id(), sender = %envelope.sender, "verified message");
        Ok(envelope)
    }
}

/// Run the initiator side: send `ping`, expect `pong`.
pub async fn initiate(node: &Node, session: &mut Session) -> Result<String, NodeError> {
    session.send(node, PING).await?;
    let reply = session.receive(node).await?;
    expect(&reply, PONG)?;
    info!(node = %node.id(), peer = %node.sig_service().info(&reply.sender), "pingpong done");
    Ok(OK.to_string())
}

/// Run the responder side: expect `ping`, answer `pong`.
pub async fn respond(node: &Node, session: &mut Session) -> Result<(), NodeError> {
    let request = session.receive(node).await?;
    expect(&request, PING)?;
    session.send(node, PONG).await
}

fn expect(envelope: &Envelope, payload: &[u8]) -> Result<(), NodeError> {
    if envelope.payload == payload {
        Ok(())
    } else {
        Err(NodeError::Protocol(format!(
            "expected {}, got {}",
            String::from_utf8_lossy(payload),
            String::from_utf8_lossy(&envelope.payload)
        )))
    }
}
