//! In-process end-to-end signaling session over real loopback WebSockets
//!
//! Run with: cargo run --example local_loopback
//!
//! Starts a server on 127.0.0.1:3900, then scripts a full session with
//! three in-process clients: a broadcaster creates a room, two listeners
//! join, an offer/answer/ICE exchange runs with the first listener, and
//! finally the broadcaster disconnects so both listeners see stream-ended.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use aircast_rs::{ClientMessage, ServerConfig, ServerMessage, SignalingServer};

struct Client {
    name: &'static str,
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl Client {
    async fn connect(name: &'static str, addr: &str) -> Self {
        let (ws, _) = tokio_tungstenite::connect_async(format!("ws://{}", addr))
            .await
            .expect("connect failed");
        Self { name, ws }
    }

    async fn send(&mut self, message: ClientMessage) {
        let text = serde_json::to_string(&message).expect("encode failed");
        self.ws.send(Message::text(text)).await.expect("send failed");
    }

    async fn recv(&mut self) -> ServerMessage {
        loop {
            let frame = tokio::time::timeout(Duration::from_secs(5), self.ws.next())
                .await
                .expect("timed out")
                .expect("connection closed")
                .expect("transport error");
            if let Message::Text(text) = frame {
                let message = serde_json::from_str(text.as_str()).expect("decode failed");
                println!("[{}] <- {:?}", self.name, message);
                return message;
            }
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("aircast_rs=debug")),
        )
        .init();

    let addr = "127.0.0.1:3900";
    let server = SignalingServer::new(ServerConfig::with_addr(addr.parse().unwrap()));
    let hub = server.hub().clone();
    tokio::spawn(async move {
        if let Err(e) = server.run().await {
            eprintln!("server error: {}", e);
        }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let mut broadcaster = Client::connect("broadcaster", addr).await;
    broadcaster
        .send(ClientMessage::CreateRoom {
            room_id: "abc12".to_string(),
        })
        .await;
    assert!(matches!(
        broadcaster.recv().await,
        ServerMessage::RoomCreated { .. }
    ));

    let mut listener1 = Client::connect("listener-1", addr).await;
    listener1
        .send(ClientMessage::JoinRoom {
            room_id: "abc12".to_string(),
        })
        .await;

    let ServerMessage::ListenerJoined { listener_id } = broadcaster.recv().await else {
        panic!("expected listener-joined");
    };
    broadcaster.recv().await; // listener-count(1)
    listener1.recv().await; // listener-count(1)

    let mut listener2 = Client::connect("listener-2", addr).await;
    listener2
        .send(ClientMessage::JoinRoom {
            room_id: "abc12".to_string(),
        })
        .await;
    broadcaster.recv().await; // listener-joined
    broadcaster.recv().await; // listener-count(2)
    listener1.recv().await;
    listener2.recv().await;

    // Offer/answer/ICE with the first listener; payloads are opaque JSON
    broadcaster
        .send(ClientMessage::Offer {
            target: listener_id,
            offer: serde_json::json!({"type": "offer", "sdp": "v=0 (demo sdp)"}),
        })
        .await;
    let ServerMessage::Offer { broadcaster: b_id, .. } = listener1.recv().await else {
        panic!("expected offer");
    };

    listener1
        .send(ClientMessage::Answer {
            target: b_id,
            answer: serde_json::json!({"type": "answer", "sdp": "v=0 (demo sdp)"}),
        })
        .await;
    assert!(matches!(
        broadcaster.recv().await,
        ServerMessage::Answer { .. }
    ));

    broadcaster
        .send(ClientMessage::IceCandidate {
            target: listener_id,
            candidate: serde_json::json!({"candidate": "candidate:0 1 UDP 2122252543 127.0.0.1 40000 typ host"}),
        })
        .await;
    assert!(matches!(
        listener1.recv().await,
        ServerMessage::IceCandidate { .. }
    ));

    let stats = hub.stats().await.expect("hub gone");
    println!(
        "hub stats: connections={} rooms={}",
        stats.active_connections, stats.open_rooms
    );

    // Broadcaster leaves; both listeners should see stream-ended
    broadcaster.ws.close(None).await.expect("close failed");
    assert!(matches!(listener1.recv().await, ServerMessage::StreamEnded));
    assert!(matches!(listener2.recv().await, ServerMessage::StreamEnded));

    println!("session complete");
}
