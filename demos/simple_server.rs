//! Simple signaling server example
//!
//! Run with: cargo run --example simple_server [BIND_ADDR]
//!
//! Examples:
//!   cargo run --example simple_server                    # binds to 0.0.0.0:3000 (or $PORT)
//!   cargo run --example simple_server 127.0.0.1:3100     # binds to 127.0.0.1:3100
//!
//! Connect with any WebSocket client and send JSON frames:
//!
//!   {"type": "create-room", "roomId": "abc12"}
//!   {"type": "join-room", "roomId": "abc12"}
//!   {"type": "offer", "target": 1, "offer": {...}}
//!
//! The server logs room lifecycle events and prints hub stats every ten
//! seconds. Stop with ctrl-c.

use std::time::Duration;

use aircast_rs::{ServerConfig, SignalingServer};

#[tokio::main]
async fn main() -> aircast_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("aircast_rs=debug")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(addr) => ServerConfig::with_addr(addr),
            Err(_) => {
                eprintln!("Invalid bind address: {}", arg);
                eprintln!("Usage: simple_server [BIND_ADDR]");
                std::process::exit(1);
            }
        },
        None => ServerConfig::from_env(),
    };

    let server = SignalingServer::new(config);
    println!("Signaling server on ws://{}", server.bind_addr());

    let stats_hub = server.hub().clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(10));
        ticker.tick().await; // first tick is immediate
        loop {
            ticker.tick().await;
            if let Ok(stats) = stats_hub.stats().await {
                println!(
                    "Stats: connections={} (total {}) rooms={}",
                    stats.active_connections, stats.total_connections, stats.open_rooms,
                );
            }
        }
    });

    server
        .run_until(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
}
