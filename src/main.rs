use chrono::Local;
use clap::Parser;
use log::{error, info, warn};
use sfu_signal::config::ClientConfig;
use sfu_signal::credentials::Credentials;
use sfu_signal::http::UreqHttpClient;
use sfu_signal::latency::LatencyService;
use sfu_signal::notification::{EventFilter, EventNotificationCenter};
use sfu_signal::proto::sfu;
use sfu_signal::rpc::SignalServer;
use sfu_signal::transport::TokioWebSocketTransportFactory;
use sfu_signal::types::events::ProtocolEvent;
use sfu_signal::types::state::{ConnectionState, DisconnectionSource};
use sfu_signal::types::user::UserInfo;
use sfu_signal::{ConnectionStateDelegate, WebSocketClient};
use std::sync::Arc;
use std::time::Duration;

// Connects to an SFU, prints every event it pushes as JSON and, optionally,
// joins the call over RPC.
//
// Usage:
//   cargo run -- --ws-url wss://sfu.example/ws --rpc-host https://sfu.example \
//       --api-key KEY --user-id alice --token TOKEN
//   cargo run -- ... --join SESSION_ID            # also call Join once connected
//   cargo run -- ... --edge ams=https://ams.example/latency

#[derive(Parser, Debug)]
#[command(about = "SFU signaling client demo")]
struct Args {
    /// WebSocket URL of the signaling endpoint.
    #[arg(long)]
    ws_url: String,
    /// Base URL of the SignalServer RPC endpoint.
    #[arg(long)]
    rpc_host: String,
    #[arg(long)]
    api_key: String,
    #[arg(long)]
    user_id: String,
    #[arg(long)]
    user_name: Option<String>,
    #[arg(long, env = "SFU_TOKEN")]
    token: String,
    /// Session id to join with once connected.
    #[arg(long)]
    join: Option<String>,
    /// Edge to probe before connecting, as NAME=LATENCY_URL. Repeatable.
    #[arg(long = "edge")]
    edges: Vec<String>,
    #[arg(long, default_value_t = 25)]
    ping_interval_secs: u64,
}

struct LogStateDelegate;

impl ConnectionStateDelegate for LogStateDelegate {
    fn connection_state_did_change(&self, state: &ConnectionState) {
        info!(target: "Demo", "Connection state: {state:?}");
    }
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{:<5}] [{}] - {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime");

    rt.block_on(run(args));
}

async fn run(args: Args) {
    let http_client = Arc::new(UreqHttpClient::new());

    if !args.edges.is_empty() {
        let edges: Vec<sfu::Edge> = args
            .edges
            .iter()
            .filter_map(|arg| {
                let (name, url) = arg.split_once('=')?;
                Some(sfu::Edge {
                    name: name.to_string(),
                    latency_url: url.to_string(),
                })
            })
            .collect();
        let latency = LatencyService::new(http_client.clone());
        match latency.fastest_edge(&edges, 3).await {
            Some(name) => info!(target: "Demo", "Fastest edge: {name}"),
            None => warn!(target: "Demo", "No edge answered the latency probe"),
        }
    }

    let mut user = UserInfo::new(args.user_id);
    user.name = args.user_name;
    let credentials = Arc::new(Credentials::new(args.api_key, user, args.token));

    let center = Arc::new(EventNotificationCenter::new());
    center.subscribe(
        EventFilter::All,
        Arc::new(|event: &ProtocolEvent| match serde_json::to_string(event) {
            Ok(json) => println!("{json}"),
            Err(e) => error!(target: "Demo", "Failed to serialize event: {e}"),
        }),
    );

    let config = ClientConfig {
        ping_interval: Duration::from_secs(args.ping_interval_secs),
        ..ClientConfig::new(args.ws_url)
    };
    let client = WebSocketClient::new(
        config,
        credentials.clone(),
        Arc::new(TokioWebSocketTransportFactory::new()),
        center,
    );
    client.set_delegate(Some(Arc::new(LogStateDelegate)));

    let mut states = client.subscribe_state();
    client.connect();

    if let Some(session_id) = args.join {
        let connected = states
            .wait_for(|s| s.is_connected() || matches!(s, ConnectionState::Disconnected { .. }))
            .await
            .map(|s| s.is_connected())
            .unwrap_or(false);

        if connected {
            let server = SignalServer::new(http_client, args.rpc_host, credentials);
            match server
                .join(sfu::JoinRequest {
                    session_id,
                    ..Default::default()
                })
                .await
            {
                Ok(response) => {
                    let participants = response
                        .call_state
                        .map(|s| s.participants.len())
                        .unwrap_or_default();
                    info!(target: "Demo", "Joined call with {participants} participant(s)");
                }
                Err(e) => error!(target: "Demo", "Join failed: {e}"),
            }
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(target: "Demo", "Failed to listen for Ctrl-C: {e}");
    }
    info!(target: "Demo", "Shutting down");
    let _ = client.disconnect(DisconnectionSource::UserInitiated).await;
}
