use anyhow::{ anyhow, Result };
use log::{ info, warn };
use tokio::sync::mpsc;

use crate::cli::commands::connect;
use crate::cli::ui;
use hplrv::{
    DashboardClient,
    DashboardState,
    LiveMonitorSource,
    RecoverableError,
    RenderFormat,
    ServerAddress,
};

const UPDATE_QUEUE: usize = 64;

/// Follow live monitor updates until the stream closes or Ctrl-C
pub async fn execute(
    client: &DashboardClient,
    state: &mut DashboardState,
    connect_to: Option<&str>,
    show_witness: bool,
    format_str: &str
) -> Result<()> {
    let renderer = format_str.parse::<RenderFormat>()?.renderer();

    if let Some(target) = connect_to {
        let address: ServerAddress = target.parse()?;
        let connected = connect::execute(
            client,
            state,
            Some(&address.host),
            Some(address.port),
            false
        ).await?;
        if !connected {
            ui::print_warning("Watching anyway; updates from other live servers will still show");
        }
    }

    ui::print_header("Live Monitors");

    let (tx, mut rx) = mpsc::channel(UPDATE_QUEUE);
    let subscriber = client.clone();
    let stream_task = tokio::spawn(async move { subscriber.subscribe(tx).await });

    loop {
        tokio::select! {
            update = rx.recv() => {
                let Some(update) = update else {
                    break;
                };
                let server = update.server.clone();
                let id = update.id;
                if let Err(e) = state.apply_update(update) {
                    warn!("Ignoring update for {}: {}", server, e);
                    continue;
                }
                if let Some(monitor) = state.server(&server).and_then(|s| s.monitor(id)) {
                    ui::print_monitor(&server, id, monitor, renderer.as_ref());
                }
                if show_witness {
                    if let Some(witness) = state.reveal_witness(&server, id) {
                        ui::print_witness(witness);
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, closing live stream");
                stream_task.abort();
                break;
            }
        }
    }

    match stream_task.await {
        Ok(Ok(())) => ui::print_info("Live stream closed"),
        Ok(Err(e)) => {
            ui::print_error(&e.to_string());
            if let Some(hint) = e.recovery_strategy() {
                ui::print_info(&hint);
            }
            return Err(e.into());
        }
        Err(e) if e.is_cancelled() => {}
        Err(e) => {
            return Err(anyhow!("Live stream task failed: {}", e));
        }
    }

    let monitors: usize = state
        .servers()
        .iter()
        .map(|s| s.reported_monitors().count())
        .sum();
    ui::print_result("Servers", &state.servers().len().to_string());
    ui::print_result("Monitors", &monitors.to_string());

    Ok(())
}
