use anyhow::Result;

use crate::cli::ui;
use hplrv::{ DashboardState, LiveMonitorSource, RecoverableError };

/// Ask the dashboard server to connect to a live monitoring server.
///
/// Goes through the same connection dialog as the watch view: the dialog
/// holds the target, submitting it yields the request, and the outcome is
/// shown as a notification. Failures are reported, not retried.
pub async fn execute<S: LiveMonitorSource + Sync>(
    source: &S,
    state: &mut DashboardState,
    host: Option<&str>,
    port: Option<u16>,
    interactive: bool
) -> Result<bool> {
    state.show_connection_dialog();

    let dialog = state.connection_dialog().clone();
    let (host, port) = if interactive {
        ui::prompt_connection(&dialog)?
    } else {
        (host.map(str::to_string).unwrap_or(dialog.host), port.unwrap_or(dialog.port))
    };
    state.set_connection_target(host, port);
    let request = state.submit_connection();

    let spinner = ui::spinner_with_message(
        &format!("Connecting to live server {}:{}...", request.host, request.port)
    );
    let result = source.connect_live(&request.host, request.port).await;
    spinner.finish_and_clear();

    let hint = result
        .as_ref()
        .err()
        .and_then(|e| e.recovery_strategy());
    let connected = result.is_ok();

    state.on_connect_result(result);
    for notification in state.take_notifications() {
        ui::print_notification(&notification);
    }
    if let Some(hint) = hint {
        ui::print_info(&hint);
    }

    if connected {
        for server in state.servers() {
            ui::print_result("Live server", &server.address.to_string());
        }
    }

    Ok(connected)
}
