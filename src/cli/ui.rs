use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Input };
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;
use textwrap::{ wrap, Options };

use hplrv::{ ConnectionDialog, MarkupRenderer, MonitorRecord, Notification, Verdict, Witness };

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn term_width() -> usize {
    let width = Term::stdout().size().1 as usize;
    if width == 0 { 80 } else { width }
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

pub fn print_notification(notification: &Notification) {
    match notification {
        Notification::Info(msg) => print_success(msg),
        Notification::Error(msg) => print_error(msg),
    }
}

/// Print a verdict with color
pub fn verdict_label(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::True => "✓ True".green().bold(),
        Verdict::False => "✗ False".red().bold(),
        Verdict::Unknown => "? Unknown".yellow().bold(),
    }
}

/// Print one monitor: name, verdict and highlighted property
pub fn print_monitor(
    server: &str,
    id: usize,
    monitor: &MonitorRecord,
    renderer: &dyn MarkupRenderer
) {
    let stamp = chrono::Local::now().format("%H:%M:%S");
    println!(
        "[{}] {} #{} {}  {}",
        stamp,
        server.dimmed(),
        id,
        monitor.display_name().bold(),
        verdict_label(monitor.verdict)
    );
    println!("    {}", renderer.render(&monitor.property_markup()));
}

/// Print the events of a witness trace, one per line
pub fn print_witness(witness: &Witness) {
    let options = Options::new(term_width().saturating_sub(8))
        .initial_indent("      ")
        .subsequent_indent("        ");
    println!("    {} ({} events)", "witness".cyan(), witness.len());
    for event in witness {
        for line in wrap(&event.to_string(), &options) {
            println!("{}", line);
        }
    }
}

/// Ask the user for the live server to connect to, starting from the dialog fields
pub fn prompt_connection(dialog: &ConnectionDialog) -> std::io::Result<(String, u16)> {
    let host: String = Input::with_theme(&get_theme())
        .with_prompt("Live server host")
        .default(dialog.host.clone())
        .interact_text()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let port: u16 = Input::with_theme(&get_theme())
        .with_prompt("Live server port")
        .default(dialog.port)
        .interact_text()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    Ok((host, port))
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
