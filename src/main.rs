use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;

use approval_wizard::cli::{self, Command};
use approval_wizard::config::WizardConfig;
use approval_wizard::transport::HttpFormTransport;
use approval_wizard::wizard::Wizard;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let defaults = WizardConfig::default();
    let config = WizardConfig {
        endpoint: std::env::var("APPROVAL_WIZARD_ENDPOINT").unwrap_or(defaults.endpoint),
        request_timeout: std::env::var("APPROVAL_WIZARD_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        ..WizardConfig::default()
    };

    let transport = HttpFormTransport::from_config(&config)?;

    eprintln!("📝 Approval Wizard v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Endpoint: {}", config.endpoint);
    eprintln!("   Type 'help' for commands, 'quit' to exit.\n");

    let mut wizard = Wizard::mount(&config, Arc::new(transport));

    // Render view events as they happen
    let mut events = wizard.controller().subscribe();
    let render_handle = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    if let Some(line) = cli::render_event(&event) {
                        eprintln!("{line}");
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("Event renderer lagged by {} events", n);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    eprintln!("── Step 1 of 2 ──");
    eprint!("> ");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let (controller, settle) = wizard.parts_mut();
        tokio::select! {
            signal = settle.settled() => {
                if signal.is_some() {
                    controller.on_transport_settled();
                }
            }
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break, // EOF
                    Err(e) => {
                        tracing::error!("Error reading stdin: {}", e);
                        break;
                    }
                };
                if line.trim().is_empty() {
                    eprint!("> ");
                    continue;
                }

                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(cmd) => {
                        if let Some(out) = cmd.apply(controller) {
                            println!("{out}");
                        }
                    }
                    Err(e) => eprintln!("{e}"),
                }
                eprint!("> ");
            }
        }
    }

    if wizard.controller().is_in_flight() {
        eprintln!("A submission is still in flight; waiting for it to settle.");
        wizard.next_settle().await;
    }

    wizard.unmount();
    let _ = render_handle.await;
    Ok(())
}
