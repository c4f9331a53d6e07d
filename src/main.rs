//! BAC Calculator (bacalc)
//!
//! Interactive terminal calculator for blood alcohol estimation.

use tracing_subscriber::EnvFilter;

use bacalc::build_info;

mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with the TUI)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bacalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();

    let mut app = ui::App::new();
    ui::run_ui(&mut app)?;

    Ok(())
}
