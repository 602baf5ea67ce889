use crate::cli::OutputFormatter;
use crate::config::Config;
use crate::error::Result;

/// Show the effective configuration
///
/// In JSON mode the configuration is printed as one object; otherwise it is
/// printed in TOML layout, preceded by the default config file location.
pub fn handle_config_show(config: &Config, formatter: &OutputFormatter) -> Result<()> {
    if formatter.is_json() {
        return formatter.print_json(config);
    }

    if let Some(path) = Config::default_path() {
        let state = if path.exists() { "found" } else { "not found" };
        formatter.info(&format!("# Default config file: {} ({state})", path.display()));
    }

    formatter.print("[conference]");
    formatter.print(&format!("name = {:?}", config.conference.name));
    formatter.print(&format!("tickets = {}", config.conference.tickets));
    formatter.print("");
    formatter.print("[notification]");
    formatter.print(&format!("delay_ms = {}", config.notification.delay_ms));
    formatter.print(&format!(
        "drain_on_exit = {}",
        config.notification.drain_on_exit
    ));
    formatter.print("");
    formatter.print("[validation]");
    formatter.print(&format!(
        "detailed_errors = {}",
        config.validation.detailed_errors
    ));

    Ok(())
}
