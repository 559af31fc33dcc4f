use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::CommandEntry;
use crate::config::CONFIG_KEYS;

const USAGE: &str = "config [set <key> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new("config", USAGE, "Show or change preferences", cmd_config).takes(0..=3)]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            show_config(context);
            Ok(())
        }
        ["set", key, value] => {
            context.config.set(key, value)?;
            context.persist_config()?;
            io::print_success(format!("`{}` set to `{}`.", key, value));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "Usage: {} (keys: {})",
            USAGE,
            CONFIG_KEYS.join(", ")
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    section("Configuration");
    io::print_info(format!("  Currency          : {}", config.currency));
    io::print_info(format!(
        "  Plain output      : {}",
        on_off(config.plain_output)
    ));
    io::print_info(format!(
        "  Show after change : {}",
        on_off(config.show_after_change)
    ));
    io::print_info(format!(
        "  File              : {}",
        context.config_manager.path().display()
    ));
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
