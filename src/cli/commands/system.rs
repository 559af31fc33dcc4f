use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("version", "version", "Show build metadata", cmd_version),
        CommandEntry::new("help", "help [command]", "Show available commands", cmd_help)
            .takes(0..=1),
        CommandEntry::new("exit", "exit", "Exit the shell", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output_section(format!("Budget Tracker {}", meta.version));
    io::print_info(format!(
        "  Build hash : {} ({})",
        meta.git_hash, meta.git_status
    ));
    io::print_info(format!("  Built at   : {}", meta.timestamp));
    io::print_info(format!("  Profile    : {}", meta.profile));
    io::print_info(format!("  Rustc      : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(name) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
