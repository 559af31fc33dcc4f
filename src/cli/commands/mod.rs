pub mod budget;
pub mod config;
pub mod expense;
pub mod system;
pub mod view;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in budget::definitions()
        .into_iter()
        .chain(expense::definitions())
        .chain(view::definitions())
        .chain(config::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}
