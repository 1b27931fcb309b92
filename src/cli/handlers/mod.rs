mod add;
mod context;
mod delete;
mod init;
mod show;
mod sprint;
mod team;
mod timeline;
mod toggle;
mod transfer;
mod tree;
mod update;
mod utils;

pub use add::handle_add;
pub use context::CommandContext;
pub use delete::handle_delete;
pub use init::handle_init;
pub use show::handle_show;
pub use sprint::handle_config;
pub use team::handle_team;
pub use timeline::handle_timeline;
pub use toggle::handle_toggle;
pub use transfer::{handle_export, handle_import, handle_reset};
pub use tree::{handle_tree, render_tree};
pub use update::handle_update;
