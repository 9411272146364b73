/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;


pub use loader::{CONFIG_FILE, find_brux_config, load_brux_config};
pub use types::{BruxConfig, BuildSection, ServeSection};
