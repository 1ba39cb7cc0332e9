//! Command implementations

pub mod check;
pub mod completions;
pub mod resolve;
pub mod versions;

use anyhow::Result;

use crate::cli::GlobalArgs;
use doclink::util::{Config, GlobalContext};

/// Load the layered configuration for the current directory.
pub fn load_config(global: &GlobalArgs) -> Result<(GlobalContext, Config)> {
    let ctx = GlobalContext::new()?;
    let config = ctx.load_config(global.config.as_deref(), !global.no_defaults)?;
    Ok((ctx, config))
}
