//! children command - List object kinds reachable from a path

use crate::cli::Context;
use crate::core::resolve::resolve_container;
use crate::ui::output;
use anyhow::{bail, Context as _, Result};

/// List the object kinds reachable from the container at `path`.
///
/// The empty path lists the root's children. A path ending in a command
/// is rejected, since calls have no children.
pub fn children(ctx: &Context, path: &str) -> Result<()> {
    let container = match resolve_container(path)
        .with_context(|| format!("Failed to resolve '{}'", path))?
    {
        Some(container) => container,
        None => bail!("'{}' names a command, not an object", path.trim()),
    };

    let kinds = container.children();

    if ctx.json() {
        output::print_json(&kinds)?;
    } else {
        output::print(output::format_list(kinds, ""), ctx.verbosity);
    }

    Ok(())
}
