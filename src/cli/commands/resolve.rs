//! resolve command - Resolve a path to an object or a command call

use crate::cli::Context;
use crate::core::graph::GraphNode;
use crate::core::path::format_path;
use crate::core::resolve::resolve_path;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Resolve a dotted path and print what it names.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `path` - Dotted path, e.g. `screen[1].layout`
pub fn resolve(ctx: &Context, path: &str) -> Result<()> {
    let node = resolve_path(path).with_context(|| format!("Failed to resolve '{}'", path))?;

    if ctx.json() {
        output::print_json(&node.address())?;
        return Ok(());
    }

    output::print(describe(&node, ctx.config.show_children()), ctx.verbosity);
    Ok(())
}

/// Human-readable description of a resolved node.
pub(crate) fn describe(node: &GraphNode, show_children: bool) -> String {
    let path = node.path();
    let mut lines = vec![format!(
        "path:      {}",
        if path.is_empty() { "(root)" } else { path.as_str() }
    )];

    match node {
        GraphNode::Root => {
            lines.push("node:      root".to_string());
        }
        GraphNode::Object(object) => {
            lines.push(format!("node:      object ({})", object.object_kind()));
            let chain = node
                .selectors()
                .iter()
                .map(|step| step.to_string())
                .collect::<Vec<_>>();
            lines.push(format!("selectors: {}", chain.join(" -> ")));
        }
        GraphNode::Call(call) => {
            lines.push(format!("node:      call ({})", call.name()));
            let target = format_path(&call.selectors());
            lines.push(format!(
                "target:    {}",
                if target.is_empty() { "(root)" } else { target.as_str() }
            ));
        }
    }

    if show_children && !node.is_call() {
        lines.push(format!(
            "children:  {}",
            output::format_inline(node.children())
        ));
    }

    lines.join("\n")
}
