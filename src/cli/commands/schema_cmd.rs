//! schema command - Print the adjacency table

use crate::cli::Context;
use crate::core::schema::{children_of, ROOT_CHILDREN};
use crate::core::types::ObjectKind;
use crate::ui::output;
use anyhow::Result;
use serde::Serialize;

/// One row of the adjacency table.
#[derive(Debug, Serialize)]
struct SchemaRow {
    from: &'static str,
    children: &'static [ObjectKind],
}

fn rows() -> Vec<SchemaRow> {
    std::iter::once(SchemaRow {
        from: "root",
        children: ROOT_CHILDREN,
    })
    .chain(ObjectKind::ALL.into_iter().map(|kind| SchemaRow {
        from: kind.as_str(),
        children: children_of(kind),
    }))
    .collect()
}

/// Render the adjacency table as aligned text.
pub fn render_schema() -> String {
    rows()
        .iter()
        .map(|row| {
            let children = row
                .children
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{:<7} -> {}", row.from, children)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the adjacency table.
pub fn schema(ctx: &Context) -> Result<()> {
    if ctx.json() {
        output::print_json(&rows())?;
    } else {
        output::print(render_schema(), ctx.verbosity);
    }
    Ok(())
}
