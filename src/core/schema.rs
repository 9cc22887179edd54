//! core::schema
//!
//! The adjacency table of the command graph.
//!
//! # Table
//!
//! | From   | Reachable children                          |
//! |--------|---------------------------------------------|
//! | root   | bar, group, layout, screen, widget, window  |
//! | bar    | screen                                      |
//! | group  | layout, window, screen                      |
//! | layout | group, window, screen                       |
//! | screen | layout, window, bar                         |
//! | widget | bar, screen, group                          |
//! | window | group, screen, layout                       |
//!
//! # Invariants
//!
//! - The table is immutable static data
//! - Children depend only on the kind, never on selectors or parents
//! - `widget` and `window` cannot reach each other in either direction

use super::types::ObjectKind;

/// Kinds reachable from the graph root.
pub const ROOT_CHILDREN: &[ObjectKind] = &ObjectKind::ALL;

const BAR_CHILDREN: &[ObjectKind] = &[ObjectKind::Screen];

const GROUP_CHILDREN: &[ObjectKind] = &[ObjectKind::Layout, ObjectKind::Window, ObjectKind::Screen];

const LAYOUT_CHILDREN: &[ObjectKind] = &[ObjectKind::Group, ObjectKind::Window, ObjectKind::Screen];

const SCREEN_CHILDREN: &[ObjectKind] = &[ObjectKind::Layout, ObjectKind::Window, ObjectKind::Bar];

const WIDGET_CHILDREN: &[ObjectKind] = &[ObjectKind::Bar, ObjectKind::Screen, ObjectKind::Group];

const WINDOW_CHILDREN: &[ObjectKind] = &[ObjectKind::Group, ObjectKind::Screen, ObjectKind::Layout];

/// Kinds reachable one step from an object of `kind`.
pub fn children_of(kind: ObjectKind) -> &'static [ObjectKind] {
    match kind {
        ObjectKind::Bar => BAR_CHILDREN,
        ObjectKind::Group => GROUP_CHILDREN,
        ObjectKind::Layout => LAYOUT_CHILDREN,
        ObjectKind::Screen => SCREEN_CHILDREN,
        ObjectKind::Widget => WIDGET_CHILDREN,
        ObjectKind::Window => WINDOW_CHILDREN,
    }
}

/// Find `name` among `children`, returning the matching kind.
pub(crate) fn lookup(children: &[ObjectKind], name: &str) -> Option<ObjectKind> {
    children.iter().copied().find(|kind| kind.as_str() == name)
}
