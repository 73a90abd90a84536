//! Main content layout: geometry resolution, shared panel context and
//! hit-testing

mod context;
pub mod geometry;

pub use context::LayoutContext;
pub use geometry::{
    resolve, side_geometry, ContentWidth, MainContentGeometry, PanelRects, Rect, SideGeometry,
    RESIZE_HANDLE_WIDTH,
};
pub use hit_test::{hit_test, HitTarget, Point};
