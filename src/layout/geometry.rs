//! Main content geometry and panel rectangles
//!
//! Pure functions of the two panel snapshots. Nothing here is stored; callers
//! recompute whenever either snapshot changes, which is cheap and idempotent.

use std::fmt;

use crate::panel::{PanelPosition, PanelSnapshot};

/// Width of the resize strip on a panel's inner edge
pub const RESIZE_HANDLE_WIDTH: f32 = 6.0;

/// An axis-aligned rectangle in window coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Width of the main content area: the full container minus reserved pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContentWidth {
    pub reserved_px: f32,
}

impl ContentWidth {
    /// Resolve against a concrete container width
    pub fn resolve(&self, container_px: f32) -> f32 {
        (container_px - self.reserved_px).max(0.0)
    }

    /// CSS value: `100%` or `calc(100% - Npx)`
    pub fn css(&self) -> String {
        if self.reserved_px <= 0.0 {
            "100%".to_string()
        } else {
            format!("calc(100% - {}px)", self.reserved_px.round() as i64)
        }
    }
}

impl fmt::Display for ContentWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// Contribution of one side to the content geometry
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SideGeometry {
    pub margin: f32,
    pub padding: f32,
    pub reserved: f32,
}

/// Layout values applied to the main content region
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MainContentGeometry {
    pub margin_left: f32,
    pub margin_right: f32,
    pub padding_left: f32,
    pub padding_right: f32,
    pub width: ContentWidth,
}

impl MainContentGeometry {
    pub fn margin(&self, position: PanelPosition) -> f32 {
        match position {
            PanelPosition::Left => self.margin_left,
            PanelPosition::Right => self.margin_right,
        }
    }

    pub fn padding(&self, position: PanelPosition) -> f32 {
        match position {
            PanelPosition::Left => self.padding_left,
            PanelPosition::Right => self.padding_right,
        }
    }

    /// Style declarations in application order
    pub fn css_declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("margin-left", px(self.margin_left)),
            ("margin-right", px(self.margin_right)),
            ("width", self.width.css()),
            ("padding-left", px(self.padding_left)),
            ("padding-right", px(self.padding_right)),
        ]
    }

    /// Horizontal extent of the content's inner box for a container width
    pub fn content_rect(&self, container_width: f32, container_height: f32) -> Rect {
        let x = self.margin_left + self.padding_left;
        let outer = self.width.resolve(container_width);
        let inner = (outer - self.padding_left - self.padding_right).max(0.0);
        Rect::new(x, 0.0, inner, container_height)
    }
}

fn px(value: f32) -> String {
    format!("{}px", value.round() as i64)
}

/// One side's margin/padding/reserved width.
///
/// A locked open panel pushes the content by its width and covers the rail;
/// anything else leaves the content padded by the rail width.
pub fn side_geometry(snapshot: &PanelSnapshot, rail_width: f32) -> SideGeometry {
    if snapshot.reserves_space() {
        SideGeometry {
            margin: snapshot.width,
            padding: 0.0,
            reserved: snapshot.width,
        }
    } else {
        SideGeometry {
            margin: 0.0,
            padding: rail_width,
            reserved: 0.0,
        }
    }
}

/// Resolve the main content geometry from both panels.
///
/// Each side is computed independently; left-locked with right floating is
/// not the mirror image of the reverse.
pub fn resolve(left: &PanelSnapshot, right: &PanelSnapshot, rail_width: f32) -> MainContentGeometry {
    let l = side_geometry(left, rail_width);
    let r = side_geometry(right, rail_width);
    MainContentGeometry {
        margin_left: l.margin,
        margin_right: r.margin,
        padding_left: l.padding,
        padding_right: r.padding,
        width: ContentWidth {
            reserved_px: l.reserved + r.reserved,
        },
    }
}

/// Rectangles of the rendered sidebar chrome
///
/// Used by hit-testing so clicks and geometry agree. A panel's width includes
/// its rail; the content area sits inside the rail edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelRects {
    pub left_rail: Option<Rect>,
    pub right_rail: Option<Rect>,
    pub left_panel: Option<Rect>,
    pub right_panel: Option<Rect>,
    pub left_handle: Option<Rect>,
    pub right_handle: Option<Rect>,
}

impl PanelRects {
    pub fn compute(
        left: &PanelSnapshot,
        right: &PanelSnapshot,
        viewport_width: f32,
        viewport_height: f32,
        rail_width: f32,
    ) -> Self {
        let h = viewport_height;
        let w = viewport_width;
        let mut rects = PanelRects::default();

        if left.rendered {
            rects.left_rail = Some(Rect::new(0.0, 0.0, rail_width, h));
            if left.is_open {
                rects.left_panel = Some(Rect::new(rail_width, 0.0, left.width - rail_width, h));
                rects.left_handle = Some(Rect::new(
                    left.width - RESIZE_HANDLE_WIDTH,
                    0.0,
                    RESIZE_HANDLE_WIDTH,
                    h,
                ));
            }
        }

        if right.rendered {
            rects.right_rail = Some(Rect::new(w - rail_width, 0.0, rail_width, h));
            if right.is_open {
                rects.right_panel = Some(Rect::new(w - right.width, 0.0, right.width - rail_width, h));
                rects.right_handle = Some(Rect::new(w - right.width, 0.0, RESIZE_HANDLE_WIDTH, h));
            }
        }

        rects
    }

    pub fn rail(&self, position: PanelPosition) -> Option<Rect> {
        match position {
            PanelPosition::Left => self.left_rail,
            PanelPosition::Right => self.right_rail,
        }
    }

    pub fn panel(&self, position: PanelPosition) -> Option<Rect> {
        match position {
            PanelPosition::Left => self.left_panel,
            PanelPosition::Right => self.right_panel,
        }
    }

    pub fn handle(&self, position: PanelPosition) -> Option<Rect> {
        match position {
            PanelPosition::Left => self.left_handle,
            PanelPosition::Right => self.right_handle,
        }
    }
}
