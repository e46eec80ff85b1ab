use crate::foundation::{
    core::{Canvas, GrayMatrix, Role},
    error::TankResult,
};

/// Which size relation between the two layers decided the placement.
///
/// Checked in declaration order; the first match wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementBranch {
    /// Top already spans the whole canvas.
    TopCoversCanvas,
    /// Top has the canvas width, bottom the canvas height.
    TopWidthBottomHeight,
    /// Bottom has the canvas width, top the canvas height.
    BottomWidthTopHeight,
    /// Anything else: bottom spans the canvas and top is smaller on some axis.
    Fallback,
}

/// Top-left corner of a layer on the shared canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Offset {
    /// Rows from the top edge.
    pub row: u32,
    /// Columns from the left edge.
    pub col: u32,
}

impl Offset {
    /// Top-left corner.
    pub const ORIGIN: Offset = Offset { row: 0, col: 0 };

    /// Offset of `row` rows and `col` columns.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Shared canvas size plus where each layer goes on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// `max(w) x max(h)` of the two layers.
    pub canvas: Canvas,
    /// Size relation that picked the offsets.
    pub branch: PlacementBranch,
    /// Where the top layer starts.
    pub top: Offset,
    /// Where the bottom layer starts.
    pub bottom: Offset,
}

/// Decide the shared canvas and per-layer offsets from the two layer sizes.
pub fn plan_placement(top: Canvas, bottom: Canvas) -> Placement {
    let canvas = top.union(bottom);
    let (w, h) = (canvas.width, canvas.height);
    let wm = top.width.abs_diff(bottom.width) / 2;
    let hm = top.height.abs_diff(bottom.height) / 2;

    let (branch, top_at, bottom_at) = if w == top.width && h == top.height {
        (
            PlacementBranch::TopCoversCanvas,
            Offset::ORIGIN,
            Offset::new(hm, wm),
        )
    } else if w == top.width && h == bottom.height {
        (
            PlacementBranch::TopWidthBottomHeight,
            Offset::new(hm, 0),
            Offset::ORIGIN,
        )
    } else if w == bottom.width && h == top.height {
        (
            PlacementBranch::BottomWidthTopHeight,
            Offset::ORIGIN,
            Offset::new(hm, 0),
        )
    } else {
        (
            PlacementBranch::Fallback,
            Offset::new(hm, wm),
            Offset::ORIGIN,
        )
    };

    Placement {
        canvas,
        branch,
        top: top_at,
        bottom: bottom_at,
    }
}

/// Place both layers on one canvas of size `max(w) x max(h)` without scaling.
///
/// The top canvas background is white and the bottom background black. Only fails
/// when the canvas buffer size overflows.
pub fn unify(top: &GrayMatrix, bottom: &GrayMatrix) -> TankResult<(GrayMatrix, GrayMatrix)> {
    let placement = plan_placement(top.canvas(), bottom.canvas());
    tracing::debug!(
        branch = ?placement.branch,
        width = placement.canvas.width,
        height = placement.canvas.height,
        top_row = placement.top.row,
        top_col = placement.top.col,
        bottom_row = placement.bottom.row,
        bottom_col = placement.bottom.col,
        "unified layer canvas"
    );
    Ok((
        place(top, Role::Top, &placement)?,
        place(bottom, Role::Bottom, &placement)?,
    ))
}

fn place(src: &GrayMatrix, role: Role, placement: &Placement) -> TankResult<GrayMatrix> {
    let at = match role {
        Role::Top => placement.top,
        Role::Bottom => placement.bottom,
    };
    let Canvas { width, height } = placement.canvas;
    let mut dst = GrayMatrix::filled(width, height, role.background())?;
    dst.blit(src, at.row, at.col);
    Ok(dst)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/unify.rs"]
mod tests;
