//! Draw a board and its queens into an `image::RgbImage`.
//!
//! Cells become `cell_px`-wide squares filled with their color, separated
//! by 1-pixel grid lines. Each queen is a square marker inset by
//! `marker_padding` of the cell side.

use image::{Rgb, RgbImage};
use queens_grid_core::{Board, Rgb8, Solution};
use serde::{Deserialize, Serialize};

/// Largest output side in pixels.
pub const MAX_RENDER_SIDE: u32 = 1 << 15;

/// Errors produced while rendering.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("cell size must be >= 1 pixel")]
    ZeroCellSize,
    #[error("a {size}x{size} board at {cell_px} px per cell exceeds {} px per side", MAX_RENDER_SIDE)]
    TooLarge { size: usize, cell_px: u32 },
}

/// Rendering settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderParams {
    /// Side of one cell in pixels.
    pub cell_px: u32,
    /// Marker inset on each side, as a fraction of `cell_px`.
    pub marker_padding: f32,
    pub line_color: Rgb8,
    pub marker_color: Rgb8,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            cell_px: 50,
            marker_padding: 0.25,
            line_color: Rgb8::BLACK,
            marker_color: Rgb8::BLACK,
        }
    }
}

#[inline]
fn rgb(c: Rgb8) -> Rgb<u8> {
    Rgb(c.to_array())
}

/// Output side for `board`, or an error when it would not fit.
fn output_side(board: &Board, cell_px: u32) -> Result<u32, RenderError> {
    if cell_px == 0 {
        return Err(RenderError::ZeroCellSize);
    }
    u32::try_from(board.size())
        .ok()
        .and_then(|n| n.checked_mul(cell_px))
        .filter(|&side| side <= MAX_RENDER_SIDE)
        .ok_or(RenderError::TooLarge {
            size: board.size(),
            cell_px,
        })
}

/// Render the grid without markers.
pub fn render_board(board: &Board, params: &RenderParams) -> Result<RgbImage, RenderError> {
    let side = output_side(board, params.cell_px)?;
    let cell = params.cell_px;
    Ok(RgbImage::from_fn(side, side, |x, y| {
        let on_line = (x > 0 && x % cell == 0) || (y > 0 && y % cell == 0);
        if on_line {
            rgb(params.line_color)
        } else {
            rgb(board.color((y / cell) as usize, (x / cell) as usize))
        }
    }))
}

/// Render the grid with one marker per placement.
pub fn render_solution(
    board: &Board,
    solution: &Solution,
    params: &RenderParams,
) -> Result<RgbImage, RenderError> {
    let mut img = render_board(board, params)?;
    // The whole board fits in u32 pixels, so per-cell offsets below can't overflow.
    let cell = params.cell_px;
    let padding = params.marker_padding.clamp(0.0, 0.5);
    let inset = (cell as f32 * padding).round() as u32;
    let marker = rgb(params.marker_color);

    for p in &solution.placements {
        if p.row >= board.size() || p.col >= board.size() {
            continue;
        }
        let x0 = p.col as u32 * cell + inset;
        let y0 = p.row as u32 * cell + inset;
        let x1 = (p.col as u32 + 1) * cell - inset;
        let y1 = (p.row as u32 + 1) * cell - inset;
        for y in y0..y1 {
            for x in x0..x1 {
                img.put_pixel(x, y, marker);
            }
        }
    }
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use queens_grid_core::Placement;

    fn board() -> Board {
        let colors = (0..16)
            .map(|i| Rgb8::new(40 + (i / 4) as u8 * 50, 200, 120))
            .collect();
        Board::new(4, colors).expect("board")
    }

    #[test]
    fn board_render_has_cells_and_lines() {
        let b = board();
        let img = render_board(&b, &RenderParams::default()).expect("render");
        assert_eq!(img.dimensions(), (200, 200));
        assert_eq!(*img.get_pixel(25, 75), rgb(b.color(1, 0)));
        assert_eq!(*img.get_pixel(50, 10), rgb(Rgb8::BLACK));
        assert_eq!(*img.get_pixel(10, 150), rgb(Rgb8::BLACK));
        assert_eq!(*img.get_pixel(0, 0), rgb(b.color(0, 0)));
    }

    #[test]
    fn markers_are_inset_inside_their_cell() {
        let b = board();
        let solution = Solution::new(vec![Placement::new(0, 1), Placement::new(1, 3)]);
        let params = RenderParams {
            marker_color: Rgb8::WHITE,
            ..RenderParams::default()
        };
        let img = render_solution(&b, &solution, &params).expect("render");
        // Cell (0, 1) spans x in [50, 100); marker spans [63, 87).
        assert_eq!(*img.get_pixel(75, 25), rgb(Rgb8::WHITE));
        assert_eq!(*img.get_pixel(63, 13), rgb(Rgb8::WHITE));
        assert_eq!(*img.get_pixel(62, 25), rgb(b.color(0, 1)));
        assert_eq!(*img.get_pixel(87, 25), rgb(b.color(0, 1)));
        assert_eq!(*img.get_pixel(175, 75), rgb(Rgb8::WHITE));
        assert_eq!(*img.get_pixel(25, 25), rgb(b.color(0, 0)));
    }

    #[test]
    fn oversized_or_zero_cells_are_rejected() {
        let b = board();
        let huge = RenderParams {
            cell_px: u32::MAX,
            ..RenderParams::default()
        };
        assert_eq!(
            render_board(&b, &huge),
            Err(RenderError::TooLarge {
                size: 4,
                cell_px: u32::MAX
            })
        );
        let just_over = RenderParams {
            cell_px: MAX_RENDER_SIDE / 4 + 1,
            ..RenderParams::default()
        };
        assert!(render_solution(&b, &Solution::default(), &just_over).is_err());
        let zero = RenderParams {
            cell_px: 0,
            ..RenderParams::default()
        };
        assert_eq!(render_board(&b, &zero), Err(RenderError::ZeroCellSize));

        let at_limit = RenderParams {
            cell_px: MAX_RENDER_SIDE / 4,
            ..RenderParams::default()
        };
        assert_eq!(output_side(&b, at_limit.cell_px), Ok(MAX_RENDER_SIDE));
    }
}
