//! End-to-end helpers from `image::RgbImage`.

use std::borrow::Cow;
use std::path::Path;

use image::{imageops, ImageReader, RgbImage};
use log::debug;
use queens_grid_core::{parse_grid_size, sample_board, RgbImageView, SampleError, Solution};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{solve_board, CropRect, PuzzleError, PuzzleOutcome, PuzzleParams};

/// Borrow an `image::RgbImage` as the lightweight core view type.
pub fn rgb_view(img: &RgbImage) -> RgbImageView<'_> {
    RgbImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Build an `RgbImage` from a raw RGB8 buffer.
pub fn rgb_image_from_slice(width: u32, height: u32, pixels: &[u8]) -> Result<RgbImage, PuzzleError> {
    let empty = SampleError::EmptyImage {
        width: width as usize,
        height: height as usize,
    };
    if width == 0 || height == 0 {
        return Err(empty.into());
    }
    let Some(expected) = (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(3))
    else {
        return Err(empty.into());
    };
    if pixels.len() != expected {
        return Err(SampleError::InvalidBuffer {
            expected,
            got: pixels.len(),
        }
        .into());
    }
    RgbImage::from_raw(width, height, pixels.to_vec()).ok_or_else(|| empty.into())
}

/// Open and decode an image file, converting it to RGB8.
pub fn load_rgb_image(path: impl AsRef<Path>) -> Result<RgbImage, PuzzleError> {
    let path = path.as_ref();
    let img = ImageReader::open(path)
        .map_err(image::ImageError::from)?
        .with_guessed_format()
        .map_err(image::ImageError::from)?
        .decode()?;
    debug!(
        "loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img.to_rgb8())
}

/// Decode an in-memory encoded image (PNG, JPEG, ...), e.g. pasted bytes.
pub fn decode_rgb_image(bytes: &[u8]) -> Result<RgbImage, PuzzleError> {
    Ok(image::load_from_memory(bytes)?.to_rgb8())
}

/// Cut `rect` out of `img`.
pub fn crop_image(img: &RgbImage, rect: CropRect) -> Result<RgbImage, PuzzleError> {
    let fits = rect.width > 0
        && rect.height > 0
        && rect
            .x
            .checked_add(rect.width)
            .is_some_and(|right| right <= img.width())
        && rect
            .y
            .checked_add(rect.height)
            .is_some_and(|bottom| bottom <= img.height());
    if !fits {
        return Err(PuzzleError::Crop {
            rect,
            width: img.width(),
            height: img.height(),
        });
    }
    Ok(imageops::crop_imm(img, rect.x, rect.y, rect.width, rect.height).to_image())
}

/// Crop (optional), sample, normalize and solve.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(img, params),
        fields(width = img.width(), height = img.height())
    )
)]
pub fn solve_image(
    img: &RgbImage,
    grid_size: usize,
    params: &PuzzleParams,
) -> Result<PuzzleOutcome, PuzzleError> {
    let img = match params.crop {
        Some(rect) => Cow::Owned(crop_image(img, rect)?),
        None => Cow::Borrowed(img),
    };
    let board = sample_board(&rgb_view(&img), grid_size)?;
    solve_board(board, grid_size, &params.normalize)
}

/// Composite entry point: validate the user-typed grid size, then run the
/// whole pipeline with default parameters.
///
/// The grid size is checked before the image is looked at.
pub fn run_puzzle(img: &RgbImage, grid_size: &str) -> Result<Solution, PuzzleError> {
    let grid_size = parse_grid_size(grid_size)?;
    Ok(solve_image(img, grid_size, &PuzzleParams::default())?.solution)
}
