// vim: set ai et ts=4 sw=4 sts=4:
use std::path::Path;
use image::{DynamicImage, GrayImage};
use log::debug;

use super::clues::{grid_to_clues, Clue};
use super::deadline::Deadline;
use super::error::{Error, ValidationError};
use super::grid::{Grid, SquareStatus};

/// Luma values below this count as a filled square.
pub const DARK_THRESHOLD: u8 = 128;

/// Opens an image, scales it down to fit within `cols` x `rows` squares
/// (keeping its aspect ratio, so one side may come out smaller; images that
/// already fit keep their size), and turns dark pixels into filled squares.
/// Returns the row and column clues.
pub fn import_picture<P: AsRef<Path>>(path: P, rows: u32, cols: u32, deadline: &Deadline)
    -> Result<(Vec<Clue>, Vec<Clue>), Error>
{
    deadline.check()?;
    let img = image::open(path.as_ref())?;
    deadline.check()?;
    let grid = image_to_grid(&img, rows, cols)?;
    deadline.check()?;
    debug!(target: "picture", "imported {} as a {}x{} grid", path.as_ref().display(), grid.width(), grid.height());
    Ok(grid_to_clues(&grid))
}

pub fn image_to_grid(img: &DynamicImage, rows: u32, cols: u32) -> Result<Grid, ValidationError> {
    if rows == 0 || cols == 0 {
        return Err(ValidationError::Empty);
    }
    let gray = match img.width() > cols || img.height() > rows {
        true  => img.thumbnail(cols, rows).to_luma8(),
        false => img.to_luma8(),
    };
    threshold(&gray)
}

pub fn threshold(gray: &GrayImage) -> Result<Grid, ValidationError> {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return Err(ValidationError::Empty);
    }
    let mut grid = Grid::new(width as usize, height as usize);
    for (x, y, pixel) in gray.enumerate_pixels() {
        let status = match pixel.0[0] < DARK_THRESHOLD {
            true  => SquareStatus::FilledIn,
            false => SquareStatus::CrossedOut,
        };
        grid.set_square(x as usize, y as usize, status);
    }
    Ok(grid)
}
