use crate::types::QuarterTurn;
use image::DynamicImage;

/// Rotate a page image by 90° in the given direction.
///
/// Width and height swap. A quarter turn maps pixels one to one, so nothing is
/// resampled.
pub fn rotate(image: &DynamicImage, turn: QuarterTurn) -> DynamicImage {
    match turn {
        QuarterTurn::Clockwise => image.rotate90(),
        QuarterTurn::CounterClockwise => image.rotate270(),
    }
}
