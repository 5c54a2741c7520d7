use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Row-parallel variant of
/// [`generate_fractal`](crate::core::actions::generate_fractal::generate_fractal::generate_fractal).
///
/// Rows are handed to rayon's work-stealing pool; results are collected in
/// row-major order, so the output matches the sequential version exactly.
pub fn generate_fractal_rayon<Alg>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let pixel_rect = algorithm.pixel_rect();
    let width = pixel_rect.width();

    (0..pixel_rect.height())
        .into_par_iter()
        .flat_map_iter(|y| (0..width).map(move |x| algorithm.compute(Point { x, y })))
        .collect()
}
