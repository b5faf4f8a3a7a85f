use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;

pub trait FractalAlgorithm {
    type Success;

    fn surface(&self) -> SurfaceSize;

    fn compute(&self, pixel: Point) -> Self::Success;
}
