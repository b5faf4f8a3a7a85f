use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Evaluates `algorithm` for every pixel of its surface, row-major, on the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Success> {
    algorithm
        .surface()
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
