use rasterblur_image::{ImageError, PlanarImage};

use super::{kernels, separable_filter, separable_filter_with_strategy};
use crate::parallel::ExecutionStrategy;

/// Blur an image using a gaussian blur filter
///
/// Builds a normalized gaussian kernel of the given size and convolves the
/// first `min(3, channels)` planes horizontally and then vertically with
/// edge-replicated sampling.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image.
/// * `kernel_size` - The size of the kernel, odd and at least 3.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn gaussian_blur(
    src: &PlanarImage,
    dst: &mut PlanarImage,
    kernel_size: usize,
) -> Result<(), ImageError> {
    let kernel = kernels::gaussian_kernel_1d(kernel_size)?;
    separable_filter(src, dst, &kernel)
}

/// Blur an image using a gaussian blur filter with execution strategy control.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image.
/// * `kernel_size` - The size of the kernel, odd and at least 3.
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, or `Auto`.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn gaussian_blur_with_strategy(
    src: &PlanarImage,
    dst: &mut PlanarImage,
    kernel_size: usize,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    let kernel = kernels::gaussian_kernel_1d(kernel_size)?;
    separable_filter_with_strategy(src, dst, kernel.as_slice(), strategy)
}
