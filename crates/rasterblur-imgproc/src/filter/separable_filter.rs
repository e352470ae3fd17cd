use rasterblur_image::{ImageError, PlanarImage};
use rayon::prelude::*;

use crate::parallel::ExecutionStrategy;

/// Number of leading channel planes the filter convolves. Any further planes
/// (alpha and beyond) are copied to the destination untouched.
pub const MAX_FILTERED_CHANNELS: usize = 3;

/// Clamp an accumulated sum and truncate it to a byte. The kernel weights and
/// samples are non-negative, only the upper bound needs clamping.
#[inline]
fn accum_to_u8(acc: f32) -> u8 {
    acc.min(255.0) as u8
}

/// A separable 2D filter that applies horizontal and vertical 1D convolutions
/// sequentially over each channel plane.
///
/// This struct caches the kernel data and precomputed sample offsets.
struct SeparableFilter {
    kernel: Vec<f32>,
    offsets: Vec<isize>,
}

impl SeparableFilter {
    /// Create a new separable filter with the given kernel.
    fn new(kernel: &[f32]) -> Self {
        let half = kernel.len() / 2;
        let offsets = (0..kernel.len())
            .map(|i| i as isize - half as isize)
            .collect();

        Self {
            kernel: kernel.to_vec(),
            offsets,
        }
    }

    /// Convolve one row, clamping sampled column indices to the row bounds.
    fn filter_row(&self, row: &[u8], out: &mut [u8]) {
        let last_col = row.len() as isize - 1;
        for (c, out_c) in out.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (&k, &off) in self.kernel.iter().zip(self.offsets.iter()) {
                let x = (c as isize + off).clamp(0, last_col) as usize;
                acc += f32::from(row[x]) * k;
            }
            *out_c = accum_to_u8(acc);
        }
    }

    /// Convolve one output row of the vertical pass, clamping sampled row
    /// indices to the plane bounds.
    fn filter_column_row(&self, plane: &[u8], r: usize, rows: usize, cols: usize, out: &mut [u8]) {
        let last_row = rows as isize - 1;
        for (c, out_c) in out.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (&k, &off) in self.kernel.iter().zip(self.offsets.iter()) {
                let y = (r as isize + off).clamp(0, last_row) as usize;
                acc += f32::from(plane[y * cols + c]) * k;
            }
            *out_c = accum_to_u8(acc);
        }
    }

    /// Apply the filter with execution strategy control.
    ///
    /// Performs horizontal filtering into an intermediate image followed by
    /// vertical filtering into the destination. The vertical pass only reads
    /// the completed intermediate, so the passes never alias.
    fn apply(
        &self,
        src: &PlanarImage,
        dst: &mut PlanarImage,
        strategy: ExecutionStrategy,
    ) -> Result<(), ImageError> {
        let rows = src.rows();
        let cols = src.cols();
        let parallel = strategy.is_parallel(rows * cols);

        let mut mid = PlanarImage::from_size_val(src.size(), src.num_channels(), 0)?;

        let filtered_channels = src.num_channels().min(MAX_FILTERED_CHANNELS);

        // Horizontal
        for channel in 0..filtered_channels {
            let src_plane = src.plane(channel)?;
            let mid_plane = mid.plane_mut(channel)?;
            if parallel {
                mid_plane
                    .par_chunks_mut(cols)
                    .enumerate()
                    .for_each(|(r, out)| {
                        self.filter_row(&src_plane[r * cols..(r + 1) * cols], out)
                    });
            } else {
                for (r, out) in mid_plane.chunks_mut(cols).enumerate() {
                    self.filter_row(&src_plane[r * cols..(r + 1) * cols], out);
                }
            }
        }

        // Vertical
        for channel in 0..filtered_channels {
            let mid_plane = mid.plane(channel)?;
            let dst_plane = dst.plane_mut(channel)?;
            if parallel {
                dst_plane
                    .par_chunks_mut(cols)
                    .enumerate()
                    .for_each(|(r, out)| self.filter_column_row(mid_plane, r, rows, cols, out));
            } else {
                for (r, out) in dst_plane.chunks_mut(cols).enumerate() {
                    self.filter_column_row(mid_plane, r, rows, cols, out);
                }
            }
        }

        // planes past the filtered set pass through unchanged
        for channel in filtered_channels..src.num_channels() {
            dst.plane_mut(channel)?.copy_from_slice(src.plane(channel)?);
        }

        Ok(())
    }
}

/// Apply a separable filter with execution strategy control.
///
/// Convolves the first `min(3, channels)` planes of `src` horizontally and
/// then vertically with the same 1-D kernel, replicating edge samples at the
/// borders. Remaining planes are copied to `dst` unmodified.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (must have the same shape as the source).
/// * `kernel` - The 1-D kernel, odd length.
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, or `Auto`.
pub fn separable_filter_with_strategy(
    src: &PlanarImage,
    dst: &mut PlanarImage,
    kernel: &[f32],
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    if kernel.len() % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(kernel.len()));
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    if src.num_channels() != dst.num_channels() {
        return Err(ImageError::ChannelCountMismatch(
            src.num_channels(),
            dst.num_channels(),
        ));
    }

    if src.is_empty() {
        return Err(ImageError::EmptyImage);
    }

    let filter = SeparableFilter::new(kernel);
    filter.apply(src, dst, strategy)
}

/// Apply a separable filter to an image.
///
/// Uses [`ExecutionStrategy::Auto`] (parallel for images of at least 100K
/// pixels, serial otherwise). For explicit control, use
/// [`separable_filter_with_strategy`].
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (must have the same shape as the source).
/// * `kernel` - The 1-D kernel, odd length.
pub fn separable_filter(
    src: &PlanarImage,
    dst: &mut PlanarImage,
    kernel: &[f32],
) -> Result<(), ImageError> {
    separable_filter_with_strategy(src, dst, kernel, ExecutionStrategy::Auto)
}
