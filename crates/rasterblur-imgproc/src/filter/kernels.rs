use rasterblur_image::ImageError;

/// Create a normalized gaussian blur kernel.
///
/// The kernel samples the unit normal density (mean 0, sigma 1) linearly over
/// a fixed span of plus/minus 3 sigma. A larger `kernel_size` samples the same
/// span more densely rather than widening the blur radius. The samples are
/// divided by their raw sum so the kernel sums to 1.0.
///
/// # Arguments
///
/// * `kernel_size` - The number of kernel samples. Must be odd and at least 3
///   so the kernel has a center sample aligned with the target pixel.
///
/// # Returns
///
/// A vector of the kernel weights.
///
/// # Errors
///
/// Returns [`ImageError::InvalidKernelSize`] when `kernel_size` is zero, even,
/// or 1 (the span mapping divides by `kernel_size - 1`).
pub fn gaussian_kernel_1d(kernel_size: usize) -> Result<Vec<f32>, ImageError> {
    if kernel_size < 3 || kernel_size % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(kernel_size));
    }

    const MEAN: f64 = 0.0;
    const SIGMA: f64 = 1.0;
    let norm = 1.0 / (SIGMA * (2.0 * std::f64::consts::PI).sqrt());

    // compute the raw densities over the fixed span
    let mut kernel = Vec::with_capacity(kernel_size);
    let mut sum = 0.0f64;
    for i in 0..kernel_size {
        let x = (i as f64 / (kernel_size - 1) as f64 * 2.0 - 1.0) * 3.0 * SIGMA;
        let value = norm * (-(x - MEAN) * (x - MEAN) / (2.0 * SIGMA * SIGMA)).exp();
        kernel.push(value);
        sum += value;
    }

    // normalize the kernel
    Ok(kernel.iter().map(|value| (value / sum) as f32).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gaussian_kernel_1d_size_3() -> Result<(), ImageError> {
        let kernel = gaussian_kernel_1d(3)?;

        // samples at x = -3, 0, 3 after normalization
        let expected = [0.010_867_5, 0.978_264_9, 0.010_867_5];
        for (&k, &e) in kernel.iter().zip(expected.iter()) {
            assert_relative_eq!(k, e, epsilon = 1e-5);
        }

        Ok(())
    }

    #[test]
    fn gaussian_kernel_1d_sums_to_one() -> Result<(), ImageError> {
        for kernel_size in [3, 5, 7, 9, 11, 17, 31] {
            let kernel = gaussian_kernel_1d(kernel_size)?;
            assert_eq!(kernel.len(), kernel_size);

            let sum = kernel.iter().sum::<f32>();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-5);
        }

        Ok(())
    }

    #[test]
    fn gaussian_kernel_1d_is_symmetric() -> Result<(), ImageError> {
        for kernel_size in [3, 5, 11, 21] {
            let kernel = gaussian_kernel_1d(kernel_size)?;
            for i in 0..kernel_size / 2 {
                assert_relative_eq!(kernel[i], kernel[kernel_size - 1 - i], epsilon = 1e-6);
            }
        }

        Ok(())
    }

    #[test]
    fn gaussian_kernel_1d_center_dominates() -> Result<(), ImageError> {
        let kernel = gaussian_kernel_1d(11)?;
        let center = kernel[5];
        for (i, &k) in kernel.iter().enumerate() {
            if i != 5 {
                assert!(k < center);
            }
        }

        Ok(())
    }

    #[test]
    fn gaussian_kernel_1d_rejects_bad_sizes() {
        for kernel_size in [0, 1, 2, 4, 10] {
            assert!(matches!(
                gaussian_kernel_1d(kernel_size),
                Err(ImageError::InvalidKernelSize(k)) if k == kernel_size
            ));
        }
    }
}
