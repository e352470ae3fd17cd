use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rasterblur_image::PlanarImage;
use rasterblur_imgproc::filter::gaussian_blur_with_strategy;
use rasterblur_imgproc::parallel::ExecutionStrategy;

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gaussian Blur");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for kernel_size in [3, 5, 11, 17].iter() {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * *kernel_size) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, kernel_size);

            let image_size = [*width, *height].into();
            let image_data = (0..width * height * 3)
                .map(|i| (i % 256) as u8)
                .collect::<Vec<_>>();
            let image = PlanarImage::new(image_size, 3, image_data).unwrap();
            let output = PlanarImage::from_size_val(image_size, 3, 0).unwrap();

            group.bench_with_input(
                BenchmarkId::new("gaussian_blur_serial", &parameter_string),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| {
                        black_box(gaussian_blur_with_strategy(
                            src,
                            &mut dst,
                            *kernel_size,
                            ExecutionStrategy::Serial,
                        ))
                    })
                },
            );

            group.bench_with_input(
                BenchmarkId::new("gaussian_blur_parallel", &parameter_string),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| {
                        black_box(gaussian_blur_with_strategy(
                            src,
                            &mut dst,
                            *kernel_size,
                            ExecutionStrategy::Parallel,
                        ))
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
