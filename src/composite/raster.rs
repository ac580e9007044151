use rayon::prelude::*;

use crate::{
    color::convert::{to_normalized, to_packed},
    composite::over::blend_over,
    foundation::{
        core::{BYTES_PER_PIXEL, Rgba8},
        error::{BlendError, BlendResult},
    },
    raster::buffer::RasterBuffer,
};

/// Execution options for [`composite_over_with`].
///
/// Threading never changes the output bytes.
#[derive(Clone, Debug)]
pub struct CompositeThreading {
    /// Split rows across a dedicated rayon pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Rows handed to a worker at a time (parallel mode only). Clamped to `1..=height`.
    pub rows_per_task: usize,
}

impl Default for CompositeThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            rows_per_task: 16,
        }
    }
}

/// Composite `top` over `bottom` into a freshly allocated raster.
///
/// Both inputs must share width, height and stride and be 8 bits per component /
/// 32 bits per pixel; otherwise a [`BlendError::Precondition`] is returned before any
/// pixel is touched. The output uses the input stride with zeroed row padding.
pub fn composite_over(top: &RasterBuffer, bottom: &RasterBuffer) -> BlendResult<RasterBuffer> {
    composite_over_with(top, bottom, &CompositeThreading::default())
}

/// [`composite_over`] with explicit threading options.
#[tracing::instrument(
    skip(top, bottom),
    fields(width = top.width(), height = top.height(), stride = top.stride())
)]
pub fn composite_over_with(
    top: &RasterBuffer,
    bottom: &RasterBuffer,
    threading: &CompositeThreading,
) -> BlendResult<RasterBuffer> {
    top.check_compatible(bottom)?;

    let (width, height, stride) = (top.width(), top.height(), top.stride());
    let row_bytes = top.row_bytes();
    if stride == 0 || height == 0 {
        return RasterBuffer::zeroed(width, height, stride);
    }

    let mut data = vec![0u8; stride * height as usize];
    if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        let rows_per_task = threading.rows_per_task.clamp(1, height as usize);
        tracing::debug!(
            threads = pool.current_num_threads(),
            rows_per_task,
            "compositing rows in parallel"
        );
        let task_bytes = stride * rows_per_task;
        pool.install(|| {
            data.par_chunks_mut(task_bytes)
                .zip(top.as_bytes().par_chunks(task_bytes))
                .zip(bottom.as_bytes().par_chunks(task_bytes))
                .for_each(|((out_rows, top_rows), bottom_rows)| {
                    composite_rows(out_rows, top_rows, bottom_rows, stride, row_bytes);
                });
        });
    } else {
        tracing::debug!("compositing rows sequentially");
        composite_rows(&mut data, top.as_bytes(), bottom.as_bytes(), stride, row_bytes);
    }

    RasterBuffer::new(
        width,
        height,
        stride,
        top.bits_per_component(),
        top.bits_per_pixel(),
        data,
    )
}

fn composite_rows(out: &mut [u8], top: &[u8], bottom: &[u8], stride: usize, row_bytes: usize) {
    for ((o, t), b) in out
        .chunks_exact_mut(stride)
        .zip(top.chunks_exact(stride))
        .zip(bottom.chunks_exact(stride))
    {
        composite_row(&mut o[..row_bytes], &t[..row_bytes], &b[..row_bytes]);
    }
}

fn composite_row(out: &mut [u8], top: &[u8], bottom: &[u8]) {
    for ((o, t), b) in out
        .chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(top.chunks_exact(BYTES_PER_PIXEL))
        .zip(bottom.chunks_exact(BYTES_PER_PIXEL))
    {
        let s = to_normalized(Rgba8::from_array([t[0], t[1], t[2], t[3]]));
        let d = to_normalized(Rgba8::from_array([b[0], b[1], b[2], b[3]]));
        let r = blend_over(s, d);
        debug_assert!(!r.has_nan(), "source-over produced NaN for {s:?} over {d:?}");
        o.copy_from_slice(&to_packed(r).to_array());
    }
}

fn build_thread_pool(threads: Option<usize>) -> BlendResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(BlendError::validation(
            "composite threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| BlendError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/composite/raster.rs"]
mod tests;
