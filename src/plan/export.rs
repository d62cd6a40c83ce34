use rayon::prelude::*;

use crate::animation::state::FrameState;
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{ZoomError, ZoomResult};
use crate::plan::animation_plan::AnimationPlan;

/// How [`AnimationPlan::export_states`] walks a frame range.
#[derive(Clone, Debug)]
pub struct ExportThreading {
    /// Evaluate each chunk on a dedicated rayon pool.
    pub parallel: bool,
    /// Frames per chunk handed to the sink at once.
    pub chunk_size: usize,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for ExportThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 256,
            threads: None,
        }
    }
}

impl AnimationPlan {
    /// Collect the states for every frame in `range`, in frame order.
    pub fn states(
        &self,
        range: FrameRange,
        threading: &ExportThreading,
    ) -> ZoomResult<Vec<FrameState>> {
        let mut out = Vec::with_capacity(range.len_frames().min(1 << 16) as usize);
        self.export_states(range, threading, |chunk| {
            out.extend(chunk);
            Ok(())
        })?;
        Ok(out)
    }

    /// Evaluate `range` chunk by chunk and hand each chunk, in frame order, to `sink`.
    ///
    /// Frames may be evaluated in parallel; chunks are always delivered sequentially.
    #[tracing::instrument(skip(self, sink))]
    pub fn export_states<F>(
        &self,
        range: FrameRange,
        threading: &ExportThreading,
        mut sink: F,
    ) -> ZoomResult<()>
    where
        F: FnMut(Vec<FrameState>) -> ZoomResult<()>,
    {
        if range.is_empty() {
            return Err(ZoomError::params("export range must be non-empty"));
        }
        let chunk_size = normalized_chunk_size(threading.chunk_size);
        let pool = if threading.parallel {
            Some(build_thread_pool(threading.threads)?)
        } else {
            None
        };

        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
            let chunk = match &pool {
                Some(pool) => pool.install(|| {
                    (chunk_start..chunk_end)
                        .into_par_iter()
                        .map(|f| self.state_at(FrameIndex(f)))
                        .collect::<Vec<_>>()
                }),
                None => (chunk_start..chunk_end)
                    .map(|f| self.state_at(FrameIndex(f)))
                    .collect(),
            };
            tracing::trace!(chunk_start, chunk_end, "exported chunk");
            sink(chunk)?;
            chunk_start = chunk_end;
        }
        Ok(())
    }
}

fn build_thread_pool(threads: Option<usize>) -> ZoomResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(ZoomError::params(
            "export threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ZoomError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/plan/export.rs"]
mod tests;
