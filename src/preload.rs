//! Batched frame preloading.
//!
//! Frames are fetched and decoded in fixed-size batches. Every member of a batch runs
//! concurrently on a dedicated rayon pool and the batch is joined before the next one starts, so
//! at most `batch_size` loads are ever in flight. Results are funnelled back to the calling
//! thread, which is the only writer of the [`FrameStore`] and the only caller of the
//! [`ProgressSink`].
//!
//! A failed fetch or decode never aborts the preload: it is logged, counted toward progress and
//! leaves a permanent hole in the store.

use std::sync::mpsc;

use crate::{
    assets::decode::{PreparedFrame, ResizeQuality, decode_frame},
    assets::path::FramePathScheme,
    assets::source::FrameSource,
    assets::store::FrameStore,
    foundation::core::{Canvas, FrameIndex},
    foundation::error::{ScrollSeqError, ScrollSeqResult},
};

pub const DEFAULT_BATCH_SIZE: usize = 12;

/// Loading progress after one more frame resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Progress {
    /// Frames resolved so far, successes and failures alike.
    pub loaded: usize,
    pub total: usize,
    /// `round(loaded / total * 100)`.
    pub percent: u8,
}

impl Progress {
    pub fn new(loaded: usize, total: usize) -> Self {
        Self {
            loaded,
            total,
            percent: percent_of(loaded, total),
        }
    }

    /// Text shown next to the progress bar, e.g. `"42%"`.
    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }

    pub fn is_complete(&self) -> bool {
        self.loaded >= self.total
    }
}

pub fn percent_of(loaded: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let pct = (loaded.min(total) as f64 / total as f64 * 100.0).round();
    pct as u8
}

/// Receives a [`Progress`] after every resolved frame.
pub trait ProgressSink {
    fn on_progress(&mut self, progress: Progress);
}

impl<F: FnMut(Progress)> ProgressSink for F {
    fn on_progress(&mut self, progress: Progress) {
        self(progress)
    }
}

/// Sink that discards progress.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&mut self, _progress: Progress) {}
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PreloadOptions {
    /// Frames loaded concurrently per batch.
    pub batch_size: usize,
    /// Worker threads. `None` uses one thread per batch slot.
    pub threads: Option<usize>,
    pub quality: ResizeQuality,
}

impl Default for PreloadOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            threads: None,
            quality: ResizeQuality::Medium,
        }
    }
}

impl PreloadOptions {
    pub fn validate(&self) -> ScrollSeqResult<()> {
        if self.batch_size == 0 {
            return Err(ScrollSeqError::validation("preload batch_size must be >= 1"));
        }
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(ScrollSeqError::validation(
                "preload 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// A frame that could not be loaded.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameFailure {
    pub index: FrameIndex,
    pub path: String,
    pub reason: String,
}

/// Outcome of a completed preload.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct PreloadReport {
    pub total: usize,
    /// Frames that landed in the store.
    pub loaded: usize,
    pub failed: Vec<FrameFailure>,
    pub batches: usize,
    /// Number of progress updates emitted.
    pub progress_updates: usize,
}

impl PreloadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.loaded == self.total
    }
}

pub struct Preloader {
    opts: PreloadOptions,
    pool: rayon::ThreadPool,
}

impl std::fmt::Debug for Preloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preloader")
            .field("opts", &self.opts)
            .field("threads", &self.pool.current_num_threads())
            .finish()
    }
}

impl Preloader {
    pub fn new(opts: PreloadOptions) -> ScrollSeqResult<Self> {
        opts.validate()?;
        let pool = build_thread_pool(opts.threads.unwrap_or(opts.batch_size))?;
        Ok(Self { opts, pool })
    }

    pub fn options(&self) -> &PreloadOptions {
        &self.opts
    }

    /// Number of batches needed for `frame_count` frames.
    pub fn batch_count(&self, frame_count: usize) -> usize {
        frame_count.div_ceil(self.opts.batch_size)
    }

    /// Fill every slot of `store` from `source`, reporting progress as frames resolve.
    ///
    /// Returns once every batch has resolved. Per-frame failures are recorded in the report,
    /// not returned as errors.
    #[tracing::instrument(skip_all, fields(frames = store.len(), batch_size = self.opts.batch_size))]
    pub fn preload(
        &self,
        store: &mut FrameStore,
        scheme: &FramePathScheme,
        source: &dyn FrameSource,
        canvas: Canvas,
        sink: &mut dyn ProgressSink,
    ) -> ScrollSeqResult<PreloadReport> {
        let total = store.len();
        let mut report = PreloadReport {
            total,
            ..PreloadReport::default()
        };
        tracing::info!(total, batches = self.batch_count(total), "preload started");

        let mut resolved = 0usize;
        for start in (0..total).step_by(self.opts.batch_size) {
            let end = (start + self.opts.batch_size).min(total);
            tracing::debug!(start, end, "preload batch");

            let (tx, rx) = mpsc::channel::<(FrameIndex, String, ScrollSeqResult<PreparedFrame>)>();
            let quality = self.opts.quality;
            self.pool.in_place_scope(|scope| -> ScrollSeqResult<()> {
                for i in start..end {
                    let tx = tx.clone();
                    scope.spawn(move |_| {
                        let index = FrameIndex(i);
                        let path = scheme.path(index);
                        let result = load_frame(source, &path, canvas, quality);
                        // The receiver only goes away if the caller already failed.
                        let _ = tx.send((index, path, result));
                    });
                }
                drop(tx);

                for (index, path, result) in rx {
                    match result {
                        Ok(frame) => {
                            store.insert(index, frame)?;
                            report.loaded += 1;
                        }
                        Err(err) => {
                            tracing::warn!(frame = index.0, %path, error = %err, "failed to load frame");
                            report.failed.push(FrameFailure {
                                index,
                                path,
                                reason: err.to_string(),
                            });
                        }
                    }
                    resolved += 1;
                    sink.on_progress(Progress::new(resolved, total));
                    report.progress_updates += 1;
                }
                Ok(())
            })?;
            report.batches += 1;
        }

        report.failed.sort_by_key(|f| f.index);
        tracing::info!(
            loaded = report.loaded,
            failed = report.failed.len(),
            batches = report.batches,
            "preload finished"
        );
        Ok(report)
    }
}

/// Fetch and decode a single frame, mapping both failure kinds to `ResourceLoad`.
pub fn load_frame(
    source: &dyn FrameSource,
    path: &str,
    canvas: Canvas,
    quality: ResizeQuality,
) -> ScrollSeqResult<PreparedFrame> {
    let bytes = source
        .fetch(path)
        .map_err(|e| ScrollSeqError::resource_load(format!("fetch '{path}': {e:#}")))?;
    decode_frame(&bytes, canvas, quality)
        .map_err(|e| ScrollSeqError::resource_load(format!("decode '{path}': {e:#}")))
}

fn build_thread_pool(threads: usize) -> ScrollSeqResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("scrollseq-preload-{i}"))
        .build()
        .map_err(|e| ScrollSeqError::validation(format!("failed to build preload thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/preload/preload.rs"]
mod tests;
