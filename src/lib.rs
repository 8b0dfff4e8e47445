//! scrollseq plays a pre-rendered image sequence in lockstep with scroll position.
//!
//! # Pipeline overview
//!
//! 1. **Preload**: fetch and decode every frame in bounded concurrent batches into a
//!    [`FrameStore`], reporting progress as frames resolve. Failed frames become holes.
//! 2. **Scroll**: raw wheel/touch input feeds a [`SmoothScroll`] that eases toward its target
//!    on every tick of a shared [`Ticker`].
//! 3. **Map**: each published offset drives a [`ScrollMapper`] (scroll → frame index, overlay
//!    fade), a [`SectionPager`] (active stop) and text [`Reveal`]s.
//! 4. **Render**: a [`RenderLoop`] blits the target frame to a [`Surface`] only when it changed.
//!
//! [`Experience`] owns all of the above and is the usual entry point:
//!
//! ```no_run
//! use scrollseq::{CanvasSurface, DirSource, Experience, ExperienceConfig};
//!
//! # fn main() -> scrollseq::ScrollSeqResult<()> {
//! let config = ExperienceConfig::from_path("site/scrollseq.json")?;
//! let surface = CanvasSurface::new(config.canvas);
//! let mut exp = Experience::start(config, &DirSource::new("site/public"), surface)?;
//! exp.wheel(120.0);
//! exp.tick(0.016)?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod config;
mod experience;
mod foundation;
mod preload;
mod render;
mod scroll;
mod ui;

pub use animation::ease::Ease;
pub use animation::reveal::{Reveal, RevealPose, RevealSpec, ToggleAction, ToggleActions};
pub use animation::scrub::Scrub;
pub use assets::decode::{PreparedFrame, ResizeQuality, decode_frame};
pub use assets::path::{FramePathScheme, normalize_site_path};
pub use assets::source::{DirSource, FrameSource, MemorySource};
pub use assets::store::FrameStore;
pub use config::{
    ExperienceConfig, FeaturePanel, LoadingConfig, PageLayout, RevealConfig, ScrollConfig,
    SequenceConfig, Side, TickerConfig,
};
pub use experience::{Experience, FrameReport, RevealTarget};
pub use foundation::core::{Canvas, FrameIndex, ScrollDirection};
pub use foundation::error::{ScrollSeqError, ScrollSeqResult};
pub use preload::{
    DEFAULT_BATCH_SIZE, FrameFailure, NoProgress, PreloadOptions, PreloadReport, Preloader,
    Progress, ProgressSink, load_frame, percent_of,
};
pub use render::frame_loop::{RenderLoop, RenderOutcome};
pub use render::surface::{CanvasSurface, Surface};
pub use scroll::mapper::{MapperState, ScrollMapper};
pub use scroll::pager::{Chevron, NavRequest, PagerTimings, SectionPager};
pub use scroll::smooth::{
    InputKind, ScrollEvent, ScrollTarget, ScrollToOptions, SmoothScroll, SmoothScrollOptions,
};
pub use scroll::ticker::{LagSmoothing, Tick, Ticker};
pub use scroll::trigger::{
    Anchor, Edge, ElementBox, ScrollTrigger, TriggerEnd, TriggerEvent, TriggerRegistry,
    TriggerSpec,
};
pub use ui::loading::LoadingScreen;
