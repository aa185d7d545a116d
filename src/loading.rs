//! Asynchronous texture loading and completion tracking.
//!
//! Each motif image is requested by its own future ([`load_motif`]) which
//! always resolves to a [`Settled`] value, whether the image arrived or not.
//! [`settle_all`] joins the requests into a stream that yields settlements in
//! completion order. [`LoadProgress`] counts them and decides when the loading
//! indicator has to disappear: exactly once, after the last settlement.

use futures::stream::FuturesUnordered;

use crate::{overlay::Overlay, resources::texture::load_image};

/// Outcome of one texture request.
#[derive(Debug)]
pub struct Settled {
    /// Index of the motif the image belongs to.
    pub index: usize,
    pub outcome: anyhow::Result<image::RgbaImage>,
}

impl Settled {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// What the loading indicator should show after a settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Still waiting for `total - loaded` requests.
    Loading { loaded: usize, total: usize },
    /// The last request just settled. Reported once.
    Complete { total: usize },
    /// A settlement arrived after completion. Nothing to show.
    AlreadyComplete,
}

impl Progress {
    /// Forward the change to the UI.
    pub fn apply(self, overlay: &mut dyn Overlay) {
        match self {
            Progress::Loading { loaded, total } => overlay.show_progress(loaded, total),
            Progress::Complete { total } => {
                overlay.show_progress(total, total);
                overlay.hide_loading();
            }
            Progress::AlreadyComplete => {
                log::warn!("Texture settled after loading had already completed");
            }
        }
    }
}

/// Counter of settled texture requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadProgress {
    loaded: usize,
    total: usize,
    completed: bool,
}

impl LoadProgress {
    pub fn new(total: usize) -> Self {
        Self {
            loaded: 0,
            total,
            completed: false,
        }
    }

    /// State before any request settled. An empty gallery completes here.
    pub fn begin(&mut self) -> Progress {
        if self.completed {
            return Progress::AlreadyComplete;
        }
        if self.loaded >= self.total {
            self.completed = true;
            return Progress::Complete { total: self.total };
        }
        Progress::Loading {
            loaded: self.loaded,
            total: self.total,
        }
    }

    /// Count one settlement, successful or not.
    pub fn record(&mut self) -> Progress {
        if self.completed {
            return Progress::AlreadyComplete;
        }
        self.loaded += 1;
        if self.loaded >= self.total {
            self.completed = true;
            Progress::Complete { total: self.total }
        } else {
            Progress::Loading {
                loaded: self.loaded,
                total: self.total,
            }
        }
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }
}

/// Join texture requests into a stream of settlements in completion order.
///
/// The stream ends once every request has settled.
pub fn settle_all<F, I>(loads: I) -> FuturesUnordered<F>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Settled>,
{
    loads.into_iter().collect()
}

/// Fetch and decode the image of motif `index`. Never fails; errors are carried
/// in [`Settled::outcome`].
pub async fn load_motif(index: usize, image_url: String, asset_dir: String) -> Settled {
    let outcome = load_image(&image_url, &asset_dir).await;
    Settled { index, outcome }
}
