use dugout_roster::{LineupSettings, Sport};
use dugout_search::GameInfo;
use serde::{Deserialize, Serialize};

const DEFAULT_TOP_K: usize = 7;

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

/// Static facts of one draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DraftGameInfo<S: Sport> {
    pub total_drafters: usize,
    /// Upper bound of a drafter's value (see [`DraftGameInfo::standings_max_value`]).
    pub max_value: f64,
    pub lineup_settings: LineupSettings<S>,
    /// Number of highest-ranked undrafted players considered at each pick.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl<S: Sport> DraftGameInfo<S> {
    #[must_use]
    pub fn new(total_drafters: usize, max_value: f64, lineup_settings: LineupSettings<S>) -> Self {
        Self {
            total_drafters,
            max_value,
            lineup_settings,
            top_k: DEFAULT_TOP_K,
        }
    }

    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Total standings points handed out over `categories` among `drafters`.
    ///
    /// Every category awards `1 + 2 + ... + n` points in total, so no drafter can
    /// exceed (and all drafters together sum to) this value.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn standings_max_value(categories: usize, drafters: usize) -> f64 {
        (categories * drafters * (drafters + 1) / 2) as f64
    }

    /// Players rostered by all drafters once the draft is over.
    #[must_use]
    pub fn total_picks(&self) -> usize {
        self.lineup_settings.draftable_total() * self.total_drafters
    }
}

impl<S: Sport> GameInfo for DraftGameInfo<S> {
    fn total_players(&self) -> usize {
        self.total_drafters
    }

    fn max_value(&self) -> f64 {
        self.max_value
    }
}
