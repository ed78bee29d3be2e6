//! Screening request.
//!
//! The backend tells "no filter" apart from "filter value zero" by the
//! absence of a key, so every optional part of [`FilterRequest`] is skipped
//! when unset instead of being sent as `null`.

use chrono::NaiveDate;
use serde::Serialize;
use stock_core::{BollingSelection, LooseNumber, MaWindow};

/// Date format the backend expects for trading days.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// MACD thresholds. Zero means "no constraint".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MacdThresholds {
    /// Upper bound on the last DIF value.
    pub max_last_dif: f64,
    /// Upper bound on the last DEA value.
    pub max_last_dea: f64,
    /// Minimum length of the current MACD run.
    pub min_length: i64,
}

impl MacdThresholds {
    /// Coerces raw form values into thresholds.
    #[must_use]
    pub fn from_form(
        fast: impl LooseNumber,
        slow: impl LooseNumber,
        length: impl LooseNumber,
    ) -> Self {
        Self {
            max_last_dif: fast.to_f64_lenient(),
            max_last_dea: slow.to_f64_lenient(),
            min_length: length.to_i64_lenient(),
        }
    }

    /// Returns the `macd_filter` group, or `None` when it must be omitted.
    ///
    /// The group needs a nonzero length and at least one nonzero bound.
    #[must_use]
    pub fn to_filter(&self) -> Option<MacdFilter> {
        let has_bound = self.max_last_dif != 0.0 || self.max_last_dea != 0.0;
        if !has_bound || self.min_length == 0 {
            return None;
        }
        Some(MacdFilter {
            max_last_dif: (self.max_last_dif != 0.0).then_some(self.max_last_dif),
            max_last_dea: (self.max_last_dea != 0.0).then_some(self.max_last_dea),
            min_length: self.min_length,
        })
    }
}

/// Screening criteria as entered in the UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    /// Trading day to screen on; `None` or empty means the latest day.
    pub end_date: Option<String>,
    /// MACD thresholds.
    pub macd: MacdThresholds,
    /// Selected MA options in selection order.
    pub ma_options: Vec<String>,
    /// Bollinger tags, forwarded verbatim.
    pub bolling: BollingSelection,
}

impl FilterCriteria {
    /// Creates empty criteria (an unconstrained screen).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the screening day from raw text.
    #[must_use]
    pub fn with_end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    /// Sets the screening day from a calendar date.
    #[must_use]
    pub fn with_end_date_on(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date.format(DATE_FORMAT).to_string());
        self
    }

    /// Sets the MACD thresholds.
    #[must_use]
    pub const fn with_macd(mut self, macd: MacdThresholds) -> Self {
        self.macd = macd;
        self
    }

    /// Sets the MA options; order is significant.
    #[must_use]
    pub fn with_ma_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ma_options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the MA options from typed windows; order is significant.
    #[must_use]
    pub fn with_ma_windows(self, windows: &[MaWindow]) -> Self {
        self.with_ma_options(windows.iter().map(|w| w.as_str()))
    }

    /// Sets the Bollinger selection.
    #[must_use]
    pub fn with_bolling(mut self, bolling: impl Into<BollingSelection>) -> Self {
        self.bolling = bolling.into();
        self
    }

    /// Builds the request body.
    #[must_use]
    pub fn to_request(&self) -> FilterRequest {
        FilterRequest {
            date: self.end_date.clone().filter(|d| !d.is_empty()),
            macd_filter: self.macd.to_filter(),
            ma_filter: MaFilter::from_selection(&self.ma_options),
            bolling_filter: (!self.bolling.is_empty()).then(|| BollingFilter {
                bolling_position: self.bolling.clone(),
            }),
        }
    }
}

/// Body of the screening request.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FilterRequest {
    /// Screening day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// MACD constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_filter: Option<MacdFilter>,
    /// Moving-average ordering constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma_filter: Option<MaFilter>,
    /// Bollinger band constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bolling_filter: Option<BollingFilter>,
}

/// `macd_filter` group.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MacdFilter {
    /// Upper bound on the last DIF value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_last_dif: Option<f64>,
    /// Upper bound on the last DEA value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_last_dea: Option<f64>,
    /// Minimum length of the current MACD run.
    pub min_length: i64,
}

/// `ma_filter` group: the rank each selected window was picked at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MaFilter {
    /// Rank of the 5-day average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma5_position: Option<usize>,
    /// Rank of the 10-day average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma10_position: Option<usize>,
    /// Rank of the 20-day average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma20_position: Option<usize>,
    /// Rank of the 30-day average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma30_position: Option<usize>,
    /// Rank of the 60-day average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma60_position: Option<usize>,
}

impl MaFilter {
    /// Ranks the selected options by their 1-based position in `options`.
    ///
    /// Returns `None` for an empty selection. Unknown names are skipped; a
    /// repeated name keeps its last position.
    #[must_use]
    pub fn from_selection<S: AsRef<str>>(options: &[S]) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        let mut filter = Self::default();
        for (idx, option) in options.iter().enumerate() {
            if let Some(window) = MaWindow::from_name(option.as_ref()) {
                *filter.slot_mut(window) = Some(idx + 1);
            }
        }
        Some(filter)
    }

    /// Returns the rank of `window`, if it was selected.
    #[must_use]
    pub const fn position(&self, window: MaWindow) -> Option<usize> {
        match window {
            MaWindow::Ma5 => self.ma5_position,
            MaWindow::Ma10 => self.ma10_position,
            MaWindow::Ma20 => self.ma20_position,
            MaWindow::Ma30 => self.ma30_position,
            MaWindow::Ma60 => self.ma60_position,
        }
    }

    fn slot_mut(&mut self, window: MaWindow) -> &mut Option<usize> {
        match window {
            MaWindow::Ma5 => &mut self.ma5_position,
            MaWindow::Ma10 => &mut self.ma10_position,
            MaWindow::Ma20 => &mut self.ma20_position,
            MaWindow::Ma30 => &mut self.ma30_position,
            MaWindow::Ma60 => &mut self.ma60_position,
        }
    }
}

/// `bolling_filter` group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BollingFilter {
    /// Selected tags, verbatim.
    pub bolling_position: BollingSelection,
}

/// Builds the screening request from raw form values.
///
/// Numeric fields are coerced leniently (see [`LooseNumber`]); a field that
/// does not parse counts as zero, i.e. as "no constraint".
///
/// # Example
///
/// ```
/// use stock_request::build_filter_request;
///
/// let req = build_filter_request("", "0", "0.5", "3", &["ma20", "ma5"], "up");
/// let body = serde_json::to_value(&req).unwrap();
/// assert_eq!(body["macd_filter"]["max_last_dea"], 0.5);
/// assert_eq!(body["ma_filter"]["ma20_position"], 1);
/// assert!(body.get("date").is_none());
/// ```
pub fn build_filter_request<S: AsRef<str>>(
    end_date: &str,
    macd_fast: impl LooseNumber,
    macd_slow: impl LooseNumber,
    macd_length: impl LooseNumber,
    selected_ma_options: &[S],
    bolling_positions: impl Into<BollingSelection>,
) -> FilterRequest {
    FilterCriteria::new()
        .with_end_date(end_date)
        .with_macd(MacdThresholds::from_form(macd_fast, macd_slow, macd_length))
        .with_ma_options(selected_ma_options.iter().map(|s| s.as_ref().to_string()))
        .with_bolling(bolling_positions)
        .to_request()
}
