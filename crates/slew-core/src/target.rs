//! Observation targets and their builder.

use crate::class::TargetClass;
use crate::error::TargetError;
use crate::id::TargetId;

/// A candidate observation target.
///
/// Owned by the scheduler. Policies only ever see `&Target`; history
/// grows when the scheduler commits an observation, never during scoring.
#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    id: TargetId,
    class: Option<TargetClass>,
    tstart: f64,
    tfinal: f64,
    obs_period: f64,
    obs_per_period: f64,
    obs_times: Vec<f64>,
}

impl Target {
    /// Start building a target with the given id.
    pub fn builder(id: TargetId) -> TargetBuilder {
        TargetBuilder {
            id,
            class: None,
            class_tag: None,
            tstart: 0.0,
            tfinal: 0.0,
            obs_period: 86400.0,
            obs_per_period: 1.0,
            obs_times: Vec::new(),
        }
    }

    /// Target identifier.
    pub fn id(&self) -> TargetId {
        self.id
    }

    /// Cadence family, or `None` for an unclassified target.
    pub fn class(&self) -> Option<TargetClass> {
        self.class
    }

    /// Window start, in the clock's elapsed frame.
    pub fn tstart(&self) -> f64 {
        self.tstart
    }

    /// Window end, in the clock's elapsed frame.
    pub fn tfinal(&self) -> f64 {
        self.tfinal
    }

    /// Length of the desired cadence period in seconds.
    pub fn obs_period(&self) -> f64 {
        self.obs_period
    }

    /// Observations wanted per `obs_period`.
    pub fn obs_per_period(&self) -> f64 {
        self.obs_per_period
    }

    /// Absolute timestamps of past observations, oldest first.
    pub fn obs_times(&self) -> &[f64] {
        &self.obs_times
    }

    /// Number of observations taken so far.
    pub fn observation_count(&self) -> usize {
        self.obs_times.len()
    }

    /// Absolute timestamp of the most recent observation.
    pub fn last_observation(&self) -> Option<f64> {
        self.obs_times.last().copied()
    }

    /// Desired average spacing between observations.
    pub fn avg_interval(&self) -> f64 {
        self.obs_period / self.obs_per_period
    }

    /// Length of the observation window.
    pub fn window_length(&self) -> f64 {
        self.tfinal - self.tstart
    }

    /// Record a committed observation.
    ///
    /// This is the scheduler's hook; policies hold `&Target` and cannot
    /// reach it.
    ///
    /// # Errors
    ///
    /// Rejects non-finite timestamps and timestamps earlier than the
    /// current last observation.
    pub fn record_observation(&mut self, absolute: f64) -> Result<(), TargetError> {
        if !absolute.is_finite() {
            return Err(TargetError::NonFinite { field: "obs_times" });
        }
        if self.last_observation().is_some_and(|last| absolute < last) {
            return Err(TargetError::UnorderedHistory {
                index: self.obs_times.len(),
            });
        }
        self.obs_times.push(absolute);
        Ok(())
    }
}

/// Builder for [`Target`].
///
/// Defaults: no class, empty window at 0, one observation per day, no
/// history.
#[derive(Clone, Debug)]
pub struct TargetBuilder {
    id: TargetId,
    class: Option<TargetClass>,
    class_tag: Option<String>,
    tstart: f64,
    tfinal: f64,
    obs_period: f64,
    obs_per_period: f64,
    obs_times: Vec<f64>,
}

impl TargetBuilder {
    /// Set the cadence family.
    pub fn class(mut self, class: TargetClass) -> Self {
        self.class = Some(class);
        self.class_tag = None;
        self
    }

    /// Set the cadence family from its tag, e.g. `"AGN_low"`.
    ///
    /// The tag is parsed in [`build`](Self::build).
    pub fn class_tag(mut self, tag: impl Into<String>) -> Self {
        self.class_tag = Some(tag.into());
        self.class = None;
        self
    }

    /// Set the observation window.
    pub fn window(mut self, tstart: f64, tfinal: f64) -> Self {
        self.tstart = tstart;
        self.tfinal = tfinal;
        self
    }

    /// Set the desired cadence: `obs_per_period` observations every
    /// `obs_period` seconds.
    pub fn cadence(mut self, obs_period: f64, obs_per_period: f64) -> Self {
        self.obs_period = obs_period;
        self.obs_per_period = obs_per_period;
        self
    }

    /// Set the observation history (absolute timestamps, oldest first).
    pub fn obs_times(mut self, obs_times: impl Into<Vec<f64>>) -> Self {
        self.obs_times = obs_times.into();
        self
    }

    /// Build the target, validating all fields.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - the class tag is not recognised
    /// - any numeric field is NaN or infinite
    /// - `tstart > tfinal`
    /// - `obs_period` or `obs_per_period` is not positive
    /// - `obs_times` is not in non-decreasing order
    pub fn build(self) -> Result<Target, TargetError> {
        let class = match self.class_tag {
            Some(tag) => Some(tag.parse::<TargetClass>()?),
            None => self.class,
        };

        for (field, value) in [
            ("tstart", self.tstart),
            ("tfinal", self.tfinal),
            ("obs_period", self.obs_period),
            ("obs_per_period", self.obs_per_period),
        ] {
            if !value.is_finite() {
                return Err(TargetError::NonFinite { field });
            }
        }

        if self.tstart > self.tfinal {
            return Err(TargetError::InvalidWindow {
                tstart: self.tstart,
                tfinal: self.tfinal,
            });
        }

        if self.obs_period <= 0.0 || self.obs_per_period <= 0.0 {
            return Err(TargetError::InvalidCadence {
                obs_period: self.obs_period,
                obs_per_period: self.obs_per_period,
            });
        }

        if self.obs_times.iter().any(|t| !t.is_finite()) {
            return Err(TargetError::NonFinite { field: "obs_times" });
        }
        if let Some(index) = self
            .obs_times
            .windows(2)
            .position(|pair| pair[1] < pair[0])
        {
            return Err(TargetError::UnorderedHistory { index: index + 1 });
        }

        Ok(Target {
            id: self.id,
            class,
            tstart: self.tstart,
            tfinal: self.tfinal,
            obs_period: self.obs_period,
            obs_per_period: self.obs_per_period,
            obs_times: self.obs_times,
        })
    }
}
