//! Data models for period reports

use crate::dates::to_date_key;
use crate::errors::ReportError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tracked measurements, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Weight,
    Steps,
    Distance,
    Calories,
    ActiveMinutes,
    Water,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Weight,
        Metric::Steps,
        Metric::Distance,
        Metric::Calories,
        Metric::ActiveMinutes,
        Metric::Water,
    ];

    /// Whether daily values add up over a period.
    ///
    /// Weight is a point-in-time reading; everything else accumulates.
    pub fn is_cumulative(&self) -> bool {
        !matches!(self, Metric::Weight)
    }

    /// Field name on `DailySample`
    pub fn field_name(&self) -> &'static str {
        match self {
            Metric::Weight => "weight_kg",
            Metric::Steps => "steps",
            Metric::Distance => "distance_km",
            Metric::Calories => "calories_burned",
            Metric::ActiveMinutes => "active_minutes",
            Metric::Water => "water_ml",
        }
    }

    /// Get the unit abbreviation
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Weight => "kg",
            Metric::Steps => "steps",
            Metric::Distance => "km",
            Metric::Calories => "kcal",
            Metric::ActiveMinutes => "min",
            Metric::Water => "ml",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// Size of a report window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Week,
    Month,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Week => write!(f, "week"),
            Granularity::Month => write!(f, "month"),
        }
    }
}

impl std::str::FromStr for Granularity {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" | "weekly" => Ok(Granularity::Week),
            "month" | "monthly" => Ok(Granularity::Month),
            _ => Err(ReportError::InvalidGranularity(s.to_string())),
        }
    }
}

/// One calendar day's recorded metrics.
///
/// `None` means "not recorded", which is different from a recorded zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySample {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_ml: Option<f64>,
}

impl DailySample {
    /// A day with no measurements
    pub fn placeholder(date: NaiveDate) -> Self {
        Self {
            date,
            weight_kg: None,
            steps: None,
            distance_km: None,
            calories_burned: None,
            active_minutes: None,
            water_ml: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        Metric::ALL.iter().all(|metric| self.value(*metric).is_none())
    }

    /// Storage key of this sample's day
    pub fn date_key(&self) -> String {
        to_date_key(self.date)
    }

    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Weight => self.weight_kg,
            Metric::Steps => self.steps,
            Metric::Distance => self.distance_km,
            Metric::Calories => self.calories_burned,
            Metric::ActiveMinutes => self.active_minutes,
            Metric::Water => self.water_ml,
        }
    }

    /// Builder-style setter
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        let slot = match metric {
            Metric::Weight => &mut self.weight_kg,
            Metric::Steps => &mut self.steps,
            Metric::Distance => &mut self.distance_km,
            Metric::Calories => &mut self.calories_burned,
            Metric::ActiveMinutes => &mut self.active_minutes,
            Metric::Water => &mut self.water_ml,
        };
        *slot = Some(value);
        self
    }
}

/// Days per cumulative metric whose recorded value was above zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveDays {
    pub steps: u32,
    pub distance_km: u32,
    pub calories_burned: u32,
    pub active_minutes: u32,
    pub water_ml: u32,
    /// Days with a weight reading
    pub weight_kg: u32,
}

impl ActiveDays {
    pub fn get(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Weight => self.weight_kg,
            Metric::Steps => self.steps,
            Metric::Distance => self.distance_km,
            Metric::Calories => self.calories_burned,
            Metric::ActiveMinutes => self.active_minutes,
            Metric::Water => self.water_ml,
        }
    }

    fn bump(&mut self, metric: Metric) {
        let slot = match metric {
            Metric::Weight => &mut self.weight_kg,
            Metric::Steps => &mut self.steps,
            Metric::Distance => &mut self.distance_km,
            Metric::Calories => &mut self.calories_burned,
            Metric::ActiveMinutes => &mut self.active_minutes,
            Metric::Water => &mut self.water_ml,
        };
        *slot += 1;
    }
}

/// Per-metric reduction over a period's samples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aggregate {
    /// Most recent weight reading in the window
    pub weight_kg: Option<f64>,
    pub steps: f64,
    pub distance_km: f64,
    pub calories_burned: f64,
    pub active_minutes: f64,
    pub water_ml: f64,
    /// Days with at least one measurement
    pub recorded_days: u32,
    pub active_days: ActiveDays,
}

impl Aggregate {
    /// Reduce samples that are already in ascending date order
    pub fn from_samples<'a>(samples: impl IntoIterator<Item = &'a DailySample>) -> Self {
        let mut aggregate = Aggregate::default();

        for sample in samples {
            if sample.is_placeholder() {
                continue;
            }
            aggregate.recorded_days += 1;

            if let Some(weight) = sample.weight_kg {
                aggregate.weight_kg = Some(weight);
                aggregate.active_days.bump(Metric::Weight);
            }

            for metric in Metric::ALL.into_iter().filter(Metric::is_cumulative) {
                let value = sample.value(metric).unwrap_or(0.0);
                if value > 0.0 {
                    if let Some(total) = aggregate.total_mut(metric) {
                        *total += value;
                    }
                    aggregate.active_days.bump(metric);
                }
            }
        }

        aggregate
    }

    /// Period value of a metric: the sum, or the latest weight
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Weight => self.weight_kg,
            Metric::Steps => Some(self.steps),
            Metric::Distance => Some(self.distance_km),
            Metric::Calories => Some(self.calories_burned),
            Metric::ActiveMinutes => Some(self.active_minutes),
            Metric::Water => Some(self.water_ml),
        }
    }

    /// Average per active day.
    ///
    /// Divides by the days that actually recorded the metric, so a lightly
    /// logged week is not diluted by empty days. Zero when no day did.
    /// For weight this is the latest reading.
    pub fn daily_average(&self, metric: Metric) -> f64 {
        if !metric.is_cumulative() {
            return self.weight_kg.unwrap_or(0.0);
        }
        let days = self.active_days.get(metric);
        if days == 0 {
            return 0.0;
        }
        self.value(metric).unwrap_or(0.0) / days as f64
    }

    fn total_mut(&mut self, metric: Metric) -> Option<&mut f64> {
        match metric {
            Metric::Weight => None,
            Metric::Steps => Some(&mut self.steps),
            Metric::Distance => Some(&mut self.distance_km),
            Metric::Calories => Some(&mut self.calories_burned),
            Metric::ActiveMinutes => Some(&mut self.active_minutes),
            Metric::Water => Some(&mut self.water_ml),
        }
    }
}

/// A calendar window with one entry per day and its aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodBucket {
    pub granularity: Granularity,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub samples: Vec<DailySample>,
    pub aggregate: Aggregate,
}

impl PeriodBucket {
    /// Daily values of a metric, unrecorded days as zero
    pub fn daily_values(&self, metric: Metric) -> Vec<f64> {
        self.samples
            .iter()
            .map(|sample| sample.value(metric).unwrap_or(0.0))
            .collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Whether any day in the window has a measurement
    pub fn has_data(&self) -> bool {
        self.aggregate.recorded_days > 0
    }
}
