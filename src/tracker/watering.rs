//! Watering advisor
//!
//! Classifies how urgently a plant needs water from the days since it was last
//! watered, its frequency class and (optionally) the current temperature.
//!
//! Classification, first match wins:
//! 1. well past the interval (beyond the grace days) - overdue
//! 2. at or past the interval on a hot day - urgent
//! 3. past the interval - overdue
//! 4. due today or tomorrow - due-soon (notifies only when due today)
//! 5. watered within the last day - recently-watered
//! 6. otherwise - good

use super::state::{TrackedPlantState, WateringFrequency};
use crate::config::WateringRules;
use crate::utils::{clamp_day_count, elapsed_days, format_days};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Watering priority bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WateringUrgency {
    Overdue,
    Urgent,
    DueSoon,
    Good,
    RecentlyWatered,
}

impl WateringUrgency {
    /// Colour tag for the tracker card
    pub fn color_tag(self) -> &'static str {
        match self {
            WateringUrgency::Overdue => "red",
            WateringUrgency::Urgent => "orange",
            WateringUrgency::DueSoon => "yellow",
            WateringUrgency::Good => "green",
            WateringUrgency::RecentlyWatered => "blue",
        }
    }
}

/// Current conditions supplied by the weather collaborator
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherReading {
    #[serde(default)]
    pub current_temperature_f: Option<f64>,
}

impl WeatherReading {
    pub fn at_temperature(temperature_f: f64) -> Self {
        Self { current_temperature_f: Some(temperature_f) }
    }

    /// Temperature, ignoring NaN/inf readings
    fn temperature(&self) -> Option<f64> {
        self.current_temperature_f.filter(|t| t.is_finite())
    }
}

/// Watering status for one tracked plant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WateringReport {
    pub urgency: WateringUrgency,
    pub days_since_watering: i64,
    pub days_until_next: i64,
    pub adjusted_interval_days: i64,
    pub weather_adjustment: i64,
    pub message: String,
    pub color_tag: String,
    pub should_notify: bool,
}

/// Explicit stored interval in whole days, if usable
///
/// Fractional values round; negative, non-finite or sub-half-day values count as unset.
pub fn explicit_interval(state: &TrackedPlantState) -> Option<i64> {
    state
        .watering_interval_days
        .map(|days| clamp_day_count(days).round() as i64)
        .filter(|days| *days > 0)
}

/// Unadjusted interval: the explicit interval if set, else the class table
pub fn base_interval(state: &TrackedPlantState, rules: &WateringRules) -> i64 {
    if let Some(days) = explicit_interval(state) {
        return days;
    }

    match state.watering_frequency {
        WateringFrequency::Frequent => rules.frequent_interval_days,
        WateringFrequency::Average => rules.average_interval_days,
        WateringFrequency::Minimum => rules.minimum_interval_days,
        WateringFrequency::Custom => rules.custom_default_interval_days,
    }
}

/// Interval shift in days for the current temperature (0 when unknown)
pub fn weather_adjustment(temperature_f: Option<f64>, rules: &WateringRules) -> i64 {
    match temperature_f {
        Some(t) if t >= rules.extreme_heat_f => rules.extreme_heat_adjustment_days,
        Some(t) if t >= rules.hot_f => rules.hot_adjustment_days,
        Some(t) if t <= rules.cool_f => rules.cool_adjustment_days,
        _ => 0,
    }
}

/// Classify watering urgency at `now`
pub fn advise_watering(
    state: &TrackedPlantState,
    weather: &WeatherReading,
    now: DateTime<Utc>,
    rules: &WateringRules,
) -> WateringReport {
    let temperature = weather.temperature();
    let adjustment = weather_adjustment(temperature, rules);
    let interval = (base_interval(state, rules) + adjustment).max(1);

    let days = match state.last_watered_date {
        Some(last) => elapsed_days(last, now),
        None => rules.never_watered_days,
    };
    let days_until_next = (interval - days).max(0);
    let hot = temperature.is_some_and(|t| t >= rules.hot_f);

    let (urgency, mut message, notify) = if days > interval + rules.overdue_grace_days {
        (WateringUrgency::Overdue, overdue_message(state, days - interval), true)
    } else if days >= interval && hot {
        (WateringUrgency::Urgent, "Water today - hot weather".to_string(), true)
    } else if days > interval {
        (WateringUrgency::Overdue, overdue_message(state, days - interval), true)
    } else if days_until_next <= 1 {
        let message = if days_until_next == 0 { "Water today" } else { "Water tomorrow" };
        (WateringUrgency::DueSoon, message.to_string(), days_until_next == 0)
    } else if days <= 1 {
        (WateringUrgency::RecentlyWatered, "Recently watered".to_string(), false)
    } else {
        (
            WateringUrgency::Good,
            format!("Next watering in {}", format_days(days_until_next)),
            false,
        )
    };

    if temperature.is_some() {
        if adjustment < 0 {
            message.push_str(" (heat adjusted)");
        } else if adjustment > 0 {
            message.push_str(" (cool weather)");
        }
    }

    WateringReport {
        urgency,
        days_since_watering: days,
        days_until_next,
        adjusted_interval_days: interval,
        weather_adjustment: adjustment,
        message,
        color_tag: urgency.color_tag().to_string(),
        should_notify: notify && state.reminders_enabled,
    }
}

fn overdue_message(state: &TrackedPlantState, days_over: i64) -> String {
    if state.last_watered_date.is_none() {
        "Never watered - water now".to_string()
    } else {
        format!("Overdue by {}", format_days(days_over))
    }
}
