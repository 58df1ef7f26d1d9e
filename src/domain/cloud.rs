//! Tag cloud font size calculation
//!
//! Each tag gets a `font_size` bucket between 1 and `steps` according to how
//! often it is used. Counts are spread either linearly or logarithmically;
//! the logarithmic curve keeps a few very popular tags from pushing every
//! other tag into the smallest bucket.
//!
//! # Examples
//!
//! ```
//! use tagging::domain::cloud::{calculate_cloud, Distribution, TagCount};
//! use tagging::domain::tags::Tag;
//!
//! let mut tags = vec![
//!     TagCount::new(Tag::new("rare"), 1),
//!     TagCount::new(Tag::new("common"), 100),
//! ];
//! calculate_cloud(&mut tags, 5, Distribution::Linear).unwrap();
//! assert_eq!(tags[0].font_size, Some(1));
//! assert_eq!(tags[1].font_size, Some(5));
//! ```

use crate::domain::tags::Tag;
use crate::error::{Result, TaggingError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Default number of font size buckets
pub const DEFAULT_STEPS: usize = 4;

/// How usage counts map onto font sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    #[default]
    Logarithmic,
    Linear,
}

/// Accepts `linear`, `logarithmic` or its short form `log`, in any case
impl FromStr for Distribution {
    type Err = TaggingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "logarithmic" | "log" => Ok(Distribution::Logarithmic),
            "linear" => Ok(Distribution::Linear),
            _ => Err(TaggingError::InvalidDistribution(s.to_string())),
        }
    }
}

/// Legacy integer codes: 1 is logarithmic, 2 is linear
impl TryFrom<i64> for Distribution {
    type Error = TaggingError;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            1 => Ok(Distribution::Logarithmic),
            2 => Ok(Distribution::Linear),
            other => Err(TaggingError::InvalidDistribution(other.to_string())),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Logarithmic => f.write_str("logarithmic"),
            Distribution::Linear => f.write_str("linear"),
        }
    }
}

/// A record that can be placed in a tag cloud
pub trait CloudWeighted {
    /// How often the tag is used
    fn count(&self) -> u64;

    fn set_font_size(&mut self, font_size: usize);
}

/// A tag paired with its usage count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: Tag,
    pub count: u64,
    /// Filled in by [`calculate_cloud`]
    pub font_size: Option<usize>,
}

impl TagCount {
    pub fn new(tag: Tag, count: u64) -> Self {
        Self {
            tag,
            count,
            font_size: None,
        }
    }
}

impl CloudWeighted for TagCount {
    fn count(&self) -> u64 {
        self.count
    }

    fn set_font_size(&mut self, font_size: usize) {
        self.font_size = Some(font_size);
    }
}

fn calculate_thresholds(min_weight: f64, max_weight: f64, steps: usize) -> Vec<f64> {
    let delta = (max_weight - min_weight) / steps as f64;
    (1..=steps).map(|i| min_weight + i as f64 * delta).collect()
}

/// Logarithmic weighting follows the Tag Cloud plugin for Mephisto by Sven Fuchs.
///
/// The logarithmic weight never exceeds `max_weight`; it is clamped so float
/// rounding cannot push a tie past the top threshold.
fn calculate_tag_weight(weight: f64, max_weight: f64, distribution: Distribution) -> f64 {
    match distribution {
        _ if max_weight == 1.0 => weight,
        Distribution::Linear => weight,
        Distribution::Logarithmic => (weight.ln() * max_weight / max_weight.ln()).min(max_weight),
    }
}

/// Assign a `font_size` between 1 and `steps` to every record, in place.
///
/// The bucket is the first of `steps` evenly spaced thresholds between the
/// smallest and largest count that the record's weight does not exceed, so a
/// weight exactly on a threshold falls into the lower bucket. An empty slice
/// is left untouched.
pub fn calculate_cloud<T: CloudWeighted>(
    tags: &mut [T],
    steps: usize,
    distribution: Distribution,
) -> Result<()> {
    if steps == 0 {
        return Err(TaggingError::InvalidSteps(steps));
    }

    let (Some(min_count), Some(max_count)) = (
        tags.iter().map(CloudWeighted::count).min(),
        tags.iter().map(CloudWeighted::count).max(),
    ) else {
        return Ok(());
    };

    let min_weight = min_count as f64;
    let max_weight = max_count as f64;
    let thresholds = calculate_thresholds(min_weight, max_weight, steps);
    debug!(?thresholds, %distribution, "calculated cloud thresholds");

    for tag in tags.iter_mut() {
        let weight = calculate_tag_weight(tag.count() as f64, max_weight, distribution);
        // Rounding can leave the heaviest weight a hair above the last threshold.
        let font_size = thresholds
            .iter()
            .position(|threshold| weight <= *threshold)
            .map_or(steps, |i| i + 1);
        tag.set_font_size(font_size);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(values: &[u64]) -> Vec<TagCount> {
        values
            .iter()
            .enumerate()
            .map(|(i, &count)| TagCount::new(Tag::new(format!("tag{}", i)), count))
            .collect()
    }

    fn sizes(tags: &[TagCount]) -> Vec<usize> {
        tags.iter().map(|t| t.font_size.unwrap()).collect()
    }

    #[test]
    fn test_linear_boundaries() {
        let mut tags = counts(&[1, 100]);
        calculate_cloud(&mut tags, 5, Distribution::Linear).unwrap();
        assert_eq!(sizes(&tags), vec![1, 5]);
    }

    #[test]
    fn test_linear_spread() {
        // thresholds: 25.75, 50.5, 75.25, 100
        let mut tags = counts(&[1, 10, 26, 50, 51, 100]);
        calculate_cloud(&mut tags, 4, Distribution::Linear).unwrap();
        assert_eq!(sizes(&tags), vec![1, 1, 2, 2, 3, 4]);
    }

    #[test]
    fn test_logarithmic_spread() {
        // weights: 0, 50, 100 against thresholds 25.75, 50.5, 75.25, 100
        let mut tags = counts(&[1, 10, 100]);
        calculate_cloud(&mut tags, DEFAULT_STEPS, Distribution::default()).unwrap();
        assert_eq!(sizes(&tags), vec![1, 2, 4]);
    }

    #[test]
    fn test_tie_on_threshold_takes_lower_bucket() {
        // thresholds: 2, 3
        let mut tags = counts(&[1, 2, 3]);
        calculate_cloud(&mut tags, 2, Distribution::Linear).unwrap();
        assert_eq!(sizes(&tags), vec![1, 1, 2]);
    }

    #[test]
    fn test_all_counts_one() {
        let mut tags = counts(&[1, 1, 1]);
        calculate_cloud(&mut tags, 4, Distribution::Logarithmic).unwrap();
        assert_eq!(sizes(&tags), vec![1, 1, 1]);
    }

    #[test]
    fn test_equal_counts_share_lowest_bucket() {
        for count in [5, 6, 7, 22, 1000] {
            for distribution in [Distribution::Logarithmic, Distribution::Linear] {
                let mut tags = counts(&[count, count, count]);
                calculate_cloud(&mut tags, 4, distribution).unwrap();
                assert_eq!(sizes(&tags), vec![1, 1, 1], "count {} {}", count, distribution);
            }
        }
    }

    #[test]
    fn test_logarithmic_weight_never_exceeds_max() {
        for max in 2..200u64 {
            let max = max as f64;
            assert!(calculate_tag_weight(max, max, Distribution::Logarithmic) <= max);
        }
    }

    #[test]
    fn test_empty_input_is_noop() {
        let mut tags: Vec<TagCount> = Vec::new();
        calculate_cloud(&mut tags, 4, Distribution::Linear).unwrap();
        assert!(tags.is_empty());
    }

    #[test]
    fn test_zero_steps_rejected() {
        let mut tags = counts(&[1, 2]);
        assert!(matches!(
            calculate_cloud(&mut tags, 0, Distribution::Linear),
            Err(TaggingError::InvalidSteps(0))
        ));
        assert!(tags.iter().all(|t| t.font_size.is_none()));
    }

    #[test]
    fn test_existing_font_size_overwritten() {
        let mut tags = counts(&[1, 100]);
        tags[0].font_size = Some(9);
        calculate_cloud(&mut tags, 5, Distribution::Linear).unwrap();
        assert_eq!(tags[0].font_size, Some(1));
    }

    #[test]
    fn test_parse_distribution() {
        assert_eq!(
            "linear".parse::<Distribution>().unwrap(),
            Distribution::Linear
        );
        assert_eq!(
            "LOGARITHMIC".parse::<Distribution>().unwrap(),
            Distribution::Logarithmic
        );
        assert_eq!("Log".parse::<Distribution>().unwrap(), Distribution::Logarithmic);
        match "cheese".parse::<Distribution>() {
            Err(TaggingError::InvalidDistribution(value)) => assert_eq!(value, "cheese"),
            other => panic!("Expected InvalidDistribution, got {:?}", other),
        }
    }

    #[test]
    fn test_legacy_distribution_codes() {
        assert_eq!(Distribution::try_from(1).unwrap(), Distribution::Logarithmic);
        assert_eq!(Distribution::try_from(2).unwrap(), Distribution::Linear);
        assert!(matches!(
            Distribution::try_from(3),
            Err(TaggingError::InvalidDistribution(v)) if v == "3"
        ));
    }
}
