//! Foreground color ranking
//!
//! Candidates come from the whole-image histogram. Each color is saturated
//! to at least the saturation floor, then kept only if its darkness is the
//! opposite of the background's. Survivors are re-counted (flooring can
//! merge colors) and ranked by ascending count.
//!
//! Selection is one forward scan over that ranking. The first contrasting
//! color becomes `primary`; later colors fill `secondary` and `detail`
//! only when they are also distinct from the slots already filled. Slots
//! left empty fall back to white on a dark background, black otherwise.

use crate::colorspace::{contrast_ratio, is_dark_with, is_near_grey_with, with_min_saturation};
use crate::histogram::CountedColors;
use crate::options::{CONTRAST_THRESHOLD, DISTINCT_THRESHOLD, GREY_TOLERANCE, PaletteOptions};
use swatch_core::{Color, CountedColor};
use tracing::{debug, trace};

/// Check whether `a` and `b` contrast by more than 1.6.
pub fn is_contrasting(a: Color, b: Color) -> bool {
    contrast_ratio(a, b) > CONTRAST_THRESHOLD
}

/// Check whether `a` and `b` differ by more than 0.25 on some RGB channel.
///
/// Two near-grey colors are never distinct from each other, whatever their
/// brightness.
pub fn is_distinct(a: Color, b: Color) -> bool {
    is_distinct_with(a, b, DISTINCT_THRESHOLD, GREY_TOLERANCE)
}

/// [`is_distinct`] with explicit thresholds.
pub fn is_distinct_with(a: Color, b: Color, threshold: f32, grey_tolerance: f32) -> bool {
    let [ar, ag, ab] = a.normalized();
    let [br, bg, bb] = b.normalized();
    let differs =
        (ar - br).abs() > threshold || (ag - bg).abs() > threshold || (ab - bb).abs() > threshold;
    if !differs {
        return false;
    }
    !(is_near_grey_with(a, grey_tolerance) && is_near_grey_with(b, grey_tolerance))
}

/// Foreground slots after the scan, before fallbacks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForegroundSelection {
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub detail: Option<Color>,
}

impl ForegroundSelection {
    /// Fill empty slots with white on a dark background, black otherwise.
    ///
    /// Returns `[primary, secondary, detail]`.
    pub fn resolve(self, is_dark_background: bool) -> [Color; 3] {
        let fallback = if is_dark_background {
            Color::WHITE
        } else {
            Color::BLACK
        };
        [
            self.primary.unwrap_or(fallback),
            self.secondary.unwrap_or(fallback),
            self.detail.unwrap_or(fallback),
        ]
    }

    /// Number of slots left for the fallback.
    pub fn missing(&self) -> usize {
        [self.primary, self.secondary, self.detail]
            .iter()
            .filter(|slot| slot.is_none())
            .count()
    }
}

/// Saturate, filter by darkness and rank the whole-image colors.
///
/// Returns candidates sorted by ascending count; equal counts keep
/// first-seen order.
pub fn rank_candidates(
    all: &CountedColors,
    is_dark_background: bool,
    options: &PaletteOptions,
) -> Vec<CountedColor> {
    let mut candidates = CountedColors::new();
    for entry in all {
        let color = with_min_saturation(entry.color, options.min_saturation);
        if is_dark_with(color, options.dark_luminance_threshold) != is_dark_background {
            candidates.add_count(color, entry.count);
        }
    }
    trace!(
        candidates = candidates.len(),
        is_dark_background, "ranked foreground candidates"
    );
    candidates.sorted_ascending()
}

/// Scan ranked candidates and fill primary, secondary and detail.
pub fn select_foreground(
    candidates: &[CountedColor],
    background: Color,
    options: &PaletteOptions,
) -> ForegroundSelection {
    let contrasting = |c: Color| contrast_ratio(c, background) > options.contrast_threshold;
    let distinct =
        |a: Color, b: Color| is_distinct_with(a, b, options.distinct_threshold, options.grey_tolerance);

    let mut selection = ForegroundSelection::default();
    for candidate in candidates {
        let color = candidate.color;
        match (selection.primary, selection.secondary, selection.detail) {
            (None, _, _) => {
                if contrasting(color) {
                    trace!(primary = %color, "selected primary");
                    selection.primary = Some(color);
                }
            }
            (Some(primary), None, _) => {
                if distinct(primary, color) && contrasting(color) {
                    trace!(secondary = %color, "selected secondary");
                    selection.secondary = Some(color);
                }
            }
            (Some(primary), Some(secondary), None) => {
                if distinct(secondary, color) && distinct(primary, color) && contrasting(color) {
                    trace!(detail = %color, "selected detail");
                    selection.detail = Some(color);
                    break;
                }
            }
            (Some(_), Some(_), Some(_)) => break,
        }
    }

    if selection.missing() > 0 {
        debug!(
            missing = selection.missing(),
            "foreground slots left for fallback"
        );
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counted(entries: &[(Color, u32)]) -> Vec<CountedColor> {
        entries
            .iter()
            .map(|&(color, count)| CountedColor::new(color, count))
            .collect()
    }

    #[test]
    fn test_is_contrasting() {
        assert!(is_contrasting(Color::WHITE, Color::BLACK));
        assert!(!is_contrasting(Color::WHITE, Color::WHITE));
        assert!(!is_contrasting(Color::gray(120), Color::gray(130)));
    }

    #[test]
    fn test_is_distinct() {
        assert!(!is_distinct(Color::RED, Color::RED));
        assert!(is_distinct(Color::RED, Color::CYAN));
        assert!(!is_distinct(Color::rgb(100, 100, 100), Color::rgb(160, 110, 100)));
        assert!(is_distinct(Color::rgb(100, 100, 100), Color::rgb(170, 100, 100)));
    }

    #[test]
    fn test_greys_are_never_distinct() {
        let dark = Color::from_normalized(0.3, 0.3, 0.3);
        let light = Color::from_normalized(0.7, 0.7, 0.7);
        assert!(!is_distinct(dark, light));
        assert!(!is_distinct(Color::BLACK, Color::WHITE));
        // One grey and one colored color still count
        assert!(is_distinct(dark, Color::rgb(255, 180, 180)));
    }

    #[test]
    fn test_resolve_fallbacks() {
        let empty = ForegroundSelection::default();
        assert_eq!(empty.missing(), 3);
        assert_eq!(empty.resolve(true), [Color::WHITE; 3]);
        assert_eq!(empty.resolve(false), [Color::BLACK; 3]);

        let partial = ForegroundSelection {
            primary: Some(Color::RED),
            ..ForegroundSelection::default()
        };
        assert_eq!(partial.resolve(true), [Color::RED, Color::WHITE, Color::WHITE]);
    }

    #[test]
    fn test_rank_filters_by_darkness() {
        let mut all = CountedColors::new();
        all.add_count(Color::rgb(255, 200, 0), 3);
        all.add_count(Color::rgb(0, 0, 120), 7);
        all.add_count(Color::rgb(255, 255, 0), 1);
        let ranked = rank_candidates(&all, true, &PaletteOptions::default());
        let colors: Vec<_> = ranked.iter().map(|e| e.color).collect();
        assert_eq!(colors, vec![Color::rgb(255, 255, 0), Color::rgb(255, 200, 0)]);
    }

    #[test]
    fn test_rank_merges_saturated_colors() {
        let mut all = CountedColors::new();
        // Both floor to the same saturated color
        all.add_count(Color::gray(245), 2);
        all.add_count(Color::rgb(245, 208, 208), 3);
        all.add_count(Color::rgb(255, 255, 0), 4);
        let ranked = rank_candidates(&all, true, &PaletteOptions::default());
        assert_eq!(
            ranked,
            vec![
                CountedColor::new(Color::rgb(255, 255, 0), 4),
                CountedColor::new(Color::rgb(245, 208, 208), 5),
            ]
        );
    }

    #[test]
    fn test_select_scans_ascending() {
        let background = Color::BLACK;
        let candidates = counted(&[
            (Color::rgb(255, 255, 0), 1),
            (Color::rgb(255, 255, 40), 2),
            (Color::CYAN, 3),
            (Color::rgb(255, 120, 255), 4),
            (Color::rgb(120, 255, 120), 5),
        ]);
        let selection = select_foreground(&candidates, background, &PaletteOptions::default());
        assert_eq!(selection.primary, Some(Color::rgb(255, 255, 0)));
        // (255, 255, 40) is not distinct from the primary
        assert_eq!(selection.secondary, Some(Color::CYAN));
        assert_eq!(selection.detail, Some(Color::rgb(255, 120, 255)));
    }

    #[test]
    fn test_select_skips_low_contrast() {
        let background = Color::gray(20);
        let candidates = counted(&[(Color::gray(30), 10), (Color::rgb(255, 200, 0), 1)]);
        let selection = select_foreground(&candidates, background, &PaletteOptions::default());
        assert_eq!(selection.primary, Some(Color::rgb(255, 200, 0)));
        assert_eq!(selection.secondary, None);
        assert_eq!(selection.detail, None);
    }

    #[test]
    fn test_one_candidate_fills_one_slot() {
        let candidates = counted(&[(Color::WHITE, 1)]);
        let selection = select_foreground(&candidates, Color::BLACK, &PaletteOptions::default());
        assert_eq!(selection.primary, Some(Color::WHITE));
        assert_eq!(selection.missing(), 2);
    }
}
