//! Color frequency histograms
//!
//! [`ColorHistogram::build`] makes one row-major pass over a buffer and
//! fills two counted sets: the edge band (background candidates) and the
//! whole image (foreground candidates).
//!
//! [`CountedColors`] keeps colors in first-seen order, so sorting by count
//! is deterministic and ties keep a stable order. Repeated runs over the
//! same buffer produce identical rankings.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use swatch_core::{Color, CountedColor, PixelBuffer};
use tracing::trace;

/// Insertion-ordered color -> count map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountedColors {
    entries: Vec<CountedColor>,
    index: HashMap<Color, usize>,
}

impl CountedColors {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `color`.
    #[inline]
    pub fn add(&mut self, color: Color) {
        self.add_count(color, 1);
    }

    /// Add `count` occurrences of `color`.
    pub fn add_count(&mut self, color: Color, count: u32) {
        match self.index.get(&color) {
            Some(&i) => self.entries[i].count += count,
            None => {
                self.index.insert(color, self.entries.len());
                self.entries.push(CountedColor::new(color, count));
            }
        }
    }

    /// Occurrences of `color`, 0 if never added.
    pub fn count(&self, color: Color) -> u32 {
        self.index
            .get(&color)
            .map_or(0, |&i| self.entries[i].count)
    }

    /// Number of distinct colors
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no color has been added
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count as u64).sum()
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, CountedColor> {
        self.entries.iter()
    }

    /// Entries sorted by ascending count.
    ///
    /// The sort is stable: equal counts keep first-seen order, so the last
    /// entry is the most frequent color seen latest.
    pub fn sorted_ascending(&self) -> Vec<CountedColor> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|e| e.count);
        sorted
    }
}

impl Extend<Color> for CountedColors {
    fn extend<I: IntoIterator<Item = Color>>(&mut self, iter: I) {
        for color in iter {
            self.add(color);
        }
    }
}

impl FromIterator<Color> for CountedColors {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a CountedColors {
    type Item = &'a CountedColor;
    type IntoIter = std::slice::Iter<'a, CountedColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Edge-band and whole-image histograms of one buffer
#[derive(Debug, Clone)]
pub struct ColorHistogram {
    /// Colors found in the edge columns
    pub edge: CountedColors,
    /// Colors of every pixel, edge band included
    pub all: CountedColors,
    /// Height of the buffer the histograms came from
    pub height: u32,
}

impl ColorHistogram {
    /// Count every pixel of `buffer` exactly once.
    ///
    /// Pixels whose column lies in `edge_columns` are also counted in
    /// [`ColorHistogram::edge`]. Buffers narrower than the band clip it,
    /// possibly to nothing.
    pub fn build(buffer: &PixelBuffer, edge_columns: &RangeInclusive<u32>) -> Self {
        let mut edge = CountedColors::new();
        let mut all = CountedColors::new();

        for y in 0..buffer.height() {
            for (x, &pixel) in buffer.row_data(y).iter().enumerate() {
                let color = Color::from_pixel32(pixel);
                if edge_columns.contains(&(x as u32)) {
                    edge.add(color);
                }
                all.add(color);
            }
        }

        trace!(
            edge_colors = edge.len(),
            all_colors = all.len(),
            "built color histograms"
        );
        Self {
            edge,
            all,
            height: buffer.height(),
        }
    }
}
