//! Regression test parameters and operations

use swatch_core::Color;

/// Regression test parameters
///
/// Tracks the test name, the index of the current comparison and every
/// recorded failure.
pub struct RegParams {
    /// Name of the test (e.g., "palette")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "palette")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two colors for exact equality
    pub fn compare_colors(&mut self, expected: Color, actual: Color) -> bool {
        self.index += 1;

        if expected != actual {
            self.fail(format!(
                "color comparison for index {}: expected {}, actual {}",
                self.index, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two palettes given as `[background, primary, secondary, detail]`
    ///
    /// Every slot is checked so one failure reports all mismatching slots.
    pub fn compare_palettes(&mut self, expected: &[Color; 4], actual: &[Color; 4]) -> bool {
        const SLOTS: [&str; 4] = ["background", "primary", "secondary", "detail"];
        self.index += 1;

        let mismatches: Vec<String> = SLOTS
            .iter()
            .zip(expected.iter().zip(actual.iter()))
            .filter(|(_, (e, a))| e != a)
            .map(|(slot, (e, a))| format!("{slot}: expected {e}, actual {a}"))
            .collect();

        if mismatches.is_empty() {
            true
        } else {
            self.fail(format!(
                "palette comparison for index {}\n  {}",
                self.index,
                mismatches.join("\n  ")
            ));
            false
        }
    }

    /// Record a boolean check
    ///
    /// `what` describes the property that should hold.
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;

        if !condition {
            self.fail(format!("check for index {}: {}", self.index, what));
        }
        condition
    }

    fn fail(&mut self, detail: String) {
        let msg = format!("Failure in {}_reg: {}", self.test_name, detail);
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
