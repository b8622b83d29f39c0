//! # Input Validation
//!
//! Rejects geometrically or physically inconsistent requests before any
//! number is computed. The analysis functions call [`AnalysisInput::validate`]
//! first, so the numeric core never sees invalid input.
//!
//! Checks run in a fixed order: beam length, section dimensions, support
//! count, support positions, then each load (position, span end, magnitude,
//! angle), span-load overlaps, and finally the global factors.
//! [`AnalysisInput::validate`] reports the first problem in that order;
//! [`AnalysisInput::violations`] reports all of them.

use crate::errors::{CalcError, CalcResult};
use crate::loads::Load;

use super::input::AnalysisInput;

/// Whether `value` is a finite number strictly greater than zero
fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Overlap length of two intervals; positive when they share more than a point
pub fn overlap_length(a: (f64, f64), b: (f64, f64)) -> f64 {
    a.1.min(b.1) - a.0.max(b.0)
}

impl AnalysisInput {
    /// Validate the request, returning the first problem found.
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam_core::calculations::AnalysisInput;
    /// use beam_core::loads::Load;
    /// use beam_core::materials::MaterialKey;
    /// use beam_core::section::{CrossSectionSpec, SectionShape};
    ///
    /// let section = CrossSectionSpec::new(SectionShape::Rectangular, 0.1, 0.2);
    /// let input = AnalysisInput::simply_supported(10.0, MaterialKey::Steel, section)
    ///     .with_load(Load::point(10.0, 12.0));
    /// assert!(input.validate().is_err());
    /// ```
    pub fn validate(&self) -> CalcResult<()> {
        match self.violations().into_iter().next() {
            Some(first) => Err(first),
            None => Ok(()),
        }
    }

    /// Validate the request, reporting every problem at once.
    ///
    /// A single problem is returned as-is; several are wrapped in
    /// [`CalcError::ValidationFailed`].
    pub fn validate_all(&self) -> CalcResult<()> {
        let mut violations = self.violations();
        match violations.len() {
            0 => Ok(()),
            1 => Err(violations.remove(0)),
            _ => Err(CalcError::ValidationFailed { violations }),
        }
    }

    /// All validation problems, in check order
    pub fn violations(&self) -> Vec<CalcError> {
        let mut errors = Vec::new();
        let length = self.beam_length_m;

        if !positive(length) {
            errors.push(CalcError::invalid_input(
                "beam_length_m",
                length.to_string(),
                "Beam length must be greater than zero",
            ));
        }

        if !positive(self.section.width_m) || !positive(self.section.height_m) {
            errors.push(CalcError::invalid_input(
                "section",
                format!("{} x {}", self.section.width_m, self.section.height_m),
                "Section dimensions must be greater than zero",
            ));
        }

        self.check_supports(&mut errors);

        for load in &self.loads {
            check_load(load, length, &mut errors);
        }

        self.check_overlaps(&mut errors);

        if !positive(self.load_factor) {
            errors.push(CalcError::invalid_input(
                "load_factor",
                self.load_factor.to_string(),
                "Load factor must be greater than zero",
            ));
        }
        if !positive(self.effective_length_factor) {
            errors.push(CalcError::invalid_input(
                "effective_length_factor",
                self.effective_length_factor.to_string(),
                "Effective-length factor must be greater than zero",
            ));
        }

        errors
    }

    fn check_supports(&self, errors: &mut Vec<CalcError>) {
        if self.supports.len() != 2 {
            errors.push(CalcError::invalid_input(
                "supports",
                self.supports.len().to_string(),
                "The analysis requires exactly two supports",
            ));
            return;
        }

        let pair = self.support_pair();
        let finite = pair.a_m.is_finite() && pair.b_m.is_finite();
        if !finite || pair.a_m < 0.0 || pair.b_m > self.beam_length_m || pair.a_m == pair.b_m {
            errors.push(CalcError::invalid_input(
                "supports",
                format!("{}, {}", pair.a_m, pair.b_m),
                "Support positions must lie within the beam and be different",
            ));
        }
    }

    fn check_overlaps(&self, errors: &mut Vec<CalcError>) {
        let spans: Vec<(&Load, (f64, f64))> = self
            .loads
            .iter()
            .filter(|l| l.kind.is_span_load())
            .map(|l| (l, (l.position_m, l.end_position_m.unwrap_or(0.0))))
            .collect();

        for (i, (a, span_a)) in spans.iter().enumerate() {
            for (b, span_b) in spans.iter().skip(i + 1) {
                if overlap_length(*span_a, *span_b) > 0.0 {
                    errors.push(CalcError::invalid_input(
                        format!("loads[{}]", b.id),
                        format!("[{}, {}]", span_b.0, span_b.1),
                        format!("Loads {} and {} overlap; adjust their spans", a.id, b.id),
                    ));
                }
            }
        }
    }
}

fn check_load(load: &Load, length: f64, errors: &mut Vec<CalcError>) {
    let field = format!("loads[{}]", load.id);

    if !load.position_m.is_finite() || load.position_m < 0.0 || load.position_m > length {
        errors.push(CalcError::invalid_input(
            field.as_str(),
            load.position_m.to_string(),
            format!("Position of load {} must lie within the beam", load.id),
        ));
    }

    if load.kind.is_span_load() {
        let valid_end = match load.end_position_m {
            Some(end) => end.is_finite() && end > load.position_m && end <= length,
            None => false,
        };
        if !valid_end {
            let value = load
                .end_position_m
                .map(|e| e.to_string())
                .unwrap_or_else(|| "missing".to_string());
            errors.push(CalcError::invalid_input(
                field.as_str(),
                value,
                format!(
                    "Span of load {} must lie within the beam and end after its start",
                    load.id
                ),
            ));
        }
    }

    if !positive(load.magnitude) {
        errors.push(CalcError::invalid_input(
            field.as_str(),
            load.magnitude.to_string(),
            format!("Magnitude of load {} must be greater than zero", load.id),
        ));
    }

    if let Some(angle) = load.angle_deg {
        if !angle.is_finite() {
            errors.push(CalcError::invalid_input(
                field.as_str(),
                angle.to_string(),
                format!("Angle of load {} must be a finite number", load.id),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::MaterialKey;
    use crate::section::{CrossSectionSpec, SectionShape};
    use crate::supports::Support;

    fn base() -> AnalysisInput {
        AnalysisInput::simply_supported(
            10.0,
            MaterialKey::Steel,
            CrossSectionSpec::new(SectionShape::Rectangular, 0.1, 0.2),
        )
    }

    fn reason(err: &CalcError) -> String {
        match err {
            CalcError::InvalidInput { reason, .. } => reason.clone(),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let input = base()
            .with_load(Load::point(10.0, 5.0))
            .with_load(Load::distributed(2.0, 0.0, 4.0))
            .with_load(Load::triangular(3.0, 4.0, 10.0))
            .with_load(Load::moment(1.0, 10.0));
        assert_eq!(input.validate(), Ok(()));
        assert!(input.violations().is_empty());
    }

    #[test]
    fn test_overlapping_span_loads_rejected() {
        let input = base()
            .with_load(Load::distributed(5.0, 0.0, 6.0).with_id("1"))
            .with_load(Load::triangular(5.0, 4.0, 8.0).with_id("2"));
        assert_eq!(overlap_length((0.0, 6.0), (4.0, 8.0)), 2.0);
        let err = input.validate().unwrap_err();
        assert!(reason(&err).contains("overlap"));
        assert!(reason(&err).contains("1 and 2"));
    }

    #[test]
    fn test_touching_span_loads_accepted() {
        let input = base()
            .with_load(Load::distributed(5.0, 0.0, 4.0))
            .with_load(Load::triangular(5.0, 4.0, 8.0));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_first_failure_order() {
        let mut input = base().with_load(Load::point(-1.0, 20.0));
        input.beam_length_m = 0.0;
        input.section.width_m = 0.0;
        let err = input.validate().unwrap_err();
        assert!(reason(&err).contains("Beam length"));

        let all = input.violations();
        assert!(all.len() >= 4, "got {:?}", all);
    }

    #[test]
    fn test_validate_all_aggregates() {
        let input = base().with_load(Load::point(-1.0, 20.0));
        match input.validate_all() {
            Err(CalcError::ValidationFailed { violations }) => assert_eq!(violations.len(), 2),
            other => panic!("unexpected {:?}", other),
        }

        let single = base().with_load(Load::point(-1.0, 5.0));
        assert!(matches!(single.validate_all(), Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_support_rules() {
        let mut input = base();
        input.supports.push(Support::roller(5.0));
        assert!(reason(&input.validate().unwrap_err()).contains("exactly two"));

        let mut input = base();
        input.supports = vec![Support::pinned(4.0), Support::roller(4.0)];
        assert!(reason(&input.validate().unwrap_err()).contains("different"));

        let mut input = base();
        input.supports = vec![Support::pinned(-0.5), Support::roller(4.0)];
        assert!(input.validate().is_err());

        let mut input = base();
        input.supports = vec![Support::roller(10.0), Support::fixed(2.0)];
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_span_end_rules() {
        let mut missing = Load::distributed(1.0, 2.0, 4.0);
        missing.end_position_m = None;
        assert!(base().with_load(missing).validate().is_err());
        assert!(base().with_load(Load::distributed(1.0, 4.0, 4.0)).validate().is_err());
        assert!(base().with_load(Load::triangular(1.0, 4.0, 10.5)).validate().is_err());
    }

    #[test]
    fn test_magnitude_and_factors() {
        assert!(base().with_load(Load::moment(0.0, 3.0)).validate().is_err());
        assert!(base().with_load(Load::point(f64::NAN, 3.0)).validate().is_err());
        let infinite_angle = Load::point(1.0, 3.0).with_angle(f64::INFINITY);
        assert!(base().with_load(infinite_angle).validate().is_err());
        assert!(base().with_load_factor(0.0).validate().is_err());
        assert!(base().with_effective_length_factor(-1.0).validate().is_err());
        // below the recommended minimum is still accepted
        assert!(base().with_load_factor(0.3).validate().is_ok());
    }
}
