//! Float sequence widening

/// Widen every `f32` in `values` to `f64`, keeping order and length.
///
/// The widening is exact, so NaN and both infinities survive unchanged.
pub fn convert_float_sequence_to_numbers(values: &[f32]) -> Vec<f64> {
    values.iter().copied().map(f64::from).collect()
}
