use crate::Sample;

/// WHAT: Magnitude is the Euclidean norm of the three axes
/// WHY: The console summarizes a series by its peak magnitude
#[test]
fn given_pythagorean_axes_when_taking_magnitude_then_norm_is_exact() {
    let sample = Sample::new(3.0, 4.0, 0.0);

    assert_eq!(sample.magnitude(), 5.0);
}
