use crate::error::WorkoutError;
use crate::workout::{Running, SportsWalking, Swimming, Workout, WorkoutKind};
use log::debug;

/// Build a workout record from a workout code and its flat parameter list.
///
/// Values are positional: stride count, duration in hours, weight in kg,
/// then the activity extras (height in cm for walking; pool length in m and
/// lap count for swimming).
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let Some(kind) = WorkoutKind::from_code(code) else {
        return Err(WorkoutError::UnknownWorkoutType {
            code: code.to_string(),
        });
    };

    if data.len() != kind.arity() {
        return Err(WorkoutError::ParameterCountMismatch {
            code: code.to_string(),
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    debug!("building {kind} from {data:?}");
    let action = count("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout = match kind {
        WorkoutKind::Running => Workout::from(Running::new(action, duration, weight)?),
        WorkoutKind::Walking => {
            let height = data[3];
            Workout::from(SportsWalking::new(action, duration, weight, height)?)
        }
        WorkoutKind::Swimming => {
            let pool_length = data[3];
            let pool_count = count("pool_count", data[4])?;
            let swim = Swimming::new(action, duration, weight, pool_length, pool_count)?;
            Workout::from(swim)
        }
    };
    Ok(workout)
}

fn count(name: &'static str, value: f64) -> Result<u32, WorkoutError> {
    let whole = value.is_finite() && value >= 0.0 && value.fract() == 0.0;
    if whole && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::Training;
    use assert_matches::assert_matches;

    #[test]
    fn test_read_package_builds_each_kind() {
        assert_matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
            Ok(Workout::Swimming(_))
        );
        assert_matches!(
            read_package("RUN", &[15000.0, 1.0, 75.0]),
            Ok(Workout::Running(_))
        );
        assert_matches!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]),
            Ok(Workout::Walking(_))
        );
    }

    #[test]
    fn test_every_kind_dispatches_by_its_code() {
        for kind in WorkoutKind::ALL {
            let data = vec![1.0; kind.arity()];
            let workout = read_package(kind.code(), &data).unwrap();
            assert_eq!(workout.kind(), kind);
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_matches!(
            read_package("XYZ", &[1.0, 1.0, 1.0]),
            Err(WorkoutError::UnknownWorkoutType { code }) if code == "XYZ"
        );
        assert_matches!(
            read_package("run", &[15000.0, 1.0, 75.0]),
            Err(WorkoutError::UnknownWorkoutType { .. })
        );
    }

    #[test]
    fn test_parameter_count_mismatch_never_truncates_or_pads() {
        assert_matches!(
            read_package("RUN", &[15000.0, 1.0]),
            Err(WorkoutError::ParameterCountMismatch { expected: 3, actual: 2, .. })
        );
        assert_matches!(
            read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]),
            Err(WorkoutError::ParameterCountMismatch { expected: 3, actual: 4, .. })
        );
        assert_matches!(
            read_package("SWM", &[]),
            Err(WorkoutError::ParameterCountMismatch { expected: 5, actual: 0, .. })
        );
    }

    #[test]
    fn test_counts_must_be_whole_and_non_negative() {
        assert_matches!(
            read_package("RUN", &[100.5, 1.0, 75.0]),
            Err(WorkoutError::InvalidParameter { name: "action", .. })
        );
        assert_matches!(
            read_package("RUN", &[-1.0, 1.0, 75.0]),
            Err(WorkoutError::InvalidParameter { name: "action", .. })
        );
        assert_matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]),
            Err(WorkoutError::InvalidParameter { name: "pool_count", .. })
        );
    }

    #[test]
    fn test_zero_duration_rejected_at_dispatch() {
        assert_matches!(
            read_package("RUN", &[15000.0, 0.0, 75.0]),
            Err(WorkoutError::NonPositiveDuration(_))
        );
    }

    #[test]
    fn test_positional_order() {
        let workout = read_package("SWM", &[720.0, 2.0, 80.0, 50.0, 20.0]).unwrap();
        assert!((workout.duration() - 2.0).abs() < 1e-12);
        assert!((workout.mean_speed() - 0.5).abs() < 1e-12);
    }
}
