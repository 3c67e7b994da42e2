use crate::error::WorkoutError;
use crate::message::InfoMessage;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// The closed set of supported activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum WorkoutKind {
    Running,
    #[strum(to_string = "SportsWalking")]
    Walking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::Walking,
    ];

    /// Three-letter code the sensor firmware tags packages with
    pub const fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Number of values a package of this kind carries
    pub const fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    /// Exact, case-sensitive lookup
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

/// Metrics every workout can report.
///
/// `mean_speed` defaults to distance over duration; variants whose speed is
/// measured some other way override it.
pub trait Training {
    fn kind(&self) -> WorkoutKind;

    /// Session length in hours
    fn duration(&self) -> f64;

    /// Covered distance in km
    fn distance(&self) -> f64;

    /// Average speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration()
    }

    /// Energy spent in kcal
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.kind(),
            self.duration(),
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

fn stride_distance(action: u32, len_step: f64) -> f64 {
    f64::from(action) * len_step / M_IN_KM
}

fn check_duration(duration: f64) -> Result<f64, WorkoutError> {
    if duration.is_finite() && duration > 0.0 {
        Ok(duration)
    } else {
        Err(WorkoutError::NonPositiveDuration(duration))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    action: u32,
    duration: f64,
    weight: f64,
}

impl Running {
    pub const LEN_STEP: f64 = 0.65;
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            action,
            duration: check_duration(duration)?,
            weight,
        })
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn distance(&self) -> f64 {
        stride_distance(self.action, Self::LEN_STEP)
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.weight
            / M_IN_KM
            * (self.duration * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    action: u32,
    duration: f64,
    weight: f64,
    height: f64,
}

impl SportsWalking {
    pub const LEN_STEP: f64 = 0.65;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;

    /// `height` is in centimeters
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        height: f64,
    ) -> Result<Self, WorkoutError> {
        if !(height.is_finite() && height > 0.0) {
            return Err(WorkoutError::InvalidParameter {
                name: "height",
                value: height,
            });
        }
        Ok(Self {
            action,
            duration: check_duration(duration)?,
            weight,
            height,
        })
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walking
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn distance(&self) -> f64 {
        stride_distance(self.action, Self::LEN_STEP)
    }

    fn spent_calories(&self) -> f64 {
        let speed_m_s = self.mean_speed() * Self::KMH_IN_MSEC;
        let height_m = self.height / Self::CM_IN_M;

        (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight
            + speed_m_s.powi(2) / height_m * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight)
            * (self.duration * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    action: u32,
    duration: f64,
    weight: f64,
    pool_length: f64,
    pool_count: u32,
}

impl Swimming {
    pub const LEN_STEP: f64 = 1.38;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;

    /// `pool_length` is in meters, `pool_count` is the number of laps
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        pool_length: f64,
        pool_count: u32,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            action,
            duration: check_duration(duration)?,
            weight,
            pool_length,
            pool_count,
        })
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn distance(&self) -> f64 {
        stride_distance(self.action, Self::LEN_STEP)
    }

    // Pool laps, not strokes, give the swim speed.
    fn mean_speed(&self) -> f64 {
        self.pool_length * f64::from(self.pool_count) / M_IN_KM / self.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight
            * self.duration
    }
}

/// A constructed workout of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::Walking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn kind(&self) -> WorkoutKind {
        self.as_training().kind()
    }

    fn duration(&self) -> f64 {
        self.as_training().duration()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::Walking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}
