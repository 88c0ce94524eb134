use crate::errors::TrackerError;
use crate::metrics;
use crate::types::WorkoutReport;

/// Felles råverdier for alle treningstypene.
/// Uforanderlig etter konstruksjon; alle avledninger er rene.
#[derive(Debug, Clone, Copy)]
pub struct TrainingBase {
    pub action: u32,     // skritt eller svømmetak
    pub duration_h: f64, // timer
    pub weight_kg: f64,  // kg
}

impl TrainingBase {
    /// Valider ved konstruksjon i stedet for å utsette til divisjon ved spørring.
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, TrackerError> {
        if duration_h <= 0.0 {
            return Err(TrackerError::InvalidArgument(format!(
                "duration_h må være > 0, fikk {duration_h}"
            )));
        }
        if weight_kg <= 0.0 {
            return Err(TrackerError::InvalidArgument(format!(
                "weight_kg må være > 0, fikk {weight_kg}"
            )));
        }
        Ok(Self {
            action,
            duration_h,
            weight_kg,
        })
    }

    /// Distanse i km med skrittformelen.
    pub fn distance_km(&self) -> f64 {
        metrics::distance_km(self.action, metrics::LEN_STEP_M)
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        metrics::mean_speed_kmh(self.distance_km(), self.duration_h)
    }

    /// Basistypen har ingen kaloriformel; variantene definerer sin egen.
    pub fn spent_calories(&self) -> Result<f64, TrackerError> {
        Err(TrackerError::UnsupportedOperation)
    }
}

/// Løping.
#[derive(Debug, Clone, Copy)]
pub struct Running {
    pub base: TrainingBase,
}

impl Running {
    pub const LABEL: &'static str = "Running";

    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, TrackerError> {
        Ok(Self {
            base: TrainingBase::new(action, duration_h, weight_kg)?,
        })
    }

    pub fn distance_km(&self) -> f64 {
        self.base.distance_km()
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        self.base.mean_speed_kmh()
    }

    pub fn spent_calories(&self) -> f64 {
        metrics::running_calories(self.mean_speed_kmh(), self.base.weight_kg, self.base.duration_h)
    }
}

/// Sportsgange.
#[derive(Debug, Clone, Copy)]
pub struct SportsWalking {
    pub base: TrainingBase,
    pub height_cm: f64,
}

impl SportsWalking {
    pub const LABEL: &'static str = "SportsWalking";

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, TrackerError> {
        if height_cm <= 0.0 {
            return Err(TrackerError::InvalidArgument(format!(
                "height_cm må være > 0, fikk {height_cm}"
            )));
        }
        Ok(Self {
            base: TrainingBase::new(action, duration_h, weight_kg)?,
            height_cm,
        })
    }

    pub fn distance_km(&self) -> f64 {
        self.base.distance_km()
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        self.base.mean_speed_kmh()
    }

    pub fn spent_calories(&self) -> f64 {
        metrics::walking_calories(
            self.mean_speed_kmh(),
            self.base.weight_kg,
            self.height_cm,
            self.base.duration_h,
        )
    }
}

/// Svømming.
#[derive(Debug, Clone, Copy)]
pub struct Swimming {
    pub base: TrainingBase,
    pub length_pool_m: f64,
    pub count_pool: u32,
}

impl Swimming {
    pub const LABEL: &'static str = "Swimming";

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: u32,
    ) -> Result<Self, TrackerError> {
        if length_pool_m <= 0.0 {
            return Err(TrackerError::InvalidArgument(format!(
                "length_pool_m må være > 0, fikk {length_pool_m}"
            )));
        }
        Ok(Self {
            base: TrainingBase::new(action, duration_h, weight_kg)?,
            length_pool_m,
            count_pool,
        })
    }

    /// Distanse følger takformelen (action × 1,38 / 1000) som i referansen.
    /// NB: henger ikke sammen med fartsformelen under, som bruker
    /// bassenggeometri (length_pool_m × count_pool / 1000 ville vært
    /// konsistent). Bevart med vilje for paritet med referanseoppførselen.
    pub fn distance_km(&self) -> f64 {
        metrics::distance_km(self.base.action, metrics::LEN_STROKE_M)
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        metrics::pool_speed_kmh(self.length_pool_m, self.count_pool, self.base.duration_h)
    }

    pub fn spent_calories(&self) -> f64 {
        metrics::swimming_calories(self.mean_speed_kmh(), self.base.weight_kg)
    }
}

/// Lukket sum-type over treningsvariantene.
#[derive(Debug, Clone, Copy)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Visningsetikett per variant (fast konstant, ikke typenavn-oppslag).
    pub fn label(&self) -> &'static str {
        match self {
            Workout::Running(_) => Running::LABEL,
            Workout::SportsWalking(_) => SportsWalking::LABEL,
            Workout::Swimming(_) => Swimming::LABEL,
        }
    }

    pub fn duration_h(&self) -> f64 {
        match self {
            Workout::Running(w) => w.base.duration_h,
            Workout::SportsWalking(w) => w.base.duration_h,
            Workout::Swimming(w) => w.base.duration_h,
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::SportsWalking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::SportsWalking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }

    /// Sett sammen rapport. Ren avledning; samme record gir samme rapport.
    pub fn report(&self) -> WorkoutReport {
        WorkoutReport {
            training_type: self.label().to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}
