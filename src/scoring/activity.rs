//! Exercise and condition scoring.
//!
//! Both axes are bucketed rather than linear: training volume is judged
//! against lifestyle-dependent duration and frequency thresholds, and the
//! condition score is a straight rescale of the six 1-5 check-in ratings.

use crate::models::{ConditionLog, DayRecord, Lifestyle};

/// Exercise score report. A planned rest day scores full marks on both
/// sub-axes regardless of logged volume.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseScore {
    pub total: u32,
    pub duration_score: u32,
    pub count_score: u32,
    pub total_minutes: u32,
    pub session_count: u32,
}

/// Condition score report; zero when no check-in was recorded.
#[derive(Debug, Clone, Copy)]
pub struct ConditionScore {
    pub total: u32,
}

/// Score the day's logged workouts against the lifestyle thresholds.
pub fn score_exercise(record: &DayRecord, lifestyle: Lifestyle) -> ExerciseScore {
    let total_minutes: u32 = record.workouts.iter().map(|w| w.total_minutes()).sum();
    let session_count = record.workouts.len() as u32;

    let (duration, count) = if record.rest_day {
        (100.0, 100.0)
    } else {
        (
            duration_score(total_minutes, lifestyle),
            session_count_score(session_count, lifestyle),
        )
    };

    ExerciseScore {
        total: ((duration + count) / 2.0).round() as u32,
        duration_score: duration.round() as u32,
        count_score: count.round() as u32,
        total_minutes,
        session_count,
    }
}

/// Score the subjective condition check-in. Six ratings of 1-5 each, so
/// the sum spans 6-30 and rescales onto 20-100.
pub fn score_condition(condition: Option<&ConditionLog>) -> ConditionScore {
    let total = match condition {
        Some(log) => (f64::from(log.sum()) / 6.0 * 20.0).round() as u32,
        None => 0,
    };
    ConditionScore { total }
}

fn duration_score(minutes: u32, lifestyle: Lifestyle) -> f64 {
    let bands: [(u32, f64); 4] = match lifestyle {
        Lifestyle::Bodymaker => [(120, 100.0), (90, 75.0), (60, 50.0), (30, 25.0)],
        Lifestyle::General => [(60, 100.0), (45, 75.0), (30, 50.0), (15, 25.0)],
    };
    for (floor, score) in bands {
        if minutes >= floor {
            return score;
        }
    }
    0.0
}

fn session_count_score(count: u32, lifestyle: Lifestyle) -> f64 {
    match lifestyle {
        Lifestyle::Bodymaker => match count {
            c if c >= 5 => 100.0,
            4 => 80.0,
            3 => 60.0,
            2 => 40.0,
            1 => 20.0,
            _ => 0.0,
        },
        Lifestyle::General => match count {
            c if c >= 3 => 100.0,
            2 => 66.0,
            1 => 33.0,
            _ => 0.0,
        },
    }
}
