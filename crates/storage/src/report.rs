use std::collections::BTreeMap;

use parkfit_domain::{self as domain, LabelResolver, Prescription};
use uuid::Uuid;

/// Serialisable view of an engine result with rendered labels.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct FilterReport {
    pub exercises: Vec<ScoredExerciseReport>,
    pub excluded_count: usize,
    pub exclusions: BTreeMap<String, usize>,
    pub balance: BalanceReport,
    pub active_filters: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_cue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_rest_seconds: Option<u32>,
}

impl FilterReport {
    pub fn new(
        result: &domain::ContextualFilterResult,
        resolver: &impl LabelResolver,
        locale: &str,
    ) -> Self {
        Self {
            exercises: result
                .exercises
                .iter()
                .map(|e| ScoredExerciseReport {
                    id: *e.exercise.id,
                    name: e.exercise.name.get(locale).to_string(),
                    score: e.score,
                    mechanical_type: e.mechanical_type.as_ref().to_string(),
                    program_level: e.program_level.map(u8::from),
                    reasoning: e
                        .contributions
                        .iter()
                        .map(|c| ContributionReport {
                            factor: c.factor.to_string(),
                            points: c.points,
                        })
                        .collect(),
                })
                .collect(),
            excluded_count: result.excluded_count,
            exclusions: result
                .exclusions
                .iter()
                .map(|(reason, count)| (reason.name().to_string(), *count))
                .collect(),
            balance: BalanceReport {
                straight_arm: result.balance.straight_arm,
                bent_arm: result.balance.bent_arm,
                hybrid: result.balance.hybrid,
                none: result.balance.none,
                ratio: result.balance.ratio,
                warning: result.balance.warning.as_ref().map(|w| w.render(resolver)),
            },
            active_filters: result
                .active_filters
                .iter()
                .map(ToString::to_string)
                .collect(),
            ai_cue: result.ai_cue.as_ref().map(|c| c.render(resolver)),
            adjusted_rest_seconds: result.adjusted_rest.map(domain::Time::seconds),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ScoredExerciseReport {
    pub id: Uuid,
    pub name: String,
    pub score: i32,
    pub mechanical_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_level: Option<u8>,
    pub reasoning: Vec<ContributionReport>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContributionReport {
    pub factor: String,
    pub points: i32,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct BalanceReport {
    pub straight_arm: usize,
    pub bent_arm: usize,
    pub hybrid: usize,
    pub none: usize,
    pub ratio: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Serialisable view of a generated workout with rendered labels.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutReport {
    pub title: String,
    pub description: String,
    pub exercises: Vec<WorkoutExerciseReport>,
    pub estimated_seconds: u32,
    pub estimated_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_adjustment: Option<VolumeAdjustmentReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blast_mode: Option<BlastModeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_cue: Option<String>,
}

impl WorkoutReport {
    pub fn new(
        workout: &domain::GeneratedWorkout,
        resolver: &impl LabelResolver,
        locale: &str,
    ) -> Self {
        Self {
            title: workout.title.render(resolver),
            description: workout.description.render(resolver),
            exercises: workout
                .exercises
                .iter()
                .map(|e| {
                    let (reps, hold_seconds) = match e.prescription {
                        Prescription::Reps(reps) => (Some(u32::from(reps)), None),
                        Prescription::Hold(time) => (None, Some(time.seconds())),
                    };
                    WorkoutExerciseReport {
                        id: *e.exercise.id,
                        name: e.exercise.name.get(locale).to_string(),
                        sets: e.sets,
                        reps,
                        hold_seconds,
                        rest_seconds: e.rest.seconds(),
                        tier: e.tier.as_ref().to_string(),
                        time_based: e.time_based,
                        program_level: e.program_level.map(u8::from),
                    }
                })
                .collect(),
            estimated_seconds: workout.estimated_seconds,
            estimated_minutes: workout.estimated_minutes,
            volume_adjustment: workout
                .volume_adjustment
                .as_ref()
                .map(|v| VolumeAdjustmentReport {
                    original_sets: v.original_sets,
                    adjusted_sets: v.adjusted_sets,
                    reduction_percent: v.reduction_percent,
                    badge: v.badge.render(resolver),
                }),
            blast_mode: workout.blast_mode.map(|b| BlastModeReport {
                structure: b.structure.as_ref().to_string(),
                duration_minutes: b.duration_minutes,
                work_seconds: b.work.seconds(),
                rest_seconds: b.rest.seconds(),
            }),
            ai_cue: workout.ai_cue.as_ref().map(|c| c.render(resolver)),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutExerciseReport {
    pub id: Uuid,
    pub name: String,
    pub sets: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_seconds: Option<u32>,
    pub rest_seconds: u32,
    pub tier: String,
    pub time_based: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_level: Option<u8>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VolumeAdjustmentReport {
    pub original_sets: u32,
    pub adjusted_sets: u32,
    pub reduction_percent: u8,
    pub badge: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlastModeReport {
    pub structure: String,
    pub duration_minutes: u32,
    pub work_seconds: u32,
    pub rest_seconds: u32,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tests::data::{self, KeyResolver};

    #[test]
    fn test_filter_report() {
        let catalog = vec![data::pull_up(), data::plank()];
        let request = data::request();
        let result = domain::filter_and_score(&catalog, &request.context);

        let report = FilterReport::new(&result, &KeyResolver, "he");

        assert_eq!(report.exercises.len(), 1);
        assert_eq!(report.exercises[0].name, "פלאנק");
        assert_eq!(report.exercises[0].id, *data::plank().id);
        assert_eq!(
            report.exercises[0].score,
            report.exercises[0]
                .reasoning
                .iter()
                .map(|r| r.points)
                .sum::<i32>()
        );
        assert_eq!(report.excluded_count, 1);
        assert_eq!(
            report.exclusions,
            BTreeMap::from([("injury shield".to_string(), 1)])
        );
        assert_eq!(report.ai_cue, Some("cue.injury_shield".to_string()));
        assert_eq!(report.adjusted_rest_seconds, None);
        assert_eq!(report.active_filters.len(), result.active_filters.len());
    }

    #[test]
    fn test_workout_report() {
        let catalog = vec![data::pull_up(), data::plank()];
        let context = domain::ContextualFilterContext {
            equipment: [domain::Equipment::PullUpBar].into(),
            intent: domain::IntentMode::Blast,
            user_level: domain::Level::new(5).unwrap(),
            ..domain::ContextualFilterContext::default()
        };
        let result = domain::filter_and_score(&catalog, &context);
        let workout = domain::WorkoutGenerator::default().generate_from_result(
            &result,
            &domain::GenerationParams {
                intent: domain::IntentMode::Blast,
                available_time: 20,
                days_inactive: 10,
                ..domain::GenerationParams::default()
            },
        );

        let report = WorkoutReport::new(&workout, &KeyResolver, "en");

        assert_eq!(report.title, "title.blast");
        assert_eq!(report.description, "description.blast");
        assert_eq!(
            report
                .exercises
                .iter()
                .map(|e| (e.name.as_str(), e.reps, e.hold_seconds, e.rest_seconds))
                .collect::<Vec<_>>(),
            vec![
                ("Plank", None, Some(10), 30),
                ("Pull-Up", Some(10), None, 30),
            ]
        );
        assert_eq!(
            report.volume_adjustment.map(|v| (v.reduction_percent, v.badge)),
            Some((20, "badge".to_string()))
        );
        assert_eq!(
            report.blast_mode,
            Some(BlastModeReport {
                structure: "amrap".to_string(),
                duration_minutes: 20,
                work_seconds: 50,
                rest_seconds: 10,
            })
        );
        assert_eq!(report.ai_cue, Some("cue.blast".to_string()));
    }

    #[test]
    fn test_workout_report_serialization_skips_absent_fields() {
        let workout = domain::generate_workout(&[], &domain::GenerationParams::default());

        let value = serde_json::to_value(WorkoutReport::new(&workout, &KeyResolver, "en")).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "title": "title.empty",
                "description": "description.empty",
                "exercises": [],
                "estimated_seconds": 0,
                "estimated_minutes": 0,
            })
        );
    }
}
