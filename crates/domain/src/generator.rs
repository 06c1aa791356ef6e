//! Greedy selection and sequencing of scored exercises into a timed workout.

use log::debug;

use crate::{
    ContextualFilterResult, ExecutionLocation, Exercise, IntentMode, Label, LabelKey, LabelTags,
    Level, LifestylePersona, LocalizedName, Prescription, PriorityTier, ReductionBand, ScoredExercise,
    TierVolume, Time, reduce_sets, reduction_percent,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub skill: TierVolume,
    pub compound: TierVolume,
    pub accessory: TierVolume,
    pub isolation: TierVolume,
    pub time_per_rep: Time,
    pub max_exercises: usize,
    pub injury_rest_bonus: Time,
    pub blast_rest: Time,
    pub reduction_bands: Vec<ReductionBand>,
    pub emom: BlastInterval,
    pub amrap: BlastInterval,
    /// Sessions up to this length are structured as EMOM.
    pub emom_max_minutes: u32,
    pub blast_max_minutes: u32,
    pub title_exercises: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            skill: TierVolume::new(4, 5, 10, 120),
            compound: TierVolume::new(3, 10, 30, 90),
            accessory: TierVolume::new(3, 12, 30, 60),
            isolation: TierVolume::new(2, 15, 30, 45),
            time_per_rep: Time::from_secs(3),
            max_exercises: 8,
            injury_rest_bonus: Time::from_secs(15),
            blast_rest: Time::from_secs(30),
            reduction_bands: vec![
                ReductionBand {
                    min_days: 7,
                    percent: 20,
                },
                ReductionBand {
                    min_days: 14,
                    percent: 35,
                },
                ReductionBand {
                    min_days: 30,
                    percent: 50,
                },
            ],
            emom: BlastInterval {
                work: Time::from_secs(40),
                rest: Time::from_secs(20),
            },
            amrap: BlastInterval {
                work: Time::from_secs(50),
                rest: Time::from_secs(10),
            },
            emom_max_minutes: 12,
            blast_max_minutes: 30,
            title_exercises: 3,
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn volume(&self, tier: PriorityTier) -> &TierVolume {
        match tier {
            PriorityTier::Skill => &self.skill,
            PriorityTier::Compound => &self.compound,
            PriorityTier::Accessory => &self.accessory,
            PriorityTier::Isolation => &self.isolation,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum EnergyLevel {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Minutes.
    pub available_time: u32,
    pub user_level: Level,
    pub days_inactive: u32,
    pub intent: IntentMode,
    pub persona: Option<LifestylePersona>,
    pub location: ExecutionLocation,
    pub injury_count: usize,
    pub energy: EnergyLevel,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            available_time: 30,
            user_level: Level::default(),
            days_inactive: 0,
            intent: IntentMode::default(),
            persona: None,
            location: ExecutionLocation::default(),
            injury_count: 0,
            energy: EnergyLevel::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedWorkout<'a> {
    pub title: Label,
    pub description: Label,
    pub exercises: Vec<WorkoutExercise<'a>>,
    pub estimated_seconds: u32,
    pub estimated_minutes: u32,
    pub volume_adjustment: Option<VolumeAdjustment>,
    pub blast_mode: Option<BlastMode>,
    pub ai_cue: Option<Label>,
}

impl GeneratedWorkout<'_> {
    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExercise<'a> {
    pub exercise: &'a Exercise,
    pub sets: u32,
    pub prescription: Prescription,
    pub rest: Time,
    pub tier: PriorityTier,
    pub time_based: bool,
    pub program_level: Option<Level>,
    pub score: i32,
}

impl WorkoutExercise<'_> {
    /// Seconds of work and rest over all sets.
    #[must_use]
    pub fn duration(&self, time_per_rep: Time) -> u32 {
        self.sets * (self.prescription.duration(time_per_rep).seconds() + self.rest.seconds())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeAdjustment {
    pub original_sets: u32,
    pub adjusted_sets: u32,
    pub reduction_percent: u8,
    pub badge: Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlastMode {
    pub structure: BlastStructure,
    pub duration_minutes: u32,
    pub work: Time,
    pub rest: Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum BlastStructure {
    Emom,
    Amrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlastInterval {
    pub work: Time,
    pub rest: Time,
}

#[derive(Debug, Default, Clone)]
pub struct WorkoutGenerator {
    config: GeneratorConfig,
}

/// Generates a workout with the default configuration.
#[must_use]
pub fn generate_workout<'a>(
    scored: &[ScoredExercise<'a>],
    params: &GenerationParams,
) -> GeneratedWorkout<'a> {
    WorkoutGenerator::default().generate_workout(scored, params)
}

impl WorkoutGenerator {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[must_use]
    pub fn generate_workout<'a>(
        &self,
        scored: &[ScoredExercise<'a>],
        params: &GenerationParams,
    ) -> GeneratedWorkout<'a> {
        self.assemble(scored, params, None, None)
    }

    /// Generates a workout from an engine result, keeping its coaching cue and rest override.
    #[must_use]
    pub fn generate_from_result<'a>(
        &self,
        result: &ContextualFilterResult<'a>,
        params: &GenerationParams,
    ) -> GeneratedWorkout<'a> {
        self.assemble(
            &result.exercises,
            params,
            result.adjusted_rest,
            result.ai_cue.clone(),
        )
    }

    fn assemble<'a>(
        &self,
        scored: &[ScoredExercise<'a>],
        params: &GenerationParams,
        rest_override: Option<Time>,
        ai_cue: Option<Label>,
    ) -> GeneratedWorkout<'a> {
        if scored.is_empty() {
            debug!("no eligible exercises, generating empty workout");
            return GeneratedWorkout {
                title: Label::with_tags(LabelKey::EmptyWorkoutTitle, tags(params, vec![])),
                description: Label::with_tags(
                    LabelKey::EmptyWorkoutDescription,
                    tags(params, vec![]),
                ),
                exercises: vec![],
                estimated_seconds: 0,
                estimated_minutes: 0,
                volume_adjustment: None,
                blast_mode: None,
                ai_cue,
            };
        }

        let mut candidates = scored.iter().collect::<Vec<_>>();
        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        let percent = reduction_percent(&self.config.reduction_bands, params.days_inactive);
        let budget = params.available_time.saturating_mul(60);
        let mut total: u32 = 0;
        let mut original_sets = 0;
        let mut exercises = Vec::new();

        for candidate in candidates {
            if exercises.len() >= self.config.max_exercises {
                break;
            }

            let (workout_exercise, base_sets) =
                self.prescribe(candidate, params, percent, rest_override);
            let cost = workout_exercise.duration(self.config.time_per_rep);

            if !exercises.is_empty() && total.saturating_add(cost) > budget {
                break;
            }

            total = total.saturating_add(cost);
            original_sets += base_sets;
            exercises.push(workout_exercise);
        }

        exercises.sort_by_key(|e| e.tier);

        let names = exercises
            .iter()
            .take(self.config.title_exercises)
            .map(|e| e.exercise.name.clone())
            .collect::<Vec<_>>();
        let adjusted_sets: u32 = exercises.iter().map(|e| e.sets).sum();

        debug!(
            "selected {} of {} exercises, {} s of {} s budget",
            exercises.len(),
            scored.len(),
            total,
            budget
        );

        GeneratedWorkout {
            title: Label::with_tags(LabelKey::WorkoutTitle(params.intent), tags(params, names.clone())),
            description: Label::with_tags(
                LabelKey::WorkoutDescription(params.intent),
                tags(params, names),
            ),
            exercises,
            estimated_seconds: total,
            estimated_minutes: total.div_ceil(60),
            volume_adjustment: (percent > 0).then(|| VolumeAdjustment {
                original_sets,
                adjusted_sets,
                reduction_percent: percent,
                badge: Label::with_tags(
                    LabelKey::VolumeBadge,
                    LabelTags {
                        percent: Some(percent),
                        count: usize::try_from(params.days_inactive).ok(),
                        ..LabelTags::default()
                    },
                ),
            }),
            blast_mode: self.blast_mode(params),
            ai_cue,
        }
    }

    /// Returns the prescribed exercise and its set count before inactivity reduction.
    fn prescribe<'a>(
        &self,
        scored: &ScoredExercise<'a>,
        params: &GenerationParams,
        percent: u8,
        rest_override: Option<Time>,
    ) -> (WorkoutExercise<'a>, u32) {
        let exercise = scored.exercise;
        let tier = exercise.priority_tier();
        let volume = self.config.volume(tier);

        let mut sets = volume.sets.max(1);
        if params.energy == EnergyLevel::Low {
            sets = sets.saturating_sub(1).max(1);
        }

        let rest = match rest_override {
            Some(rest) => rest,
            None if params.intent == IntentMode::Blast => self.config.blast_rest,
            None if params.injury_count > 0 => {
                Time::from_secs(volume.rest.seconds() + self.config.injury_rest_bonus.seconds())
            }
            None => volume.rest,
        };

        (
            WorkoutExercise {
                exercise,
                sets: reduce_sets(sets, percent),
                prescription: volume.prescription(exercise.time_based),
                rest,
                tier,
                time_based: exercise.time_based,
                program_level: scored.program_level,
                score: scored.score,
            },
            sets,
        )
    }

    fn blast_mode(&self, params: &GenerationParams) -> Option<BlastMode> {
        if params.intent != IntentMode::Blast {
            return None;
        }

        let (structure, interval) = if params.energy == EnergyLevel::Low
            || params.available_time <= self.config.emom_max_minutes
        {
            (BlastStructure::Emom, self.config.emom)
        } else {
            (BlastStructure::Amrap, self.config.amrap)
        };

        Some(BlastMode {
            structure,
            duration_minutes: params
                .available_time
                .clamp(1, self.config.blast_max_minutes.max(1)),
            work: interval.work,
            rest: interval.rest,
        })
    }
}

fn tags(params: &GenerationParams, exercises: Vec<LocalizedName>) -> LabelTags {
    LabelTags {
        intent: Some(params.intent),
        persona: params.persona,
        location: Some(params.location),
        level: Some(params.user_level),
        exercises,
        ..LabelTags::default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        ContextualFilterContext, CueTrigger, InjuryArea, MechanicalType, Name, Reps,
        filter_and_score,
        tests::data::{exercise, level, scored},
    };

    fn catalog() -> Vec<Exercise> {
        vec![
            Exercise {
                mechanical_type: MechanicalType::None,
                ..exercise(1, "Squat")
            },
            Exercise {
                mechanical_type: MechanicalType::StraightArm,
                time_based: true,
                ..exercise(2, "L-Sit")
            },
            Exercise {
                mechanical_type: MechanicalType::BentArm,
                ..exercise(3, "Dip")
            },
            Exercise {
                mechanical_type: MechanicalType::Hybrid,
                tier: Some(PriorityTier::Isolation),
                ..exercise(4, "Calf Raise")
            },
        ]
    }

    fn params() -> GenerationParams {
        GenerationParams {
            available_time: 120,
            user_level: level(5),
            ..GenerationParams::default()
        }
    }

    fn names(workout: &GeneratedWorkout) -> Vec<String> {
        workout
            .exercises
            .iter()
            .map(|e| e.exercise.name.default_name().to_string())
            .collect()
    }

    #[test]
    fn test_generate_workout_empty() {
        let workout = generate_workout(
            &[],
            &GenerationParams {
                intent: IntentMode::Blast,
                days_inactive: 30,
                ..params()
            },
        );

        assert!(workout.exercises.is_empty());
        assert_eq!(workout.estimated_seconds, 0);
        assert_eq!(workout.estimated_minutes, 0);
        assert_eq!(workout.volume_adjustment, None);
        assert_eq!(workout.blast_mode, None);
        assert_eq!(workout.title.key, LabelKey::EmptyWorkoutTitle);
        assert_eq!(workout.description.key, LabelKey::EmptyWorkoutDescription);
    }

    #[test]
    fn test_generate_workout_sequences_by_tier() {
        let catalog = catalog();
        let scored = catalog
            .iter()
            .enumerate()
            .map(|(i, e)| scored(e, 10 - i32::try_from(i).unwrap()))
            .collect::<Vec<_>>();

        let workout = generate_workout(&scored, &params());

        assert_eq!(names(&workout), vec!["L-Sit", "Dip", "Squat", "Calf Raise"]);
        assert_eq!(
            workout.exercises.iter().map(|e| e.tier).collect::<Vec<_>>(),
            vec![
                PriorityTier::Skill,
                PriorityTier::Compound,
                PriorityTier::Accessory,
                PriorityTier::Isolation
            ]
        );
    }

    #[test]
    fn test_generate_workout_keeps_score_order_within_tier() {
        let catalog = [
            exercise(1, "Squat"),
            exercise(2, "Lunge"),
            exercise(3, "Step-Up"),
        ];
        let scored = vec![
            scored(&catalog[0], 1),
            scored(&catalog[1], 5),
            scored(&catalog[2], 5),
        ];

        let workout = generate_workout(&scored, &params());

        assert_eq!(names(&workout), vec!["Lunge", "Step-Up", "Squat"]);
    }

    #[test]
    fn test_generate_workout_prescription() {
        let catalog = catalog();
        let scored = catalog.iter().map(|e| scored(e, 0)).collect::<Vec<_>>();

        let workout = generate_workout(&scored, &params());

        let l_sit = &workout.exercises[0];
        assert_eq!(l_sit.sets, 4);
        assert_eq!(l_sit.prescription, Prescription::Hold(Time::from_secs(10)));
        assert_eq!(l_sit.rest, Time::from_secs(120));
        assert!(l_sit.time_based);
        assert_eq!(l_sit.duration(Time::from_secs(3)), 4 * (10 + 120));

        let dip = &workout.exercises[1];
        assert_eq!(dip.sets, 3);
        assert_eq!(dip.prescription, Prescription::Reps(Reps::new(10).unwrap()));
        assert_eq!(dip.rest, Time::from_secs(90));
        assert_eq!(dip.duration(Time::from_secs(3)), 3 * (30 + 90));

        assert_eq!(
            workout.estimated_seconds,
            workout
                .exercises
                .iter()
                .map(|e| e.duration(Time::from_secs(3)))
                .sum::<u32>()
        );
        assert_eq!(workout.estimated_minutes, workout.estimated_seconds.div_ceil(60));
    }

    #[rstest]
    #[case::no_injury(0, EnergyLevel::Medium, 3, 60)]
    #[case::injury(2, EnergyLevel::Medium, 3, 75)]
    #[case::low_energy(0, EnergyLevel::Low, 2, 60)]
    #[case::high_energy(0, EnergyLevel::High, 3, 60)]
    fn test_generate_workout_adjusts_sets_and_rest(
        #[case] injury_count: usize,
        #[case] energy: EnergyLevel,
        #[case] sets: u32,
        #[case] rest: u32,
    ) {
        let catalog = [exercise(1, "Squat")];
        let scored = [scored(&catalog[0], 0)];

        let workout = generate_workout(
            &scored,
            &GenerationParams {
                injury_count,
                energy,
                ..params()
            },
        );

        assert_eq!(workout.exercises[0].sets, sets);
        assert_eq!(workout.exercises[0].rest, Time::from_secs(rest));
    }

    #[test]
    fn test_generate_workout_sets_never_drop_below_one() {
        let catalog = [Exercise {
            tier: Some(PriorityTier::Isolation),
            ..exercise(1, "Calf Raise")
        }];
        let scored = [scored(&catalog[0], 0)];

        let workout = generate_workout(
            &scored,
            &GenerationParams {
                energy: EnergyLevel::Low,
                days_inactive: 100,
                ..params()
            },
        );

        assert_eq!(workout.exercises[0].sets, 1);
    }

    #[test]
    fn test_generate_workout_sets_are_monotonic_in_inactivity() {
        let catalog = catalog();
        let scored = catalog.iter().map(|e| scored(e, 0)).collect::<Vec<_>>();
        let sets = |days_inactive| {
            generate_workout(
                &scored,
                &GenerationParams {
                    days_inactive,
                    ..params()
                },
            )
            .exercises
            .iter()
            .map(|e| e.sets)
            .collect::<Vec<_>>()
        };

        let (fresh, week, month) = (sets(0), sets(7), sets(30));

        for i in 0..catalog.len() {
            assert!(month[i] <= week[i]);
            assert!(week[i] <= fresh[i]);
        }
        assert!(month.iter().sum::<u32>() < fresh.iter().sum::<u32>());
    }

    #[rstest]
    #[case::active(0, None)]
    #[case::week(7, Some((7, 5, 20)))]
    #[case::two_weeks(14, Some((7, 3, 35)))]
    #[case::month(45, Some((7, 3, 50)))]
    fn test_generate_workout_volume_adjustment(
        #[case] days_inactive: u32,
        #[case] expected: Option<(u32, u32, u8)>,
    ) {
        let catalog = [
            Exercise {
                mechanical_type: MechanicalType::StraightArm,
                ..exercise(1, "Front Lever")
            },
            Exercise {
                mechanical_type: MechanicalType::BentArm,
                ..exercise(2, "Pull-Up")
            },
        ];
        let scored = catalog.iter().map(|e| scored(e, 0)).collect::<Vec<_>>();

        let workout = generate_workout(
            &scored,
            &GenerationParams {
                days_inactive,
                ..params()
            },
        );

        let adjustment = workout.volume_adjustment.as_ref().map(|a| {
            (a.original_sets, a.adjusted_sets, a.reduction_percent)
        });
        assert_eq!(adjustment, expected);
        if let Some(adjustment) = &workout.volume_adjustment {
            assert_eq!(adjustment.adjusted_sets, workout.total_sets());
            assert_eq!(adjustment.badge.key, LabelKey::VolumeBadge);
            assert_eq!(adjustment.badge.tags.percent, Some(adjustment.reduction_percent));
        }
    }

    #[test]
    fn test_generate_workout_respects_budget() {
        let catalog = (1..=5)
            .map(|i| exercise(i, &format!("Exercise {i}")))
            .collect::<Vec<_>>();
        let scored = catalog.iter().map(|e| scored(e, 0)).collect::<Vec<_>>();

        let workout = generate_workout(
            &scored,
            &GenerationParams {
                available_time: 10,
                ..params()
            },
        );

        // 3 × (12 × 3 s + 60 s) per accessory exercise
        assert_eq!(workout.exercises.len(), 2);
        assert_eq!(workout.estimated_seconds, 576);
        assert_eq!(workout.estimated_minutes, 10);
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(13)]
    #[case(27)]
    #[case(60)]
    fn test_generate_workout_overshoots_by_at_most_last_exercise(#[case] available_time: u32) {
        let catalog = catalog()
            .into_iter()
            .cycle()
            .take(8)
            .enumerate()
            .map(|(i, e)| Exercise {
                id: (i as u128 + 1).into(),
                ..e
            })
            .collect::<Vec<_>>();
        let scored = catalog.iter().map(|e| scored(e, 0)).collect::<Vec<_>>();

        let workout = generate_workout(
            &scored,
            &GenerationParams {
                available_time,
                ..params()
            },
        );

        let costs = workout
            .exercises
            .iter()
            .map(|e| e.duration(Time::from_secs(3)))
            .collect::<Vec<_>>();
        let total = costs.iter().sum::<u32>();
        let largest = costs.iter().max().copied().unwrap_or(0);
        assert!(!workout.exercises.is_empty());
        assert!(total <= available_time * 60 + largest);
    }

    #[test]
    fn test_generate_workout_tiny_budget_yields_one_exercise() {
        let catalog = catalog();
        let scored = catalog.iter().map(|e| scored(e, 0)).collect::<Vec<_>>();

        let workout = generate_workout(
            &scored,
            &GenerationParams {
                available_time: 1,
                ..params()
            },
        );

        assert_eq!(names(&workout), vec!["Squat"]);
        assert!(workout.estimated_seconds > 60);
    }

    #[test]
    fn test_generate_workout_limits_exercise_count() {
        let catalog = (1..=12)
            .map(|i| exercise(i, &format!("Exercise {i}")))
            .collect::<Vec<_>>();
        let scored = catalog.iter().map(|e| scored(e, 0)).collect::<Vec<_>>();

        let workout = generate_workout(
            &scored,
            &GenerationParams {
                available_time: 600,
                ..params()
            },
        );

        assert_eq!(workout.exercises.len(), 8);
    }

    #[test]
    fn test_generate_workout_with_huge_available_time() {
        let catalog = (1..=12)
            .map(|i| exercise(i, &format!("Exercise {i}")))
            .collect::<Vec<_>>();
        let scored = catalog.iter().map(|e| scored(e, 0)).collect::<Vec<_>>();

        let workout = generate_workout(
            &scored,
            &GenerationParams {
                available_time: u32::MAX,
                intent: IntentMode::Blast,
                ..params()
            },
        );

        assert_eq!(workout.exercises.len(), 8);
        assert_eq!(workout.blast_mode.map(|b| b.duration_minutes), Some(30));
    }

    #[rstest]
    #[case::short(10, EnergyLevel::High, BlastStructure::Emom, 10)]
    #[case::emom_limit(12, EnergyLevel::Medium, BlastStructure::Emom, 12)]
    #[case::long(20, EnergyLevel::Medium, BlastStructure::Amrap, 20)]
    #[case::low_energy(20, EnergyLevel::Low, BlastStructure::Emom, 20)]
    #[case::clamped(45, EnergyLevel::High, BlastStructure::Amrap, 30)]
    fn test_generate_workout_blast_mode(
        #[case] available_time: u32,
        #[case] energy: EnergyLevel,
        #[case] structure: BlastStructure,
        #[case] duration_minutes: u32,
    ) {
        let catalog = catalog();
        let scored = catalog.iter().map(|e| scored(e, 0)).collect::<Vec<_>>();

        let workout = generate_workout(
            &scored,
            &GenerationParams {
                available_time,
                energy,
                intent: IntentMode::Blast,
                ..params()
            },
        );

        let blast_mode = workout.blast_mode.unwrap();
        assert_eq!(blast_mode.structure, structure);
        assert_eq!(blast_mode.duration_minutes, duration_minutes);
        assert_eq!(
            blast_mode.work.seconds() + blast_mode.rest.seconds(),
            60
        );
        assert!(
            workout
                .exercises
                .iter()
                .all(|e| e.rest == Time::from_secs(30))
        );
    }

    #[test]
    fn test_generate_workout_without_blast_intent_has_no_blast_mode() {
        let catalog = catalog();
        let scored = catalog.iter().map(|e| scored(e, 0)).collect::<Vec<_>>();

        for intent in [IntentMode::Normal, IntentMode::OnTheWay, IntentMode::Field] {
            let workout = generate_workout(&scored, &GenerationParams { intent, ..params() });
            assert_eq!(workout.blast_mode, None);
        }
    }

    #[test]
    fn test_generate_workout_title_tags() {
        let catalog = catalog();
        let scored = catalog.iter().map(|e| scored(e, 0)).collect::<Vec<_>>();

        let workout = generate_workout(
            &scored,
            &GenerationParams {
                intent: IntentMode::OnTheWay,
                persona: Some(LifestylePersona::Parent),
                location: ExecutionLocation::Home,
                ..params()
            },
        );

        assert_eq!(workout.title.key, LabelKey::WorkoutTitle(IntentMode::OnTheWay));
        assert_eq!(
            workout.description.key,
            LabelKey::WorkoutDescription(IntentMode::OnTheWay)
        );
        assert_eq!(
            workout.title.tags,
            LabelTags {
                intent: Some(IntentMode::OnTheWay),
                persona: Some(LifestylePersona::Parent),
                location: Some(ExecutionLocation::Home),
                level: Some(level(5)),
                exercises: ["L-Sit", "Dip", "Squat"]
                    .into_iter()
                    .map(|n| Name::new(n).unwrap().into())
                    .collect(),
                ..LabelTags::default()
            }
        );
    }

    #[test]
    fn test_generate_from_result_carries_cue_and_rest() {
        let catalog = catalog();
        let context = ContextualFilterContext {
            intent: IntentMode::Blast,
            injury_shield: BTreeSet::from([InjuryArea::Neck]),
            user_level: level(5),
            ..ContextualFilterContext::default()
        };
        let result = filter_and_score(&catalog, &context);

        let workout = WorkoutGenerator::default().generate_from_result(
            &result,
            &GenerationParams {
                injury_count: 1,
                ..params()
            },
        );

        assert_eq!(
            workout.ai_cue.map(|cue| cue.key),
            Some(LabelKey::Cue(CueTrigger::InjuryShield))
        );
        assert!(
            workout
                .exercises
                .iter()
                .all(|e| e.rest == Time::from_secs(30))
        );
        assert_eq!(workout.exercises.len(), catalog.len());
    }

    #[test]
    fn test_generate_workout_with_custom_config() {
        let catalog = catalog();
        let scored = catalog.iter().map(|e| scored(e, 0)).collect::<Vec<_>>();
        let generator = WorkoutGenerator::new(GeneratorConfig {
            max_exercises: 2,
            ..GeneratorConfig::default()
        });

        let workout = generator.generate_workout(&scored, &params());

        assert_eq!(names(&workout), vec!["L-Sit", "Squat"]);
    }
}
