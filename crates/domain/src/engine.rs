//! Contextual filtering and scoring of an exercise catalog.
//!
//! Hard constraints are applied first and exclude an exercise outright. Survivors are
//! scored by independent factors, each recorded as a [`ScoreContribution`], and ordered
//! by descending score with catalog order breaking ties.

use std::{collections::BTreeMap, fmt};

use log::debug;

use crate::{
    Ceiling, ContextualFilterContext, CueTrigger, Equipment, ExecutionLocation, Exercise,
    InjuryArea, Intensity, IntentMode, Label, LabelKey, LabelTags, Level, LifestylePersona,
    MechanicalType, PriorityTier, ProgramID, Property, Time,
};

/// Tunable weights and thresholds of the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub level_proximity_max: i32,
    pub level_proximity_step: i32,
    pub unleveled_points: i32,
    pub hybrid_variety_points: i32,
    pub minority_balance_points: i32,
    pub persona_match_points: i32,
    pub blast_compound_points: i32,
    pub blast_intensity_points: i32,
    pub discreet_points: i32,
    pub field_hybrid_points: i32,
    pub balance_skew_threshold: f32,
    pub blast_rest: Time,
    pub global_level_headroom: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            level_proximity_max: 10,
            level_proximity_step: 2,
            unleveled_points: 4,
            hybrid_variety_points: 3,
            minority_balance_points: 4,
            persona_match_points: 5,
            blast_compound_points: 4,
            blast_intensity_points: 2,
            discreet_points: 3,
            field_hybrid_points: 2,
            balance_skew_threshold: 2.0,
            blast_rest: Time::from_secs(30),
            global_level_headroom: 3,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ContextualEngine {
    config: EngineConfig,
}

/// Filters and scores `catalog` with the default configuration.
#[must_use]
pub fn filter_and_score<'a>(
    catalog: &'a [Exercise],
    context: &ContextualFilterContext,
) -> ContextualFilterResult<'a> {
    ContextualEngine::default().filter_and_score(catalog, context)
}

impl ContextualEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn filter_and_score<'a>(
        &self,
        catalog: &'a [Exercise],
        context: &ContextualFilterContext,
    ) -> ContextualFilterResult<'a> {
        let ceiling = context.ceiling();
        let mut exclusions = BTreeMap::new();
        let mut survivors = Vec::new();

        for exercise in catalog {
            match self.admit(exercise, context, ceiling) {
                Ok(level) => survivors.push((exercise, level)),
                Err(reason) => {
                    if reason == ExclusionReason::Unclassified {
                        debug!("skipping unclassified exercise {}", *exercise.id);
                    }
                    *exclusions.entry(reason).or_insert(0) += 1;
                }
            }
        }

        let balance = MechanicalBalance::tally(
            survivors.iter().map(|(e, _)| e.mechanical_type),
            self.config.balance_skew_threshold,
        );

        let mut exercises = survivors
            .into_iter()
            .map(|(exercise, level)| {
                let contributions = self.score(exercise, level, context, &balance);
                ScoredExercise {
                    exercise,
                    score: contributions.iter().map(|c| c.points).sum(),
                    contributions,
                    mechanical_type: exercise.mechanical_type,
                    program_level: context.program.as_ref().and(level),
                }
            })
            .collect::<Vec<_>>();
        exercises.sort_by(|a, b| b.score.cmp(&a.score));

        let excluded_count = catalog.len() - exercises.len();

        debug!(
            "{} of {} exercises eligible at {} ({} intent), {} excluded",
            exercises.len(),
            catalog.len(),
            context.location.name(),
            context.intent.name(),
            excluded_count
        );

        ContextualFilterResult {
            ai_cue: coaching_cue(context, exercises.len(), &balance),
            active_filters: self.active_filters(context, ceiling),
            adjusted_rest: (context.intent == IntentMode::Blast).then_some(self.config.blast_rest),
            exercises,
            excluded_count,
            exclusions,
            balance,
        }
    }

    /// Applies the hard constraints in order and returns the level used for scoring.
    fn admit(
        &self,
        exercise: &Exercise,
        context: &ContextualFilterContext,
        ceiling: Ceiling,
    ) -> Result<Option<Level>, ExclusionReason> {
        let (Some(noise), Some(sweat)) = (exercise.noise_level, exercise.sweat_level) else {
            return Err(ExclusionReason::Unclassified);
        };

        if !context.has_all_equipment(&exercise.equipment) {
            return Err(ExclusionReason::Equipment);
        }

        if exercise.stresses_any(&context.injury_shield) {
            return Err(ExclusionReason::InjuryShield);
        }

        if !ceiling.admits(noise, sweat)
            || (!exercise.locations.is_empty() && !exercise.locations.contains(&context.location))
        {
            return Err(ExclusionReason::Location);
        }

        if !exercise.personas.is_empty() && exercise.personas.is_disjoint(&context.lifestyles) {
            return Err(ExclusionReason::Lifestyle);
        }

        if context.intent == IntentMode::Field
            && (!exercise.field_ready || exercise.requires_equipment())
        {
            return Err(ExclusionReason::FieldReadiness);
        }

        if let Some(filter) = &context.program {
            return match exercise.level_for(&filter.program) {
                Some(level) if filter.window(context.user_level).contains(&level) => Ok(Some(level)),
                _ => Err(ExclusionReason::ProgramLevel),
            };
        }

        let ceiling = context
            .user_level
            .saturating_add(self.config.global_level_headroom);
        match exercise.lowest_level() {
            Some(lowest) if lowest > ceiling => Err(ExclusionReason::ProgramLevel),
            _ => Ok(exercise.closest_level(context.user_level)),
        }
    }

    fn score(
        &self,
        exercise: &Exercise,
        level: Option<Level>,
        context: &ContextualFilterContext,
        balance: &MechanicalBalance,
    ) -> Vec<ScoreContribution> {
        let config = &self.config;
        let mut contributions = Vec::new();

        contributions.push(match level {
            Some(level) => {
                let distance = level.distance(context.user_level);
                ScoreContribution {
                    factor: ScoreFactor::LevelProximity { distance },
                    points: (config.level_proximity_max
                        - config.level_proximity_step * i32::from(distance))
                    .max(0),
                }
            }
            None => ScoreContribution {
                factor: ScoreFactor::Unleveled,
                points: config.unleveled_points,
            },
        });

        if exercise.mechanical_type == MechanicalType::Hybrid {
            contributions.push(ScoreContribution {
                factor: ScoreFactor::HybridVariety,
                points: config.hybrid_variety_points,
            });
        }

        if balance.warning.is_some() && balance.minority() == Some(exercise.mechanical_type) {
            contributions.push(ScoreContribution {
                factor: ScoreFactor::MinorityBalance(exercise.mechanical_type),
                points: config.minority_balance_points,
            });
        }

        let matches = exercise
            .personas
            .intersection(&context.lifestyles)
            .count();
        if matches > 1 {
            contributions.push(ScoreContribution {
                factor: ScoreFactor::PersonaMatch { matches },
                points: config.persona_match_points,
            });
        }

        match context.intent {
            IntentMode::Normal => {}
            IntentMode::Blast => {
                if exercise.priority_tier() == PriorityTier::Compound {
                    contributions.push(ScoreContribution {
                        factor: ScoreFactor::BlastCompound,
                        points: config.blast_compound_points,
                    });
                }
                if exercise.sweat_level == Some(Intensity::HIGH) {
                    contributions.push(ScoreContribution {
                        factor: ScoreFactor::BlastIntensity,
                        points: config.blast_intensity_points,
                    });
                }
            }
            IntentMode::OnTheWay => {
                if exercise.noise_level == Some(Intensity::LOW)
                    && exercise.sweat_level == Some(Intensity::LOW)
                {
                    contributions.push(ScoreContribution {
                        factor: ScoreFactor::Discreet,
                        points: config.discreet_points,
                    });
                }
            }
            IntentMode::Field => {
                if exercise.mechanical_type == MechanicalType::Hybrid {
                    contributions.push(ScoreContribution {
                        factor: ScoreFactor::FieldHybrid,
                        points: config.field_hybrid_points,
                    });
                }
            }
        }

        contributions
    }

    fn active_filters(&self, context: &ContextualFilterContext, ceiling: Ceiling) -> Vec<ActiveFilter> {
        let mut filters = vec![ActiveFilter::Equipment(
            context.equipment.iter().copied().collect(),
        )];

        if !context.injury_shield.is_empty() {
            filters.push(ActiveFilter::InjuryShield(
                context.injury_shield.iter().copied().collect(),
            ));
        }

        filters.push(ActiveFilter::Location {
            location: context.location,
            ceiling,
        });
        filters.push(ActiveFilter::Lifestyle(
            context.lifestyles.iter().copied().collect(),
        ));

        if context.intent == IntentMode::Field {
            filters.push(ActiveFilter::FieldReady);
        }

        filters.push(match &context.program {
            Some(filter) => {
                let window = filter.window(context.user_level);
                ActiveFilter::ProgramLevel {
                    program: filter.program.clone(),
                    min: *window.start(),
                    max: *window.end(),
                }
            }
            None => ActiveFilter::GlobalLevel {
                max: context
                    .user_level
                    .saturating_add(self.config.global_level_headroom),
            },
        });

        filters
    }
}

fn coaching_cue(
    context: &ContextualFilterContext,
    eligible: usize,
    balance: &MechanicalBalance,
) -> Option<Label> {
    let trigger = if eligible == 0 {
        CueTrigger::NoMatches
    } else if !context.injury_shield.is_empty() {
        CueTrigger::InjuryShield
    } else {
        match context.intent {
            IntentMode::Blast => CueTrigger::Blast,
            IntentMode::OnTheWay => CueTrigger::OnTheWay,
            IntentMode::Field => CueTrigger::Field,
            IntentMode::Normal if balance.warning.is_some() => CueTrigger::Balance,
            IntentMode::Normal => return None,
        }
    };

    Some(Label::with_tags(
        LabelKey::Cue(trigger),
        LabelTags {
            intent: Some(context.intent),
            persona: context.lifestyles.first().copied(),
            location: Some(context.location),
            level: Some(context.user_level),
            mechanical_type: balance.dominant(),
            count: Some(eligible),
            ..LabelTags::default()
        },
    ))
}

/// Output of [`ContextualEngine::filter_and_score`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContextualFilterResult<'a> {
    pub exercises: Vec<ScoredExercise<'a>>,
    pub excluded_count: usize,
    pub exclusions: BTreeMap<ExclusionReason, usize>,
    pub balance: MechanicalBalance,
    pub active_filters: Vec<ActiveFilter>,
    pub ai_cue: Option<Label>,
    /// Rest override, only set for blast intent.
    pub adjusted_rest: Option<Time>,
}

impl ContextualFilterResult<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredExercise<'a> {
    pub exercise: &'a Exercise,
    pub score: i32,
    pub contributions: Vec<ScoreContribution>,
    pub mechanical_type: MechanicalType,
    pub program_level: Option<Level>,
}

impl ScoredExercise<'_> {
    #[must_use]
    pub fn reasoning(&self) -> Vec<String> {
        self.contributions.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn points(&self, factor: ScoreFactor) -> Option<i32> {
        self.contributions
            .iter()
            .find(|c| c.factor == factor)
            .map(|c| c.points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreContribution {
    pub factor: ScoreFactor,
    pub points: i32,
}

impl fmt::Display for ScoreContribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:+}", self.factor, self.points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreFactor {
    LevelProximity { distance: u8 },
    Unleveled,
    HybridVariety,
    MinorityBalance(MechanicalType),
    PersonaMatch { matches: usize },
    BlastCompound,
    BlastIntensity,
    Discreet,
    FieldHybrid,
}

impl fmt::Display for ScoreFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreFactor::LevelProximity { distance } => {
                write!(f, "level proximity (distance {distance})")
            }
            ScoreFactor::Unleveled => write!(f, "no program level"),
            ScoreFactor::HybridVariety => write!(f, "hybrid variety"),
            ScoreFactor::MinorityBalance(mechanical_type) => {
                write!(f, "balances {}", mechanical_type.name().to_lowercase())
            }
            ScoreFactor::PersonaMatch { matches } => write!(f, "matches {matches} personas"),
            ScoreFactor::BlastCompound => write!(f, "compound movement for blast"),
            ScoreFactor::BlastIntensity => write!(f, "high intensity for blast"),
            ScoreFactor::Discreet => write!(f, "quiet and sweat-free"),
            ScoreFactor::FieldHybrid => write!(f, "hybrid movement for field"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExclusionReason {
    Unclassified,
    Equipment,
    InjuryShield,
    Location,
    Lifestyle,
    FieldReadiness,
    ProgramLevel,
}

impl ExclusionReason {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ExclusionReason::Unclassified => "unclassified",
            ExclusionReason::Equipment => "equipment",
            ExclusionReason::InjuryShield => "injury shield",
            ExclusionReason::Location => "location",
            ExclusionReason::Lifestyle => "lifestyle",
            ExclusionReason::FieldReadiness => "field readiness",
            ExclusionReason::ProgramLevel => "program level",
        }
    }
}

/// Filter trace entry describing a hard constraint that was active for the request.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveFilter {
    Equipment(Vec<Equipment>),
    InjuryShield(Vec<InjuryArea>),
    Location {
        location: ExecutionLocation,
        ceiling: Ceiling,
    },
    Lifestyle(Vec<LifestylePersona>),
    FieldReady,
    ProgramLevel {
        program: ProgramID,
        min: Level,
        max: Level,
    },
    GlobalLevel {
        max: Level,
    },
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn names<P: Property>(values: &[P]) -> String {
            if values.is_empty() {
                "none".to_string()
            } else {
                values.iter().map(|v| v.name()).collect::<Vec<_>>().join(", ")
            }
        }

        match self {
            ActiveFilter::Equipment(equipment) => write!(f, "equipment: {}", names(equipment)),
            ActiveFilter::InjuryShield(areas) => write!(f, "injury shield: {}", names(areas)),
            ActiveFilter::Location { location, ceiling } => {
                write!(f, "location: {} (noise ≤ {}", location.name(), ceiling.noise)?;
                match ceiling.sweat {
                    Some(sweat) => write!(f, ", sweat ≤ {sweat})"),
                    None => write!(f, ", sweat unlimited)"),
                }
            }
            ActiveFilter::Lifestyle(personas) => write!(f, "lifestyle: {}", names(personas)),
            ActiveFilter::FieldReady => write!(f, "field ready without equipment"),
            ActiveFilter::ProgramLevel { program, min, max } => {
                write!(f, "program {program}: level {min} to {max}")
            }
            ActiveFilter::GlobalLevel { max } => write!(f, "level up to {max}"),
        }
    }
}

/// Mechanical type tally of all eligible exercises.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MechanicalBalance {
    pub straight_arm: usize,
    pub bent_arm: usize,
    pub hybrid: usize,
    pub none: usize,
    /// Straight arm to bent arm ratio, absent without bent arm exercises.
    pub ratio: Option<f32>,
    pub warning: Option<Label>,
}

impl MechanicalBalance {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn tally(types: impl Iterator<Item = MechanicalType>, skew_threshold: f32) -> Self {
        let mut balance = MechanicalBalance::default();

        for mechanical_type in types {
            match mechanical_type {
                MechanicalType::StraightArm => balance.straight_arm += 1,
                MechanicalType::BentArm => balance.bent_arm += 1,
                MechanicalType::Hybrid => balance.hybrid += 1,
                MechanicalType::None => balance.none += 1,
            }
        }

        if balance.bent_arm > 0 {
            balance.ratio = Some(balance.straight_arm as f32 / balance.bent_arm as f32);
        }

        if let Some(dominant) = balance.dominant() {
            let (larger, smaller) = if dominant == MechanicalType::StraightArm {
                (balance.straight_arm, balance.bent_arm)
            } else {
                (balance.bent_arm, balance.straight_arm)
            };
            if larger >= 2 && (smaller == 0 || larger as f32 / smaller as f32 > skew_threshold) {
                balance.warning = Some(Label::with_tags(
                    LabelKey::BalanceWarning,
                    LabelTags {
                        mechanical_type: Some(dominant),
                        count: Some(larger),
                        ..LabelTags::default()
                    },
                ));
            }
        }

        balance
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.straight_arm + self.bent_arm + self.hybrid + self.none
    }

    /// Arm type with more exercises, if straight and bent arm differ.
    #[must_use]
    pub fn dominant(&self) -> Option<MechanicalType> {
        match self.straight_arm.cmp(&self.bent_arm) {
            std::cmp::Ordering::Greater => Some(MechanicalType::StraightArm),
            std::cmp::Ordering::Less => Some(MechanicalType::BentArm),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Arm type with fewer exercises, if straight and bent arm differ.
    #[must_use]
    pub fn minority(&self) -> Option<MechanicalType> {
        self.dominant().map(|dominant| match dominant {
            MechanicalType::StraightArm => MechanicalType::BentArm,
            _ => MechanicalType::StraightArm,
        })
    }
}
