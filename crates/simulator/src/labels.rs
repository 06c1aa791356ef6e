use parkfit_domain::{CueTrigger, IntentMode, Label, LabelKey, LabelResolver, Property};

/// English text for workout labels. Exercise names are taken in the configured locale.
pub struct TemplateLabels {
    locale: String,
}

impl TemplateLabels {
    #[must_use]
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_lowercase(),
        }
    }

    fn exercises(&self, label: &Label) -> String {
        let names = label
            .tags
            .exercises
            .iter()
            .map(|name| name.get(&self.locale).to_string())
            .collect::<Vec<_>>();
        match names.as_slice() {
            [] => "bodyweight basics".to_string(),
            [name] => name.clone(),
            [init @ .., last] => format!("{} and {last}", init.join(", ")),
        }
    }
}

impl LabelResolver for TemplateLabels {
    fn resolve(&self, label: &Label) -> String {
        let tags = &label.tags;
        let location = tags.location.map_or("anywhere", |l| l.name());
        let persona = tags.persona.map_or("everyone", |p| p.name());

        match label.key {
            LabelKey::WorkoutTitle(intent) => match intent {
                IntentMode::Normal => format!("{location} Session"),
                IntentMode::Blast => format!("{location} Blast"),
                IntentMode::OnTheWay => "On the Way Quickie".to_string(),
                IntentMode::Field => "Field Drill".to_string(),
            },
            LabelKey::WorkoutDescription(intent) => {
                let focus = match intent {
                    IntentMode::Normal => "A balanced session",
                    IntentMode::Blast => "A high intensity burst",
                    IntentMode::OnTheWay => "A quiet, sweat-free routine",
                    IntentMode::Field => "An equipment-free drill",
                };
                format!(
                    "{focus} for {} at {}, built around {}.",
                    persona.to_lowercase(),
                    location.to_lowercase(),
                    self.exercises(label)
                )
            }
            LabelKey::EmptyWorkoutTitle => "No Workout Available".to_string(),
            LabelKey::EmptyWorkoutDescription => format!(
                "Nothing in the catalog fits your {} session at {}.",
                tags.intent.map_or("normal", |i| i.name()).to_lowercase(),
                location.to_lowercase()
            ),
            LabelKey::Cue(trigger) => match trigger {
                CueTrigger::NoMatches => {
                    "No exercises match. Location, injuries and level rule out the whole catalog."
                        .to_string()
                }
                CueTrigger::InjuryShield => {
                    "Injury shield is active. Movements stressing protected areas were removed."
                        .to_string()
                }
                CueTrigger::Blast => "Short rests, full effort. Keep moving.".to_string(),
                CueTrigger::OnTheWay => {
                    "Stay discreet. Everything here is quiet and keeps you dry.".to_string()
                }
                CueTrigger::Field => "No equipment needed. Use the terrain.".to_string(),
                CueTrigger::Balance => format!(
                    "Most options are {}. Mix in the other side where you can.",
                    tags.mechanical_type
                        .map_or("one-sided", |m| m.name())
                        .to_lowercase()
                ),
            },
            LabelKey::VolumeBadge => format!(
                "Welcome back: volume -{} %",
                tags.percent.unwrap_or_default()
            ),
            LabelKey::BalanceWarning => format!(
                "Skewed towards {} ({} exercises)",
                tags.mechanical_type
                    .map_or("one type", |m| m.name())
                    .to_lowercase(),
                tags.count.unwrap_or_default()
            ),
        }
    }
}
