use crate::{ExecutionLocation, IntentMode, Level, LifestylePersona, LocalizedName, MechanicalType};

/// Turns labels into display text. Implemented at the edge; the domain never holds template text.
pub trait LabelResolver {
    fn resolve(&self, label: &Label) -> String;
}

/// A piece of user-facing text identified by key and the tags it is rendered from.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub key: LabelKey,
    pub tags: LabelTags,
}

impl Label {
    #[must_use]
    pub fn new(key: LabelKey) -> Self {
        Self {
            key,
            tags: LabelTags::default(),
        }
    }

    #[must_use]
    pub fn with_tags(key: LabelKey, tags: LabelTags) -> Self {
        Self { key, tags }
    }

    pub fn render(&self, resolver: &impl LabelResolver) -> String {
        resolver.resolve(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    WorkoutTitle(IntentMode),
    WorkoutDescription(IntentMode),
    EmptyWorkoutTitle,
    EmptyWorkoutDescription,
    Cue(CueTrigger),
    VolumeBadge,
    BalanceWarning,
}

/// Situation that selected the coaching cue of a filter result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CueTrigger {
    NoMatches,
    InjuryShield,
    Blast,
    OnTheWay,
    Field,
    Balance,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LabelTags {
    pub intent: Option<IntentMode>,
    pub persona: Option<LifestylePersona>,
    pub location: Option<ExecutionLocation>,
    pub level: Option<Level>,
    pub exercises: Vec<LocalizedName>,
    pub mechanical_type: Option<MechanicalType>,
    pub percent: Option<u8>,
    pub count: Option<usize>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct KeyResolver;

    impl LabelResolver for KeyResolver {
        fn resolve(&self, label: &Label) -> String {
            match label.key {
                LabelKey::Cue(trigger) => format!("cue:{}", trigger.as_ref()),
                LabelKey::VolumeBadge => format!("-{}%", label.tags.percent.unwrap_or(0)),
                _ => "other".to_string(),
            }
        }
    }

    #[test]
    fn test_label_render() {
        assert_eq!(
            Label::new(LabelKey::Cue(CueTrigger::OnTheWay)).render(&KeyResolver),
            "cue:on_the_way"
        );
        assert_eq!(
            Label::with_tags(
                LabelKey::VolumeBadge,
                LabelTags {
                    percent: Some(35),
                    ..LabelTags::default()
                }
            )
            .render(&KeyResolver),
            "-35%"
        );
    }
}
