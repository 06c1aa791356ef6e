use std::collections::BTreeMap;

use parkfit_domain::{self as domain, Property, parse_property};
use uuid::Uuid;

/// Locale used as the default name of an exercise if present.
pub const DEFAULT_LOCALE: &str = "en";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseRecord {
    pub id: String,
    pub name: BTreeMap<String, String>,
    pub mechanical_type: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweat_level: Option<u8>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub personas: Vec<String>,
    #[serde(default)]
    pub program_levels: BTreeMap<String, u8>,
    #[serde(default)]
    pub injury_shield: Vec<String>,
    #[serde(default)]
    pub field_ready: bool,
    #[serde(default)]
    pub time_based: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

impl From<domain::Exercise> for ExerciseRecord {
    fn from(value: domain::Exercise) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Exercise> for ExerciseRecord {
    fn from(value: &domain::Exercise) -> Self {
        let mut name = value
            .name
            .locales()
            .map(|locale| (locale.to_string(), value.name.get(locale).to_string()))
            .collect::<BTreeMap<_, _>>();
        name.insert(
            DEFAULT_LOCALE.to_string(),
            value.name.default_name().to_string(),
        );

        Self {
            id: value.id.to_string(),
            name,
            mechanical_type: value.mechanical_type.as_ref().to_string(),
            equipment: keys(value.equipment.iter().copied()),
            noise_level: value.noise_level.map(u8::from),
            sweat_level: value.sweat_level.map(u8::from),
            locations: keys(value.locations.iter().copied()),
            personas: keys(value.personas.iter().copied()),
            program_levels: value
                .program_levels
                .iter()
                .map(|(program, level)| (program.to_string(), u8::from(*level)))
                .collect(),
            injury_shield: keys(value.injury_shield.iter().copied()),
            field_ready: value.field_ready,
            time_based: value.time_based,
            tier: value.tier.map(|t| t.as_ref().to_string()),
        }
    }
}

impl TryFrom<ExerciseRecord> for domain::Exercise {
    type Error = domain::ExerciseError;

    fn try_from(value: ExerciseRecord) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(value.id.trim())
            .map_err(|_| domain::ExerciseError::ID(value.id.clone()))?;

        Ok(Self {
            id: id.into(),
            name: localized_name(&value.name)?,
            mechanical_type: parse_property(&value.mechanical_type)?,
            equipment: parse_all(&value.equipment)?,
            noise_level: value.noise_level.map(domain::Intensity::new).transpose()?,
            sweat_level: value.sweat_level.map(domain::Intensity::new).transpose()?,
            locations: parse_all(&value.locations)?,
            personas: parse_all(&value.personas)?,
            program_levels: value
                .program_levels
                .iter()
                .map(|(program, level)| {
                    Ok((domain::ProgramID::new(program)?, domain::Level::new(*level)?))
                })
                .collect::<Result<_, domain::ExerciseError>>()?,
            injury_shield: parse_all(&value.injury_shield)?,
            field_ready: value.field_ready,
            time_based: value.time_based,
            tier: value
                .tier
                .as_deref()
                .map(parse_property::<domain::PriorityTier>)
                .transpose()?,
        })
    }
}

fn localized_name(
    names: &BTreeMap<String, String>,
) -> Result<domain::LocalizedName, domain::ExerciseError> {
    let default = names
        .get(DEFAULT_LOCALE)
        .or_else(|| names.values().next())
        .ok_or(domain::NameError::Empty)?;

    let mut name = domain::LocalizedName::new(domain::Name::new(default)?);
    for (locale, translation) in names {
        if locale != DEFAULT_LOCALE {
            name = name.with_translation(locale, domain::Name::new(translation)?);
        }
    }

    Ok(name)
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ContextRecord {
    pub location: String,
    pub lifestyles: Vec<String>,
    pub injury_shield: Vec<String>,
    pub intent: String,
    pub equipment: Vec<String>,
    pub user_level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<ProgramFilterRecord>,
}

impl Default for ContextRecord {
    fn default() -> Self {
        Self::from(&domain::ContextualFilterContext::default())
    }
}

impl From<&domain::ContextualFilterContext> for ContextRecord {
    fn from(value: &domain::ContextualFilterContext) -> Self {
        Self {
            location: value.location.as_ref().to_string(),
            lifestyles: keys(value.lifestyles.iter().copied()),
            injury_shield: keys(value.injury_shield.iter().copied()),
            intent: value.intent.as_ref().to_string(),
            equipment: keys(value.equipment.iter().copied()),
            user_level: value.user_level.into(),
            program: value.program.as_ref().map(|p| ProgramFilterRecord {
                program: p.program.to_string(),
                tolerance: p.tolerance,
            }),
        }
    }
}

impl TryFrom<ContextRecord> for domain::ContextualFilterContext {
    type Error = domain::ExerciseError;

    fn try_from(value: ContextRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            location: parse_property(&value.location)?,
            lifestyles: parse_all(&value.lifestyles)?,
            injury_shield: parse_all(&value.injury_shield)?,
            intent: parse_property(&value.intent)?,
            equipment: parse_all(&value.equipment)?,
            user_level: domain::Level::new(value.user_level)?,
            program: value
                .program
                .map(|p| {
                    Ok::<_, domain::ExerciseError>(domain::ProgramFilter {
                        program: domain::ProgramID::new(&p.program)?,
                        tolerance: p.tolerance,
                    })
                })
                .transpose()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProgramFilterRecord {
    pub program: String,
    #[serde(default = "default_tolerance")]
    pub tolerance: u8,
}

fn default_tolerance() -> u8 {
    2
}

/// Session parameters of a workout request. Level, intent and location come from the context.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SessionRecord {
    pub available_time: u32,
    pub days_inactive: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    /// Defaults to the number of shielded injury areas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_count: Option<usize>,
    pub energy: String,
}

impl Default for SessionRecord {
    fn default() -> Self {
        let params = domain::GenerationParams::default();
        Self {
            available_time: params.available_time,
            days_inactive: params.days_inactive,
            persona: None,
            injury_count: None,
            energy: params.energy.as_ref().to_string(),
        }
    }
}

impl SessionRecord {
    pub fn params(
        &self,
        context: &domain::ContextualFilterContext,
    ) -> Result<domain::GenerationParams, domain::ExerciseError> {
        Ok(domain::GenerationParams {
            available_time: self.available_time,
            user_level: context.user_level,
            days_inactive: self.days_inactive,
            intent: context.intent,
            persona: match &self.persona {
                Some(persona) => Some(parse_property(persona)?),
                None => context.lifestyles.first().copied(),
            },
            location: context.location,
            injury_count: self.injury_count.unwrap_or(context.injury_shield.len()),
            energy: self
                .energy
                .trim()
                .parse()
                .map_err(|_| domain::ExerciseError::UnknownProperty {
                    kind: "energy level",
                    value: self.energy.clone(),
                })?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RequestDocument {
    pub context: ContextRecord,
    pub session: SessionRecord,
}

/// Request ready to be run through engine and generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub context: domain::ContextualFilterContext,
    pub params: domain::GenerationParams,
}

impl TryFrom<RequestDocument> for Request {
    type Error = domain::ExerciseError;

    fn try_from(value: RequestDocument) -> Result<Self, Self::Error> {
        let context = domain::ContextualFilterContext::try_from(value.context)?;
        let params = value.session.params(&context)?;
        Ok(Self { context, params })
    }
}

fn keys<P: Property>(values: impl IntoIterator<Item = P>) -> Vec<String> {
    values.into_iter().map(|v| v.as_ref().to_string()).collect()
}

fn parse_all<P, C>(values: &[String]) -> Result<C, domain::ExerciseError>
where
    P: Property,
    C: FromIterator<P>,
{
    values.iter().map(|v| parse_property(v)).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::tests::data;

    #[test]
    fn test_exercise_record_try_from() {
        let record = serde_json::from_str::<ExerciseRecord>(data::PULL_UP_JSON).unwrap();
        assert_eq!(
            domain::Exercise::try_from(record),
            Ok(data::pull_up())
        );
    }

    #[test]
    fn test_exercise_record_from_exercise() {
        let record = ExerciseRecord::from(&data::pull_up());
        assert_eq!(record.mechanical_type, "bent_arm");
        assert_eq!(record.equipment, vec!["pull_up_bar".to_string()]);
        assert_eq!(record.name.get("he").map(String::as_str), Some("מתח"));
        assert_eq!(record.name.get("en").map(String::as_str), Some("Pull-Up"));
        assert_eq!(domain::Exercise::try_from(record), Ok(data::pull_up()));
    }

    #[test]
    fn test_exercise_record_name_without_default_locale() {
        let record = ExerciseRecord {
            name: BTreeMap::from([("he".to_string(), "מתח".to_string())]),
            ..ExerciseRecord::from(&data::pull_up())
        };
        let exercise = domain::Exercise::try_from(record).unwrap();
        assert_eq!(exercise.name.default_name().to_string(), "מתח");
    }

    #[test]
    fn test_exercise_record_missing_levels_is_convertible() {
        let record = ExerciseRecord {
            noise_level: None,
            ..ExerciseRecord::from(&data::pull_up())
        };
        let exercise = domain::Exercise::try_from(record).unwrap();
        assert!(!exercise.is_classified());
    }

    #[rstest]
    #[case::id(
        ExerciseRecord { id: "42".to_string(), ..ExerciseRecord::from(&data::pull_up()) },
        domain::ExerciseError::ID("42".to_string())
    )]
    #[case::name(
        ExerciseRecord { name: BTreeMap::new(), ..ExerciseRecord::from(&data::pull_up()) },
        domain::ExerciseError::Name(domain::NameError::Empty)
    )]
    #[case::mechanical_type(
        ExerciseRecord { mechanical_type: "curved_arm".to_string(), ..ExerciseRecord::from(&data::pull_up()) },
        domain::ExerciseError::UnknownProperty { kind: "mechanical type", value: "curved_arm".to_string() }
    )]
    #[case::equipment(
        ExerciseRecord { equipment: vec!["trampoline".to_string()], ..ExerciseRecord::from(&data::pull_up()) },
        domain::ExerciseError::UnknownProperty { kind: "equipment", value: "trampoline".to_string() }
    )]
    #[case::intensity(
        ExerciseRecord { sweat_level: Some(4), ..ExerciseRecord::from(&data::pull_up()) },
        domain::ExerciseError::Intensity(domain::IntensityError::OutOfRange(4))
    )]
    #[case::level(
        ExerciseRecord {
            program_levels: BTreeMap::from([("calisthenics".to_string(), 0)]),
            ..ExerciseRecord::from(&data::pull_up())
        },
        domain::ExerciseError::Level(domain::LevelError::OutOfRange(0))
    )]
    fn test_exercise_record_invalid(
        #[case] record: ExerciseRecord,
        #[case] expected: domain::ExerciseError,
    ) {
        assert_eq!(domain::Exercise::try_from(record), Err(expected));
    }

    #[test]
    fn test_request_document_defaults() {
        let document = serde_json::from_str::<RequestDocument>("{}").unwrap();
        let request = Request::try_from(document).unwrap();
        assert_eq!(
            request,
            Request {
                context: domain::ContextualFilterContext::default(),
                params: domain::GenerationParams::default(),
            }
        );
    }

    #[test]
    fn test_request_document_try_from() {
        let document = serde_json::from_str::<RequestDocument>(data::REQUEST_JSON).unwrap();
        let request = Request::try_from(document).unwrap();
        assert_eq!(request, data::request());
    }

    #[test]
    fn test_context_record_round_trip() {
        let context = data::request().context;
        assert_eq!(
            domain::ContextualFilterContext::try_from(ContextRecord::from(&context)),
            Ok(context)
        );
    }

    #[rstest]
    #[case::explicit_persona(Some("soldier"), Some(2), Some(domain::LifestylePersona::Soldier), 2)]
    #[case::context_persona(None, None, Some(domain::LifestylePersona::Student), 1)]
    fn test_session_record_params(
        #[case] persona: Option<&str>,
        #[case] injury_count: Option<usize>,
        #[case] expected_persona: Option<domain::LifestylePersona>,
        #[case] expected_injury_count: usize,
    ) {
        let context = data::request().context;
        let session = SessionRecord {
            persona: persona.map(str::to_string),
            injury_count,
            ..SessionRecord::default()
        };

        let params = session.params(&context).unwrap();

        assert_eq!(params.persona, expected_persona);
        assert_eq!(params.injury_count, expected_injury_count);
        assert_eq!(params.intent, context.intent);
        assert_eq!(params.location, context.location);
        assert_eq!(params.user_level, context.user_level);
    }

    #[test]
    fn test_session_record_invalid_energy() {
        let session = SessionRecord {
            energy: "exhausted".to_string(),
            ..SessionRecord::default()
        };
        assert_eq!(
            session.params(&domain::ContextualFilterContext::default()),
            Err(domain::ExerciseError::UnknownProperty {
                kind: "energy level",
                value: "exhausted".to_string()
            })
        );
    }
}
