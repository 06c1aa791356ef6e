use std::fmt::Write;

use parkfit_storage::{FilterReport, WorkoutReport, report::WorkoutExerciseReport};

#[derive(serde::Serialize, Debug)]
pub struct Output {
    pub request: String,
    pub filter: FilterReport,
    pub workout: WorkoutReport,
}

impl Output {
    #[must_use]
    pub fn text(&self) -> String {
        let mut text = String::new();
        let filter = &self.filter;
        let workout = &self.workout;

        let _ = writeln!(text, "== {} ==", self.request);
        let _ = writeln!(
            text,
            "{} ({} min, {} s)",
            workout.title, workout.estimated_minutes, workout.estimated_seconds
        );
        let _ = writeln!(text, "{}", workout.description);

        if let Some(badge) = workout.volume_adjustment.as_ref().map(|v| &v.badge) {
            let _ = writeln!(text, "[{badge}]");
        }
        if let Some(blast) = &workout.blast_mode {
            let _ = writeln!(
                text,
                "{} {} min, {} s on / {} s off",
                blast.structure.to_uppercase(),
                blast.duration_minutes,
                blast.work_seconds,
                blast.rest_seconds
            );
        }

        for (i, exercise) in workout.exercises.iter().enumerate() {
            let _ = writeln!(text, "{:>2}. {}", i + 1, prescription(exercise));
        }

        if let Some(cue) = &workout.ai_cue {
            let _ = writeln!(text, "> {cue}");
        }

        let _ = writeln!(
            text,
            "{} candidates, {} excluded",
            filter.exercises.len(),
            filter.excluded_count
        );
        for (reason, count) in &filter.exclusions {
            let _ = writeln!(text, "  - {reason}: {count}");
        }
        if !filter.active_filters.is_empty() {
            let _ = writeln!(text, "filters: {}", filter.active_filters.join("; "));
        }
        if let Some(warning) = &filter.balance.warning {
            let _ = writeln!(text, "! {warning}");
        }

        text
    }
}

fn prescription(exercise: &WorkoutExerciseReport) -> String {
    let volume = match (exercise.reps, exercise.hold_seconds) {
        (_, Some(hold)) => format!("{} x {hold} s", exercise.sets),
        (Some(reps), None) => format!("{} x {reps}", exercise.sets),
        (None, None) => format!("{} sets", exercise.sets),
    };
    format!(
        "{} {volume}, rest {} s ({})",
        exercise.name, exercise.rest_seconds, exercise.tier
    )
}
