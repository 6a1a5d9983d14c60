use chrono::NaiveDate;
use thiserror::Error;

use crate::api::{ApiError, PlannerApi};
use crate::model::EntryPatch;
use crate::schedule::binder::EventKind;
use crate::schedule::optimistic::PendingWrite;
use crate::state::PlannerState;

#[derive(Debug, Error)]
pub enum RescheduleError {
    #[error("Unknown {kind:?} entry: {id}")]
    UnknownEntry { kind: EventKind, id: String },
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// Dropped on its current date — nothing sent, nothing changed.
    Unchanged,
    SermonMoved {
        id: String,
        from: Option<NaiveDate>,
        to: NaiveDate,
    },
    /// Server-side cascade; `rescheduled` is the count the backend reports.
    Cascaded { kind: EventKind, rescheduled: u32 },
}

/// Handles dropping an event onto a calendar date.
///
/// Sermon moves are independent single-row writes: the local date is
/// overwritten optimistically and restored from the snapshot if the update
/// fails. Devotion and English moves ripple through later entries in the
/// same series, and only the backend knows the full ripple set — so local
/// state stays untouched until the cascade succeeds and the collection is
/// reloaded.
pub async fn handle_drop(
    state: &mut PlannerState,
    api: &dyn PlannerApi,
    kind: EventKind,
    id: &str,
    drop_date: NaiveDate,
) -> Result<DropOutcome, RescheduleError> {
    match kind {
        EventKind::Sermon => drop_sermon(state, api, id, drop_date).await,
        EventKind::Devotion => drop_devotion(state, api, id, drop_date).await,
        EventKind::English => drop_english(state, api, id, drop_date).await,
    }
}

async fn drop_sermon(
    state: &mut PlannerState,
    api: &dyn PlannerApi,
    id: &str,
    drop_date: NaiveDate,
) -> Result<DropOutcome, RescheduleError> {
    let Some(entry) = state.sermons.get_mut(id) else {
        return Err(RescheduleError::UnknownEntry {
            kind: EventKind::Sermon,
            id: id.to_string(),
        });
    };
    if entry.date == Some(drop_date) {
        return Ok(DropOutcome::Unchanged);
    }

    let pending = PendingWrite::begin(entry.date);
    entry.date = Some(drop_date);

    match api.update_entry(id, &EntryPatch::date(drop_date)).await {
        Ok(()) => {
            let from = *pending.snapshot();
            pending.commit();
            Ok(DropOutcome::SermonMoved {
                id: id.to_string(),
                from,
                to: drop_date,
            })
        }
        Err(err) => {
            let snapshot = pending.rollback();
            if let Some(entry) = state.sermons.get_mut(id) {
                entry.date = snapshot;
            }
            tracing::warn!("Reverted optimistic move of {}: {}", id, err);
            Err(err.into())
        }
    }
}

async fn drop_devotion(
    state: &mut PlannerState,
    api: &dyn PlannerApi,
    id: &str,
    drop_date: NaiveDate,
) -> Result<DropOutcome, RescheduleError> {
    let Some(lesson) = state.devotions.get(id) else {
        return Err(RescheduleError::UnknownEntry {
            kind: EventKind::Devotion,
            id: id.to_string(),
        });
    };
    if lesson.scheduled_date == Some(drop_date) {
        return Ok(DropOutcome::Unchanged);
    }

    let result = api.cascade_reschedule_devotions(id, drop_date).await?;
    let lessons = api.fetch_devotion_lessons().await?;
    state.replace_devotions(lessons);

    Ok(DropOutcome::Cascaded {
        kind: EventKind::Devotion,
        rescheduled: result.rescheduled,
    })
}

async fn drop_english(
    state: &mut PlannerState,
    api: &dyn PlannerApi,
    id: &str,
    drop_date: NaiveDate,
) -> Result<DropOutcome, RescheduleError> {
    let Some(class) = state.classes.get(id) else {
        return Err(RescheduleError::UnknownEntry {
            kind: EventKind::English,
            id: id.to_string(),
        });
    };
    if class.class_date == Some(drop_date) {
        return Ok(DropOutcome::Unchanged);
    }

    let result = api.cascade_reschedule_english(id, drop_date).await?;
    let classes = api.fetch_english_classes().await?;
    state.replace_classes(classes);

    Ok(DropOutcome::Cascaded {
        kind: EventKind::English,
        rescheduled: result.rescheduled,
    })
}
