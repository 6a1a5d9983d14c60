use chrono::{Duration, NaiveDate};

use crate::api::{ApiError, DateUpdate, PlannerApi};
use crate::model::ScheduleEntry;
use crate::state::PlannerState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftScope {
    All,
    Preacher(String),
}

impl ShiftScope {
    fn matches(&self, entry: &ScheduleEntry) -> bool {
        match self {
            ShiftScope::All => true,
            ShiftScope::Preacher(name) => entry.preacher.as_deref() == Some(name.as_str()),
        }
    }
}

/// Computes the batch for "shift all future entries N weeks": every dated
/// sermon at or after `from_date` in scope moves by whole weeks, which
/// preserves its day of week. `weeks` may be negative. Sorted by date for
/// a stable batch order.
pub fn plan_shift<'a>(
    sermons: impl IntoIterator<Item = &'a ScheduleEntry>,
    from_date: NaiveDate,
    weeks: i64,
    scope: &ShiftScope,
) -> Vec<DateUpdate> {
    let mut updates: Vec<DateUpdate> = sermons
        .into_iter()
        .filter(|entry| scope.matches(entry))
        .filter_map(|entry| {
            let date = entry.date?;
            if date < from_date {
                return None;
            }
            let new_date = date.checked_add_signed(Duration::weeks(weeks))?;
            Some(DateUpdate { id: entry.id.clone(), new_date })
        })
        .collect();
    updates.sort_by(|a, b| a.new_date.cmp(&b.new_date).then_with(|| a.id.cmp(&b.id)));
    updates
}

/// Sends the shift as one batch request. Local state is only touched after
/// the backend confirms; on failure nothing changes client-side. Not
/// idempotent: calling twice shifts twice.
pub async fn apply_shift(
    state: &mut PlannerState,
    api: &dyn PlannerApi,
    from_date: NaiveDate,
    weeks: i64,
    scope: &ShiftScope,
) -> Result<usize, ApiError> {
    let updates = plan_shift(state.sermons.values(), from_date, weeks, scope);
    if updates.is_empty() {
        return Ok(0);
    }

    api.batch_update_dates(&updates).await?;

    for update in &updates {
        if let Some(entry) = state.sermons.get_mut(&update.id) {
            entry.date = Some(update.new_date);
        }
    }
    tracing::info!("Shifted {} entries by {} weeks", updates.len(), weeks);
    Ok(updates.len())
}
