use crate::{
    domain::{conversation::ConversationView, timeline::RenderDirective},
    infra::{contracts::SnapshotSource, error::AppError},
    usecases::context::AppContext,
};

const MAX_TIMELINE_WINDOW: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderTimelineQuery {
    /// Most recent messages to project; 0 uses the configured window.
    pub limit: usize,
}

impl RenderTimelineQuery {
    fn normalized_limit(&self, default_window: usize) -> usize {
        match self.limit {
            0 => default_window.min(MAX_TIMELINE_WINDOW),
            value if value > MAX_TIMELINE_WINDOW => MAX_TIMELINE_WINDOW,
            value => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTimelineOutput {
    /// The windowed snapshot the directives were computed from.
    pub view: ConversationView,
    pub directives: Vec<RenderDirective>,
}

pub fn render_timeline(
    context: &AppContext,
    source: &dyn SnapshotSource,
    query: RenderTimelineQuery,
) -> Result<RenderTimelineOutput, AppError> {
    let mut snapshot = source.load_snapshot()?;
    if !snapshot.is_chronological() {
        tracing::warn!(
            messages = snapshot.messages.len(),
            "snapshot messages are out of chronological order; sorting by timestamp"
        );
        snapshot.sort_chronologically();
    }

    let total = snapshot.messages.len();
    let limit = query.normalized_limit(context.config.timeline.window);

    let view = snapshot.recent_window(limit);
    let directives = context.projector.project(&view);

    tracing::debug!(
        total_messages = total,
        window = limit,
        projected = directives.len(),
        shown_status = directives.iter().filter(|d| d.show_status()).count(),
        date_dividers = directives.iter().filter(|d| d.show_date_divider).count(),
        "timeline projected"
    );

    Ok(RenderTimelineOutput { view, directives })
}
