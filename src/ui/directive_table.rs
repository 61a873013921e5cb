use crate::domain::timeline::RenderDirective;

const HEADER: &str = "idx  id        own latest last-read  status       visibility   divider tier";

fn flag(value: bool) -> &'static str {
    if value {
        "y"
    } else {
        "-"
    }
}

/// One aligned row per directive, preceded by a header.
pub fn directive_rows(directives: &[RenderDirective]) -> Vec<String> {
    let mut rows = Vec::with_capacity(directives.len() + 1);
    rows.push(HEADER.to_owned());

    rows.extend(directives.iter().map(|d| {
        format!(
            "{:<4} {:<9} {:<3} {:<6} {:<10} {:<12} {:<12} {:<7} {}",
            d.index,
            d.message_id,
            flag(d.is_own),
            flag(d.is_latest_own_message),
            flag(d.is_last_read_own_message),
            d.status_label.as_str(),
            d.status_visibility.as_label(),
            flag(d.show_date_divider),
            d.spacing_tier.as_label(),
        )
        .trim_end()
        .to_owned()
    }));

    rows
}
