//! Prompt assembly. Pure string formatting, no I/O, deterministic, so the
//! grounding discipline (closed source set, mandatory inline citations) is
//! testable without touching either provider.

use crate::data_models::Source;

/// Render one source as a `[id] title — url (date?)` line plus its snippet.
/// An absent date and an empty-string date both omit the parenthetical.
fn render_source(source: &Source) -> String {
    let date = source
        .published_date
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format!(" ({d})"))
        .unwrap_or_default();
    format!(
        "[{}] {} — {}{}\nSnippet: {}",
        source.id, source.title, source.url, date, source.snippet
    )
}

fn render_source_block(sources: &[Source]) -> String {
    sources
        .iter()
        .map(render_source)
        .collect::<Vec<String>>()
        .join("\n\n")
}

/// Prompt for the open /ask path: verbatim question, web results, and fixed
/// answer-shape instructions.
pub fn build_explorer_prompt(query: &str, sources: &[Source]) -> String {
    format!(
        "TRAVEL QUESTION:\n{query}\n\nWEB RESULTS:\n{}\n\n\
         INSTRUCTIONS:\n- Answer in 5–8 short bullets.\n\
         - Put citations [id] right after the sentences they support.\n\
         - End with a 'Sources' section listing [id] Title — URL — (Date).\n",
        render_source_block(sources)
    )
}

/// Prompt for the /plan path: the user's constraints, web results, and the
/// fixed itinerary task list.
pub fn build_plan_prompt(
    days: u32,
    month: &str,
    party: &str,
    max_drive: f64,
    interests: &str,
    budget: &str,
    sources: &[Source],
) -> String {
    let constraints = format!(
        "USER CONSTRAINTS:\n- Trip length: {days} days, month: {month}\n\
         - Party: {party}\n- Driving: max {max_drive} hours per leg\n\
         - Interests: {interests}\n- Budget: {budget}\n\n"
    );
    let tasks = "TASKS:\n\
         1) Propose a day-by-day itinerary with AM/PM blocks; include estimated drive time per leg.\n\
         2) For each day add 2–3 highlights with [id] citations and a short rain plan.\n\
         3) Suggest a hotel area and dining style.\n\
         4) Provide a compact budget bracket per day ($ / $$ / $$$).\n\
         Return a concise human-readable plan.\n";
    format!(
        "{constraints}WEB RESULTS:\n{}\n\n{tasks}",
        render_source_block(sources)
    )
}
