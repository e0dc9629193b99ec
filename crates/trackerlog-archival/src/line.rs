//! Archive line rendering.

use trackerlog_types::{Severity, TrackedRecord};

/// Optional cleanup applied to actor and statement text before rendering.
pub type Sanitizer = fn(&str) -> String;

/// Renders tracked records into archive lines.
///
/// The wire format is stability-critical; downstream log consumers parse it:
///
/// ```text
/// [<timestamp>] local.<severity>: [petugas] <actor>, [query] <statement>\n
/// ```
///
/// By default actor and statement pass through verbatim, matching the
/// historical files byte for byte. Embedded newlines or brackets therefore
/// land in the line unmodified; deployments that need hardening can install
/// a [`Sanitizer`] without changing the format itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormatter {
    sanitizer: Option<Sanitizer>,
}

impl LineFormatter {
    /// Formatter with verbatim pass-through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter that runs `sanitizer` over actor and statement text.
    pub fn with_sanitizer(sanitizer: Sanitizer) -> Self {
        Self {
            sanitizer: Some(sanitizer),
        }
    }

    /// Render one record. Pure and total; severity comes from
    /// [`Severity::classify`] on the statement.
    pub fn format_line(&self, record: &TrackedRecord) -> String {
        let severity = Severity::classify(&record.statement);
        let (actor, statement) = match self.sanitizer {
            Some(sanitize) => (sanitize(&record.actor), sanitize(&record.statement)),
            None => (record.actor.clone(), record.statement.clone()),
        };
        format!(
            "[{}] local.{}: [petugas] {}, [query] {}\n",
            record.timestamp, severity, actor, statement
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: &str, actor: &str, statement: &str) -> TrackedRecord {
        TrackedRecord {
            timestamp: timestamp.to_string(),
            actor: actor.to_string(),
            statement: statement.to_string(),
        }
    }

    #[test]
    fn renders_exact_wire_format() {
        let line = LineFormatter::new().format_line(&record(
            "2024-10-05 09:00:00",
            "budi",
            "insert into x values (1)",
        ));
        assert_eq!(
            line,
            "[2024-10-05 09:00:00] local.info: [petugas] budi, [query] insert into x values (1)\n"
        );
    }

    #[test]
    fn timestamp_is_not_reformatted() {
        // Whatever the store held is what the line carries.
        let line = LineFormatter::new().format_line(&record("2024-1-5 9:00", "a", "select 1"));
        assert!(line.starts_with("[2024-1-5 9:00] local.alert:"));
    }

    #[test]
    fn free_text_passes_through_verbatim_by_default() {
        let line = LineFormatter::new().format_line(&record(
            "2024-10-05 09:00:00",
            "bu]di",
            "update t set note='line\nbreak'",
        ));
        assert!(line.contains("[petugas] bu]di,"));
        assert!(line.contains("line\nbreak"));
    }

    #[test]
    fn sanitizer_hook_applies_to_actor_and_statement() {
        fn strip_newlines(text: &str) -> String {
            text.replace('\n', " ")
        }
        let line = LineFormatter::with_sanitizer(strip_newlines).format_line(&record(
            "2024-10-05 09:00:00",
            "budi",
            "update t\nset x=1",
        ));
        assert_eq!(
            line,
            "[2024-10-05 09:00:00] local.warning: [petugas] budi, [query] update t set x=1\n"
        );
    }
}
