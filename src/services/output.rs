use crate::domain::models::JsonOut;
use serde::Serialize;

/// Print a report either as the JSON envelope or through the given
/// plain-text renderer. `ok` is caller-supplied: doctor and clean decide
/// success from the report contents, not from reaching this point.
pub fn emit<T: Serialize>(
    json: bool,
    ok: bool,
    data: &T,
    text: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data })?
        );
    } else {
        text(data);
    }
    Ok(())
}
