/// `field=value` command-line assignments.
///
/// Only the split is done here; numeric parsing and range checks belong to the
/// calculator's validator so the CLI and the web page reject the same input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub field: &'a str,
    pub value: &'a str,
}

pub fn parse_assignment(text: &str) -> anyhow::Result<Assignment<'_>> {
    let (field, value) = text
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected field=value, got '{}'", text))?;
    let field = field.trim();
    if field.is_empty() {
        anyhow::bail!("missing field name in '{}'", text);
    }
    Ok(Assignment { field, value })
}

/// Look `field` up in the calculator's field names.
pub fn check_field(field: &str, known: &[&str]) -> anyhow::Result<()> {
    if known.contains(&field) {
        Ok(())
    } else {
        anyhow::bail!(
            "unknown field '{}' (expected one of: {})",
            field,
            known.join(", ")
        )
    }
}
