#[cfg(test)]
#[path = "sanitizer_test.rs"]
mod tests;

/// Normalizes raw service output into displayable source code. The service
/// usually wraps code in a markdown fence with a language tag; a single
/// leading and trailing delimiter is stripped and surrounding whitespace
/// trimmed. Unfenced input passes through trimmed, and the function never
/// fails, even on empty input.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "".to_string();
    }

    let mut lines = trimmed.lines().collect::<Vec<&str>>();

    if lines
        .first()
        .map_or(false, |line| return line.trim().starts_with("```"))
    {
        lines.remove(0);
    }

    if lines
        .last()
        .map_or(false, |line| return line.trim() == "```")
    {
        lines.pop();
    }

    return lines.join("\n").trim().to_string();
}
