//! Usage and help text rendering.
//!
//! Rendering reads only the matchers' self-descriptions, never their
//! state, so it gives the same text before, during, and after a parse.

use crate::parameter::Parameter;

/// Placeholder for parameters registered without a description.
pub const UNDOCUMENTED: &str = "(undocumented)";

/// Renders the usage line: `Usage : <program>` followed by each visible
/// parameter's usage clauses in registration order.
pub(crate) fn usage_line(program: &str, parameters: &[Parameter]) -> String {
    let mut line = format!("Usage : {program}");
    for clause in parameters
        .iter()
        .filter(|p| !p.is_hidden())
        .flat_map(Parameter::wrapped_usage)
    {
        line.push(' ');
        line.push_str(&clause);
    }
    line
}

/// Renders one `<clause>\t: <description>` line per help clause of a
/// parameter. Descriptions pair with clauses when given as a list.
pub(crate) fn help_lines(parameter: &Parameter) -> Vec<String> {
    parameter
        .help()
        .into_parts()
        .into_iter()
        .enumerate()
        .map(|(index, clause)| {
            let description = parameter
                .description()
                .and_then(|d| d.for_clause(index))
                .unwrap_or(UNDOCUMENTED);
            format!("{clause}\t: {description}")
        })
        .collect()
}

/// Renders the full help text: usage line, optional abstract, then the
/// help lines of every visible parameter, joined by newlines.
pub(crate) fn help_text(program: &str, abstract_text: Option<&str>, parameters: &[Parameter]) -> String {
    let mut lines = vec![usage_line(program, parameters)];
    if let Some(text) = abstract_text {
        lines.push(text.to_string());
    }
    lines.extend(
        parameters
            .iter()
            .filter(|p| !p.is_hidden())
            .flat_map(help_lines),
    );
    lines.join("\n")
}
