use std::collections::HashMap;

use crossterm::style::Stylize;
use horn_prover::prover::trace::{Outcome, TraceNode};

/// How a trace is displayed.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceStyle {
    pub json: bool,
    pub color: bool,
}

/// A trace, as text.
pub fn render(trace: &TraceNode, style: TraceStyle) -> String {
    if style.json {
        return match serde_json::to_string_pretty(trace) {
            Ok(json) => json,
            Err(e) => format!("Failed to write trace: {e}"),
        };
    }

    let mut buffer = String::new();
    buffer.push_str(&trace.label);
    buffer.push('\n');
    render_children(trace, "", style.color, &mut buffer);
    buffer
}

fn render_children(node: &TraceNode, prefix: &str, color: bool, buffer: &mut String) {
    let labels = sibling_labels(&node.children);

    for (index, (child, label)) in node.children.iter().zip(labels).enumerate() {
        let last = index + 1 == node.children.len();
        let (branch, extension) = match last {
            true => ("└─ ", "   "),
            false => ("├─ ", "│  "),
        };

        buffer.push_str(prefix);
        buffer.push_str(branch);
        buffer.push_str(&label);

        match (child.is_leaf(), child.outcome) {
            (true, Some(outcome)) => {
                buffer.push_str(": ");
                buffer.push_str(&outcome_text(outcome, color));
                buffer.push('\n');
            }
            _ => {
                buffer.push('\n');
                render_children(child, &format!("{prefix}{extension}"), color, buffer);
            }
        }
    }
}

/// Labels for a collection of siblings, where repeated labels are suffixed `2`, `3`, etc.
fn sibling_labels(siblings: &[TraceNode]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::default();
    siblings
        .iter()
        .map(|sibling| {
            let count = seen.entry(sibling.label.as_str()).or_insert(0);
            *count += 1;
            match *count {
                1 => sibling.label.clone(),
                n => format!("{}{n}", sibling.label),
            }
        })
        .collect()
}

fn outcome_text(outcome: Outcome, color: bool) -> String {
    let value = match outcome.value() {
        true => "true",
        false => "false",
    };
    let value = match (color, outcome) {
        (false, _) => value.to_string(),
        (true, Outcome::Proved) => value.green().to_string(),
        (true, Outcome::AlreadyProved) => value.yellow().to_string(),
        (true, Outcome::Failed | Outcome::AlreadyFailed) => value.red().to_string(),
    };
    match outcome.is_cached() {
        true => format!("{value} (already proved)"),
        false => value,
    }
}

#[cfg(test)]
mod tests {
    use horn_prover::{knowledge_base::KnowledgeBase, prover::Prover};

    use super::*;

    fn trace(kb: &str, query: &str) -> TraceNode {
        let mut prover = Prover::default();
        prover.set_knowledge_base(KnowledgeBase::parse(kb).unwrap());
        prover.ask(query, true).unwrap().trace.unwrap()
    }

    #[test]
    fn plain_tree() {
        let trace = trace("A, A=>B, B=>C, BC=>D", "D");
        let expected = "\
D
└─ BC=>D
   ├─ A=>B: true
   └─ B=>C
      └─ B: true (already proved)
";
        assert_eq!(render(&trace, TraceStyle::default()), expected);
    }

    #[test]
    fn repeated_siblings() {
        let trace = trace("A", "BB");
        let expected = "\
BB
├─ B: false
└─ B2: false (already proved)
";
        assert_eq!(render(&trace, TraceStyle::default()), expected);
    }

    #[test]
    fn json() {
        let trace = trace("A", "A");
        let style = TraceStyle {
            json: true,
            color: false,
        };
        let json = render(&trace, style);
        assert!(json.contains("\"label\": \"A\""));
        assert!(json.contains("\"outcome\": \"proved\""));
    }
}
