use horn_prover::{
    knowledge_base::KnowledgeBase,
    prover::{
        trace::{Outcome, TraceNode},
        Prover,
    },
};

fn trace_of(kb: &str, query: &str) -> TraceNode {
    let mut prover = Prover::default();
    prover.set_knowledge_base(KnowledgeBase::parse(kb).expect("knowledge base"));
    prover
        .ask(query, true)
        .expect("answer")
        .trace
        .expect("trace")
}

fn shape(node: &TraceNode) -> Vec<(String, Option<Outcome>, usize)> {
    node.children
        .iter()
        .map(|child| (child.label.clone(), child.outcome, child.children.len()))
        .collect()
}

mod traces {
    use super::*;

    #[test]
    fn fact() {
        let trace = trace_of("A", "A");
        assert_eq!(trace.label, "A");
        assert_eq!(trace.outcome, Some(Outcome::Proved));
        assert_eq!(shape(&trace), vec![("A".to_owned(), Some(Outcome::Proved), 0)]);
    }

    #[test]
    fn failed_atom_premise() {
        let trace = trace_of("A, B=>C", "C");
        assert_eq!(trace.outcome, Some(Outcome::Failed));
        assert_eq!(
            shape(&trace),
            vec![("B=>C".to_owned(), Some(Outcome::Failed), 1)]
        );
        assert_eq!(
            shape(&trace.children[0]),
            vec![("B".to_owned(), Some(Outcome::Failed), 0)]
        );
    }

    #[test]
    fn no_matching_rule() {
        let trace = trace_of("A, B=>C", "D");
        assert_eq!(shape(&trace), vec![("D".to_owned(), Some(Outcome::Failed), 0)]);
    }

    #[test]
    fn compound_premise_then_next_rule() {
        let trace = trace_of("C, BC=>A, C=>A", "A");
        assert_eq!(trace.outcome, Some(Outcome::Proved));
        assert_eq!(
            shape(&trace),
            vec![
                ("BC=>A".to_owned(), Some(Outcome::Failed), 2),
                ("C=>A".to_owned(), Some(Outcome::Proved), 0),
            ]
        );
        assert_eq!(
            shape(&trace.children[0]),
            vec![
                ("B".to_owned(), Some(Outcome::Failed), 0),
                ("C".to_owned(), Some(Outcome::Proved), 0),
            ]
        );
    }

    #[test]
    fn fact_premises_are_not_rederived() {
        // A is required by AB=>C and again by A=>B, though on the second occasion the premise holds outright.
        let trace = trace_of("A, A=>B, AB=>C", "C");
        assert_eq!(trace.outcome, Some(Outcome::Proved));
        assert_eq!(
            shape(&trace),
            vec![("AB=>C".to_owned(), Some(Outcome::Proved), 2)]
        );
        assert_eq!(
            shape(&trace.children[0]),
            vec![
                ("A".to_owned(), Some(Outcome::Proved), 0),
                ("A=>B".to_owned(), Some(Outcome::Proved), 0),
            ]
        );
    }

    #[test]
    fn derived_atoms_are_cached() {
        let trace = trace_of("A, A=>B, B=>C, BC=>D", "D");
        assert_eq!(trace.outcome, Some(Outcome::Proved));

        let rule = trace.child("BC=>D").expect("rule for D");
        let premise_of_c = rule.child("B=>C").expect("rule for C");
        assert_eq!(
            shape(premise_of_c),
            vec![("B".to_owned(), Some(Outcome::AlreadyProved), 0)]
        );

        // B is derived exactly once.
        assert_eq!(trace.iter().filter(|n| n.label == "A=>B").count(), 1);
    }

    #[test]
    fn conclusions_are_cached() {
        let trace = trace_of("A, A=>B", "BB");
        assert_eq!(
            shape(&trace),
            vec![
                ("A=>B".to_owned(), Some(Outcome::Proved), 0),
                ("B".to_owned(), Some(Outcome::AlreadyProved), 0),
            ]
        );
    }

    #[test]
    fn failures_are_cached() {
        let trace = trace_of("A", "CC");
        assert_eq!(
            shape(&trace),
            vec![
                ("C".to_owned(), Some(Outcome::Failed), 0),
                ("C".to_owned(), Some(Outcome::AlreadyFailed), 0),
            ]
        );
    }

    #[test]
    fn cache_is_per_query() {
        let mut prover = Prover::default();
        prover.set_knowledge_base(KnowledgeBase::parse("A, A=>B, B=>C").expect("knowledge base"));

        let first = prover.ask("BC", true).expect("answer").trace.expect("trace");
        assert!(first.iter().any(|n| n.outcome == Some(Outcome::AlreadyProved)));

        let second = prover.ask("C", true).expect("answer").trace.expect("trace");
        assert!(!second.iter().any(|n| n.outcome.is_some_and(|o| o.is_cached())));
    }
}
