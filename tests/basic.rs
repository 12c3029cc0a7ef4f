use horn_prover::{
    knowledge_base::KnowledgeBase,
    prover::Prover,
    types::err::{self, ErrorKind},
};

fn prover_for(kb: &str) -> Prover {
    let mut prover = Prover::default();
    prover.set_knowledge_base(KnowledgeBase::parse(kb).expect("knowledge base"));
    prover
}

fn ask(prover: &Prover, query: &str) -> bool {
    prover.ask(query, false).expect("answer").result
}

mod basic {
    use super::*;

    #[test]
    fn facts() {
        let prover = prover_for("A, B, Q, Z");
        for fact in ["A", "B", "Q", "Z"] {
            assert!(ask(&prover, fact), "{fact}");
        }
    }

    #[test]
    fn underivable() {
        let prover = prover_for("A, B=>C, C=>D");
        for atom in ["B", "C", "D", "E"] {
            assert!(!ask(&prover, atom), "{atom}");
        }
    }

    #[test]
    fn implication() {
        let prover = prover_for("A, A=>B");
        assert!(ask(&prover, "B"));

        let prover = prover_for("A=>B");
        assert!(!ask(&prover, "B"));
    }

    #[test]
    fn chains() {
        let prover = prover_for("A, A=>B, B=>C, C=>D");
        assert!(ask(&prover, "D"));

        let prover = prover_for("A, B, AB=>C, CB=>D, DE=>F");
        assert!(ask(&prover, "D"));
        assert!(!ask(&prover, "F"));
    }

    #[test]
    fn conjunction() {
        let prover = prover_for("A, B");
        assert_eq!(ask(&prover, "AB"), ask(&prover, "A") && ask(&prover, "B"));
        assert!(ask(&prover, "AB"));
        assert!(ask(&prover, "BA"));
        assert!(!ask(&prover, "AC"));
        assert!(!ask(&prover, "CA"));
        assert!(ask(&prover, "ABAB"));
    }

    #[test]
    fn implication_queries() {
        let prover = prover_for("A, A=>B");
        assert!(ask(&prover, "A=>B"));
        assert!(ask(&prover, "C=>A"));
        assert!(ask(&prover, "C=>D"));
        assert!(!ask(&prover, "A=>C"));
        assert!(ask(&prover, "AB=>B"));
    }

    #[test]
    fn substring_matches() {
        let prover = prover_for("C, C=>DA");
        assert!(ask(&prover, "A"));
        assert!(ask(&prover, "D"));
        assert!(!ask(&prover, "C=>E"));
    }

    #[test]
    fn single_atom_premise_commits() {
        let prover = prover_for("C, B=>A, C=>A");
        assert!(!ask(&prover, "A"));

        let prover = prover_for("C, C=>A, B=>A");
        assert!(ask(&prover, "A"));
    }

    #[test]
    fn compound_premise_backtracks() {
        let prover = prover_for("C, BC=>A, C=>A");
        assert!(ask(&prover, "A"));

        let prover = prover_for("C, BC=>A, DC=>A");
        assert!(!ask(&prover, "A"));
    }

    #[test]
    fn conjunctive_conclusions() {
        let prover = prover_for("A, A=>BC, BC=>D");
        assert!(ask(&prover, "B"));
        assert!(ask(&prover, "C"));
        assert!(ask(&prover, "D"));
    }
}

mod state {
    use super::*;

    #[test]
    fn idempotent() {
        let prover = prover_for("A, A=>B, B=>C, BC=>D, E=>F");
        for query in ["A", "B", "C", "D", "F", "DF", "E=>F"] {
            let first = prover.ask(query, true).expect("answer");
            let second = prover.ask(query, true).expect("answer");
            assert_eq!(first, second, "{query}");
        }
    }

    #[test]
    fn no_knowledge_base() {
        let prover = Prover::default();
        assert_eq!(
            prover.ask("A", false),
            Err(ErrorKind::State(err::StateError::NoKnowledgeBase))
        );
    }

    #[test]
    fn replacing_knowledge_base() {
        let mut prover = prover_for("A");
        assert!(ask(&prover, "A"));

        prover.set_knowledge_base(KnowledgeBase::parse("B").expect("knowledge base"));
        assert!(!ask(&prover, "A"));
        assert!(ask(&prover, "B"));
    }

    #[test]
    fn failed_parse_keeps_knowledge_base() {
        let mut prover = prover_for("A");

        match KnowledgeBase::parse("A, BC") {
            Ok(kb) => prover.set_knowledge_base(kb),
            Err(e) => assert_eq!(e, err::ParseError::TopLevelConjunction("BC".to_owned())),
        }

        assert!(ask(&prover, "A"));
        assert_eq!(prover.knowledge_base().map(|kb| kb.to_string()), Some("A".to_owned()));
    }

    #[test]
    fn failed_query_changes_nothing() {
        let prover = prover_for("A, A=>B");
        assert!(prover.ask("A=>B=>C", false).is_err());
        assert!(prover.ask("b", false).is_err());
        assert!(ask(&prover, "B"));
    }
}

mod parsing {
    use super::*;

    #[test]
    fn empty_knowledge_base() {
        assert_eq!(
            KnowledgeBase::parse(""),
            Err(err::ParseError::EmptyKnowledgeBase)
        );
    }

    #[test]
    fn double_implication_query() {
        let prover = prover_for("A");
        assert!(matches!(
            prover.ask("A=>B=>C", false),
            Err(ErrorKind::Parse(err::ParseError::ImplicationSplit(_)))
        ));
    }

    #[test]
    fn bare_conjunction_entry() {
        assert!(matches!(
            KnowledgeBase::parse("A, AB"),
            Err(err::ParseError::TopLevelConjunction(_))
        ));
    }

    #[test]
    fn invalid_symbols() {
        assert!(matches!(
            KnowledgeBase::parse("A, a=>B"),
            Err(err::ParseError::InvalidSymbol(_))
        ));

        let prover = prover_for("A");
        assert!(matches!(
            prover.ask("A1", false),
            Err(ErrorKind::Parse(err::ParseError::InvalidSymbol(_)))
        ));
    }
}
