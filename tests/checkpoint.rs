use weft_sat::{config::Config, context::Context};

mod checkpoint {
    use super::*;

    /// Completion clauses are appended once per solve and torn out before any
    /// later constraint, so the clause list never duplicates them.
    #[test]
    fn completion_is_idempotent() {
        let mut ctx = Context::with_seed(Config::default(), 81);

        for name in ["a", "b", "c"] {
            ctx.attribute(name, &[]).expect("declaration failed");
        }
        ctx.rule("a", &["b"]).expect("constraint rejected");
        ctx.rule("a", &["c"]).expect("constraint rejected");
        ctx.assert("b").expect("constraint rejected");

        let user_clauses = ctx.clause_db.clause_count();
        assert!(!ctx.clause_db.completion_active());

        ctx.solve().expect("solve failed");
        // One completion clause: the single head `a`.
        assert!(ctx.clause_db.completion_active());
        assert_eq!(ctx.clause_db.clause_count(), user_clauses + 1);

        ctx.solve().expect("solve failed");
        assert_eq!(ctx.clause_db.clause_count(), user_clauses + 1);
    }

    #[test]
    fn later_constraints_truncate_completion() {
        let mut ctx = Context::with_seed(Config::default(), 82);

        for name in ["a", "b", "c"] {
            ctx.attribute(name, &[]).expect("declaration failed");
        }
        ctx.rule("a", &["b"]).expect("constraint rejected");

        let user_clauses = ctx.clause_db.clause_count();

        ctx.solve().expect("solve failed");
        assert_eq!(ctx.clause_db.clause_count(), user_clauses + 1);

        ctx.assert("c").expect("constraint rejected");
        assert!(!ctx.clause_db.completion_active());
        assert_eq!(ctx.clause_db.clause_count(), user_clauses + 1);

        ctx.solve().expect("solve failed");
        assert_eq!(ctx.clause_db.clause_count(), user_clauses + 2);
    }

    /// Rules recorded after a solve complete alongside the earlier ones.
    #[test]
    fn rules_survive_interleaved_solves() {
        let mut ctx = Context::with_seed(Config::default(), 83);

        for name in ["a", "b", "c"] {
            ctx.attribute(name, &[]).expect("declaration failed");
        }
        ctx.rule("a", &["b"]).expect("constraint rejected");
        ctx.solve().expect("solve failed");

        ctx.rule("c", &["a"]).expect("constraint rejected");
        let user_clauses = ctx.clause_db.clause_count();
        ctx.solve().expect("solve failed");

        // Two heads, two completion clauses.
        assert_eq!(ctx.clause_db.clause_count(), user_clauses + 2);
    }

    #[test]
    fn earlier_solutions_outlive_mutation() {
        let mut ctx = Context::with_seed(Config::default(), 84);

        ctx.attribute("a", &[]).expect("declaration failed");
        ctx.assert("a").expect("constraint rejected");
        let first = ctx.solve().expect("solve failed");

        ctx.attribute("b", &[]).expect("declaration failed");
        ctx.assert("!b").expect("constraint rejected");
        let second = ctx.solve().expect("solve failed");

        assert_eq!(first.value_of("a"), Ok(true));
        assert!(first.value_of("b").is_err());
        assert_eq!(second.value_of("a"), Ok(true));
        assert_eq!(second.value_of("b"), Ok(false));
    }
}
