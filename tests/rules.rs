use std::collections::BTreeSet;

use weft_sat::{config::Config, context::Context};

/// Solves repeatedly, collecting the distinct named-attribute projections.
fn observed_models(ctx: &mut Context, solves: usize) -> BTreeSet<Vec<String>> {
    let mut observed = BTreeSet::new();
    for _ in 0..solves {
        let solution = ctx.solve().expect("solve failed within the failsafe");
        observed.insert(solution.true_attributes());
    }
    observed
}

fn model_set(models: &[&[&str]]) -> BTreeSet<Vec<String>> {
    models
        .iter()
        .map(|model| model.iter().map(|name| (*name).to_string()).collect())
        .collect()
}

mod rules {
    use super::*;

    /// Completion excludes the unjustified model {p, q} which the bare
    /// implications would admit.
    #[test]
    fn negation_loop_as_rules() {
        let mut ctx = Context::with_seed(Config::default(), 61);

        ctx.attribute("p", &[]).expect("declaration failed");
        ctx.attribute("q", &[]).expect("declaration failed");
        ctx.rule("q", &["!p"]).expect("constraint rejected");
        ctx.rule("p", &["!q"]).expect("constraint rejected");

        let expected = model_set(&[&["p"], &["q"]]);
        assert_eq!(observed_models(&mut ctx, 200), expected);
    }

    /// The same loop as bare implications keeps the classical model {p, q}.
    #[test]
    fn negation_loop_as_implications() {
        let mut ctx = Context::with_seed(Config::default(), 62);

        ctx.attribute("p", &[]).expect("declaration failed");
        ctx.attribute("q", &[]).expect("declaration failed");
        ctx.implies(&["!p"], "q").expect("constraint rejected");
        ctx.implies(&["!q"], "p").expect("constraint rejected");

        let expected = model_set(&[&["p"], &["q"], &["p", "q"]]);
        assert_eq!(observed_models(&mut ctx, 300), expected);
    }

    #[test]
    fn two_rules_one_head() {
        let mut ctx = Context::with_seed(Config::default(), 63);

        for name in ["a", "b", "c", "d"] {
            ctx.attribute(name, &[]).expect("declaration failed");
        }
        ctx.rule("a", &["b", "c"]).expect("constraint rejected");
        ctx.rule("a", &["d"]).expect("constraint rejected");

        let expected = model_set(&[
            &[],
            &["b"],
            &["c"],
            &["a", "d"],
            &["a", "b", "c"],
            &["a", "b", "d"],
            &["a", "c", "d"],
            &["a", "b", "c", "d"],
        ]);
        assert_eq!(observed_models(&mut ctx, 600), expected);
    }

    /// Invariant: a true head always has a true justification.
    #[test]
    fn heads_are_justified() {
        let mut ctx = Context::with_seed(Config::default(), 64);

        for name in ["a", "b", "c", "d"] {
            ctx.attribute(name, &[]).expect("declaration failed");
        }
        ctx.rule("a", &["b", "c"]).expect("constraint rejected");
        ctx.rule("a", &["d"]).expect("constraint rejected");

        for _ in 0..100 {
            let solution = ctx.solve().expect("solve failed");
            if solution.value_of("a") == Ok(true) {
                let conjunctive = solution.value_of("b") == Ok(true)
                    && solution.value_of("c") == Ok(true);
                let single = solution.value_of("d") == Ok(true);
                assert!(conjunctive || single);
            }
        }
    }

    #[test]
    fn chained_rules_pin_a_unique_model() {
        let mut ctx = Context::with_seed(Config::default(), 65);

        for name in ["a", "b", "c", "d", "e", "f", "g"] {
            ctx.attribute(name, &[]).expect("declaration failed");
        }
        ctx.rule("a", &[]).expect("constraint rejected");
        ctx.rule("b", &["c"]).expect("constraint rejected");
        ctx.rule("c", &["a"]).expect("constraint rejected");
        ctx.assert("!d").expect("constraint rejected");
        ctx.equal(&[], &["f"]).expect("constraint rejected");
        ctx.equal(&["!g", "e"], &[]).expect("constraint rejected");

        let expected = model_set(&[&["a", "b", "c", "e", "f"]]);
        assert_eq!(observed_models(&mut ctx, 30), expected);
    }

    #[test]
    fn equivalence_of_conjunctions() {
        let mut ctx = Context::with_seed(Config::default(), 66);

        for name in ["a", "b", "c", "d"] {
            ctx.attribute(name, &[]).expect("declaration failed");
        }
        ctx.equal(&["a", "b"], &["c", "d"]).expect("constraint rejected");

        for _ in 0..100 {
            let solution = ctx.solve().expect("solve failed");
            let left = solution.value_of("a") == Ok(true) && solution.value_of("b") == Ok(true);
            let right = solution.value_of("c") == Ok(true) && solution.value_of("d") == Ok(true);
            assert_eq!(left, right);
        }
    }

    #[test]
    fn singleton_equivalence() {
        let mut ctx = Context::with_seed(Config::default(), 67);

        ctx.attribute("p", &[]).expect("declaration failed");
        ctx.attribute("q", &[]).expect("declaration failed");
        ctx.equal(&["p"], &["!q"]).expect("constraint rejected");

        let expected = model_set(&[&["p"], &["q"]]);
        assert_eq!(observed_models(&mut ctx, 200), expected);
    }
}
