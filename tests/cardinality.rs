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

mod cardinality {
    use super::*;

    #[test]
    fn exactly_two_of_three() {
        let mut ctx = Context::with_seed(Config::default(), 41);

        for name in ["a", "b", "c"] {
            ctx.attribute(name, &[]).expect("declaration failed");
        }
        ctx.exactly(2.0, &["a", "b", "c"]).expect("constraint rejected");

        let expected = model_set(&[&["a", "b"], &["a", "c"], &["b", "c"]]);
        assert_eq!(observed_models(&mut ctx, 300), expected);
    }

    #[test]
    fn band_of_one_to_two() {
        let mut ctx = Context::with_seed(Config::default(), 42);

        for name in ["a", "b", "c"] {
            ctx.attribute(name, &[]).expect("declaration failed");
        }
        ctx.quantify(1.0, 2.0, &["a", "b", "c"])
            .expect("constraint rejected");

        let expected = model_set(&[
            &["a"],
            &["b"],
            &["c"],
            &["a", "b"],
            &["a", "c"],
            &["b", "c"],
        ]);
        assert_eq!(observed_models(&mut ctx, 400), expected);
    }

    #[test]
    fn bounds_compose() {
        let mut ctx = Context::with_seed(Config::default(), 43);

        for name in ["a", "b", "c"] {
            ctx.attribute(name, &[]).expect("declaration failed");
        }
        ctx.at_least(2.0, &["a", "b", "c"]).expect("constraint rejected");
        ctx.at_most(2.0, &["a", "b", "c"]).expect("constraint rejected");

        let expected = model_set(&[&["a", "b"], &["a", "c"], &["b", "c"]]);
        assert_eq!(observed_models(&mut ctx, 300), expected);
    }

    #[test]
    fn mutual_exclusion() {
        let mut ctx = Context::with_seed(Config::default(), 44);

        for name in ["a", "b", "c"] {
            ctx.attribute(name, &[]).expect("declaration failed");
        }
        ctx.inconsistent("a", "!b").expect("constraint rejected");
        ctx.inconsistent("b", "c").expect("constraint rejected");

        let expected = model_set(&[&[], &["b"], &["c"], &["a", "b"]]);
        assert_eq!(observed_models(&mut ctx, 400), expected);
    }

    #[test]
    fn unique_singleton_asserts() {
        let mut ctx = Context::with_seed(Config::default(), 45);

        ctx.attribute("beacon", &[]).expect("declaration failed");
        ctx.unique(&["beacon"]).expect("constraint rejected");

        let solution = ctx.solve().expect("solve failed");
        assert_eq!(solution.value_of("beacon"), Ok(true));
    }

    #[test]
    fn unique_over_a_domain() {
        let mut ctx = Context::with_seed(Config::default(), 46);

        ctx.attribute("season", &[&["spring", "summer", "autumn", "winter"]])
            .expect("declaration failed");
        ctx.unique(&[
            "season spring",
            "season summer",
            "season autumn",
            "season winter",
        ])
        .expect("constraint rejected");

        let expected = model_set(&[
            &["season spring"],
            &["season summer"],
            &["season autumn"],
            &["season winter"],
        ]);
        assert_eq!(observed_models(&mut ctx, 400), expected);
    }
}
