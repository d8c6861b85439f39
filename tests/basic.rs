use pref_sat::{config::Config, context::Context, reports::ChainStatus, types::err::ErrorKind};

mod basic {

    use pref_sat::structures::clause::Formula;

    use super::*;

    #[test]
    fn no_rules_cost_nothing() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a\nb".as_bytes()).unwrap();

        let hard = ctx.formula_from_str("a OR b").unwrap();
        ctx.add_constraints(hard);

        let best = ctx.minimum_penalty().unwrap();
        assert_eq!(best.penalty, 0);

        let hard = ctx.formula_from_str("a OR b").unwrap();
        assert!(hard.satisfied_on(&best.model));
    }

    #[test]
    fn rules_held_by_force_cost_nothing() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a\nb".as_bytes()).unwrap();

        let hard = ctx.formula_from_str("a AND NOT b").unwrap();
        ctx.add_constraints(hard);

        ctx.read_penalty_rules("a, 3".as_bytes()).unwrap();

        let best = ctx.minimum_penalty().unwrap();
        assert_eq!(best.penalty, 0);
    }

    #[test]
    fn contradictory_constraints_are_fatal() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a".as_bytes()).unwrap();

        let hard = ctx.formula_from_str("a AND NOT a").unwrap();
        ctx.add_constraints(hard);

        ctx.read_penalty_rules("a, 1".as_bytes()).unwrap();
        ctx.read_choice_rules("a BT TRUE".as_bytes()).unwrap();

        assert!(matches!(
            ctx.minimum_penalty(),
            Err(ErrorKind::HardConstraintsUnsatisfiable)
        ));
        assert!(matches!(
            ctx.rank_chains(),
            Err(ErrorKind::HardConstraintsUnsatisfiable)
        ));
    }

    #[test]
    fn chains_retreat_only_as_far_as_needed() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a\nb".as_bytes()).unwrap();

        let hard = ctx.formula_from_str("NOT b").unwrap();
        ctx.add_constraints(hard);

        ctx.read_choice_rules("a AND b BT a BT TRUE".as_bytes()).unwrap();

        let ranked = ctx.rank_chains().unwrap();
        assert_eq!(ranked.len(), 1);

        match &ranked[0].status {
            ChainStatus::Achieved { rank, model } => {
                assert_eq!(*rank, 1);

                let achieved = ctx.formula_from_str("a").unwrap();
                assert!(achieved.satisfied_on(model));

                let hard = ctx.formula_from_str("NOT b").unwrap();
                assert!(hard.satisfied_on(model));
            }

            ChainStatus::Unsatisfiable => panic!("The chain is satisfiable at rank one"),
        }
    }

    #[test]
    fn unavoidable_violations_sum() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a\nb".as_bytes()).unwrap();

        let hard = ctx.formula_from_str("a AND b").unwrap();
        ctx.add_constraints(hard);

        ctx.read_penalty_rules("NOT a, 2\nNOT b, 3".as_bytes()).unwrap();

        let best = ctx.minimum_penalty().unwrap();
        assert_eq!(best.penalty, 5);
    }

    #[test]
    fn optima_satisfy_the_constraints() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a\nb".as_bytes()).unwrap();

        let hard = ctx.formula_from_str("a OR b").unwrap();
        ctx.add_constraints(hard);

        ctx.read_penalty_rules("NOT a, 2".as_bytes()).unwrap();

        let best = ctx.minimum_penalty().unwrap();
        assert_eq!(best.penalty, 0);

        let hard = ctx.formula_from_str("a OR b").unwrap();
        assert!(hard.satisfied_on(&best.model));
        assert_eq!(ctx.penalty_db.penalty_of(&best.model), best.penalty);
    }

    #[test]
    fn reruns_agree() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a\nb\nc".as_bytes()).unwrap();

        let hard = ctx.formula_from_str("a OR b OR c").unwrap();
        ctx.add_constraints(hard);

        ctx.read_penalty_rules("NOT a, 1\nNOT b, 2".as_bytes()).unwrap();
        ctx.read_choice_rules("a AND b AND c BT a BT TRUE".as_bytes()).unwrap();

        let first = ctx.minimum_penalty().unwrap();
        let second = ctx.minimum_penalty().unwrap();
        assert_eq!(first.penalty, second.penalty);

        let first_ranks = ctx.rank_chains().unwrap();
        let second_ranks = ctx.rank_chains().unwrap();
        assert_eq!(first_ranks, second_ranks);
    }
}
