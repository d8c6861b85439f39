use pref_sat::{
    config::Config,
    context::Context,
    reports::{ChainStatus, Degree, Dominance},
    types::err::ChoiceError,
};

mod choice {

    use super::*;

    #[test]
    fn goals_fail_independently() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a\nb".as_bytes()).unwrap();

        let hard = ctx.formula_from_str("NOT a").unwrap();
        ctx.add_constraints(hard);

        ctx.read_choice_rules("a\nb BT TRUE".as_bytes()).unwrap();

        let ranked = ctx.rank_chains().unwrap();
        assert_eq!(ranked.len(), 2);

        assert_eq!(ranked[0].goal, "a");
        assert!(matches!(ranked[0].status, ChainStatus::Unsatisfiable));

        assert_eq!(ranked[1].goal, "b BT TRUE");
        assert!(matches!(
            ranked[1].status,
            ChainStatus::Achieved { rank: 0, .. }
        ));
    }

    #[test]
    fn conditions_bind_every_alternative() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a\nc".as_bytes()).unwrap();

        let hard = ctx.formula_from_str("NOT c").unwrap();
        ctx.add_constraints(hard);

        ctx.read_choice_rules("a BT TRUE IF c".as_bytes()).unwrap();

        let ranked = ctx.rank_chains().unwrap();
        assert!(matches!(ranked[0].status, ChainStatus::Unsatisfiable));
    }

    #[test]
    fn degrees_order_worlds() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a\nb".as_bytes()).unwrap();

        ctx.read_choice_rules("a BT b BT TRUE\nb BT TRUE".as_bytes())
            .unwrap();

        let a_world: Vec<Option<bool>> = vec![None, Some(true), Some(false)];
        let b_world: Vec<Option<bool>> = vec![None, Some(false), Some(true)];
        let both_world: Vec<Option<bool>> = vec![None, Some(true), Some(true)];

        let a_degrees = ctx.choice_db.degrees_on(&a_world);
        let b_degrees = ctx.choice_db.degrees_on(&b_world);
        let both_degrees = ctx.choice_db.degrees_on(&both_world);

        assert_eq!(a_degrees, vec![Degree::Finite(0), Degree::Finite(1)]);
        assert_eq!(b_degrees, vec![Degree::Finite(1), Degree::Finite(0)]);

        assert_eq!(Dominance::between(&a_degrees, &b_degrees), Dominance::Incomparable);
        assert_eq!(Dominance::between(&both_degrees, &a_degrees), Dominance::First);
        assert_eq!(Dominance::between(&a_degrees, &both_degrees), Dominance::Second);
        assert_eq!(Dominance::between(&a_degrees, &a_degrees), Dominance::Equal);
    }

    #[test]
    fn unmet_conditions_satisfy_no_degree() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a\nc".as_bytes()).unwrap();

        ctx.read_choice_rules("a BT TRUE IF c".as_bytes()).unwrap();

        let escaped: Vec<Option<bool>> = vec![None, Some(false), Some(false)];
        let held: Vec<Option<bool>> = vec![None, Some(false), Some(true)];

        assert_eq!(ctx.choice_db.degrees_on(&escaped), vec![Degree::Infinite]);
        assert_eq!(ctx.choice_db.degrees_on(&held), vec![Degree::Finite(1)]);
    }

    #[test]
    fn dominated_worlds_are_dropped() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a\nb".as_bytes()).unwrap();

        ctx.read_choice_rules("a BT TRUE\nb BT TRUE".as_bytes())
            .unwrap();

        let optima = ctx.choice_optima().unwrap();
        assert_eq!(optima.len(), 1);
        assert_eq!(
            ctx.choice_db.degrees_on(&optima[0]),
            vec![Degree::Finite(0), Degree::Finite(0)]
        );
    }

    #[test]
    fn incomparable_optima_all_survive() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a\nb".as_bytes()).unwrap();

        let hard = ctx.formula_from_str("NOT a OR NOT b").unwrap();
        ctx.add_constraints(hard);

        ctx.read_choice_rules("a BT TRUE\nb BT TRUE".as_bytes())
            .unwrap();

        let optima = ctx.choice_optima().unwrap();
        assert_eq!(optima.len(), 2);

        for world in &optima {
            let degrees = ctx.choice_db.degrees_on(world);
            assert!(degrees.contains(&Degree::Finite(0)));
        }
    }

    #[test]
    fn without_rules_every_world_is_optimal() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a".as_bytes()).unwrap();

        let optima = ctx.choice_optima().unwrap();
        assert_eq!(optima.len(), 2);
    }

    #[test]
    fn empty_chains_are_rejected() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a".as_bytes()).unwrap();

        assert_eq!(
            ctx.choice_db.add_rule("nothing", vec![], None),
            Err(ChoiceError::EmptyChain)
        );
        assert_eq!(ctx.choice_db.count(), 0);
    }
}
