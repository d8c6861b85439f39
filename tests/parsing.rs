use pref_sat::{
    config::Config,
    context::Context,
    types::err::{ErrorKind, ParseError, RegistryError},
};

mod parsing {

    use super::*;

    #[test]
    fn attribute_lines_allow_labels_comments_and_repeats() {
        let mut ctx = Context::from_config(Config::default());

        let lines = "\
soup
dessert: cake, ice_cream
# a comment

soup";
        assert_eq!(ctx.read_attributes(lines.as_bytes()), Ok(3));
        assert_eq!(ctx.attribute_db.count(), 2);

        let cake = ctx.literal_from_str("cake").unwrap();
        let dessert = ctx.literal_from_str("dessert").unwrap();
        assert_eq!(cake, dessert);

        let ice_cream = ctx.literal_from_str("ice_cream").unwrap();
        assert_eq!(ice_cream, -dessert);
    }

    #[test]
    fn attribute_lines_need_both_labels() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.read_attributes("dessert: cake".as_bytes()),
            Err(ErrorKind::Parse(ParseError::Attribute(1)))
        );
    }

    #[test]
    fn label_clashes_are_rejected() {
        let mut ctx = Context::from_config(Config::default());

        let lines = "dessert: cake, ice_cream\npudding: cake, none";
        assert_eq!(
            ctx.read_attributes(lines.as_bytes()),
            Err(ErrorKind::Registry(RegistryError::LabelTaken(
                "cake".to_string()
            )))
        );
    }

    #[test]
    fn constraint_lines_merge_conjunctively() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a\nb".as_bytes()).unwrap();

        assert_eq!(ctx.read_constraints("a OR b\na OR NOT a".as_bytes()), Ok(1));
        assert_eq!(ctx.read_constraints("NOT b".as_bytes()), Ok(1));
        assert_eq!(ctx.constraint_db.count(), 2);
    }

    #[test]
    fn penalty_lines_carry_a_weight() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a".as_bytes()).unwrap();

        assert_eq!(
            ctx.read_penalty_rules("NOT a".as_bytes()),
            Err(ErrorKind::Parse(ParseError::Penalty(1)))
        );
        assert_eq!(
            ctx.read_penalty_rules("NOT a, many".as_bytes()),
            Err(ErrorKind::Parse(ParseError::Weight(1)))
        );

        assert_eq!(ctx.read_penalty_rules("NOT a, 3".as_bytes()), Ok(1));

        let rule = &ctx.penalty_db.rules()[0];
        assert_eq!(rule.name(), "NOT a");
        assert_eq!(rule.weight(), 3);
    }

    #[test]
    fn choice_lines_name_their_goal() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a\nb\nc".as_bytes()).unwrap();

        assert_eq!(ctx.read_choice_rules("a BT b IF c".as_bytes()), Ok(1));

        let rule = &ctx.choice_db.rules()[0];
        assert_eq!(rule.goal(), "a BT b IF c");
        assert_eq!(rule.alternatives().len(), 2);
        assert!(rule.condition().is_some());
    }

    #[test]
    fn formulas_fail_fast_on_unknown_names() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_attributes("a".as_bytes()).unwrap();

        assert!(matches!(
            ctx.formula_from_str("a OR mystery"),
            Err(ErrorKind::Registry(RegistryError::UnknownAttribute(_)))
        ));
        assert!(matches!(
            ctx.read_constraints("mystery".as_bytes()),
            Err(ErrorKind::Registry(RegistryError::UnknownAttribute(_)))
        ));

        assert_eq!(ctx.constraint_db.count(), 0);
    }

    #[test]
    fn the_top_formula_is_empty() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.formula_from_str("TRUE"), Ok(vec![]));
        assert!(ctx.formula_from_str("").is_err());
    }
}
