use pref_sat::{config::Config, context::Context};

/// A three course dinner is planned around a pair of hard constraints:
/// fish calls for white wine, and meat calls for red.
/// Three penalty rules then pull in different directions, and the cheapest
/// menu is printed with a rule by rule account of its cost.
/// Two choice rules close the evening, each ranked against the constraints.
fn main() {
    let config = Config::default();
    let mut the_context: Context = Context::from_config(config);

    let attributes = "\
main: fish, meat
wine: white, red
dessert: cake, ice_cream";

    let constraints = "\
NOT fish OR white
NOT meat OR red";

    let rules = "\
cake, 2
red, 3
fish, 1";

    the_context.read_attributes(attributes.as_bytes()).unwrap();
    the_context.read_constraints(constraints.as_bytes()).unwrap();
    the_context.read_penalty_rules(rules.as_bytes()).unwrap();

    let best = the_context.minimum_penalty().unwrap();

    println!("A menu of penalty {}:", best.penalty);
    println!("  {}", the_context.attribute_db.valuation_string(&best.model));

    println!("Rule by rule:");
    for (name, incurred) in the_context.penalty_db.breakdown(&best.model) {
        println!("  {incurred}\t{name}");
    }

    let chains = "\
cake AND white BT cake BT TRUE
fish BT meat BT TRUE IF red";

    the_context.read_choice_rules(chains.as_bytes()).unwrap();

    println!("Goal by goal:");
    for report in the_context.rank_chains().unwrap() {
        println!("  {report}");
    }
}
