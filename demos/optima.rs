use pref_sat::{config::Config, context::Context, reports::Dominance};

/// A weekend must hold a beach or a museum, not both, with sun required for
/// the beach.
/// Wanting each costs one point when missed, so every plan pays exactly one.
/// All optimal plans are enumerated, and scored against a choice rule to see
/// which dominate which.
fn main() {
    let mut the_context: Context = Context::from_config(Config::default());

    the_context
        .read_attributes("beach\nmuseum\nsunny".as_bytes())
        .unwrap();
    the_context
        .read_constraints("beach OR museum\nNOT beach OR NOT museum\nNOT beach OR sunny".as_bytes())
        .unwrap();
    the_context
        .read_penalty_rules("beach, 1\nmuseum, 1".as_bytes())
        .unwrap();
    the_context
        .read_choice_rules("beach BT museum BT TRUE".as_bytes())
        .unwrap();

    let optima = the_context.penalty_optima().unwrap();
    println!("{} plans of penalty {}:", optima.models.len(), optima.penalty);

    for model in &optima.models {
        let rendered = the_context.attribute_db.valuation_string(model);
        let degrees = the_context.choice_db.degrees_on(model);
        println!("  {rendered}\t degrees {degrees:?}");
    }

    for first in &optima.models {
        for second in &optima.models {
            let comparison = Dominance::between(
                &the_context.choice_db.degrees_on(first),
                &the_context.choice_db.degrees_on(second),
            );

            if comparison == Dominance::First {
                println!(
                    "{} is preferred to {}",
                    the_context.attribute_db.valuation_string(first),
                    the_context.attribute_db.valuation_string(second),
                );
            }
        }
    }

    let undominated = the_context.choice_optima().unwrap();
    println!("{} undominated plans overall:", undominated.len());
    for plan in &undominated {
        println!("  {}", the_context.attribute_db.valuation_string(plan));
    }
}
