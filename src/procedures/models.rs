//! Feasibility and model enumeration against the hard constraints alone.

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    solver::{Oracle, Verdict},
    structures::{
        clause::{CClause, CFormula},
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    types::err::ErrorKind,
};

/// A clause false on exactly the given total valuation, for excluding the valuation from further queries.
pub(crate) fn excluding_clause(valuation: &CValuation) -> CClause {
    valuation
        .atom_value_pairs()
        .filter_map(|(atom, value)| value.map(|value| CLiteral::new(atom, !value)))
        .collect()
}

impl<O: Oracle> GenericContext<O> {
    /// Whether some world satisfies the hard constraints.
    pub fn feasible(&mut self) -> Result<bool, ErrorKind> {
        let constraints: CFormula = self.constraint_db.clauses().to_vec();
        let bound = self.attribute_bound();

        match self.query_oracle(&constraints, bound)? {
            Verdict::Satisfiable(_) => Ok(true),
            Verdict::Unsatisfiable => Ok(false),
        }
    }

    /// A world satisfying the hard constraints, or a [HardConstraintsUnsatisfiable](ErrorKind::HardConstraintsUnsatisfiable) error when there is none.
    pub(crate) fn feasible_model(&mut self) -> Result<CValuation, ErrorKind> {
        let constraints: CFormula = self.constraint_db.clauses().to_vec();
        let bound = self.attribute_bound();

        match self.query_oracle(&constraints, bound)? {
            Verdict::Satisfiable(mut model) => {
                model.truncate(self.attribute_db.count() + 1);
                Ok(model)
            }

            Verdict::Unsatisfiable => Err(ErrorKind::HardConstraintsUnsatisfiable),
        }
    }

    /// Every world satisfying the hard constraints, by excluding each model found until none remain.
    pub fn feasible_models(&mut self) -> Result<Vec<CValuation>, ErrorKind> {
        let mut query: CFormula = self.constraint_db.clauses().to_vec();
        let bound = self.attribute_bound();

        let mut models = Vec::default();
        loop {
            match self.query_oracle(&query, bound)? {
                Verdict::Unsatisfiable => break,

                Verdict::Satisfiable(mut model) => {
                    model.truncate(self.attribute_db.count() + 1);
                    query.push(excluding_clause(&model));
                    models.push(model);
                }
            }
        }

        log::info!(target: targets::MODELS, "{} worlds satisfy the hard constraints", models.len());
        Ok(models)
    }

    /// The count of worlds satisfying the hard constraints.
    pub fn feasible_count(&mut self) -> Result<usize, ErrorKind> {
        Ok(self.feasible_models()?.len())
    }
}
