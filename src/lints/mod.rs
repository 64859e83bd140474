pub(crate) mod any_is_na;
pub(crate) mod equals_na;
pub(crate) mod true_false_symbol;
pub(crate) mod undesirable_function;

pub use any_is_na::any_is_na::AnyIsNa;
pub use equals_na::equals_na::EqualsNa;
pub use true_false_symbol::true_false_symbol::TrueFalseSymbol;
pub use undesirable_function::undesirable_function::UndesirableFunction;

use crate::rule::Rule;

/// All built-in rules, in reporting order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(AnyIsNa),
        Box::new(EqualsNa),
        Box::new(TrueFalseSymbol),
        Box::new(UndesirableFunction),
    ]
}
