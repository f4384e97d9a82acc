pub mod roast;
pub mod rules;
