pub mod error;
pub mod etl;
pub mod schema;
pub mod vars;

mod run;

#[cfg(test)]
pub(crate) mod testing;
