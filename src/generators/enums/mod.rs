pub mod generator_kind;
