pub mod translators;
