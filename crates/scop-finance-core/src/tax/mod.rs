pub mod corporate;
