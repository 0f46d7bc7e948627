pub mod structure;
pub mod vendor_loan;
