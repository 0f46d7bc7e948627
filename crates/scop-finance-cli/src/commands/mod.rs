pub mod financing;
pub mod tax;
