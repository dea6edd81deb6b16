//! Value decomposers: split recognized phone numbers and company names
//! into structured sub-fields.

mod company;
mod phone;

pub use company::{CompanyDecomposer, DecomposedCompany};
pub use phone::{DecomposedPhone, PhoneDecomposer};
