pub mod purchase;
pub mod withdraw;
