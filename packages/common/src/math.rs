pub mod auction;
pub mod bn;
pub mod casting;
pub mod safe_math;
