use auction_common::error::ErrorCode as SharedErrors;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    #[doc = "Duration, price, rate or scale outside of the accepted range"]
    InvalidParameter = 3,
    #[doc = "Buy attempted at or after start + duration"]
    AuctionExpired = 4,
    #[doc = "The single allowed purchase already happened"]
    AlreadySold = 5,
    #[doc = "Payment below the quoted cost"]
    InsufficientPayment = 6,
    #[doc = "Withdraw attempted before expiry"]
    NotExpired = 7,
    #[doc = "Withdraw attempted by someone other than the seller"]
    Unauthorized = 8,
    MathError = 9,
}

impl From<SharedErrors> for ErrorCode {
    fn from(_: SharedErrors) -> Self {
        ErrorCode::MathError
    }
}
