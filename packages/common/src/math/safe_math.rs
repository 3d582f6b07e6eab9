use soroban_sdk::{log, Env};

use crate::error::{ErrorCode, NormalResult};

use super::bn::U256;

pub trait SafeMath: Sized {
    fn safe_sub(self, rhs: Self, env: &Env) -> NormalResult<Self>;
    fn safe_mul(self, rhs: Self, env: &Env) -> NormalResult<Self>;
    fn safe_div(self, rhs: Self, env: &Env) -> NormalResult<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t, env: &Env) -> NormalResult<$t> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line {}", line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_mul(self, v: $t, env: &Env) -> NormalResult<$t> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line {}", line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div(self, v: $t, env: &Env) -> NormalResult<$t> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line {}", line!());
                        Err(ErrorCode::MathError)
                    }
                }
            }
        }
    };
}

checked_impl!(i128);
checked_impl!(U256);
