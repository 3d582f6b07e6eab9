/// Returns `Ok(())` when `$assert` holds, otherwise logs and returns `Err($err)`.
///
/// Expects an `ErrorCode` type, `Env` and `soroban_sdk::log` to be in scope at the call site.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: ErrorCode = $err;
                log!($env, "Error {} thrown at {}:{}", error_code, file!(), line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: ErrorCode = $err;
                log!($env, "Error {} thrown at {}:{}", error_code, file!(), line!());
                log!($env, $($arg)*);
                Err(error_code)
            }
        }
    };
}
