macro_rules! bitpos {
    ($idx:expr, $word:ty) => {{
        let idx: usize = $idx;
        let bits = <$word as $crate::word::Word>::BITS as usize;
        (idx / bits, (idx % bits) as u32)
    }};
}

/// Asserts a caller contract. Active in debug builds and whenever the
/// `checked` feature is enabled; compiled out otherwise.
macro_rules! precondition {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "checked")) {
            assert!($cond, $($arg)+);
        }
    };
}

pub(crate) use bitpos;
pub(crate) use precondition;
