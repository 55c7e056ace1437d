/// Cast an integer expression to a usize using TryInto. The caller guarantees the value fits.
#[macro_export]
macro_rules! cast_usize {
    ($e:expr) => {{
        let Ok(u) = <_ as TryInto<usize>>::try_into($e) else {
            unreachable!("index does not fit in usize")
        };
        u
    }};
}
