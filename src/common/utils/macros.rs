// Progress report for the build pipeline, printed to stderr with the `verbose` feature
macro_rules! report {
    ($($arg:tt)*) => {
        if cfg!(feature = "verbose") {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use report;
