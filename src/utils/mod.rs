pub(crate) mod measure_metrics;
pub(crate) mod metrics;
pub(crate) mod root_span;

pub(crate) static APP_NAME: &str = "todo_service";
pub(crate) static PORT_KEY: &str = "PORT";
pub(crate) static DATABASE_PATH_KEY: &str = "DATABASE_PATH";

pub(crate) use root_span::RootSpan;

#[macro_export]
macro_rules! trace_err {
    ($expr:expr, $($arg:tt)*) => {
        $expr.map_err(|e| {
            ::tracing::error!(%e, $($arg)*);
            e
        })
    };
}
