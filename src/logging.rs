#[cfg(not(debug_assertions))]
pub fn init_logging() {
    use syslog::{BasicLogger, Facility, Formatter3164};

    let formatter = Formatter3164 {
        facility: Facility::LOG_DAEMON,
        hostname: None,
        process: "notehive".into(),
        pid: 0,
    };
    log::set_boxed_logger(
        Box::new(
            BasicLogger::new(
                syslog::unix(formatter)
                    .expect("syslog initialization failed")
            )
        )
    )
        .map(|()| log::set_max_level(log::STATIC_MAX_LEVEL))
        .expect("syslog initialization failed");
}

#[cfg(debug_assertions)]
pub fn init_logging() {
    env_logger::init()
}
