use std::io::Write;

pub mod cc {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const LIGHT_GRAY: &str = "\x1b[38;5;245m";
    pub const LIGHT_GREEN: &str = "\x1b[92m";
    pub const LIGHT_CYAN: &str = "\x1b[96m";
    pub const LIGHT_RED: &str = "\x1b[91m";
}

#[macro_export]
macro_rules! log {
    // -----------------------------------------------------------------
    // 1) colored, no extra args
    //    log!(cc::RED, "hello");
    // -----------------------------------------------------------------
    ($color:expr, $fmt:literal $(,)?) => {{
        let time = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                concat!("{}{} | {}", "{}", $fmt, "{}", "\n"),
                $crate::libs::writing::cc::LIGHT_GRAY,
                time,
                $crate::libs::writing::cc::RESET,
                $color,
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};

    // -----------------------------------------------------------------
    // 2) colored, with args
    //    log!(cc::GREEN, "block: {}", n);
    // -----------------------------------------------------------------
    ($color:expr, $fmt:literal, $($arg:expr),+ $(,)?) => {{
        let time = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                concat!("{}{} | {}", "{}", $fmt, "{}", "\n"),
                $crate::libs::writing::cc::LIGHT_GRAY,
                time,
                $crate::libs::writing::cc::RESET,
                $color,
                $($arg),+,
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};

    // -----------------------------------------------------------------
    // 3) default color, no args
    // -----------------------------------------------------------------
    ($fmt:literal $(,)?) => {
        $crate::log!($crate::libs::writing::cc::LIGHT_GRAY, $fmt)
    };

    // -----------------------------------------------------------------
    // 4) default color, with args
    // -----------------------------------------------------------------
    ($fmt:literal, $($arg:expr),+ $(,)?) => {
        $crate::log!($crate::libs::writing::cc::LIGHT_GRAY, $fmt, $($arg),+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                "{}WARNING: {}{}\n",
                $crate::libs::writing::cc::ORANGE,
                format_args!($($arg)*),
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                "{}{}{}\n",
                $crate::libs::writing::cc::LIGHT_RED,
                format_args!($($arg)*),
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};
}

/// Colored writer for results; stdout in the binary, a buffer in tests.
pub struct Colors<W: Write> {
    lock: W,
}

impl<W: Write> Colors<W> {
    pub fn new(lock: W) -> Self {
        Self { lock }
    }

    pub fn into_inner(self) -> W {
        self.lock
    }

    pub fn cprint(&mut self, text: &str, color: &str) {
        let _ = writeln!(self.lock, "{}{}{}", color, text, cc::RESET);
    }

    pub fn err_print(&mut self, text: &str) {
        let _ = writeln!(self.lock, "{}{}{}", cc::RED, text, cc::RESET);
    }
}
