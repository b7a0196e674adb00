//! Help and version display.

/// Print the usage screen.
pub fn display_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("┏ festr v{version} ━━╸");
    println!("┃");
    println!("┣ Terminal countdown timer for the university tech fest");
    println!("┃");
    println!("┣ Usage:");
    println!("┃   festr [OPTIONS]                          Run the countdown");
    println!("┃   festr simulate START END [MULTIPLIER]    Run under simulated time");
    println!("┃");
    println!("┣ Options:");
    println!("┃   -t, --target \"YYYY-MM-DD HH:MM:SS\"       Count down to an explicit instant");
    println!("┃   -c, --config DIR                         Use DIR/festr.toml instead of XDG discovery");
    println!("┃   -d, --debug                              Verbose operational logging");
    println!("┃   -h, --help                               Show this help");
    println!("┃   -V, --version                            Show version");
    println!("┃");
    println!("┣ Simulate:");
    println!("┃   START and END use \"YYYY-MM-DD HH:MM:SS\" (local time).");
    println!("┃   MULTIPLIER accelerates time (60 = 1 simulated minute per second;");
    println!("┃   0 = fast-forward). Defaults to 60.");
    println!("╹");
}

/// Print the version line.
pub fn display_version() {
    println!("festr {}", env!("CARGO_PKG_VERSION"));
}
