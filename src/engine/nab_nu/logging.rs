use log::LevelFilter;

// Crates in this workspace that log at the requested level; everything else is limited to warnings
const WORKSPACE_CRATES: &[&str] =
&[
    "math_nu",
    "nab_nu",
    "tests_nu",
];

// Install the colog logger. RUST_LOG overrides the defaults.
// Returns false if a logger was already installed (by an earlier call or otherwise), which is harmless
pub fn init_logging(level: LevelFilter) -> bool
{
    let mut builder = colog::basic_builder();
    builder.filter_level(LevelFilter::Warn);
    for module in WORKSPACE_CRATES
    {
        builder.filter_module(module, level);
    }
    builder.parse_default_env();

    let installed = builder.try_init().is_ok();
    if installed
    {
        log::debug!("Logging started at {level} for {}", WORKSPACE_CRATES.join(", "));
    }
    installed
}

#[must_use]
pub const fn default_level() -> LevelFilter
{
    if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info }
}
