//! Which formatted-output engine backs `snprintf` on which target.
//!
//! This file is shared by `build.rs` and the test suite, so it only uses
//! `std` and `thiserror`.

#![allow(dead_code)]

/// An underlying formatted-output primitive `snprintf` can forward to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// The host C runtime's `vsnprintf`.
    Vsnprintf,
    /// The Universal C Runtime's `__stdio_common_vsprintf`.
    Ucrt,
    /// A local `__stdio_common_vsprintf` that forwards to `vsnprintf`.
    UcrtStandIn,
    /// The pure-Rust `printf-compat` engine.
    PrintfCompat,
}

impl Engine {
    /// All engines, in the order their override features are checked.
    pub const ALL: [Engine; 4] = [
        Engine::Vsnprintf,
        Engine::Ucrt,
        Engine::UcrtStandIn,
        Engine::PrintfCompat,
    ];

    /// The value of the `snprintf_engine` cfg for this engine.
    pub fn cfg_value(self) -> &'static str {
        match self {
            Engine::Vsnprintf => "vsnprintf",
            Engine::Ucrt => "ucrt",
            Engine::UcrtStandIn => "ucrt_standin",
            Engine::PrintfCompat => "printf_compat",
        }
    }

    /// The Cargo feature that forces this engine.
    pub fn feature(self) -> &'static str {
        match self {
            Engine::Vsnprintf => "engine-vsnprintf",
            Engine::Ucrt => "engine-ucrt",
            Engine::UcrtStandIn => "engine-ucrt-standin",
            Engine::PrintfCompat => "engine-printf-compat",
        }
    }

    /// Whether this engine calls the host C runtime's `vsnprintf`.
    pub fn uses_host_vsnprintf(self) -> bool {
        matches!(self, Engine::Vsnprintf | Engine::UcrtStandIn)
    }
}

/// The parts of the target description the rules look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetInfo {
    pub os: String,
    pub env: String,
    pub abi: String,
    pub family: Vec<String>,
}

impl TargetInfo {
    /// Reads the target from the `CARGO_CFG_TARGET_*` variables Cargo sets
    /// for build scripts. Missing variables read as empty.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            os: var("CARGO_CFG_TARGET_OS"),
            env: var("CARGO_CFG_TARGET_ENV"),
            abi: var("CARGO_CFG_TARGET_ABI"),
            family: var("CARGO_CFG_TARGET_FAMILY")
                .split(',')
                .filter(|f| !f.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// One row of the rule table. `None` fields match anything.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub os: Option<&'static str>,
    pub env: Option<&'static str>,
    pub abi: Option<&'static str>,
    pub family: Option<&'static str>,
    pub engine: Engine,
}

impl Rule {
    const fn any(engine: Engine) -> Self {
        Self {
            os: None,
            env: None,
            abi: None,
            family: None,
            engine,
        }
    }

    pub fn matches(&self, target: &TargetInfo) -> bool {
        fn field(want: Option<&str>, have: &str) -> bool {
            want.map_or(true, |want| want == have)
        }

        field(self.os, &target.os)
            && field(self.env, &target.env)
            && field(self.abi, &target.abi)
            && self
                .family
                .map_or(true, |want| target.family.iter().any(|f| f == want))
    }
}

/// The default resolution policy. The first matching rule wins.
pub const RULES: &[Rule] = &[
    // MSVC: `snprintf` is a header inline over the internal entry point.
    Rule {
        os: Some("windows"),
        env: Some("msvc"),
        ..Rule::any(Engine::Ucrt)
    },
    // llvm-mingw links the UCRT, which provides the internal entry point
    // itself, and mingw-w64's `vsnprintf` is conforming.
    Rule {
        os: Some("windows"),
        env: Some("gnu"),
        abi: Some("llvm"),
        ..Rule::any(Engine::Vsnprintf)
    },
    // Classic MinGW links msvcrt, which lacks `__stdio_common_vsprintf`.
    Rule {
        os: Some("windows"),
        env: Some("gnu"),
        ..Rule::any(Engine::UcrtStandIn)
    },
    Rule {
        os: Some("wasi"),
        ..Rule::any(Engine::Vsnprintf)
    },
    Rule {
        family: Some("unix"),
        ..Rule::any(Engine::Vsnprintf)
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error(
        "no `snprintf` engine for {target:?}; enable one of the `engine-*` features \
         (`engine-printf-compat` works without a C runtime)"
    )]
    NoEngine { target: TargetInfo },
    #[error("conflicting engine features enabled: {0:?}; enable at most one")]
    ConflictingOverrides(Vec<&'static str>),
}

/// Picks the engine for `target`.
///
/// `enabled` reports whether a Cargo feature is enabled. An `engine-*`
/// feature takes precedence over `rules`.
pub fn resolve(
    target: &TargetInfo,
    rules: &[Rule],
    enabled: impl Fn(&str) -> bool,
) -> Result<Engine, ResolveError> {
    let overrides: Vec<Engine> = Engine::ALL
        .into_iter()
        .filter(|engine| enabled(engine.feature()))
        .collect();

    match overrides.as_slice() {
        [] => rules
            .iter()
            .find(|rule| rule.matches(target))
            .map(|rule| rule.engine)
            .ok_or_else(|| ResolveError::NoEngine {
                target: target.clone(),
            }),
        [engine] => Ok(*engine),
        _ => Err(ResolveError::ConflictingOverrides(
            overrides.iter().map(|engine| engine.feature()).collect(),
        )),
    }
}
