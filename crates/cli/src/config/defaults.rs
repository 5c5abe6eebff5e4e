// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Individual config structs delegate to these constants via their `default_*` functions.

/// The only accepted value of `extends`.
pub const EXTENDS_DEFAULT: &str = "lighthouse:default";

/// Default pass settings.
pub mod pass {
    /// Name given to passes that do not declare one.
    pub const DEFAULT_PASS_NAME: &str = "defaultPass";

    /// Quiet-window floor applied to `defaultPass` under devtools throttling (5s).
    pub const DEVTOOLS_QUIET_THRESHOLD_MS: u64 = 5000;
}

/// Default settings values.
pub mod settings {
    /// Default output formats.
    pub const OUTPUT: &[&str] = &["json"];

    /// Default page load timeout (45s).
    pub const MAX_WAIT_FOR_LOAD: u64 = 45_000;

    /// User agent emulated when `emulatedUserAgent` is absent or `true`.
    pub const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 7.0; Moto G (4)) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/98.0.4695.0 Mobile Safari/537.36 Chrome-Lighthouse";
}

/// Artifact names with special sources.
pub mod artifacts {
    /// Produced by every pass.
    pub const DEVTOOLS_LOGS: &str = "devtoolsLogs";

    /// Produced by passes with `recordTrace`.
    pub const TRACES: &str = "traces";

    /// Collected for every run regardless of passes.
    pub const BASE: &[&str] = &[
        "fetchTime",
        "LighthouseRunWarnings",
        "BenchmarkIndex",
        "settings",
        "Timing",
        "URL",
        "PageLoadError",
        "HostFormFactor",
        "HostUserAgent",
        "NetworkUserAgent",
        "GatherContext",
        "Stacks",
        "WebAppManifest",
        "InstallabilityErrors",
    ];
}

/// Audits with filtering special cases.
pub mod audits {
    /// Kept whenever categories are filtered; it belongs to no category.
    pub const FULL_PAGE_SCREENSHOT: &str = "full-page-screenshot";

    /// Category whose audits must each declare a group.
    pub const ACCESSIBILITY_CATEGORY: &str = "accessibility";
}
