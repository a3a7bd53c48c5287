//! Contextual hints suggesting the next command.

/// Next steps after a passing readiness check.
pub fn after_check_success() -> &'static [&'static str] {
    &[
        "Image is registered; deploy the rollup service with this image MD5.",
        "Set IMAGE=<md5> in the service environment before starting it.",
        "Run `zkwasm history` to review previous checks.",
    ]
}

/// Hint after a failing readiness check.
pub fn after_check_failure() -> &'static str {
    "Run `zkwasm build`, publish the image to the hub, then re-run `zkwasm check`."
}

/// Hint after creating a new project.
pub fn after_init(project_dir: &str) -> String {
    format!(
        "cd {} && zkwasm doctor && zkwasm build",
        project_dir
    )
}

/// Hint after a successful build.
pub fn after_build() -> &'static str {
    "Run `zkwasm check` to verify the image is ready to deploy."
}

/// Hint after a failed build.
pub fn after_failed_build() -> &'static str {
    "Run `zkwasm doctor` to verify the toolchain, then retry with `zkwasm -v build`."
}

/// Hint when required tools are missing.
pub fn after_failed_doctor() -> &'static str {
    "Install the missing tools and re-run `zkwasm doctor`."
}
