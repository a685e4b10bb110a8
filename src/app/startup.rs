//! Shared bootstrap for both binaries: file-based tracing and a panic
//! handler that writes a crash log even before logging is initialized.

use tracing_subscriber::prelude::*;

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "", "ideadash")
}

/// Initialize file-based logging under the platform data dir.
/// `log_stem` names the log file so the two binaries do not interleave.
pub fn init_logging(log_stem: &str) {
    let Some(proj_dirs) = project_dirs() else {
        eprintln!("Could not resolve a data directory; file logging disabled");
        return;
    };

    let log_dir = proj_dirs.data_dir().join("logs");
    let _ = std::fs::create_dir_all(&log_dir);

    let log_path = log_dir.join(format!("{}.log", log_stem));

    let file = match std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {:?}: {}", log_path, e);
            return;
        }
    };

    // Restrictive permissions (owner read/write only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = file.metadata() {
            let mut perms = metadata.permissions();
            perms.set_mode(0o600);
            let _ = std::fs::set_permissions(&log_path, perms);
        }
    }

    // Unified formatting for our logs plus the GUI framework and AWS SDK
    // events bridged from the log crate.
    let filter = tracing_subscriber::EnvFilter::builder()
        .parse("ideadash=info,ideadash_intro=info,eframe=info,egui=warn,wgpu=warn,winit=warn,aws_sdk_bedrockruntime=info,aws_config=warn,aws_sigv4=warn,aws_smithy_runtime=warn,aws_smithy_runtime_api=warn,hyper=warn,aws_smithy_http=warn")
        .expect("Failed to parse env filter");

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(move || file.try_clone().expect("Failed to clone file handle"))
            .with_ansi(false), // No ANSI colors in file
    );

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // Bridge log crate events to tracing (for eframe, egui, the AWS SDKs).
    // Must happen AFTER setting the tracing subscriber.
    tracing_log::LogTracer::init().expect("Failed to initialize log-to-tracing bridge");

    tracing::info!("Logging initialized to: {:?}", log_path);
}

/// Install a panic handler that writes to a crash log file. Catches panics
/// even if normal logging has not been initialized yet.
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "IdeaDash crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info
                    .payload()
                    .downcast_ref::<String>()
                    .map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        if let Some(proj_dirs) = project_dirs() {
            let log_dir = proj_dirs.data_dir().join("logs");
            let _ = std::fs::create_dir_all(&log_dir);
            let crash_log_path = log_dir.join("crash.log");

            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
            }

            eprintln!("\n{}", crash_msg);
            eprintln!("Crash log written to: {:?}", crash_log_path);
        } else {
            eprintln!("\n{}", crash_msg);
        }
    }));
}
