use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use env_logger::{Builder, Env};

use docver::DocverConfig;

mod cli;
mod util;
mod cmd_freeze;
mod cmd_remove;
mod cmd_reset;
mod cmd_status;
mod cmd_switch;
mod cmd_versions;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — info.
    // Пример: RUST_LOG=debug docver remove 0.4.x
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    let cli = match cli::Cli::try_parse() {
        Ok(c) => c,
        Err(e) => {
            let _ = e.print();
            // help/version — успех; любые ошибки аргументов — код 1
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: cli::Cli) -> Result<()> {
    let mut cfg = DocverConfig::from_env();
    if let Some(root) = cli.root {
        cfg = cfg.with_root(root);
    }
    if let Some(cmd) = cli.snapshot_cmd {
        cfg = cfg.with_snapshot_cmd(cmd);
    }
    if cli.no_lock {
        cfg = cfg.with_lock(false);
    }
    log::debug!("{}", cfg);

    match cli.cmd {
        cli::Cmd::Freeze { version_to_freeze, next_dev_version } =>
            cmd_freeze::exec(&cfg, version_to_freeze, next_dev_version),

        cli::Cmd::Remove { version } =>
            cmd_remove::exec(&cfg, version),

        cli::Cmd::Reset { target_version } =>
            cmd_reset::exec(&cfg, target_version),

        cli::Cmd::Versions { route_base, json } => {
            if let Some(base) = route_base {
                cfg = cfg.with_route_base(base);
            }
            cmd_versions::exec(&cfg, json)
        }

        cli::Cmd::SwitchPath { current_path, active_prefix, target_prefix } =>
            cmd_switch::exec(&current_path, &active_prefix, &target_prefix),

        cli::Cmd::Status { json } =>
            cmd_status::exec(&cfg, json),
    }
}
