use clap::Parser;
use durablelinks::cli::{self, Cli};
use durablelinks::system::init_logging;
use std::process;

fn main() {
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    let settings = match cli::load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            process::exit(1);
        }
    };

    // 日志初始化失败不影响命令执行
    let _guard = match init_logging(&settings.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("[WARN] Logging disabled: {}", e);
            None
        }
    };

    if let Err(e) = cli::run_cli_command(args.command, &settings) {
        eprintln!("{}", e.format_colored());
        process::exit(1);
    }
}
