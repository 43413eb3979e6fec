use std::process::ExitCode;

use clap::Parser;

use copperbase_cli::cli::{Cli, Commands};
use copperbase_cli::commands;
use copperbase_cli::error::CliError;
use copperbase_cli::logging;
use copperbase_cli::output::OutputWriter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match dispatch(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn dispatch(cli: Cli) -> Result<(), CliError> {
    let writer = OutputWriter::new(cli.output);

    match cli.command {
        Commands::Run(args) => {
            // run은 설정 파일의 [general] 섹션으로 로깅을 초기화하므로
            // 여기서는 초기화하지 않습니다.
            commands::run::execute(args, &cli.config, cli.log_level.as_deref()).await
        }
        Commands::Config(args) => {
            logging::init_default(cli.log_level.as_deref())?;
            commands::config::execute(args, &cli.config, &writer).await
        }
    }
}
