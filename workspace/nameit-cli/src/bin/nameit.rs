fn main() {
  let environment = dotenv::dotenv();
  env_logger::init();

  if let Err(error) = environment {
    log::debug!("no environment file loaded - {}", error);
  }

  let cli = nameit_cli::Cli::parse_args();
  log::debug!("parsed arguments - {:?}", cli);

  let stdout = std::io::stdout();
  let mut handle = stdout.lock();

  if let Err(error) = nameit_cli::run(&cli, &mut handle) {
    log::warn!("unable to generate names - {}", error);
    eprintln!("error: {}", error);
    std::process::exit(1);
  }
}
