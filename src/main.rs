//! RabbitMQ password hash CLI
//!
//! Prints `base64(salt || digest(salt || password))` for use in broker
//! definitions or `rabbitmqctl import_definitions`.
//!
//! # Usage
//!
//! ```text
//! rabbitmq-hash --password guest
//! rabbitmq-hash --algorithm md5 --password guest
//! rabbitmq-hash --help
//! ```
//!
//! Set `RUST_LOG=debug` to see the chosen algorithm and salt on stderr.

use std::io;

use rmqhash::cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = cli::run(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock());

    std::process::exit(code);
}
