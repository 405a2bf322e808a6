//! Guard clauses at the top of a constructor, failing fast on the first
//! violated check.
//!
//! Run with: `cargo run --example quick_start`

use guard_rail::{check, Violation};

#[derive(Debug)]
#[allow(dead_code)]
struct Server {
    host: String,
    port: u16,
    worker_threads: usize,
}

impl Server {
    fn new(host: &str, port: u16, worker_threads: usize) -> Result<Self, Violation> {
        let host = check(host, "host").is().not_null_or_whitespace()?.into_value();
        let port = check(port, "port").is().greater_than(0)?.into_value();
        let worker_threads = check(worker_threads, "worker_threads")
            .is()
            .greater_than(0)?
            .and()
            .less_than_or_equal_to(256)?
            .into_value();

        Ok(Self {
            host: host.to_owned(),
            port,
            worker_threads,
        })
    }
}

fn main() {
    match Server::new("0.0.0.0", 8080, 16) {
        Ok(server) => println!("configured: {server:?}"),
        Err(err) => println!("rejected: {err}"),
    }

    // A violated check reports the argument by name.
    match Server::new("0.0.0.0", 8080, 0) {
        Ok(server) => println!("configured: {server:?}"),
        Err(err) => println!("rejected: {err}"),
    }
}
