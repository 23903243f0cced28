use std::env;

mod cli;
mod exits;
mod pass;
mod rng;
mod settings;
mod terminal;
mod tui;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    // Generated passwords transit this process; keep it out of core dumps.
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    }
}
